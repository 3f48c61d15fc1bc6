//! Column addressing
//!
//! Spreadsheet columns are addressed by letters (A-XFD) read as a base-26
//! numeral without a zero digit: A=1 ... Z=26, AA=27 ... Indices here are
//! 1-based, matching how columns are numbered in a configuration sheet.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::MAX_COLS;

/// A reference to a column, either by letters or by 1-based number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ColumnRef {
    /// Letter address such as "B" or "AZ" (case-insensitive)
    Letters(String),
    /// 1-based column number
    Number(usize),
}

impl ColumnRef {
    /// Parse a letter address
    ///
    /// # Examples
    /// ```
    /// use sheetmap_core::ColumnRef;
    ///
    /// let col = ColumnRef::letters("ab").unwrap();
    /// assert_eq!(col.index().unwrap(), 28);
    /// ```
    pub fn letters(s: &str) -> Result<Self> {
        let s = s.trim();
        letters_to_index(s)?;
        Ok(ColumnRef::Letters(s.to_ascii_uppercase()))
    }

    /// Parse a 1-based column number
    pub fn number(s: &str) -> Result<Self> {
        let s = s.trim();
        // Configuration cells typed as numbers may arrive as "3.0"
        let n = s
            .parse::<usize>()
            .ok()
            .or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                    .map(|f| f as usize)
            })
            .ok_or_else(|| Error::InvalidAddress(format!("'{}' is not a column number", s)))?;

        if n == 0 || n > MAX_COLS {
            return Err(Error::InvalidAddress(format!(
                "column number {} outside 1..={}",
                n, MAX_COLS
            )));
        }
        Ok(ColumnRef::Number(n))
    }

    /// The 1-based column index
    pub fn index(&self) -> Result<usize> {
        match self {
            ColumnRef::Letters(letters) => letters_to_index(letters),
            ColumnRef::Number(n) => Ok(*n),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::Letters(letters) => write!(f, "{}", letters),
            ColumnRef::Number(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for ColumnRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::letters(s)
    }
}

/// Convert column letters to a 1-based index (A = 1, Z = 26, AA = 27, etc.)
pub fn letters_to_index(letters: &str) -> Result<usize> {
    if letters.is_empty() {
        return Err(Error::InvalidAddress("empty column letters".into()));
    }

    let mut col: usize = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}' in '{}'",
                c, letters
            )));
        }
        col = col * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1);

        if col > MAX_COLS {
            return Err(Error::InvalidAddress(format!(
                "column '{}' is past the last column",
                letters
            )));
        }
    }

    Ok(col)
}

/// Convert a 1-based index to column letters (1 = A, 26 = Z, 27 = AA, etc.)
///
/// Index 0 has no letters and yields an empty string.
pub fn index_to_letters(index: usize) -> String {
    let mut result = String::new();
    let mut n = index;

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// Look up the column name at a 1-based index
pub fn index_to_title<S: AsRef<str>>(index: usize, names: &[S]) -> Result<&str> {
    if index == 0 || index > names.len() {
        return Err(Error::OutOfRange {
            index,
            len: names.len(),
        });
    }
    Ok(names[index - 1].as_ref())
}
