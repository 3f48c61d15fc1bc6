//! sheetmap CLI - map instrument CSV exports into reports

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use sheetmap::prelude::*;
use sheetmap::OUTPUT_SHEET;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheetmap")]
#[command(
    author,
    version,
    about = "Map raw instrument CSV exports into formatted reports"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a report and render every enabled output format
    Run {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output file stem (default: input file stem)
        #[arg(short, long)]
        output: Option<String>,

        /// Directory for rendered files (default: input's directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Show the normalized rules and chart directives without writing files
    Plan {
        #[command(flatten)]
        config: ConfigArgs,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ConfigArgs {
    /// Input CSV export
    input: PathBuf,

    /// Mapped configuration table (CSV)
    #[arg(long)]
    mapped: PathBuf,

    /// General configuration table (CSV)
    #[arg(long)]
    general: PathBuf,

    /// Input field delimiter (default: comma)
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Address input columns by number regardless of the general table
    #[arg(long)]
    transpose: bool,

    /// Records to skip before the input's header row
    #[arg(long)]
    start_line: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            config,
            output,
            out_dir,
        } => run(&config, output.as_deref(), out_dir.as_deref()),
        Commands::Plan { config, json } => plan(&config, json),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read both tables and the input, then build the report
fn build(args: &ConfigArgs) -> Result<Report> {
    let mut config = ReportConfig::open(&args.mapped, &args.general).with_context(|| {
        format!(
            "Failed to read configuration '{}' / '{}'",
            args.mapped.display(),
            args.general.display()
        )
    })?;

    if args.transpose {
        config.settings.transpose = true;
    }
    if args.start_line.is_some() {
        config.settings.start_line = args.start_line;
    }

    if !args.delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", args.delimiter);
    }
    let options = config.read_options().with_delimiter(args.delimiter as u8);
    let source = CsvSource::open(&args.input, &options)
        .with_context(|| format!("Failed to open '{}'", args.input.display()))?;

    Report::build(&source, &config)
        .with_context(|| format!("Failed to map '{}'", args.input.display()))
}

fn run(args: &ConfigArgs, output: Option<&str>, out_dir: Option<&Path>) -> Result<()> {
    let report = build(args)?;

    let stem = match output {
        Some(stem) => stem.to_string(),
        None => args
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .with_context(|| format!("Input path '{}' has no file name", args.input.display()))?,
    };
    let dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => args
            .input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    let mut sinks = SinkRegistry::new();
    let txt = dir.join(format!("{}.{}", stem, OutputFormat::Txt.extension()));
    sinks.register(OutputFormat::Txt, TextSink::new(&txt));

    let rendered = sinks.render(&report).context("Failed to render report")?;
    if rendered.is_empty() {
        eprintln!("Mapped {} columns; no output format rendered", report.output.len());
    }
    for format in rendered {
        eprintln!(
            "Wrote {} ({} columns, {} rows) to '{}'",
            format,
            report.output.len(),
            report.output.row_count(),
            dir.join(format!("{}.{}", stem, format.extension())).display()
        );
    }

    Ok(())
}

#[derive(serde::Serialize)]
struct PlanDump<'a> {
    rules: &'a [MappingRule],
    settings: &'a GeneralSettings,
    chart: Option<&'a ChartPlan>,
}

fn plan(args: &ConfigArgs, json: bool) -> Result<()> {
    let report = build(args)?;

    if json {
        let dump = PlanDump {
            rules: &report.rules,
            settings: &report.settings,
            chart: report.chart.as_ref(),
        };
        let text = serde_json::to_string_pretty(&dump).context("Failed to serialize plan")?;
        println!("{}", text);
        return Ok(());
    }

    println!("File: {}", args.input.display());
    println!("Rules: {}", report.rules.len());
    for rule in &report.rules {
        let column = report.output.get(rule.output());
        println!(
            "  {:>3}  {} ({}) -> {} \"{}\"  {} rows{}{}",
            rule.row(),
            rule.input(),
            rule.source_title(),
            column.map(|c| c.letters()).unwrap_or_default(),
            rule.title(),
            column.map_or(0, |c| c.values.len()),
            rule.range().map(|r| format!("  range {}", r)).unwrap_or_default(),
            rule.axis()
                .map(|a| format!("  axis {:?}", a))
                .unwrap_or_default(),
        );
    }

    let columns: Vec<String> = report
        .output
        .columns()
        .map(|c| format!("{} {}", c.letters(), c.title))
        .collect();
    println!("Output: {}", columns.join(", "));

    match &report.chart {
        Some(chart) => {
            println!("Chart: {}", chart.title);
            println!("  x: {}", chart.x.reference(OUTPUT_SHEET));
            for series in &chart.y {
                println!("  y: {} ({})", series.reference(OUTPUT_SHEET), series.title);
            }
            if chart.legend_suppressed() {
                println!("  legend: none");
            }
        }
        None => println!("Chart: none"),
    }

    let formats: Vec<String> = report
        .settings
        .formats
        .enabled()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("Formats: {}", formats.join(", "));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run() {
        let cli = Cli::parse_from([
            "sheetmap", "-vv", "run", "log.csv", "--mapped", "m.csv", "--general", "g.csv",
            "-o", "out", "--transpose",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Run { config, output, .. } => {
                assert_eq!(config.input, PathBuf::from("log.csv"));
                assert!(config.transpose);
                assert_eq!(config.delimiter, ',');
                assert_eq!(output.as_deref(), Some("out"));
            }
            Commands::Plan { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn test_run_writes_text_export() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("log.csv");
        let mapped = dir.path().join("mapped.csv");
        let general = dir.path().join("general.csv");
        fs::write(&input, "Stamp;Temp\nd 10:00:00;20\nd 10:01:00;21\n").unwrap();
        fs::write(&mapped, "Input,Output,Axis,Time Unit\nA,A,x,min\nB,B,y,\n").unwrap();
        fs::write(&general, "TXT\nyes\n").unwrap();

        let args = ConfigArgs {
            input,
            mapped,
            general,
            delimiter: ';',
            transpose: false,
            start_line: None,
        };
        run(&args, Some("report"), Some(dir.path())).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("report.txt")).unwrap(),
            "Stamp\tTemp\n0\t20\n1\t21\n"
        );
    }
}
