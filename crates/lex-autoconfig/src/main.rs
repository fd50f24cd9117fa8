//! CLI entry point for the config bootstrapper.

use anyhow::{Result, anyhow};
use clap::Parser;
use lex_autoconfig::{AutoConfig, DetectorConfig, render_human};
use std::path::Path;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    author = "Lex Machina Team",
    version,
    about = "Suggest a label-generator configuration for a CSV dataset",
    long_about = "Detects the type of every column (int, float, multinomial, text) and writes an \
                  INI-like configuration with one label generator per column, plus a combiner \
                  for every pair of multinomial columns.\n\n\
                  EXAMPLES:\n  \
                  # Basic usage\n  \
                  lex-autoconfig --input-file events.csv --output-file events.ini\n\n  \
                  # Clustered data where each row carries an occurrence count\n  \
                  lex-autoconfig --input-file events.csv --output-file events.ini --count-column count"
)]
struct Args {
    /// Location of the input CSV file
    #[arg(long)]
    input_file: String,

    /// Location of the configuration file to write
    #[arg(long)]
    output_file: String,

    /// Column holding the number of occurrences of each row
    ///
    /// If set, the data is considered clustered and each row is weighted by
    /// this column. Otherwise every row counts once.
    #[arg(long)]
    count_column: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and final result)
    #[arg(short, long)]
    quiet: bool,

    /// Print the report as JSON on stdout instead of the human-readable summary.
    /// A failed run prints its error code and message instead.
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is disabled so stdout only carries JSON.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !Path::new(&args.input_file).exists() {
        return Err(anyhow!("Input file not found: {}", args.input_file));
    }

    let mut builder = DetectorConfig::builder();
    if let Some(ref column) = args.count_column {
        builder = builder.count_column(column);
    }
    let config = builder.build()?;

    info!("Preprocessing");
    let report = match AutoConfig::new(config)?.run_file(&args.input_file, &args.output_file) {
        Ok(report) => report,
        Err(e) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&e)?);
            }
            error!("Autoconfig failed: {}", e);
            return Err(anyhow!("Autoconfig failed: {}", e));
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render_human(&report));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_all_flags_parse() {
        let args = Args::try_parse_from([
            "lex-autoconfig",
            "--input-file",
            "events.csv",
            "--output-file",
            "events.ini",
            "--count-column",
            "count",
        ])
        .unwrap();
        assert_eq!(args.input_file, "events.csv");
        assert_eq!(args.output_file, "events.ini");
        assert_eq!(args.count_column.as_deref(), Some("count"));
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_output_file_is_required() {
        let err =
            Args::try_parse_from(["lex-autoconfig", "--input-file", "events.csv"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("--output-file"));
    }

    #[test]
    fn test_input_file_is_required() {
        let err =
            Args::try_parse_from(["lex-autoconfig", "--output-file", "events.ini"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("--input-file"));
    }
}
