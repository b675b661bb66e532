//! Command-line interface components.

use crate::config::ConverterConfig;
use crate::error::LogError;
use crate::models::ProcessingStats;
use crate::processor::{Command, LogProcessor};

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "plp-log")]
#[command(about = "Convert PLP benchmark logs to CSV tables")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Output command: `csv` (combined file) or `csv-dir` (one file per graph)
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Path to the benchmark log
    #[arg(value_name = "LOG_PATH")]
    pub log_path: PathBuf,

    /// Output CSV file, or output directory for per-graph files
    #[arg(value_name = "OUTPUT_PATH")]
    pub output_path: PathBuf,

    /// Fixed number of decimals for modularity and timing columns
    #[arg(long, value_name = "DIGITS")]
    pub float_precision: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level selected by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Converter configuration derived from the output flags
    pub fn converter_config(&self) -> ConverterConfig {
        ConverterConfig {
            float_precision: self.float_precision,
            ..Default::default()
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("plp_log_processor={}", log_level)));

    // Set up subscriber based on output format preference
    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Run the requested conversion.
///
/// Returns `Ok(None)` when the command name is not recognised; the
/// message has already been printed and nothing was written.
pub fn run(args: &Args) -> Result<Option<ProcessingStats>> {
    // Resolve the command first so an unknown name never touches the log
    let command = match Command::resolve(&args.command, &args.output_path) {
        Ok(command) => command,
        Err(LogError::UnknownCommand { command }) => {
            eprintln!("{} unknown command {:?}", "error:".bright_red().bold(), command);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let processor = LogProcessor::new(args.log_path.clone(), args.output_path.clone())
        .context("Failed to initialize log processor")?
        .with_config(args.converter_config());

    let stats = processor.run(command).with_context(|| {
        format!(
            "Failed to convert {} with command {}",
            args.log_path.display(),
            command.name()
        )
    })?;

    if !args.quiet {
        print_summary(&stats, processor.output_path().display().to_string());
    }

    Ok(Some(stats))
}

fn print_summary(stats: &ProcessingStats, output: String) {
    println!("{}", "Conversion Summary".bright_green().bold());
    println!("  {} {}", "Output:".bright_cyan(), output);
    println!(
        "  {} {}",
        "Lines read:".bright_cyan(),
        stats.lines_read.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Graphs:".bright_cyan(),
        stats.graphs_seen.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Results:".bright_cyan(),
        stats.records_parsed.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Files written:".bright_cyan(),
        stats.files_written.to_string().bright_white()
    );
    if stats.graphs_skipped > 0 {
        println!(
            "  {} {}",
            "Graphs without results:".bright_yellow(),
            stats.graphs_skipped.to_string().bright_yellow()
        );
    }
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(command: &str, log_path: PathBuf, output_path: PathBuf) -> Args {
        Args {
            command: command.to_string(),
            log_path,
            output_path,
            float_precision: None,
            verbose: false,
            quiet: true,
        }
    }

    #[test]
    fn test_parse_positional_arguments() {
        let args = Args::try_parse_from(["plp-log", "csv", "run.log", "out.csv", "-v"]).unwrap();
        assert_eq!(args.command, "csv");
        assert_eq!(args.log_path, PathBuf::from("run.log"));
        assert_eq!(args.output_path, PathBuf::from("out.csv"));
        assert_eq!(args.get_log_level(), "debug");
    }

    #[test]
    fn test_float_precision_flag_reaches_config() {
        let args = Args::try_parse_from([
            "plp-log",
            "csv",
            "run.log",
            "out.csv",
            "--float-precision",
            "3",
        ])
        .unwrap();
        let config = args.converter_config();
        assert_eq!(config.float_precision, Some(3));
        assert!(config.quote_all_fields);

        let defaults = Args::try_parse_from(["plp-log", "csv", "run.log", "out.csv"]).unwrap();
        assert_eq!(defaults.converter_config().float_precision, None);
    }

    #[test]
    fn test_run_applies_float_precision() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("run.log");
        fs::write(
            &log_path,
            "Reading graph from file: /data/foo.mtx.elist\n\
             Nodes: 10, Edges: 20\n\
             PLP: Runtime: 5.5ms, Modularity: 0.42\n",
        )
        .unwrap();
        let output_path = temp_dir.path().join("out.csv");
        let mut cli_args = args("csv", log_path, output_path.clone());
        cli_args.float_precision = Some(2);

        run(&cli_args).unwrap().unwrap();

        let content = fs::read_to_string(&output_path).unwrap();
        let row = content.lines().nth(1).unwrap();
        assert_eq!(row, r#""foo","10","20","0.42","5.50","5.50""#);
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Args::try_parse_from(["plp-log", "csv", "a.log", "b.csv", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_unknown_command_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("out.json");

        let result = run(&args(
            "json",
            temp_dir.path().join("missing.log"),
            output_path.clone(),
        ))
        .unwrap();

        assert!(result.is_none());
        assert!(!output_path.exists());
    }

    #[test]
    fn test_run_reports_missing_log() {
        let temp_dir = TempDir::new().unwrap();
        let err = run(&args(
            "csv",
            temp_dir.path().join("missing.log"),
            temp_dir.path().join("out.csv"),
        ))
        .unwrap_err();

        assert!(format!("{:#}", err).contains("Log file not found"));
    }

    #[test]
    fn test_run_csv_without_extension_writes_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("run.log");
        fs::write(
            &log_path,
            "Reading graph from file: /data/foo.mtx.elist\n\
             Nodes: 10, Edges: 20\n\
             PLP: Runtime: 5.5ms, Modularity: 0.42\n",
        )
        .unwrap();
        let output_dir = temp_dir.path().join("results");

        let stats = run(&args("csv", log_path, output_dir.clone()))
            .unwrap()
            .unwrap();

        assert_eq!(stats.files_written, 1);
        assert!(output_dir.join("foo.csv").is_file());
    }
}
