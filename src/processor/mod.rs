//! Conversion engine for benchmark logs.
//!
//! Ties together log parsing and CSV writing for one resolved output
//! command: a single combined file or one file per graph.

pub mod parser;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::{parser::LogParser, writer::CsvResultWriter};

use crate::config::ConverterConfig;
use crate::constants::{COMMAND_CSV, COMMAND_CSV_DIR};
use crate::error::{LogError, Result};
use crate::models::ProcessingStats;

use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Output command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// All records in one CSV file
    Csv,
    /// One CSV file per graph under the output directory
    CsvDir,
}

impl Command {
    /// Resolve a command name against the output path.
    ///
    /// `csv` with an extension-less output path is treated as `csv-dir`.
    pub fn resolve(name: &str, output_path: &Path) -> Result<Self> {
        let command = match name {
            COMMAND_CSV => Command::Csv,
            COMMAND_CSV_DIR => Command::CsvDir,
            _ => {
                return Err(LogError::UnknownCommand {
                    command: name.to_string(),
                });
            }
        };

        if command == Command::Csv && output_path.extension().is_none() {
            return Ok(Command::CsvDir);
        }
        Ok(command)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Csv => COMMAND_CSV,
            Command::CsvDir => COMMAND_CSV_DIR,
        }
    }
}

/// Main processor for log conversion
#[derive(Debug)]
pub struct LogProcessor {
    log_path: PathBuf,
    output_path: PathBuf,
    config: ConverterConfig,
    parser: LogParser,
    writer: CsvResultWriter,
}

impl LogProcessor {
    /// Create a new processor
    pub fn new(log_path: PathBuf, output_path: PathBuf) -> Result<Self> {
        let config = ConverterConfig::default();
        Ok(Self {
            log_path,
            output_path,
            config: config.clone(),
            parser: LogParser::new()?,
            writer: CsvResultWriter::new(config),
        })
    }

    /// Configure the processor
    pub fn with_config(mut self, config: ConverterConfig) -> Self {
        self.config = config.clone();
        self.writer = CsvResultWriter::new(config);
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Parse the log and write output for `command`.
    ///
    /// The log is fully parsed before anything is written, so a parse
    /// failure leaves no output behind.
    pub fn run(&self, command: Command) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        self.config.validate()?;

        info!(
            "Converting {} to {} ({})",
            self.log_path.display(),
            self.output_path.display(),
            command.name()
        );

        // Step 1: Parse the whole log before touching any output
        let parsed = self.parser.parse_file(&self.log_path)?;
        let store = &parsed.store;

        let mut stats = ProcessingStats {
            lines_read: parsed.lines_read,
            graphs_seen: store.graph_count(),
            records_parsed: store.record_count(),
            ..Default::default()
        };

        // Step 2: Write combined or per-graph output
        match command {
            Command::Csv => {
                let rows = store.flatten();
                self.writer.write_combined(&self.output_path, &rows)?;
                stats.files_written = 1;
                stats.output_paths.push(self.output_path.clone());
            }
            Command::CsvDir => {
                let summary = self.writer.write_per_graph(&self.output_path, store)?;
                stats.files_written = summary.written.len();
                stats.graphs_skipped = summary.skipped.len();
                stats.output_paths = summary.written;
            }
        }

        stats.processing_time_ms = start_time.elapsed().as_millis();
        info!(
            "Wrote {} file(s) with {} records in {}ms",
            stats.files_written, stats.records_parsed, stats.processing_time_ms
        );
        Ok(stats)
    }
}
