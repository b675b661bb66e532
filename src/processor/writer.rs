//! CSV writing module for parsed results
//!
//! Serializes result records to CSV through a polars `DataFrame`, either as
//! one combined file or as one file per graph.

use crate::config::ConverterConfig;
use crate::constants::{CSV_EXTENSION, columns};
use crate::error::Result;
use crate::models::ResultRecord;
use crate::store::GroupedStore;

use polars::prelude::{Column, CsvWriter, DataFrame, QuoteStyle, SerWriter};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Outcome of a per-graph write
#[derive(Debug, Default)]
pub struct DirectoryWriteSummary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<String>,
}

/// CSV writer for result records
#[derive(Debug, Clone)]
pub struct CsvResultWriter {
    config: ConverterConfig,
}

impl CsvResultWriter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Write all records to a single CSV file.
    ///
    /// An empty record set still produces the header row.
    pub fn write_combined(&self, path: &Path, records: &[ResultRecord]) -> Result<usize> {
        if self.config.create_output_dirs {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
        }

        // Fixed schema, so an empty record set still yields the header
        let mut df = records_to_dataframe(records)?;
        self.write_dataframe(path, &mut df)?;
        debug!("Wrote {} rows to {}", records.len(), path.display());
        Ok(records.len())
    }

    /// Write each graph's records to `<dir>/<graph>.csv`.
    ///
    /// Graphs without records are skipped rather than written header-only.
    /// Files already written stay in place if a later graph fails.
    pub fn write_per_graph(&self, dir: &Path, store: &GroupedStore) -> Result<DirectoryWriteSummary> {
        if self.config.create_output_dirs {
            fs::create_dir_all(dir)?;
        }

        let mut summary = DirectoryWriteSummary::default();
        for (graph, records) in store.iter() {
            if records.is_empty() {
                warn!("Graph {} has no results, skipping", graph);
                summary.skipped.push(graph.to_string());
                continue;
            }

            let path = graph_output_path(dir, graph);
            let mut df = records_to_dataframe(records)?;
            self.write_dataframe(&path, &mut df)?;
            debug!("Wrote {} rows to {}", records.len(), path.display());
            summary.written.push(path);
        }

        Ok(summary)
    }

    fn write_dataframe(&self, path: &Path, df: &mut DataFrame) -> Result<()> {
        let quote_style = if self.config.quote_all_fields {
            QuoteStyle::Always
        } else {
            QuoteStyle::Necessary
        };

        let mut file = File::create(path)?;

        // Header is written bare; only data rows follow the quote style
        let header = columns::ALL.join(",");
        file.write_all(header.as_bytes())?;
        file.write_all(self.config.line_terminator.as_bytes())?;

        let mut writer = CsvWriter::new(&mut file)
            .include_header(false)
            .with_quote_style(quote_style)
            .with_line_terminator(self.config.line_terminator.clone())
            .with_float_precision(self.config.float_precision);

        writer.finish(df)?;
        Ok(())
    }
}

/// Output file path for a graph in per-graph mode
pub fn graph_output_path(dir: &Path, graph: &str) -> PathBuf {
    dir.join(format!("{}.{}", graph, CSV_EXTENSION))
}

/// Build a `DataFrame` with one column per record field, in output order
pub fn records_to_dataframe(records: &[ResultRecord]) -> Result<DataFrame> {
    let graph: Vec<&str> = records.iter().map(|r| r.graph.as_str()).collect();
    let order: Vec<Option<&str>> = records.iter().map(|r| r.order.as_deref()).collect();
    let size: Vec<Option<&str>> = records.iter().map(|r| r.size.as_deref()).collect();
    let modularity: Vec<f64> = records.iter().map(|r| r.modularity).collect();
    let clustering_time: Vec<f64> = records.iter().map(|r| r.clustering_time).collect();
    let total_time: Vec<f64> = records.iter().map(|r| r.total_time).collect();

    let df = DataFrame::new(vec![
        Column::new(columns::GRAPH.into(), graph),
        Column::new(columns::ORDER.into(), order),
        Column::new(columns::SIZE.into(), size),
        Column::new(columns::MODULARITY.into(), modularity),
        Column::new(columns::CLUSTERING_TIME.into(), clustering_time),
        Column::new(columns::TOTAL_TIME.into(), total_time),
    ])?;

    Ok(df)
}
