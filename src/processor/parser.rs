//! Streaming parse of benchmark logs into grouped result records.
//!
//! The log is folded line by line through an explicit accumulator holding
//! the rolling [`ParseState`] and the [`GroupedStore`] built so far.

use crate::classifier::{LineClassifier, LineKind};
use crate::error::{LogError, Result};
use crate::models::{ParseState, ResultRecord};
use crate::store::GroupedStore;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Read a log file as UTF-8 with line endings normalized to `\n`
pub fn read_log(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(LogError::LogNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path)?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(normalize_line_endings(&text))
}

/// Replace `\r\n` line endings with `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Output of a complete parse
#[derive(Debug, Default)]
pub struct ParsedLog {
    pub store: GroupedStore,
    pub lines_read: usize,
}

/// Fold accumulator threaded through every line
#[derive(Debug, Default)]
struct LogAccumulator {
    state: ParseState,
    store: GroupedStore,
    lines_read: usize,
}

/// Log parser driven by [`LineClassifier`]
#[derive(Debug, Clone)]
pub struct LogParser {
    classifier: LineClassifier,
}

impl LogParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            classifier: LineClassifier::new()?,
        })
    }

    /// Parse normalized log text in a single pass
    pub fn parse(&self, text: &str) -> Result<ParsedLog> {
        let acc = text
            .split('\n')
            .enumerate()
            .try_fold(LogAccumulator::default(), |acc, (idx, line)| {
                self.apply_line(acc, idx + 1, line)
            })?;

        info!(
            "Parsed {} lines: {} graphs, {} results",
            acc.lines_read,
            acc.store.graph_count(),
            acc.store.record_count()
        );

        Ok(ParsedLog {
            store: acc.store,
            lines_read: acc.lines_read,
        })
    }

    /// Read and parse a log file
    pub fn parse_file(&self, path: &Path) -> Result<ParsedLog> {
        let text = read_log(path)?;
        self.parse(&text)
    }

    fn apply_line(
        &self,
        mut acc: LogAccumulator,
        line_number: usize,
        line: &str,
    ) -> Result<LogAccumulator> {
        acc.lines_read += 1;
        let line = self.classifier.strip_timestamp(line);

        match self.classifier.classify(line, line_number)? {
            LineKind::GraphAnnounce { graph } => {
                // Register on first sight so graphs without results still appear
                if acc.store.ensure_graph(&graph) {
                    debug!("Line {}: new graph {}", line_number, graph);
                }
                acc.state.graph = Some(graph);
            }
            LineKind::OrderSize { order, size } => {
                // Applies to whichever graph comes next; not checked against the current one
                acc.state.order = Some(order);
                acc.state.size = Some(size);
            }
            LineKind::Result {
                runtime_ms,
                modularity,
            } => {
                let graph = acc
                    .state
                    .graph
                    .as_deref()
                    .ok_or(LogError::ResultWithoutGraph { line: line_number })?;
                let record = ResultRecord::from_state(graph, &acc.state, runtime_ms, modularity);
                debug!(
                    "Line {}: result for {} (runtime {}ms, modularity {})",
                    line_number, graph, runtime_ms, modularity
                );
                acc.store.push(record);
            }
            // Progress lines, timings and anything else leave the state untouched
            LineKind::Other => {}
        }

        Ok(acc)
    }
}
