//! Line classification for benchmark log records.
//!
//! Each log line is matched, after removing its timestamp prefix, against
//! the three record shapes the benchmark prints: graph announcements,
//! order/size announcements and PLP results.

use crate::constants::{
    GRAPH_ANNOUNCE_PATTERN, ORDER_SIZE_PATTERN, RESULT_PATTERN, TIMESTAMP_PREFIX_PATTERN,
};
use crate::error::{LogError, Result};
use regex::Regex;

/// Record shape recognised on a single line
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// `Reading graph from file: <path>`
    GraphAnnounce { graph: String },
    /// `Nodes: <N>, Edges: <M>` with counts kept as written
    OrderSize { order: String, size: String },
    /// `PLP: Runtime: <T>ms, Modularity: <Q>`
    Result { runtime_ms: f64, modularity: f64 },
    /// Anything else
    Other,
}

/// Compiled record patterns
#[derive(Debug, Clone)]
pub struct LineClassifier {
    timestamp: Regex,
    graph: Regex,
    order_size: Regex,
    result: Regex,
}

impl LineClassifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            timestamp: Regex::new(TIMESTAMP_PREFIX_PATTERN)?,
            graph: Regex::new(GRAPH_ANNOUNCE_PATTERN)?,
            order_size: Regex::new(ORDER_SIZE_PATTERN)?,
            result: Regex::new(RESULT_PATTERN)?,
        })
    }

    /// Remove a leading `YYYY-MM-DD HH:MM:SS` prefix, if there is one
    pub fn strip_timestamp<'a>(&self, line: &'a str) -> &'a str {
        match self.timestamp.find(line) {
            Some(prefix) => &line[prefix.end()..],
            None => line,
        }
    }

    /// Classify a line whose timestamp prefix has already been stripped.
    ///
    /// Patterns are tried in priority order: graph, order/size, result.
    /// `line_number` is only used for error context.
    pub fn classify(&self, line: &str, line_number: usize) -> Result<LineKind> {
        if let Some(caps) = self.graph.captures(line) {
            let graph = &caps[1];
            // A bare `.mtx.elist` would name an unnamed graph and a hidden output file
            if graph.is_empty() {
                return Err(LogError::EmptyGraphName { line: line_number });
            }
            return Ok(LineKind::GraphAnnounce {
                graph: graph.to_string(),
            });
        }

        if let Some(caps) = self.order_size.captures(line) {
            return Ok(LineKind::OrderSize {
                order: caps[1].to_string(),
                size: caps[2].to_string(),
            });
        }

        if let Some(caps) = self.result.captures(line) {
            let runtime_ms = parse_number(&caps[1], "runtime", line_number)?;
            let modularity = parse_number(&caps[2], "modularity", line_number)?;
            return Ok(LineKind::Result {
                runtime_ms,
                modularity,
            });
        }

        Ok(LineKind::Other)
    }
}

fn parse_number(value: &str, field: &'static str, line: usize) -> Result<f64> {
    value.parse::<f64>().map_err(|_| LogError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}
