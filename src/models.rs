//! Core data structures for PLP log processing.
//!
//! Defines the rolling parse state, the result records emitted from it and
//! the statistics reported after a conversion run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Rolling state carried across log lines during a single parse.
///
/// Fields persist until overwritten; a new graph announcement does not
/// clear `order` or `size`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseState {
    pub graph: Option<String>,
    pub order: Option<String>,
    pub size: Option<String>,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// One PLP run result, with the graph's order/size copied at capture time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub graph: String,
    pub order: Option<String>,
    pub size: Option<String>,
    pub modularity: f64,
    pub clustering_time: f64,
    pub total_time: f64,
}

impl ResultRecord {
    /// Snapshot the current state for a result line.
    ///
    /// The benchmark reports a single runtime, so it fills both timing columns.
    pub fn from_state(graph: &str, state: &ParseState, runtime_ms: f64, modularity: f64) -> Self {
        Self {
            graph: graph.to_string(),
            order: state.order.clone(),
            size: state.size.clone(),
            modularity,
            clustering_time: runtime_ms,
            total_time: runtime_ms,
        }
    }
}

/// Processing statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub lines_read: usize,
    pub graphs_seen: usize,
    pub records_parsed: usize,
    pub files_written: usize,
    pub graphs_skipped: usize,
    pub output_paths: Vec<PathBuf>,
    pub processing_time_ms: u128,
}
