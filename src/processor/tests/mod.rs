//! Integration tests for the processor module
//!
//! Tests the complete conversion pipeline using small benchmark logs.

pub mod error_handling;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to `run.log` inside `temp_dir`
pub fn write_log(temp_dir: &TempDir, content: &str) -> PathBuf {
    let log_path = temp_dir.path().join("run.log");
    fs::write(&log_path, content).unwrap();
    log_path
}

/// Two graphs; `foo` with one result, `bar` with two
pub const TWO_GRAPH_LOG: &str = "\
2024-03-01 12:00:00 Reading graph from file: /data/foo.mtx.elist
2024-03-01 12:00:01 Read graph from file: /data/foo.mtx.elist
2024-03-01 12:00:01 Nodes: 10, Edges: 20
2024-03-01 12:00:01 Directed: False, Weighted: False
2024-03-01 12:00:01 Finding communities using Parallel LPA ...
2024-03-01 12:00:02 PLP: Runtime: 5.5ms, Modularity: 0.42
2024-03-01 12:00:02 Total time: 0.0061
2024-03-01 12:01:00 Reading graph from file: /data/bar.mtx.elist
2024-03-01 12:01:01 Nodes: 300, Edges: 4000
2024-03-01 12:01:02 PLP: Runtime: 12.25ms, Modularity: 0.61
2024-03-01 12:01:03 PLP: Runtime: 11.75ms, Modularity: 0.6
";
