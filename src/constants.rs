//! Application constants for the PLP log processor
//!
//! Record patterns, column names and command names shared by the parser,
//! the CSV writer and the command line.

// =============================================================================
// Log Record Patterns
// =============================================================================

/// Timestamp prefix written in front of each benchmark log line
pub const TIMESTAMP_PREFIX_PATTERN: &str = r"^\d+-\d+-\d+ \d+:\d+:\d+\s+";

/// Graph announcement; captures the base name without directories or suffix
pub const GRAPH_ANNOUNCE_PATTERN: &str =
    r"^Reading graph from file:\s*(?:.*[/\\])?([^/\\]*?)\.mtx\.elist";

/// Order/size announcement; captures node and edge counts verbatim
pub const ORDER_SIZE_PATTERN: &str = r"^Nodes: (.+?), Edges: (\S+)";

/// PLP result announcement; captures runtime in milliseconds and modularity.
/// Values are captured as written (`nan` and `inf` included) and parsed later.
pub const RESULT_PATTERN: &str = r"^PLP: Runtime: (\S+?)ms, Modularity: (\S+)";

// =============================================================================
// CSV Output
// =============================================================================

/// Output columns in emission order
pub mod columns {
    pub const GRAPH: &str = "graph";
    pub const ORDER: &str = "order";
    pub const SIZE: &str = "size";
    pub const MODULARITY: &str = "modularity";
    pub const CLUSTERING_TIME: &str = "clustering_time";
    pub const TOTAL_TIME: &str = "total_time";

    pub const ALL: &[&str] = &[GRAPH, ORDER, SIZE, MODULARITY, CLUSTERING_TIME, TOTAL_TIME];
}

/// Extension used for per-graph output files
pub const CSV_EXTENSION: &str = "csv";

/// Native line ending of the host platform
#[cfg(windows)]
pub const NATIVE_LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const NATIVE_LINE_ENDING: &str = "\n";

// =============================================================================
// Commands
// =============================================================================

/// Single combined CSV file
pub const COMMAND_CSV: &str = "csv";

/// One CSV file per graph inside an output directory
pub const COMMAND_CSV_DIR: &str = "csv-dir";
