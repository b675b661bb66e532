//! PLP Log Processor Library
//!
//! Converts the logs of PLP graph-clustering benchmark runs into CSV
//! tables for analysis.
//!
//! This library provides tools for:
//! - Classifying timestamped log lines into graph, order/size and result records
//! - Folding a log into per-graph result sequences in announcement order
//! - Writing results as one combined CSV or one CSV per graph

pub mod classifier;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod processor;
pub mod store;

// Re-export commonly used types
pub use classifier::{LineClassifier, LineKind};
pub use config::ConverterConfig;
pub use error::{LogError, Result};
pub use models::{ParseState, ProcessingStats, ResultRecord};
pub use processor::{Command, LogProcessor};
pub use store::GroupedStore;
