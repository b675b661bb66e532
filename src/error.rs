//! Error handling for log conversion operations.
//!
//! Provides error types with context for log reading, malformed log
//! content, command resolution and CSV output failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Log file not found at path: {path}")]
    LogNotFound { path: PathBuf },

    #[error("Result on line {line} appears before any graph announcement")]
    ResultWithoutGraph { line: usize },

    #[error("Graph announcement on line {line} has an empty graph name")]
    EmptyGraphName { line: usize },

    #[error("Invalid {field} on line {line}: {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Unknown command: {command:?}")]
    UnknownCommand { command: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, LogError>;
