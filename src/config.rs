//! Configuration for CSV conversion.
//!
//! Controls how parsed results are written: line terminator, quoting,
//! float formatting and output directory handling.

use crate::constants::NATIVE_LINE_ENDING;
use crate::error::{LogError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Converter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Line terminator for CSV output (defaults to the platform's native ending)
    pub line_terminator: String,

    /// Wrap every field in double quotes, whatever its type
    pub quote_all_fields: bool,

    /// Create missing output directories before writing
    pub create_output_dirs: bool,

    /// Fixed number of decimals for float columns; `None` writes the shortest exact form
    pub float_precision: Option<usize>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            line_terminator: NATIVE_LINE_ENDING.to_string(),
            quote_all_fields: true,
            create_output_dirs: true,
            float_precision: None,
        }
    }
}

impl ConverterConfig {
    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.line_terminator.is_empty() {
            return Err(LogError::Configuration {
                message: "line_terminator must not be empty".to_string(),
            });
        }

        if !self.line_terminator.chars().all(|c| c == '\r' || c == '\n') {
            return Err(LogError::Configuration {
                message: format!(
                    "line_terminator must only contain CR/LF characters, got {:?}",
                    self.line_terminator
                ),
            });
        }

        debug!("Converter configuration validated: {:?}", self);
        Ok(())
    }
}
