//! Error types for modelgraph-translate
//!
//! Provides unified error handling across the crate. Per-record translation
//! failures are not errors at this level; those accumulate as diagnostics
//! inside a run. This type covers structural faults only.

use thiserror::Error;

/// Main error type for modelgraph-translate operations
#[derive(Debug, Error)]
pub enum TranslateError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Translation error
    #[error("Translation error: {0}")]
    Translation(String),
}

impl TranslateError {
    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        TranslateError::Parse(msg.into())
    }

    /// Create a translation error
    pub fn translation(msg: impl Into<String>) -> Self {
        TranslateError::Translation(msg.into())
    }
}

/// Result type alias for modelgraph-translate operations
pub type Result<T> = std::result::Result<T, TranslateError>;
