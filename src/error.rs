//! Error types for toolshed
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while loading or querying a catalog
#[derive(Debug, Error)]
pub enum ToolshedError {
    /// No tool with the given name in the library
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Catalog document could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Catalog file extension is not one we know how to read
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for toolshed operations
pub type Result<T> = std::result::Result<T, ToolshedError>;
