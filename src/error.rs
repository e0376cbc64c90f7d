//! Error types for the emoji keyboard
//!
//! Provides standardized error handling across the library.

use thiserror::Error;

/// Errors that can occur in the emoji keyboard
#[derive(Debug, Error)]
pub enum KeyboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog loading or validation errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A category index outside the tab bar
    #[error("Category index {index} out of range (have {len} categories)")]
    CategoryOutOfRange { index: usize, len: usize },

    /// Search text that cannot be compiled into a pattern
    #[error("Search pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// No async runtime available for debounced search
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON parsing errors
    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for keyboard operations
pub type KeyboardResult<T> = Result<T, KeyboardError>;
