// Error types module

use thiserror::Error;

/// Errors raised at the edges of the crate
///
/// Compression itself never fails; these cover configuration loading,
/// validation, logging setup and CLI I/O.
#[derive(Error, Debug)]
pub enum PressError {
    /// Configuration errors (invalid YAML, missing env vars, bad values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A protected tag name that cannot be scanned for
    #[error("Invalid protected tag: {0}")]
    InvalidTag(String),

    /// Reading or writing a document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A pattern used during configuration loading failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The tracing subscriber could not be installed
    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, PressError>;
