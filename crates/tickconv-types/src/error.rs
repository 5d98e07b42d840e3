//! Error types for tickconv.

use thiserror::Error;

/// Result type alias for tickconv operations.
pub type Result<T> = std::result::Result<T, TickconvError>;

/// Errors that can occur while converting an hourly tick file.
///
/// A failed file aborts that file's conversion only; continuation
/// across a multi-file run is the caller's policy.
#[derive(Error, Debug)]
pub enum TickconvError {
    /// Decompression or archive extraction failed.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Binary decoding failed.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A Format-A buffer was supplied without its decoding context.
    #[error("Missing decoding context for bi5 data")]
    MissingContext,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
