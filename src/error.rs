//! Error types for htmlword library.

use std::io;
use thiserror::Error;

/// Result type alias for htmlword operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during conversion.
///
/// Malformed markup or styles never produce an error: the converter skips
/// what it cannot use. Errors come from the document model refusing a call,
/// from I/O, or from serializing the result.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document model rejected a call.
    #[error("Document model error: {0}")]
    Model(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}
