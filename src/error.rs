//! Error types for the layjson library.

use std::io;
use thiserror::Error;

/// Result type alias for layjson operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the export core.
///
/// The export walk itself never fails — missing or malformed sub-data
/// degrades to partial output — so these variants cover only the fallible
/// edges: file I/O, loading a document model, and strict-JSON encoding.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A serialized document model could not be deserialized.
    #[error("Invalid document model: {0}")]
    Model(String),

    /// Strict-mode JSON encoding failed.
    #[error("JSON encoding error: {0}")]
    Json(String),
}
