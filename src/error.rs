//! Errors raised by the layers around the scanner.
//!
//! Scanning itself cannot fail: malformed text degrades to plain text. Only reading documents,
//! loading configuration and serialising output report errors, and they all funnel into [`Error`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Failure while reading documents, loading configuration or writing output.
pub enum Error {
    /// A document or directory could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path being read when the failure occurred.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The configuration file exists but could not be parsed.
    #[error("invalid configuration in {}: {message}", path.display())]
    Config {
        /// Configuration file that was rejected.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
    /// An outline could not be serialised to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
