//! Error types for the inspection CLI.

use std::path::PathBuf;

use thiserror::Error;

use crate::bsky::UnknownResponseKind;
use crate::error::SchemaError;

/// Errors surfaced while loading settings, reading input or decoding it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectError {
    /// Settings could not be loaded from arguments, environment or files.
    #[error("configuration error: {message}")]
    Config {
        /// Loader error message.
        message: String,
    },
    /// No input file was configured.
    #[error("missing required setting: --input")]
    MissingInput,
    /// The input file could not be read.
    #[error("failed to read {}: {message}", .path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// I/O error message.
        message: String,
    },
    /// The configured response kind is not supported.
    #[error(transparent)]
    ResponseKind(#[from] UnknownResponseKind),
    /// The input did not decode as the configured response kind.
    #[error("decode error: {source}")]
    Schema {
        /// Underlying decode error.
        #[from]
        #[source]
        source: SchemaError,
    },
}
