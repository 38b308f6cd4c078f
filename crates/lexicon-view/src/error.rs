//! Error types for the lexicon-view crate.
//!
//! Decoding has exactly one failure type, [`SchemaError`]. An unrecognised
//! union tag is absent from it: that case decodes successfully
//! into [`crate::UnknownVariant`].

use serde_json::error::Category;
use thiserror::Error;

/// Errors that can occur while decoding a lexicon payload.
///
/// Every variant is fatal to the current decode call. Nothing is recovered
/// locally, and a failure inside one list element fails the whole envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The input is not well-formed JSON.
    #[error("invalid JSON: {message}")]
    InvalidJson {
        /// Parser error message, including the position.
        message: String,
    },

    /// The JSON is well-formed but does not match the declared shape: a
    /// mandatory field is missing, a field has the wrong JSON type, or a
    /// union member is malformed.
    #[error("payload does not match schema: {message}")]
    Structural {
        /// Description of the mismatch.
        message: String,
    },

    /// Object and array nesting exceeds the configured bound.
    #[error("payload nesting exceeds the maximum depth of {limit}")]
    DepthExceeded {
        /// Depth bound that was exceeded.
        limit: usize,
    },

    /// A value in a union position is not a JSON object.
    #[error("{union} union member must be an object, found {found}")]
    NotAnObject {
        /// Name of the union being resolved.
        union: &'static str,
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// An object in a union position carries no `$type` field.
    #[error("{union} union member has no `$type` discriminator")]
    MissingDiscriminator {
        /// Name of the union being resolved.
        union: &'static str,
    },

    /// The `$type` field of a union member is not a string.
    #[error("{union} union member has a non-string `$type` discriminator ({found})")]
    InvalidDiscriminator {
        /// Name of the union being resolved.
        union: &'static str,
        /// JSON type that was found instead.
        found: &'static str,
    },
}

impl SchemaError {
    /// Returns `true` for errors caused by the payload shape rather than by
    /// malformed JSON text or the depth bound.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::Structural { .. }
                | Self::NotAnObject { .. }
                | Self::MissingDiscriminator { .. }
                | Self::InvalidDiscriminator { .. }
        )
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        match err.classify() {
            Category::Data => Self::Structural { message },
            Category::Io | Category::Syntax | Category::Eof => Self::InvalidJson { message },
        }
    }
}

/// Names the JSON type of a value for error messages.
pub(crate) const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
