//! Byte-level entry points: depth guard, parse and classification of errors.

use pagination::{Page, PageSeed};
use serde::de::{DeserializeOwned, DeserializeSeed};
use tracing::debug;

use crate::depth::{DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING, ensure_depth_within};
use crate::error::SchemaError;

/// Tunables for a [`Decoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    max_depth: usize,
}

impl DecodeOptions {
    /// Sets the nesting bound, clamped to `1..=MAX_DEPTH_CEILING`.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = if max_depth == 0 {
            1
        } else if max_depth > MAX_DEPTH_CEILING {
            MAX_DEPTH_CEILING
        } else {
            max_depth
        };
        self
    }

    /// Returns the effective nesting bound.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Decodes raw response bytes into typed values.
///
/// A decoder holds no state besides its options; one instance may be shared
/// across threads and reused for any number of calls.
///
/// # Example
///
/// ```
/// use lexicon_view::{DecodeOptions, Decoder, SchemaError};
///
/// let decoder = Decoder::new(DecodeOptions::default().with_max_depth(2));
/// let err = decoder
///     .decode::<serde_json::Value>(br#"{"a": {"b": {"c": 1}}}"#)
///     .expect_err("three levels deep");
///
/// assert_eq!(err, SchemaError::DepthExceeded { limit: 2 });
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    /// Creates a decoder with the given options.
    #[must_use]
    pub const fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Returns the decoder's options.
    #[must_use]
    pub const fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Decodes one JSON document into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DepthExceeded`] for over-nested input,
    /// [`SchemaError::InvalidJson`] for malformed text, and
    /// [`SchemaError::Structural`] when the document does not fit `T`.
    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, SchemaError> {
        ensure_depth_within(bytes, self.options.max_depth)?;
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Decodes a list envelope whose items live under `items_key`.
    ///
    /// # Errors
    ///
    /// As for [`Decoder::decode`]; additionally a missing items array or one
    /// malformed item fails the whole page.
    pub fn decode_page<T: DeserializeOwned>(
        &self,
        bytes: &[u8],
        items_key: &'static str,
    ) -> Result<Page<T>, SchemaError> {
        ensure_depth_within(bytes, self.options.max_depth)?;

        let mut deserializer = serde_json::Deserializer::from_slice(bytes);
        let page = PageSeed::new(items_key).deserialize(&mut deserializer)?;
        deserializer.end()?;

        debug!(
            items_key,
            items = page.len(),
            has_more = page.has_more(),
            "decoded page"
        );
        Ok(page)
    }
}
