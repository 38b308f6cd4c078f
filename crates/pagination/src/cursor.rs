//! Opaque continuation token.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire name of the continuation token, both in envelopes and in request
/// query strings.
pub const CURSOR_FIELD: &str = "cursor";

/// Continuation token returned by a list endpoint.
///
/// The token is never parsed or normalised. Its only contract is that it is
/// passed back to the server byte-for-byte to fetch the next page.
///
/// # Example
///
/// ```
/// use pagination::Cursor;
///
/// let cursor = Cursor::new("3lep6hpx7qq2c");
/// assert_eq!(cursor.as_str(), "3lep6hpx7qq2c");
/// assert_eq!(cursor.to_string(), "3lep6hpx7qq2c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wraps a raw token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token exactly as received.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the cursor and returns the raw token.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
