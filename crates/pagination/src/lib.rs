//! Opaque cursor and pagination envelope primitives.
//!
//! Lexicon list endpoints answer with an envelope holding an ordered item
//! array under an endpoint-specific key plus an optional continuation cursor:
//!
//! ```json
//! { "starterPacks": [ ... ], "cursor": "3lep6hpx7qq2c" }
//! ```
//!
//! This crate models that envelope as [`Page`], decodes it with [`PageSeed`]
//! for any items key, and treats the cursor as an opaque [`Cursor`] token that
//! is only ever handed back to the server verbatim.
//!
//! # Example
//!
//! ```
//! use pagination::{Page, PageSeed};
//! use serde::de::DeserializeSeed;
//!
//! let json = r#"{"lists": ["a", "b"], "cursor": "opaque-token"}"#;
//! let mut deserializer = serde_json::Deserializer::from_str(json);
//! let page: Page<String> = PageSeed::new("lists")
//!     .deserialize(&mut deserializer)
//!     .expect("valid envelope");
//!
//! assert_eq!(page.items(), ["a", "b"]);
//! assert_eq!(page.cursor().map(|cursor| cursor.as_str()), Some("opaque-token"));
//! ```

mod cursor;
mod page;
mod seed;

pub use cursor::{CURSOR_FIELD, Cursor};
pub use page::Page;
pub use seed::PageSeed;
