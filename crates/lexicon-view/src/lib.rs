//! Typed decoding of lexicon record/view payloads.
//!
//! Lexicon schemas are open: servers add union members and fields over time,
//! and hydrate nested views to different depths depending on context. This
//! crate maps such payloads onto closed Rust types while staying forward
//! compatible:
//!
//! - [`TypeRegistry`] maps `$type` tags to member decoders, built once per
//!   union.
//! - [`Union`] resolves a `$type`-tagged object into a typed member, or keeps
//!   it as an [`UnknownVariant`] when the tag is not registered.
//! - [`RecordView`] splits a view into its optional embedded record and the
//!   server-computed enrichment fields.
//! - [`normalize`] folds absent, `null` and empty values into one
//!   representation at decode time.
//! - [`Decoder`] bounds nesting depth and decodes paginated envelopes into
//!   [`pagination::Page`].
//!
//! Unknown object keys are ignored everywhere. Structural problems surface
//! as [`SchemaError`]; one malformed list element fails the whole envelope.
//!
//! # Example
//!
//! ```
//! use lexicon_view::bsky::decode_actor_starter_packs;
//!
//! let body = br#"{
//!     "starterPacks": [{
//!         "uri": "at://did:plc:abc/app.bsky.graph.starterpack/3kpack",
//!         "cid": "bafyreipack",
//!         "record": {
//!             "$type": "app.bsky.graph.starterpack",
//!             "name": "Rustaceans",
//!             "list": "at://did:plc:abc/app.bsky.graph.list/3klist",
//!             "createdAt": "2024-12-01T10:00:00.000Z"
//!         },
//!         "creator": {"did": "did:plc:abc", "handle": "alice.test"},
//!         "indexedAt": "2024-12-01T10:00:01.000Z"
//!     }],
//!     "cursor": "3lep6hpx7qq2c"
//! }"#;
//!
//! let page = decode_actor_starter_packs(body).expect("valid response");
//! let pack = page.items().first().expect("one entry");
//!
//! assert_eq!(pack.starter_pack_record().map(|record| record.name.as_str()), Some("Rustaceans"));
//! assert_eq!(page.cursor().map(|cursor| cursor.as_str()), Some("3lep6hpx7qq2c"));
//! ```

mod blob;
pub mod bsky;
mod decode;
mod depth;
mod error;
pub mod inspect;
pub mod normalize;
mod registry;
mod union;
mod view;

pub use blob::{BLOB_TYPE, BlobRef};
pub use decode::{DecodeOptions, Decoder};
pub use depth::{DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
pub use error::SchemaError;
pub use pagination::{Cursor, Page};
pub use registry::{MemberDecoder, TypeRegistry, TypeRegistryBuilder};
pub use union::{DISCRIMINATOR, LexiconUnion, Union, UnknownVariant};
pub use view::RecordView;
