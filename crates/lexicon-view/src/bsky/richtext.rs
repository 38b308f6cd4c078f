//! Rich text annotations (`app.bsky.richtext.facet`).

use std::sync::OnceLock;

use serde::Deserialize;

use crate::normalize::null_as_default;
use crate::registry::TypeRegistry;
use crate::union::{LexiconUnion, Union};

/// Tag of a mention feature.
pub const MENTION_TYPE: &str = "app.bsky.richtext.facet#mention";
/// Tag of a link feature.
pub const LINK_TYPE: &str = "app.bsky.richtext.facet#link";
/// Tag of a hashtag feature.
pub const TAG_TYPE: &str = "app.bsky.richtext.facet#tag";

/// Annotation of a byte range of some text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Facet {
    /// Annotated range.
    pub index: ByteSlice,
    /// Features applied to the range.
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<Union<FacetFeature>>,
}

/// Half-open UTF-8 byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteSlice {
    /// Inclusive start offset.
    pub byte_start: u64,
    /// Exclusive end offset.
    pub byte_end: u64,
}

/// Known facet features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetFeature {
    /// Mention of an account.
    Mention(Mention),
    /// Hyperlink.
    Link(Link),
    /// Hashtag.
    Tag(Tag),
}

/// Mention of an account by DID.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Mention {
    /// Mentioned account.
    pub did: String,
}

/// Hyperlink target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    /// Target URI.
    pub uri: String,
}

/// Hashtag without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    /// Tag text.
    pub tag: String,
}

impl LexiconUnion for FacetFeature {
    const NAME: &'static str = "facet feature";

    fn registry() -> &'static TypeRegistry<Self> {
        static REGISTRY: OnceLock<TypeRegistry<FacetFeature>> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            TypeRegistry::builder()
                .register(MENTION_TYPE, Self::Mention)
                .register(LINK_TYPE, Self::Link)
                .register(TAG_TYPE, Self::Tag)
                .build()
        })
    }

    fn tag(&self) -> &'static str {
        match self {
            Self::Mention(_) => MENTION_TYPE,
            Self::Link(_) => LINK_TYPE,
            Self::Tag(_) => TAG_TYPE,
        }
    }
}
