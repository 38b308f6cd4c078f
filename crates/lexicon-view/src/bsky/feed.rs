//! Feed generators (`app.bsky.feed.generator`).

use serde::Deserialize;

use crate::blob::BlobRef;
use crate::bsky::actor::ProfileView;
use crate::bsky::label::{Label, RecordLabels};
use crate::bsky::richtext::Facet;
use crate::normalize::{blank_as_none, null_as_default};
use crate::union::Union;

/// Record type of a feed generator declaration.
pub const GENERATOR_TYPE: &str = "app.bsky.feed.generator";

/// A feed generator as it appears in a collection field.
///
/// Starter pack records list feeds as bare `{ "uri": ... }` stubs, while
/// hydrated views carry the full generator view. Both shapes decode into
/// this one type: only `uri` is mandatory and the hydrated fields are
/// optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    /// URI of the generator record.
    pub uri: String,
    /// CID of the generator record.
    pub cid: Option<String>,
    /// DID of the service producing the feed.
    pub did: Option<String>,
    /// Account that declared the feed.
    pub creator: Option<ProfileView>,
    /// Display name.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub display_name: Option<String>,
    /// Description.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    /// Rich text annotations of the description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description_facets: Vec<Facet>,
    /// Avatar URL.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub avatar: Option<String>,
    /// Number of likes.
    pub like_count: Option<u64>,
    /// Whether the feed accepts interaction feedback.
    #[serde(default, deserialize_with = "null_as_default")]
    pub accepts_interactions: bool,
    /// Moderation labels on the feed.
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<Label>,
    /// Relationship between the viewer and the feed.
    pub viewer: Option<GeneratorViewerState>,
    /// Content mode token.
    pub content_mode: Option<String>,
    /// Time the generator was indexed.
    pub indexed_at: Option<String>,
}

impl FeedItem {
    /// Returns `true` when the server expanded the stub into a full view.
    #[must_use]
    pub const fn is_hydrated(&self) -> bool {
        self.did.is_some() && self.creator.is_some()
    }

    /// Returns the display name, falling back to the URI.
    #[must_use]
    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.uri)
    }
}

/// Relationship between the viewer and a feed generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorViewerState {
    /// URI of the viewer's like record.
    pub like: Option<String>,
}

/// Feed generator declaration record (`app.bsky.feed.generator`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorRecord {
    /// DID of the service producing the feed.
    pub did: String,
    /// Display name.
    pub display_name: String,
    /// Description.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    /// Rich text annotations of the description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description_facets: Vec<Facet>,
    /// Avatar blob.
    pub avatar: Option<BlobRef>,
    /// Whether the feed accepts interaction feedback.
    #[serde(default, deserialize_with = "null_as_default")]
    pub accepts_interactions: bool,
    /// Self-applied labels.
    pub labels: Option<Union<RecordLabels>>,
    /// Content mode token.
    pub content_mode: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}
