//! Social graph (`app.bsky.graph.*`): lists and starter packs.

use serde::Deserialize;

use crate::blob::BlobRef;
use crate::bsky::actor::ProfileView;
use crate::bsky::feed::FeedItem;
use crate::bsky::label::{Label, RecordLabels};
use crate::bsky::record::Record;
use crate::bsky::richtext::Facet;
use crate::normalize::{blank_as_none, null_as_default};
use crate::union::Union;
use crate::view::RecordView;

/// Record type of a starter pack.
pub const STARTER_PACK_TYPE: &str = "app.bsky.graph.starterpack";
/// Record type of a list.
pub const LIST_TYPE: &str = "app.bsky.graph.list";

const MOD_LIST: &str = "app.bsky.graph.defs#modlist";
const CURATE_LIST: &str = "app.bsky.graph.defs#curatelist";
const REFERENCE_LIST: &str = "app.bsky.graph.defs#referencelist";

/// Purpose token of a list.
///
/// The token set is open; unrecognised tokens are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ListPurpose {
    /// Moderation list: mute or block its members.
    ModList,
    /// Curation list: for example a starter pack's membership.
    CurateList,
    /// Reference list: for example the accounts in a feed.
    ReferenceList,
    /// Token introduced after this client was built.
    Other(String),
}

impl ListPurpose {
    /// Returns the wire token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ModList => MOD_LIST,
            Self::CurateList => CURATE_LIST,
            Self::ReferenceList => REFERENCE_LIST,
            Self::Other(token) => token,
        }
    }
}

impl From<String> for ListPurpose {
    fn from(token: String) -> Self {
        match token.as_str() {
            MOD_LIST => Self::ModList,
            CURATE_LIST => Self::CurateList,
            REFERENCE_LIST => Self::ReferenceList,
            _ => Self::Other(token),
        }
    }
}

/// Hydrated list; covers both the basic and the full list view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    /// List URI.
    pub uri: String,
    /// List CID.
    pub cid: String,
    /// List name.
    pub name: String,
    /// List purpose.
    pub purpose: ListPurpose,
    /// Account that owns the list; only present in the full view.
    pub creator: Option<Box<ProfileView>>,
    /// Description.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    /// Rich text annotations of the description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description_facets: Vec<Facet>,
    /// Avatar URL.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub avatar: Option<String>,
    /// Number of members.
    pub list_item_count: Option<u64>,
    /// Moderation labels on the list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<Label>,
    /// Relationship between the viewer and the list.
    pub viewer: Option<ListViewerState>,
    /// Time the list was indexed.
    pub indexed_at: Option<String>,
}

/// Relationship between the viewer and a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListViewerState {
    /// The viewer muted the list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub muted: bool,
    /// URI of the viewer's list block record.
    pub blocked: Option<String>,
}

/// One membership of a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListItemView {
    /// URI of the list item record.
    pub uri: String,
    /// The member.
    pub subject: ProfileView,
}

/// List record (`app.bsky.graph.list`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecord {
    /// List purpose.
    pub purpose: ListPurpose,
    /// List name.
    pub name: String,
    /// Description.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    /// Rich text annotations of the description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description_facets: Vec<Facet>,
    /// Avatar blob.
    pub avatar: Option<BlobRef>,
    /// Self-applied labels.
    pub labels: Option<Union<RecordLabels>>,
    /// Creation timestamp.
    pub created_at: String,
}

/// Starter pack record (`app.bsky.graph.starterpack`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarterPackRecord {
    /// Display name of the pack.
    pub name: String,
    /// Description.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    /// Rich text annotations of the description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description_facets: Vec<Facet>,
    /// URI of the curate list holding the pack's members.
    pub list: String,
    /// Suggested feeds, usually as URI-only stubs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub feeds: Vec<FeedItem>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last edit timestamp.
    pub updated_at: Option<String>,
}

/// Server enrichment of a starter pack in listings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarterPackBasicDetails {
    /// Account that created the pack.
    pub creator: ProfileView,
    /// Number of members.
    pub list_item_count: Option<u64>,
    /// Accounts that joined through the pack in the last week.
    pub joined_week_count: Option<u64>,
    /// Accounts that joined through the pack overall.
    pub joined_all_time_count: Option<u64>,
    /// Moderation labels on the pack.
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<Label>,
    /// Time the pack was indexed.
    pub indexed_at: String,
}

/// Server enrichment of a fully hydrated starter pack.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarterPackDetails {
    /// Account that created the pack.
    pub creator: ProfileView,
    /// The pack's member list.
    pub list: Option<ListView>,
    /// Sample of the pack's members.
    #[serde(default, deserialize_with = "null_as_default")]
    pub list_items_sample: Vec<ListItemView>,
    /// Suggested feeds, hydrated.
    #[serde(default, deserialize_with = "null_as_default")]
    pub feeds: Vec<FeedItem>,
    /// Accounts that joined through the pack in the last week.
    pub joined_week_count: Option<u64>,
    /// Accounts that joined through the pack overall.
    pub joined_all_time_count: Option<u64>,
    /// Moderation labels on the pack.
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<Label>,
    /// Time the pack was indexed.
    pub indexed_at: String,
}

/// Starter pack as it appears in listings.
pub type StarterPackViewBasic = RecordView<Union<Record>, StarterPackBasicDetails>;

/// Fully hydrated starter pack.
pub type StarterPackView = RecordView<Union<Record>, StarterPackDetails>;

impl StarterPackViewBasic {
    /// Returns the typed starter pack record, when the embedded record is
    /// present and resolved to `app.bsky.graph.starterpack`.
    #[must_use]
    pub fn starter_pack_record(&self) -> Option<&StarterPackRecord> {
        starter_pack_record(self.record())
    }
}

impl StarterPackView {
    /// Returns the typed starter pack record, when the embedded record is
    /// present and resolved to `app.bsky.graph.starterpack`.
    #[must_use]
    pub fn starter_pack_record(&self) -> Option<&StarterPackRecord> {
        starter_pack_record(self.record())
    }
}

fn starter_pack_record(record: Option<&Union<Record>>) -> Option<&StarterPackRecord> {
    match record.and_then(Union::known) {
        Some(Record::StarterPack(pack)) => Some(pack),
        _ => None,
    }
}
