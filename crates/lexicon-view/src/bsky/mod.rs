//! Bluesky (`app.bsky.*`) lexicon types for starter pack, feed and list
//! listings.
//!
//! Only the members these listings actually carry are registered; anything
//! else a server sends resolves to an [`crate::UnknownVariant`].

pub mod actor;
pub mod embed;
pub mod feed;
pub mod graph;
pub mod label;
mod record;
pub(crate) mod responses;
pub mod richtext;

pub use actor::{ActorViewerState, ProfileView, StatusView};
pub use embed::{EmbedRecord, EmbedView};
pub use feed::FeedItem;
pub use graph::{
    ListItemView, ListPurpose, ListView, ListViewerState, StarterPackBasicDetails,
    StarterPackDetails, StarterPackRecord, StarterPackView, StarterPackViewBasic,
};
pub use label::{Label, RecordLabels};
pub use record::Record;
pub use responses::{
    GetStarterPackOutput, ResponseKind, UnknownResponseKind, decode_actor_feeds,
    decode_actor_starter_packs, decode_lists, decode_starter_pack, decode_starter_packs,
};
pub use richtext::{Facet, FacetFeature};
