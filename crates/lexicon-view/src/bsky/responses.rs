//! Decoders for the listing responses this crate understands.

use std::fmt;
use std::str::FromStr;

use pagination::Page;
use serde::Deserialize;
use thiserror::Error;

use crate::bsky::feed::FeedItem;
use crate::bsky::graph::{ListView, StarterPackView, StarterPackViewBasic};
use crate::decode::Decoder;
use crate::error::SchemaError;

pub(crate) const STARTER_PACKS_KEY: &str = "starterPacks";
pub(crate) const FEEDS_KEY: &str = "feeds";
pub(crate) const LISTS_KEY: &str = "lists";

/// Response shapes understood by the decoders in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    /// `app.bsky.graph.getActorStarterPacks`
    ActorStarterPacks,
    /// `app.bsky.graph.getStarterPacks`
    StarterPacks,
    /// `app.bsky.graph.getStarterPack`
    StarterPack,
    /// `app.bsky.feed.getActorFeeds`
    ActorFeeds,
    /// `app.bsky.graph.getLists`
    Lists,
}

impl ResponseKind {
    /// Every kind, in documentation order.
    pub const ALL: [Self; 5] = [
        Self::ActorStarterPacks,
        Self::StarterPacks,
        Self::StarterPack,
        Self::ActorFeeds,
        Self::Lists,
    ];

    /// Returns the kebab-case name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ActorStarterPacks => "actor-starter-packs",
            Self::StarterPacks => "starter-packs",
            Self::StarterPack => "starter-pack",
            Self::ActorFeeds => "actor-feeds",
            Self::Lists => "lists",
        }
    }

    /// Returns the XRPC method that produces this response.
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Self::ActorStarterPacks => "app.bsky.graph.getActorStarterPacks",
            Self::StarterPacks => "app.bsky.graph.getStarterPacks",
            Self::StarterPack => "app.bsky.graph.getStarterPack",
            Self::ActorFeeds => "app.bsky.feed.getActorFeeds",
            Self::Lists => "app.bsky.graph.getLists",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognised [`ResponseKind`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown response kind `{name}`")]
pub struct UnknownResponseKind {
    name: String,
}

impl UnknownResponseKind {
    /// Returns the rejected name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for ResponseKind {
    type Err = UnknownResponseKind;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| UnknownResponseKind {
                name: name.to_owned(),
            })
    }
}

/// Body of `app.bsky.graph.getStarterPack`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetStarterPackOutput {
    /// The hydrated starter pack.
    pub starter_pack: StarterPackView,
}

/// Decodes an `app.bsky.graph.getActorStarterPacks` response.
///
/// # Errors
///
/// Returns [`SchemaError`] when the body is malformed or any entry fails to
/// decode.
pub fn decode_actor_starter_packs(
    bytes: &[u8],
) -> Result<Page<StarterPackViewBasic>, SchemaError> {
    Decoder::default().decode_page(bytes, STARTER_PACKS_KEY)
}

/// Decodes an `app.bsky.graph.getStarterPacks` response.
///
/// The method takes an explicit URI list and does not paginate; a cursor is
/// tolerated all the same.
///
/// # Errors
///
/// Returns [`SchemaError`] when the body is malformed or any entry fails to
/// decode.
pub fn decode_starter_packs(bytes: &[u8]) -> Result<Page<StarterPackViewBasic>, SchemaError> {
    Decoder::default().decode_page(bytes, STARTER_PACKS_KEY)
}

/// Decodes an `app.bsky.graph.getStarterPack` response.
///
/// # Errors
///
/// Returns [`SchemaError`] when the body is malformed.
pub fn decode_starter_pack(bytes: &[u8]) -> Result<StarterPackView, SchemaError> {
    Decoder::default()
        .decode::<GetStarterPackOutput>(bytes)
        .map(|output| output.starter_pack)
}

/// Decodes an `app.bsky.feed.getActorFeeds` response.
///
/// # Errors
///
/// Returns [`SchemaError`] when the body is malformed or any feed fails to
/// decode.
pub fn decode_actor_feeds(bytes: &[u8]) -> Result<Page<FeedItem>, SchemaError> {
    Decoder::default().decode_page(bytes, FEEDS_KEY)
}

/// Decodes an `app.bsky.graph.getLists` response.
///
/// # Errors
///
/// Returns [`SchemaError`] when the body is malformed or any list fails to
/// decode.
pub fn decode_lists(bytes: &[u8]) -> Result<Page<ListView>, SchemaError> {
    Decoder::default().decode_page(bytes, LISTS_KEY)
}
