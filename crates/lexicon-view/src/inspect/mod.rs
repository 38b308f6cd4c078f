//! Support for the `lexicon-inspect` binary.
//!
//! The binary delegates to [`run`] so the whole flow, from settings to the
//! printed summary, can be exercised in tests without spawning a process.

mod config;
mod error;

use std::fmt;
use std::fs;

use pagination::{Cursor, Page};
use tracing::debug;

use crate::bsky::responses::{FEEDS_KEY, LISTS_KEY, STARTER_PACKS_KEY};
use crate::bsky::{
    FeedItem, GetStarterPackOutput, ListView, Record, ResponseKind, StarterPackViewBasic,
};
use crate::decode::Decoder;
use crate::error::SchemaError;
use crate::union::Union;

pub use config::InspectSettings;
pub use error::InspectError;

/// Outcome of decoding one saved response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    kind: ResponseKind,
    cursor: Option<Cursor>,
    titles: Vec<String>,
}

impl Summary {
    /// Response kind the input was decoded as.
    #[must_use]
    pub const fn kind(&self) -> ResponseKind {
        self.kind
    }

    /// Continuation cursor, if the listing has more entries.
    #[must_use]
    pub const fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    /// One title per decoded item, in wire order.
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    fn from_page<T>(kind: ResponseKind, page: Page<T>, title: impl Fn(&T) -> String) -> Self {
        let titles = page.iter().map(title).collect();
        let (_, cursor) = page.into_parts();
        Self {
            kind,
            cursor,
            titles,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "kind: {}", self.kind)?;
        writeln!(f, "items: {}", self.titles.len())?;
        let cursor = self.cursor.as_ref().map_or("end of listing", Cursor::as_str);
        writeln!(f, "cursor: {cursor}")?;
        for (position, title) in self.titles.iter().enumerate() {
            writeln!(f, "{:>4}. {title}", position + 1)?;
        }
        Ok(())
    }
}

/// Decodes `bytes` as `kind` and summarises the result.
///
/// # Errors
///
/// Returns [`SchemaError`] when the body does not decode.
pub fn summarize(
    kind: ResponseKind,
    bytes: &[u8],
    decoder: &Decoder,
) -> Result<Summary, SchemaError> {
    let summary = match kind {
        ResponseKind::ActorStarterPacks | ResponseKind::StarterPacks => {
            let page = decoder.decode_page::<StarterPackViewBasic>(bytes, STARTER_PACKS_KEY)?;
            Summary::from_page(kind, page, |pack| record_title(pack.record()))
        }
        ResponseKind::StarterPack => {
            let output = decoder.decode::<GetStarterPackOutput>(bytes)?;
            Summary {
                kind,
                cursor: None,
                titles: vec![record_title(output.starter_pack.record())],
            }
        }
        ResponseKind::ActorFeeds => {
            let page = decoder.decode_page::<FeedItem>(bytes, FEEDS_KEY)?;
            Summary::from_page(kind, page, |feed| feed.title().to_owned())
        }
        ResponseKind::Lists => {
            let page = decoder.decode_page::<ListView>(bytes, LISTS_KEY)?;
            Summary::from_page(kind, page, |list| list.name.clone())
        }
    };
    Ok(summary)
}

/// Loads the configured input and summarises it.
///
/// # Errors
///
/// Returns [`InspectError`] when a setting is missing or invalid, the input
/// cannot be read, or it does not decode.
pub fn run(settings: &InspectSettings) -> Result<Summary, InspectError> {
    let kind = settings.response_kind()?;
    let path = settings.input()?;
    let bytes = fs::read(path).map_err(|err| InspectError::Read {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    debug!(path = %path.display(), %kind, bytes = bytes.len(), "decoding saved response");

    let decoder = Decoder::new(settings.decode_options());
    Ok(summarize(kind, &bytes, &decoder)?)
}

/// Starter pack name, or the record's tag in brackets for anything else.
fn record_title(record: Option<&Union<Record>>) -> String {
    match record {
        None => "(record unavailable)".to_owned(),
        Some(Union::Known(Record::StarterPack(pack))) => pack.name.clone(),
        Some(other) => format!("[{}]", other.tag()),
    }
}
