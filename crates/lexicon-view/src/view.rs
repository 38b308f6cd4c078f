//! Record/view pairs.
//!
//! Many entities reach the client as a *view*: the author's canonical
//! *record* nested under `record`, next to fields the server computed for
//! this viewer (counts, viewer relationship, moderation labels). The record
//! may be missing when the server could not hydrate it, so it is optional
//! here and callers must handle `None`.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::json_kind;

const URI_FIELD: &str = "uri";
const CID_FIELD: &str = "cid";
const RECORD_FIELD: &str = "record";

/// A server view wrapping an optional record of type `R`.
///
/// `details` holds the sibling enrichment fields, decoded as `E` from
/// everything except `uri`, `cid` and `record`.
///
/// # Example
///
/// ```
/// use lexicon_view::RecordView;
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// struct Note {
///     text: String,
/// }
///
/// #[derive(Debug, Deserialize)]
/// #[serde(rename_all = "camelCase")]
/// struct Counts {
///     like_count: Option<u64>,
/// }
///
/// let json = r#"{"uri": "at://did:plc:a/test.note/1", "likeCount": 3}"#;
/// let view: RecordView<Note, Counts> = serde_json::from_str(json).expect("valid view");
///
/// assert!(view.record().is_none());
/// assert_eq!(view.details().like_count, Some(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordView<R, E> {
    uri: String,
    cid: Option<String>,
    record: Option<R>,
    details: E,
}

impl<R, E> RecordView<R, E> {
    /// Assembles a view from already decoded parts.
    #[must_use]
    pub const fn new(uri: String, cid: Option<String>, record: Option<R>, details: E) -> Self {
        Self {
            uri,
            cid,
            record,
            details,
        }
    }

    /// Returns the resource locator of the viewed record.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the content hash of the viewed record, when provided.
    #[must_use]
    pub fn cid(&self) -> Option<&str> {
        self.cid.as_deref()
    }

    /// Returns the embedded record, or `None` when the server omitted it.
    #[must_use]
    pub const fn record(&self) -> Option<&R> {
        self.record.as_ref()
    }

    /// Returns the server-computed enrichment.
    #[must_use]
    pub const fn details(&self) -> &E {
        &self.details
    }

    /// Splits the view into record and enrichment.
    #[must_use]
    pub fn into_parts(self) -> (Option<R>, E) {
        (self.record, self.details)
    }
}

impl<'de, R, E> Deserialize<'de> for RecordView<R, E>
where
    R: DeserializeOwned,
    E: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;

        let uri = take_string::<D::Error>(&mut fields, URI_FIELD)?
            .ok_or_else(|| <D::Error as de::Error>::missing_field(URI_FIELD))?;
        let cid = take_string::<D::Error>(&mut fields, CID_FIELD)?;
        let record = match fields.remove(RECORD_FIELD) {
            None | Some(Value::Null) => None,
            Some(value) => Some(
                serde_json::from_value::<R>(value)
                    .map_err(|err| {
                        <D::Error as de::Error>::custom(format_args!("{RECORD_FIELD}: {err}"))
                    })?,
            ),
        };
        let details = serde_json::from_value::<E>(Value::Object(fields))
            .map_err(<D::Error as de::Error>::custom)?;

        Ok(Self {
            uri,
            cid,
            record,
            details,
        })
    }
}

fn take_string<E: de::Error>(
    fields: &mut Map<String, Value>,
    name: &'static str,
) -> Result<Option<String>, E> {
    match fields.remove(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => Err(E::custom(format_args!(
            "{name}: expected a string, found {}",
            json_kind(&other)
        ))),
    }
}
