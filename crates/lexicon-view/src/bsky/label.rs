//! Moderation labels (`com.atproto.label.defs`).

use std::sync::OnceLock;

use serde::Deserialize;

use crate::normalize::null_as_default;
use crate::registry::TypeRegistry;
use crate::union::LexiconUnion;

/// Tag of self-applied labels attached to a record.
pub const SELF_LABELS_TYPE: &str = "com.atproto.label.defs#selfLabels";

/// A label applied by a labeling service to an account or record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    /// DID of the labeler that emitted the label.
    pub src: String,
    /// Subject of the label: an account DID or a record URI.
    pub uri: String,
    /// Pins the label to a specific version of the subject record.
    pub cid: Option<String>,
    /// Label value, for example `porn` or `!hide`.
    pub val: String,
    /// `true` when this label negates an earlier one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub neg: bool,
    /// Creation timestamp.
    pub cts: String,
    /// Expiry timestamp, if any.
    pub exp: Option<String>,
    /// Label format version.
    pub ver: Option<u64>,
}

/// Labels an author attached to their own record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelfLabels {
    /// Applied label values.
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<SelfLabel>,
}

/// One self-applied label value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelfLabel {
    /// Label value.
    pub val: String,
}

/// Union accepted in a record's `labels` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordLabels {
    /// Self-applied labels.
    SelfLabels(SelfLabels),
}

impl LexiconUnion for RecordLabels {
    const NAME: &'static str = "record labels";

    fn registry() -> &'static TypeRegistry<Self> {
        static REGISTRY: OnceLock<TypeRegistry<RecordLabels>> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            TypeRegistry::builder()
                .register(SELF_LABELS_TYPE, Self::SelfLabels)
                .build()
        })
    }

    fn tag(&self) -> &'static str {
        match self {
            Self::SelfLabels(_) => SELF_LABELS_TYPE,
        }
    }
}
