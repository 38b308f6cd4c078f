//! Embeds (`app.bsky.embed.*`): the record-side shapes authors write and the
//! hydrated view shapes servers return.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::blob::BlobRef;
use crate::normalize::{blank_as_none, null_as_default};
use crate::registry::TypeRegistry;
use crate::union::LexiconUnion;

/// Tag of an external link embed in a record.
pub const EXTERNAL_TYPE: &str = "app.bsky.embed.external";
/// Tag of a hydrated external link embed.
pub const EXTERNAL_VIEW_TYPE: &str = "app.bsky.embed.external#view";
/// Tag of hydrated image embeds.
pub const IMAGES_VIEW_TYPE: &str = "app.bsky.embed.images#view";

/// Known embed shapes inside records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedRecord {
    /// Link card as written by the author.
    External(External),
}

/// Link card as written by the author.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct External {
    /// Card content.
    pub external: ExternalLink,
}

/// Link card content in a record; the thumbnail is an uploaded blob.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExternalLink {
    /// Target URI.
    pub uri: String,
    /// Card title.
    #[serde(default)]
    pub title: String,
    /// Card description.
    #[serde(default)]
    pub description: String,
    /// Thumbnail blob.
    pub thumb: Option<BlobRef>,
}

impl LexiconUnion for EmbedRecord {
    const NAME: &'static str = "record embed";

    fn registry() -> &'static TypeRegistry<Self> {
        static REGISTRY: OnceLock<TypeRegistry<EmbedRecord>> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            TypeRegistry::builder()
                .register(EXTERNAL_TYPE, Self::External)
                .build()
        })
    }

    fn tag(&self) -> &'static str {
        match self {
            Self::External(_) => EXTERNAL_TYPE,
        }
    }
}

/// Known hydrated embed views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedView {
    /// Hydrated link card.
    External(ExternalView),
    /// Hydrated images.
    Images(ImagesView),
}

/// Hydrated link card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExternalView {
    /// Card content.
    pub external: ExternalViewLink,
}

/// Hydrated link card content; the thumbnail is a CDN URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExternalViewLink {
    /// Target URI.
    pub uri: String,
    /// Card title.
    #[serde(default)]
    pub title: String,
    /// Card description.
    #[serde(default)]
    pub description: String,
    /// Thumbnail URL.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub thumb: Option<String>,
}

/// Hydrated image embed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImagesView {
    /// Images in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ImageView>,
}

/// One hydrated image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageView {
    /// Thumbnail URL.
    pub thumb: String,
    /// Full-size URL.
    pub fullsize: String,
    /// Alt text; empty when the author gave none.
    #[serde(default)]
    pub alt: String,
    /// Declared aspect ratio.
    pub aspect_ratio: Option<AspectRatio>,
}

/// Width-to-height ratio of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AspectRatio {
    /// Relative width.
    pub width: u64,
    /// Relative height.
    pub height: u64,
}

impl LexiconUnion for EmbedView {
    const NAME: &'static str = "embed view";

    fn registry() -> &'static TypeRegistry<Self> {
        static REGISTRY: OnceLock<TypeRegistry<EmbedView>> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            TypeRegistry::builder()
                .register(EXTERNAL_VIEW_TYPE, Self::External)
                .register(IMAGES_VIEW_TYPE, Self::Images)
                .build()
        })
    }

    fn tag(&self) -> &'static str {
        match self {
            Self::External(_) => EXTERNAL_VIEW_TYPE,
            Self::Images(_) => IMAGES_VIEW_TYPE,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::union::Union;

    #[test]
    fn resolves_external_view() {
        let embed = Union::<EmbedView>::resolve(json!({
            "$type": EXTERNAL_VIEW_TYPE,
            "external": {
                "uri": "https://stream.example.test/live",
                "title": "Live now",
                "description": "",
                "thumb": ""
            }
        }))
        .expect("external view");

        let Some(EmbedView::External(view)) = embed.known() else {
            panic!("expected external view, got {embed:?}");
        };
        assert_eq!(view.external.title, "Live now");
        assert_eq!(view.external.thumb, None);
    }

    #[test]
    fn resolves_record_side_external_with_blob_thumb() {
        let embed = Union::<EmbedRecord>::resolve(json!({
            "$type": EXTERNAL_TYPE,
            "external": {
                "uri": "https://stream.example.test/live",
                "title": "Live now",
                "thumb": {
                    "$type": "blob",
                    "ref": {"$link": "bafkreiexample"},
                    "mimeType": "image/jpeg",
                    "size": 5120
                }
            }
        }))
        .expect("external record embed");

        let Some(EmbedRecord::External(external)) = embed.known() else {
            panic!("expected external embed, got {embed:?}");
        };
        assert_eq!(
            external.external.thumb,
            Some(BlobRef::new("bafkreiexample", "image/jpeg", 5120))
        );
        assert_eq!(external.external.description, "");
    }

    #[rstest]
    #[case::video("app.bsky.embed.video#view")]
    #[case::record("app.bsky.embed.record#view")]
    fn unregistered_views_fall_back(#[case] tag: &str) {
        let embed = Union::<EmbedView>::resolve(json!({"$type": tag, "cid": "bafy"}))
            .expect("unknown view");
        assert_eq!(embed.unknown().map(|unknown| unknown.tag()), Some(tag));
    }
}
