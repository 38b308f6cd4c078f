//! Content-addressed blob references.
//!
//! Records point at binary assets (avatars, banners, thumbnails) through a
//! blob reference rather than embedding them. This layer only records the
//! pointer; it never fetches or caches the asset.

use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Discriminator value carried by typed blob references.
pub const BLOB_TYPE: &str = "blob";

/// Immutable pointer to a binary asset.
///
/// Two wire shapes decode into this type:
///
/// - typed: `{"$type": "blob", "ref": {"$link": "<cid>"}, "mimeType": "...", "size": 123}`
/// - legacy: `{"cid": "<cid>", "mimeType": "..."}` (no size)
///
/// # Example
///
/// ```
/// use lexicon_view::BlobRef;
///
/// let json = r#"{
///     "$type": "blob",
///     "ref": {"$link": "bafkreihd5pcasfcqjp5wiqv6brdm5z3tvk5bmjpamgmlwpyhgbxfv3upt4"},
///     "mimeType": "image/jpeg",
///     "size": 84211
/// }"#;
/// let blob: BlobRef = serde_json::from_str(json).expect("typed blob");
///
/// assert_eq!(blob.mime_type(), "image/jpeg");
/// assert_eq!(blob.size(), Some(84211));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobRef {
    link: String,
    mime_type: String,
    size: Option<u64>,
}

impl BlobRef {
    /// Builds a typed blob reference.
    #[must_use]
    pub fn new(link: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            link: link.into(),
            mime_type: mime_type.into(),
            size: Some(size),
        }
    }

    /// Returns the content identifier of the asset.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Returns the declared MIME type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the size in bytes; legacy references carry none.
    #[must_use]
    pub const fn size(&self) -> Option<u64> {
        self.size
    }

    /// Returns `true` for references in the legacy untyped shape.
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        self.size.is_none()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBlob {
    Typed(TypedBlob),
    Legacy(LegacyBlob),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypedBlob {
    #[serde(rename = "$type")]
    kind: String,
    #[serde(rename = "ref")]
    link: Link,
    mime_type: String,
    size: u64,
}

#[derive(Deserialize)]
struct Link {
    #[serde(rename = "$link")]
    link: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyBlob {
    cid: String,
    mime_type: String,
}

impl<'de> Deserialize<'de> for BlobRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawBlob::deserialize(deserializer)? {
            RawBlob::Typed(typed) => {
                if typed.kind != BLOB_TYPE {
                    return Err(de::Error::custom(format_args!(
                        "expected `$type` \"{BLOB_TYPE}\", found \"{}\"",
                        typed.kind
                    )));
                }
                Ok(Self {
                    link: typed.link.link,
                    mime_type: typed.mime_type,
                    size: Some(typed.size),
                })
            }
            RawBlob::Legacy(legacy) => Ok(Self {
                link: legacy.cid,
                mime_type: legacy.mime_type,
                size: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    const CID: &str = "bafkreihd5pcasfcqjp5wiqv6brdm5z3tvk5bmjpamgmlwpyhgbxfv3upt4";

    #[test]
    fn decodes_typed_reference() {
        let blob: BlobRef = serde_json::from_value(json!({
            "$type": "blob",
            "ref": {"$link": CID},
            "mimeType": "image/png",
            "size": 1024
        }))
        .expect("typed blob");

        assert_eq!(blob, BlobRef::new(CID, "image/png", 1024));
        assert!(!blob.is_legacy());
    }

    #[test]
    fn decodes_legacy_reference() {
        let blob: BlobRef = serde_json::from_value(json!({"cid": CID, "mimeType": "image/jpeg"}))
            .expect("legacy blob");

        assert_eq!(blob.link(), CID);
        assert_eq!(blob.mime_type(), "image/jpeg");
        assert_eq!(blob.size(), None);
        assert!(blob.is_legacy());
    }

    #[rstest]
    #[case::wrong_type(json!({"$type": "image", "ref": {"$link": CID}, "mimeType": "image/png", "size": 1}))]
    #[case::missing_mime(json!({"$type": "blob", "ref": {"$link": CID}, "size": 1}))]
    #[case::link_not_object(json!({"$type": "blob", "ref": CID, "mimeType": "image/png", "size": 1}))]
    #[case::not_an_object(json!(CID))]
    fn rejects_malformed_references(#[case] value: serde_json::Value) {
        assert!(serde_json::from_value::<BlobRef>(value).is_err());
    }
}
