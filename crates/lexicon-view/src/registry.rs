//! Discriminator tag to member decoder tables.
//!
//! Each union position owns one [`TypeRegistry`], built once (usually inside a
//! `OnceLock`) and read-only afterwards. Lookups take `&self` only, so a
//! registry can be shared across threads without locking.

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

type DecodeFn<T> = dyn Fn(Map<String, Value>) -> Result<T, serde_json::Error> + Send + Sync;

/// Decoder for one registered union member.
///
/// Wraps the structural decoder of the member type together with the
/// constructor that lifts it into the union type `T`.
pub struct MemberDecoder<T> {
    decode: Box<DecodeFn<T>>,
}

impl<T> MemberDecoder<T> {
    /// Decodes the member's fields (without the discriminator) into `T`.
    ///
    /// Unknown extra fields are ignored by the structural decoder.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when a mandatory field is
    /// missing or has the wrong JSON type.
    pub fn decode(&self, fields: Map<String, Value>) -> Result<T, serde_json::Error> {
        (self.decode)(fields)
    }
}

impl<T> fmt::Debug for MemberDecoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDecoder").finish_non_exhaustive()
    }
}

/// Immutable table mapping discriminator tags to member decoders.
///
/// # Example
///
/// ```
/// use lexicon_view::TypeRegistry;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Mention {
///     did: String,
/// }
///
/// #[derive(Debug, PartialEq)]
/// enum Feature {
///     Mention(Mention),
/// }
///
/// let registry = TypeRegistry::builder()
///     .register("app.bsky.richtext.facet#mention", Feature::Mention)
///     .build();
///
/// assert!(registry.contains("app.bsky.richtext.facet#mention"));
/// assert!(registry.lookup("app.bsky.richtext.facet#link").is_none());
/// ```
pub struct TypeRegistry<T> {
    decoders: HashMap<&'static str, MemberDecoder<T>>,
}

impl<T: 'static> TypeRegistry<T> {
    /// Starts an empty registry.
    #[must_use]
    pub fn builder() -> TypeRegistryBuilder<T> {
        TypeRegistryBuilder {
            decoders: HashMap::new(),
        }
    }
}

impl<T> TypeRegistry<T> {
    /// Finds the decoder registered for `tag`.
    ///
    /// `None` is the normal signal for an unrecognised member, not an error.
    #[must_use]
    pub fn lookup(&self, tag: &str) -> Option<&MemberDecoder<T>> {
        self.decoders.get(tag)
    }

    /// Returns `true` when `tag` is registered.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.decoders.contains_key(tag)
    }

    /// Iterates the registered tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        let mut tags: Vec<_> = self.decoders.keys().copied().collect();
        tags.sort_unstable();
        tags.into_iter()
    }

    /// Number of registered members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Returns `true` when no member is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl<T> fmt::Debug for TypeRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.decoders.keys().collect();
        tags.sort_unstable();
        f.debug_struct("TypeRegistry").field("tags", &tags).finish()
    }
}

/// Builder collecting member registrations before the table is frozen.
pub struct TypeRegistryBuilder<T> {
    decoders: HashMap<&'static str, MemberDecoder<T>>,
}

impl<T: 'static> TypeRegistryBuilder<T> {
    /// Registers member type `M` under `tag`.
    ///
    /// `wrap` lifts the decoded member into the union, typically an enum
    /// variant constructor. Registering the same tag twice keeps the later
    /// registration.
    #[must_use]
    pub fn register<M>(mut self, tag: &'static str, wrap: fn(M) -> T) -> Self
    where
        M: DeserializeOwned + 'static,
    {
        let decode = move |fields: Map<String, Value>| {
            serde_json::from_value::<M>(Value::Object(fields)).map(wrap)
        };
        self.decoders.insert(
            tag,
            MemberDecoder {
                decode: Box::new(decode),
            },
        );
        self
    }

    /// Freezes the registrations.
    #[must_use]
    pub fn build(self) -> TypeRegistry<T> {
        TypeRegistry {
            decoders: self.decoders,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Link {
        uri: String,
    }

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Tag {
        tag: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Feature {
        Link(Link),
        Tag(Tag),
    }

    fn registry() -> TypeRegistry<Feature> {
        TypeRegistry::builder()
            .register("test#link", Feature::Link)
            .register("test#tag", Feature::Tag)
            .build()
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn lookup_finds_registered_member() {
        let registry = registry();
        let decoder = registry.lookup("test#link").expect("registered tag");

        let feature = decoder
            .decode(object(json!({"uri": "https://example.test"})))
            .expect("valid link");
        assert_eq!(
            feature,
            Feature::Link(Link {
                uri: "https://example.test".to_owned()
            })
        );
    }

    #[test]
    fn lookup_misses_unregistered_tag() {
        assert!(registry().lookup("test#mention").is_none());
    }

    #[test]
    fn member_decoder_ignores_extra_fields() {
        let registry = registry();
        let decoder = registry.lookup("test#tag").expect("registered tag");

        let feature = decoder
            .decode(object(json!({"tag": "rust", "addedLater": {"nested": true}})))
            .expect("extra fields tolerated");
        assert_eq!(
            feature,
            Feature::Tag(Tag {
                tag: "rust".to_owned()
            })
        );
    }

    #[test]
    fn member_decoder_reports_missing_fields() {
        let registry = registry();
        let decoder = registry.lookup("test#tag").expect("registered tag");

        let err = decoder
            .decode(object(json!({"label": "rust"})))
            .expect_err("tag is mandatory");
        assert!(err.to_string().contains("missing field `tag`"));
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let registry = TypeRegistry::builder()
            .register("test#entry", Feature::Tag)
            .register("test#entry", Feature::Link)
            .build();

        let decoder = registry.lookup("test#entry").expect("registered tag");
        let feature = decoder
            .decode(object(json!({"uri": "at://x"})))
            .expect("link shape");
        assert!(matches!(feature, Feature::Link(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn tags_are_listed_sorted() {
        let registry = registry();
        let tags: Vec<_> = registry.tags().collect();
        assert_eq!(tags, ["test#link", "test#tag"]);
        assert!(!registry.is_empty());
    }
}
