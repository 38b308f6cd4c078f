//! Open discriminated unions keyed by `$type`.
//!
//! A lexicon union value is a JSON object whose `$type` field names the
//! concrete member. Servers add members over time, so resolution is open:
//! a recognised tag decodes into the strongly typed member, and an
//! unrecognised one is kept as an [`UnknownVariant`] holding the raw fields.
//!
//! Resolution only fails for structurally invalid input: a value that is not
//! an object, an object without `$type`, a non-string `$type`, or a
//! recognised member whose payload does not fit its type.

use std::fmt;

use serde::de;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{SchemaError, json_kind};
use crate::registry::TypeRegistry;

/// Wire name of the discriminator field.
pub const DISCRIMINATOR: &str = "$type";

/// A closed set of known members for one union position.
///
/// Implementors are usually enums with one variant per member; the registry
/// maps each member's tag to its decoder.
pub trait LexiconUnion: Sized + 'static {
    /// Human-readable name of the union position, used in error messages.
    const NAME: &'static str;

    /// Returns the registry of known members.
    fn registry() -> &'static TypeRegistry<Self>;

    /// Returns the discriminator tag of a known member.
    fn tag(&self) -> &'static str;
}

/// A resolved union value.
#[derive(Debug, Clone, PartialEq)]
pub enum Union<T> {
    /// The tag was registered and the payload decoded into its member type.
    Known(T),
    /// The tag is not registered; the payload is kept verbatim.
    Unknown(UnknownVariant),
}

/// Fallback for a union member whose tag is not registered.
///
/// Holds the literal tag and the remaining fields exactly as received, so
/// nothing from a newer server is lost, merely left untyped.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownVariant {
    tag: String,
    fields: Map<String, Value>,
}

impl UnknownVariant {
    /// Returns the unrecognised `$type` value.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the member's fields, excluding `$type`.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Looks up one raw field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Rebuilds the original JSON object, `$type` included.
    #[must_use]
    pub fn into_value(self) -> Value {
        let mut fields = self.fields;
        fields.insert(DISCRIMINATOR.to_owned(), Value::String(self.tag));
        Value::Object(fields)
    }
}

impl<T: LexiconUnion> Union<T> {
    /// Resolves a JSON value against the union's registry.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the value is not an object, has no string
    /// `$type`, or is a recognised member with a malformed payload. An
    /// unrecognised tag is not an error.
    ///
    /// # Example
    ///
    /// ```
    /// use lexicon_view::bsky::EmbedView;
    /// use lexicon_view::Union;
    /// use serde_json::json;
    ///
    /// let value = json!({"$type": "app.bsky.embed.video#view", "cid": "bafy"});
    /// let embed = Union::<EmbedView>::resolve(value).expect("unknown tags resolve");
    ///
    /// assert_eq!(embed.tag(), "app.bsky.embed.video#view");
    /// assert!(embed.known().is_none());
    /// ```
    pub fn resolve(value: Value) -> Result<Self, SchemaError> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(SchemaError::NotAnObject {
                    union: T::NAME,
                    found: json_kind(&other),
                });
            }
        };
        resolve_fields(fields).map_err(|failure| match &failure {
            ResolveFailure::MissingTag => SchemaError::MissingDiscriminator { union: T::NAME },
            ResolveFailure::TagNotString(found) => SchemaError::InvalidDiscriminator {
                union: T::NAME,
                found: *found,
            },
            ResolveFailure::Member { .. } => SchemaError::Structural {
                message: format!("{} union: {failure}", T::NAME),
            },
        })
    }

    /// Returns the member's tag, known or not.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Known(member) => member.tag(),
            Self::Unknown(unknown) => unknown.tag(),
        }
    }
}

impl<T> Union<T> {
    /// Returns the typed member, if the tag was recognised.
    #[must_use]
    pub const fn known(&self) -> Option<&T> {
        match self {
            Self::Known(member) => Some(member),
            Self::Unknown(_) => None,
        }
    }

    /// Returns the raw fallback, if the tag was not recognised.
    #[must_use]
    pub const fn unknown(&self) -> Option<&UnknownVariant> {
        match self {
            Self::Known(_) => None,
            Self::Unknown(unknown) => Some(unknown),
        }
    }

    /// Consumes the union and returns the typed member, if any.
    #[must_use]
    pub fn into_known(self) -> Option<T> {
        match self {
            Self::Known(member) => Some(member),
            Self::Unknown(_) => None,
        }
    }

    /// Returns `true` when the tag was recognised.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl<'de, T: LexiconUnion> Deserialize<'de> for Union<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        resolve_fields(fields)
            .map_err(|failure| de::Error::custom(format_args!("{} union: {failure}", T::NAME)))
    }
}

enum ResolveFailure {
    MissingTag,
    TagNotString(&'static str),
    Member {
        tag: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for ResolveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTag => write!(f, "missing `{DISCRIMINATOR}` discriminator"),
            Self::TagNotString(found) => {
                write!(f, "`{DISCRIMINATOR}` discriminator must be a string, found {found}")
            }
            Self::Member { tag, source } => write!(f, "invalid `{tag}` member: {source}"),
        }
    }
}

fn resolve_fields<T: LexiconUnion>(
    mut fields: Map<String, Value>,
) -> Result<Union<T>, ResolveFailure> {
    let tag = match fields.remove(DISCRIMINATOR) {
        Some(Value::String(tag)) => tag,
        Some(other) => return Err(ResolveFailure::TagNotString(json_kind(&other))),
        None => return Err(ResolveFailure::MissingTag),
    };

    let Some(decoder) = T::registry().lookup(&tag) else {
        debug!(union = T::NAME, %tag, "keeping unrecognised union member untyped");
        return Ok(Union::Unknown(UnknownVariant { tag, fields }));
    };

    decoder
        .decode(fields)
        .map(Union::Known)
        .map_err(|source| ResolveFailure::Member { tag, source })
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Mention {
        did: String,
    }

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Link {
        uri: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Feature {
        Mention(Mention),
        Link(Link),
    }

    impl LexiconUnion for Feature {
        const NAME: &'static str = "test feature";

        fn registry() -> &'static TypeRegistry<Self> {
            static REGISTRY: OnceLock<TypeRegistry<Feature>> = OnceLock::new();
            REGISTRY.get_or_init(|| {
                TypeRegistry::builder()
                    .register("test#mention", Self::Mention)
                    .register("test#link", Self::Link)
                    .build()
            })
        }

        fn tag(&self) -> &'static str {
            match self {
                Self::Mention(_) => "test#mention",
                Self::Link(_) => "test#link",
            }
        }
    }

    #[derive(Debug, Deserialize)]
    struct Holder {
        features: Vec<Union<Feature>>,
    }

    #[test]
    fn resolves_registered_member() {
        let union = Union::<Feature>::resolve(json!({"$type": "test#mention", "did": "did:plc:a"}))
            .expect("known member");

        assert_eq!(
            union,
            Union::Known(Feature::Mention(Mention {
                did: "did:plc:a".to_owned()
            }))
        );
        assert_eq!(union.tag(), "test#mention");
    }

    #[test]
    fn keeps_unregistered_member_verbatim() {
        let raw = json!({"$type": "test#hashtag", "tag": "rust", "weight": 3});
        let union = Union::<Feature>::resolve(raw.clone()).expect("unknown member");

        let unknown = union.unknown().expect("fallback variant");
        assert_eq!(unknown.tag(), "test#hashtag");
        assert_eq!(unknown.field("tag"), Some(&json!("rust")));
        assert!(unknown.field(DISCRIMINATOR).is_none());
        assert_eq!(unknown.clone().into_value(), raw);
    }

    #[rstest]
    #[case::missing_tag(json!({"did": "did:plc:a"}), SchemaError::MissingDiscriminator { union: "test feature" })]
    #[case::numeric_tag(
        json!({"$type": 7, "did": "did:plc:a"}),
        SchemaError::InvalidDiscriminator { union: "test feature", found: "number" }
    )]
    #[case::not_an_object(json!(["test#link"]), SchemaError::NotAnObject { union: "test feature", found: "array" })]
    fn rejects_structurally_invalid_members(#[case] value: Value, #[case] expected: SchemaError) {
        assert_eq!(Union::<Feature>::resolve(value), Err(expected));
    }

    #[test]
    fn malformed_known_member_is_structural() {
        let err = Union::<Feature>::resolve(json!({"$type": "test#link", "href": "x"}))
            .expect_err("uri is mandatory");

        assert!(err.is_structural());
        assert!(err.to_string().contains("invalid `test#link` member"));
    }

    #[test]
    fn nested_unions_deserialize_inside_structs() {
        let holder: Holder = serde_json::from_value(json!({
            "features": [
                {"$type": "test#link", "uri": "https://example.test", "extra": true},
                {"$type": "test#future", "payload": {"a": 1}}
            ]
        }))
        .expect("mixed members");

        let tags: Vec<_> = holder.features.iter().map(Union::tag).collect();
        assert_eq!(tags, ["test#link", "test#future"]);
        assert!(holder.features.first().is_some_and(Union::is_known));
    }

    #[test]
    fn nested_union_errors_name_the_union() {
        let err = serde_json::from_value::<Holder>(json!({"features": [{"uri": "x"}]}))
            .expect_err("missing tag");
        assert!(
            err.to_string()
                .contains("test feature union: missing `$type` discriminator"),
            "unexpected message: {err}"
        );
    }
}
