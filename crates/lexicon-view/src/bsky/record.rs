//! The union of record types that views embed under `record`.

use std::sync::OnceLock;

use crate::bsky::actor::{PROFILE_TYPE, ProfileRecord, STATUS_TYPE, StatusRecord};
use crate::bsky::feed::{GENERATOR_TYPE, GeneratorRecord};
use crate::bsky::graph::{LIST_TYPE, ListRecord, STARTER_PACK_TYPE, StarterPackRecord};
use crate::registry::TypeRegistry;
use crate::union::LexiconUnion;

/// Known record types.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// `app.bsky.graph.starterpack`
    StarterPack(StarterPackRecord),
    /// `app.bsky.graph.list`
    List(ListRecord),
    /// `app.bsky.feed.generator`
    FeedGenerator(GeneratorRecord),
    /// `app.bsky.actor.profile`
    Profile(ProfileRecord),
    /// `app.bsky.actor.status`
    Status(StatusRecord),
}

impl LexiconUnion for Record {
    const NAME: &'static str = "record";

    fn registry() -> &'static TypeRegistry<Self> {
        static REGISTRY: OnceLock<TypeRegistry<Record>> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            TypeRegistry::builder()
                .register(STARTER_PACK_TYPE, Self::StarterPack)
                .register(LIST_TYPE, Self::List)
                .register(GENERATOR_TYPE, Self::FeedGenerator)
                .register(PROFILE_TYPE, Self::Profile)
                .register(STATUS_TYPE, Self::Status)
                .build()
        })
    }

    fn tag(&self) -> &'static str {
        match self {
            Self::StarterPack(_) => STARTER_PACK_TYPE,
            Self::List(_) => LIST_TYPE,
            Self::FeedGenerator(_) => GENERATOR_TYPE,
            Self::Profile(_) => PROFILE_TYPE,
            Self::Status(_) => STATUS_TYPE,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::union::Union;

    #[test]
    fn registry_covers_every_member() {
        assert_eq!(
            Record::registry().tags().collect::<Vec<_>>(),
            [
                PROFILE_TYPE,
                STATUS_TYPE,
                GENERATOR_TYPE,
                LIST_TYPE,
                STARTER_PACK_TYPE
            ]
        );
    }

    #[rstest]
    #[case::list(json!({
        "$type": LIST_TYPE,
        "purpose": "app.bsky.graph.defs#curatelist",
        "name": "Friends",
        "createdAt": "2024-01-01T00:00:00.000Z"
    }), LIST_TYPE)]
    #[case::generator(json!({
        "$type": GENERATOR_TYPE,
        "did": "did:web:feeds.example.test",
        "displayName": "Rust",
        "createdAt": "2024-01-01T00:00:00.000Z"
    }), GENERATOR_TYPE)]
    #[case::profile(json!({"$type": PROFILE_TYPE, "displayName": "Alice"}), PROFILE_TYPE)]
    fn resolves_each_member(#[case] value: Value, #[case] expected: &str) {
        let record = Union::<Record>::resolve(value).expect("known record");
        assert!(record.is_known());
        assert_eq!(record.tag(), expected);
    }

    #[test]
    fn recognised_member_missing_required_field_is_fatal() {
        let err = Union::<Record>::resolve(json!({
            "$type": STARTER_PACK_TYPE,
            "list": "at://did:plc:abc/app.bsky.graph.list/3k",
            "createdAt": "2024-01-01T00:00:00.000Z"
        }))
        .expect_err("name is required");

        assert!(err.is_structural());
        assert!(err.to_string().contains("missing field `name`"), "{err}");
    }
}
