//! Integration tests for open union resolution through the public API.
//!
//! Besides the bundled Bluesky unions, callers can declare their own union
//! positions with `TypeRegistry` and `LexiconUnion`.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::OnceLock;

use lexicon_view::bsky::{EmbedView, Record};
use lexicon_view::{DISCRIMINATOR, LexiconUnion, SchemaError, TypeRegistry, Union};
use rstest::rstest;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Like {
    subject: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Repost {
    subject: String,
    via_feed: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum Interaction {
    Like(Like),
    Repost(Repost),
}

impl LexiconUnion for Interaction {
    const NAME: &'static str = "interaction";

    fn registry() -> &'static TypeRegistry<Self> {
        static REGISTRY: OnceLock<TypeRegistry<Interaction>> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            TypeRegistry::builder()
                .register("test.interaction#like", Self::Like)
                .register("test.interaction#repost", Self::Repost)
                .build()
        })
    }

    fn tag(&self) -> &'static str {
        match self {
            Self::Like(_) => "test.interaction#like",
            Self::Repost(_) => "test.interaction#repost",
        }
    }
}

#[test]
fn caller_defined_union_resolves_known_members() {
    let union = Union::<Interaction>::resolve(json!({
        "$type": "test.interaction#repost",
        "subject": "at://did:plc:a/app.bsky.feed.post/1",
        "viaFeed": "at://did:plc:b/app.bsky.feed.generator/x",
        "addedLater": [1, 2, 3]
    }))
    .expect("known member with extra field");

    assert_eq!(
        union.known(),
        Some(&Interaction::Repost(Repost {
            subject: "at://did:plc:a/app.bsky.feed.post/1".to_owned(),
            via_feed: Some("at://did:plc:b/app.bsky.feed.generator/x".to_owned()),
        }))
    );
}

#[rstest]
#[case::newer_member(json!({"$type": "test.interaction#quote", "subject": "x", "text": "hi"}))]
#[case::empty_tag(json!({"$type": "", "subject": "x"}))]
#[case::no_other_fields(json!({"$type": "test.interaction#bookmark"}))]
fn unknown_members_round_trip(#[case] raw: Value) {
    let expected = raw.clone();
    let union = Union::<Interaction>::resolve(raw).expect("unknown tags never fail");

    assert!(!union.is_known());
    let unknown = union.unknown().cloned().expect("fallback variant");
    assert_eq!(Some(unknown.tag()), expected.get(DISCRIMINATOR).and_then(Value::as_str));
    assert_eq!(unknown.into_value(), expected);
}

#[rstest]
#[case::null_tag(json!({"$type": null}), "null")]
#[case::object_tag(json!({"$type": {"id": "like"}}), "object")]
#[case::boolean_tag(json!({"$type": true}), "boolean")]
fn non_string_tags_are_rejected(#[case] raw: Value, #[case] found: &'static str) {
    assert_eq!(
        Union::<Interaction>::resolve(raw),
        Err(SchemaError::InvalidDiscriminator {
            union: "interaction",
            found,
        })
    );
}

#[test]
fn bundled_unions_share_the_mechanism() {
    let record = Union::<Record>::resolve(json!({
        "$type": "app.bsky.feed.post",
        "text": "posts are not registered here",
        "createdAt": "2024-01-01T00:00:00.000Z"
    }))
    .expect("unregistered record type");
    assert_eq!(record.tag(), "app.bsky.feed.post");

    let embed = Union::<EmbedView>::resolve(json!({
        "$type": "app.bsky.embed.images#view",
        "images": [{
            "thumb": "https://cdn.example.test/t.jpg",
            "fullsize": "https://cdn.example.test/f.jpg",
            "aspectRatio": {"width": 4, "height": 3}
        }]
    }))
    .expect("images view");
    let Some(EmbedView::Images(images)) = embed.known() else {
        panic!("expected images view, got {embed:?}");
    };
    let image = images.images.first().expect("one image");
    assert_eq!(image.alt, "");
    assert_eq!(image.aspect_ratio.map(|ratio| ratio.width), Some(4));
}

#[test]
fn registries_are_built_once() {
    let first = Interaction::registry();
    let second = Interaction::registry();

    assert!(std::ptr::eq(first, second));
    assert_eq!(first.len(), 2);
    assert!(first.contains("test.interaction#like"));
    assert!(!first.contains("test.interaction#quote"));
}
