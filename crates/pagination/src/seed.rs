//! Streaming envelope decoder parameterised by the items key.

use std::fmt;
use std::marker::PhantomData;

use serde::Deserialize;
use serde::de::{self, DeserializeSeed, IgnoredAny, MapAccess, Visitor};

use crate::cursor::{CURSOR_FIELD, Cursor};
use crate::page::Page;

/// Decodes `{ "<items_key>": [...], "cursor"?: "..." }` into a [`Page`].
///
/// Each endpoint names its item array differently (`starterPacks`, `feeds`,
/// `lists`), so the key is supplied at runtime. Unrecognised envelope keys are
/// skipped. The items key is mandatory; `cursor` may be absent or `null`.
/// A single malformed item fails the whole envelope.
pub struct PageSeed<T> {
    items_key: &'static str,
    marker: PhantomData<fn() -> T>,
}

impl<T> PageSeed<T> {
    /// Creates a seed that reads items from `items_key`.
    #[must_use]
    pub const fn new(items_key: &'static str) -> Self {
        Self {
            items_key,
            marker: PhantomData,
        }
    }

    /// Returns the envelope key holding the items.
    #[must_use]
    pub const fn items_key(&self) -> &'static str {
        self.items_key
    }
}

impl<'de, T> DeserializeSeed<'de> for PageSeed<T>
where
    T: Deserialize<'de>,
{
    type Value = Page<T>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_map(PageVisitor {
            items_key: self.items_key,
            marker: PhantomData,
        })
    }
}

struct PageVisitor<T> {
    items_key: &'static str,
    marker: PhantomData<fn() -> T>,
}

impl<'de, T> Visitor<'de> for PageVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = Page<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a list envelope with a `{}` array", self.items_key)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut items: Option<Vec<T>> = None;
        let mut cursor: Option<Cursor> = None;
        let mut saw_cursor = false;

        while let Some(key) = map.next_key::<String>()? {
            if key == self.items_key {
                if items.is_some() {
                    return Err(de::Error::duplicate_field(self.items_key));
                }
                items = Some(map.next_value()?);
            } else if key == CURSOR_FIELD {
                if saw_cursor {
                    return Err(de::Error::duplicate_field(CURSOR_FIELD));
                }
                saw_cursor = true;
                cursor = map.next_value()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        let decoded =
            items.ok_or_else(|| <A::Error as de::Error>::missing_field(self.items_key))?;
        Ok(Page::new(decoded, cursor))
    }
}
