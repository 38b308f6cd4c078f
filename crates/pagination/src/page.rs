//! Decoded list envelope.

use std::slice;

use url::Url;

use crate::cursor::{CURSOR_FIELD, Cursor};

/// One page of a paginated listing.
///
/// Items keep the order they had on the wire; the server's ordering (for
/// example reverse-chronological) is significant and never altered here.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    cursor: Option<Cursor>,
}

impl<T> Page<T> {
    /// Builds a page from decoded items and an optional continuation token.
    #[must_use]
    pub const fn new(items: Vec<T>, cursor: Option<Cursor>) -> Self {
        Self { items, cursor }
    }

    /// Returns the items in wire order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the continuation token, if the listing continues.
    #[must_use]
    pub const fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    /// Returns `true` when the server handed back a continuation token.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.cursor.is_some()
    }

    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the items in wire order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Splits the page into its items and cursor.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Option<Cursor>) {
        (self.items, self.cursor)
    }

    /// Builds the request URL for the following page.
    ///
    /// Any `cursor` query parameter already present on `endpoint` is replaced
    /// by this page's token; other query pairs are preserved in order. Returns
    /// `None` once the listing is exhausted.
    ///
    /// # Example
    ///
    /// ```
    /// use pagination::{Cursor, Page};
    /// use url::Url;
    ///
    /// let endpoint = Url::parse(
    ///     "https://public.api.bsky.app/xrpc/app.bsky.graph.getActorStarterPacks?actor=alice.test&limit=40",
    /// )
    /// .expect("valid url");
    /// let page = Page::new(vec![1, 2], Some(Cursor::new("3lep6hpx7qq2c")));
    ///
    /// let next = page.next_request(&endpoint).expect("listing continues");
    /// assert_eq!(next.query(), Some("actor=alice.test&limit=40&cursor=3lep6hpx7qq2c"));
    /// ```
    #[must_use]
    pub fn next_request(&self, endpoint: &Url) -> Option<Url> {
        let cursor = self.cursor.as_ref()?;
        let retained: Vec<(String, String)> = endpoint
            .query_pairs()
            .filter(|(key, _)| key != CURSOR_FIELD)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut next = endpoint.clone();
        next.query_pairs_mut()
            .clear()
            .extend_pairs(retained)
            .append_pair(CURSOR_FIELD, cursor.as_str());
        Some(next)
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
