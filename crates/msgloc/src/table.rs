//! Message table: an immutable key → entry mapping.
//!
//! The table is built once by whoever owns the message source (code
//! literals, an embedded file, a deserialized document) and then handed to
//! a [`Localizer`](crate::Localizer), which only ever reads from it.
//!
//! # Invariants
//!
//! 1. Keys are matched exactly and case-sensitively; there is no fallback.
//! 2. A [`MessageEntry::Plural`] with no variants is valid and resolves as
//!    if the key were absent.

use std::collections::HashMap;

/// A single message: either one fixed template or an ordered list of
/// plural variants.
///
/// Variant indices carry no built-in meaning; the
/// [`PluralSelector`](crate::PluralSelector) decides what index `n` is for.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum MessageEntry {
    /// A template used regardless of quantity.
    Fixed(String),
    /// Templates indexed `0..len`.
    Plural(Vec<String>),
}

impl MessageEntry {
    /// Number of selectable templates (1 for fixed entries).
    #[must_use]
    pub fn variant_count(&self) -> usize {
        match self {
            Self::Fixed(_) => 1,
            Self::Plural(variants) => variants.len(),
        }
    }
}

impl From<&str> for MessageEntry {
    fn from(text: &str) -> Self {
        Self::Fixed(text.to_owned())
    }
}

impl From<String> for MessageEntry {
    fn from(text: String) -> Self {
        Self::Fixed(text)
    }
}

impl From<Vec<String>> for MessageEntry {
    fn from(variants: Vec<String>) -> Self {
        Self::Plural(variants)
    }
}

impl From<Vec<&str>> for MessageEntry {
    fn from(variants: Vec<&str>) -> Self {
        Self::Plural(variants.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for MessageEntry {
    fn from(variants: [&str; N]) -> Self {
        Self::Plural(variants.into_iter().map(str::to_owned).collect())
    }
}

/// Messages keyed by caller-defined identifiers.
///
/// # Example
///
/// ```
/// use msgloc::{MessageEntry, MessageTable};
///
/// let mut table = MessageTable::new();
/// table.insert("title", "Basket");
/// table.insert_plural("apples", ["no apples", "one apple", "{0} apples"]);
///
/// assert_eq!(table.get("title"), Some(&MessageEntry::from("Basket")));
/// assert_eq!(table.get("apples").map(MessageEntry::variant_count), Some(3));
/// assert_eq!(table.get("Title"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct MessageTable {
    entries: HashMap<String, MessageEntry>,
}

impl MessageTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fixed message, replacing any previous entry for `key`.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries
            .insert(key.into(), MessageEntry::Fixed(text.into()));
    }

    /// Insert plural variants in index order.
    pub fn insert_plural<I, S>(&mut self, key: impl Into<String>, variants: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variants = variants.into_iter().map(Into::into).collect();
        self.entries
            .insert(key.into(), MessageEntry::Plural(variants));
    }

    /// Insert a prebuilt entry.
    pub fn insert_entry(&mut self, key: impl Into<String>, entry: MessageEntry) {
        self.entries.insert(key.into(), entry);
    }

    /// Look up an entry by exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MessageEntry> {
        self.entries.get(key)
    }

    /// Whether `key` has an entry (empty plural lists included).
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, MessageEntry)> for MessageTable {
    fn from_iter<T: IntoIterator<Item = (K, MessageEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, e)| (k.into(), e)).collect(),
        }
    }
}

impl<K: Into<String>> Extend<(K, MessageEntry)> for MessageTable {
    fn extend<T: IntoIterator<Item = (K, MessageEntry)>>(&mut self, iter: T) {
        self.entries
            .extend(iter.into_iter().map(|(k, e)| (k.into(), e)));
    }
}
