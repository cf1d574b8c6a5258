//! Story list values: ordered sets of items drawn from named origins.
//!
//! A list type declaration in a story ("origin") maps item names to
//! integer values. A list *value* is an ordered set of `(item, value)`
//! entries plus references to the origins its items may come from, which
//! is what makes inversion, `all`-selection, and integer promotion
//! possible at runtime.
//!
//! All operations return new lists; a list value is never mutated once
//! shared, so lists can be held by many story states at once. The entry
//! payload is a persistent map with structural sharing.

use std::fmt;
use std::sync::Arc;

use im::OrdMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One list item: an `(origin name, item name)` pair.
///
/// The integer value associated with an item is stored alongside it in
/// the [`StoryList`] entry map, not in the item itself, because the same
/// item always carries its declared value but entry maps are what the
/// operator tables traffic in.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ListItem {
    origin: Arc<str>,
    name: Arc<str>,
}

impl ListItem {
    /// Creates an item belonging to the named origin.
    #[must_use]
    pub fn new(origin: &str, name: &str) -> Self {
        Self {
            origin: origin.into(),
            name: name.into(),
        }
    }

    /// The name of the origin this item was declared in.
    #[must_use]
    pub fn origin_name(&self) -> &str {
        &self.origin
    }

    /// The item's own name within its origin.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fully qualified `origin.item` form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.origin, self.name)
    }
}

impl fmt::Debug for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.origin, self.name)
    }
}

/// A named list type declaration: the full range of items a list's
/// entries may be drawn from, each with its declared integer value.
///
/// Origins are story-wide and shared by reference; lists refer to them
/// but never own or modify them.
#[derive(Clone, Debug)]
pub struct ListOrigin {
    name: Arc<str>,
    items: OrdMap<Arc<str>, i64>,
}

impl ListOrigin {
    /// Creates an empty origin with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            items: OrdMap::new(),
        }
    }

    /// Adds a declared item; builder-style.
    #[must_use]
    pub fn with_item(mut self, item_name: &str, value: i64) -> Self {
        self.items.insert(item_name.into(), value);
        self
    }

    /// The origin's declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared value of the named item, if it exists.
    #[must_use]
    pub fn value_of(&self, item_name: &str) -> Option<i64> {
        self.items.get(item_name).copied()
    }

    /// Finds the item whose declared value equals `value`.
    ///
    /// Ties are broken by item name order; origins normally declare
    /// distinct values so ties do not arise in practice.
    #[must_use]
    pub fn item_with_value(&self, value: i64) -> Option<ListItem> {
        self.items
            .iter()
            .find(|(_, v)| **v == value)
            .map(|(name, _)| ListItem {
                origin: self.name.clone(),
                name: name.clone(),
            })
    }

    /// Iterates over `(item name, declared value)` pairs.
    pub fn items(&self) -> impl Iterator<Item = (&Arc<str>, &i64)> {
        self.items.iter()
    }
}

/// An ordered set of `(item, value)` entries with origin provenance.
#[derive(Clone, Default)]
pub struct StoryList {
    entries: OrdMap<ListItem, i64>,
    origins: Vec<Arc<ListOrigin>>,
}

impl StoryList {
    /// Creates an empty list with no known origins.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list typed by the given origin.
    ///
    /// An empty-but-typed list is what a story variable declared with a
    /// list type but no initial items holds; the origin keeps `inverse`
    /// and `all` meaningful.
    #[must_use]
    pub fn from_origin(origin: Arc<ListOrigin>) -> Self {
        Self {
            entries: OrdMap::new(),
            origins: vec![origin],
        }
    }

    /// Creates a single-entry list, keeping a reference to the item's
    /// origin.
    #[must_use]
    pub fn singleton(item: ListItem, value: i64, origin: Arc<ListOrigin>) -> Self {
        let mut list = Self::from_origin(origin);
        list.entries.insert(item, value);
        list
    }

    /// Adds an entry to this (locally owned, still-building) list.
    pub fn add(&mut self, item: ListItem, value: i64) {
        self.entries.insert(item, value);
    }

    /// Records an origin reference, deduplicating by name.
    pub fn add_origin(&mut self, origin: Arc<ListOrigin>) {
        if !self.origins.iter().any(|o| o.name() == origin.name()) {
            self.origins.push(origin);
        }
    }

    /// Iterates over `(item, value)` entries in item order.
    pub fn iter(&self) -> impl Iterator<Item = (&ListItem, &i64)> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The origins this list's items may be drawn from.
    #[must_use]
    pub fn origins(&self) -> &[Arc<ListOrigin>] {
        &self.origins
    }

    /// The entry with the maximum value, if any.
    #[must_use]
    pub fn max_item(&self) -> Option<(&ListItem, i64)> {
        self.entries
            .iter()
            .max_by_key(|(_, v)| **v)
            .map(|(item, v)| (item, *v))
    }

    /// The entry with the minimum value, if any.
    #[must_use]
    pub fn min_item(&self) -> Option<(&ListItem, i64)> {
        self.entries
            .iter()
            .min_by_key(|(_, v)| **v)
            .map(|(item, v)| (item, *v))
    }

    /// The origin containing the maximum-valued entry.
    #[must_use]
    pub fn origin_of_max_item(&self) -> Option<Arc<ListOrigin>> {
        let (item, _) = self.max_item()?;
        self.origins
            .iter()
            .find(|o| o.name() == item.origin_name())
            .cloned()
    }

    /// Set union. Entries from `other` win on (impossible in practice)
    /// value conflicts; origins are merged.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (item, value) in other.iter() {
            result.entries.insert(item.clone(), *value);
        }
        for origin in other.origins() {
            result.add_origin(origin.clone());
        }
        result
    }

    /// Set difference: this list without the entries of `other`.
    #[must_use]
    pub fn without(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (item, _) in other.iter() {
            result.entries.remove(item);
        }
        result
    }

    /// Set intersection, keeping this list's origins.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|(item, _)| other.entries.contains_key(item))
            .map(|(item, value)| (item.clone(), *value))
            .collect();
        Self {
            entries,
            origins: self.origins.clone(),
        }
    }

    /// Returns true if every entry of `other` is present here.
    ///
    /// An empty list neither contains nor is contained; both sides must
    /// be non-empty for containment to hold.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        if other.is_empty() || self.is_empty() {
            return false;
        }
        other.iter().all(|(item, _)| self.entries.contains_key(item))
    }

    /// Value-range comparison: all of this list sits above all of
    /// `other`.
    #[must_use]
    pub fn greater_than(&self, other: &Self) -> bool {
        if self.is_empty() {
            return false;
        }
        if other.is_empty() {
            return true;
        }
        self.min_value() > other.max_value()
    }

    /// Value-range comparison: both bounds at or above `other`'s.
    #[must_use]
    pub fn greater_than_or_equals(&self, other: &Self) -> bool {
        if self.is_empty() {
            return false;
        }
        if other.is_empty() {
            return true;
        }
        self.min_value() >= other.min_value() && self.max_value() >= other.max_value()
    }

    /// Value-range comparison: all of this list sits below all of
    /// `other`.
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        if other.is_empty() {
            return false;
        }
        if self.is_empty() {
            return true;
        }
        self.max_value() < other.min_value()
    }

    /// Value-range comparison: both bounds at or below `other`'s.
    #[must_use]
    pub fn less_than_or_equals(&self, other: &Self) -> bool {
        if other.is_empty() {
            return false;
        }
        if self.is_empty() {
            return true;
        }
        self.max_value() <= other.max_value() && self.min_value() <= other.min_value()
    }

    /// Every item declared by every known origin, with declared values.
    #[must_use]
    pub fn all(&self) -> Self {
        let mut result = Self {
            entries: OrdMap::new(),
            origins: self.origins.clone(),
        };
        for origin in &self.origins {
            for (name, value) in origin.items() {
                result.entries.insert(
                    ListItem {
                        origin: origin.name.clone(),
                        name: name.clone(),
                    },
                    *value,
                );
            }
        }
        result
    }

    /// The complement within the known origins: every declared item not
    /// present in this list.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut result = self.all();
        for (item, _) in self.iter() {
            result.entries.remove(item);
        }
        result
    }

    /// Singleton list holding the minimum entry, or an empty list.
    #[must_use]
    pub fn min_as_list(&self) -> Self {
        let mut result = Self {
            entries: OrdMap::new(),
            origins: self.origins.clone(),
        };
        if let Some((item, value)) = self.min_item() {
            result.entries.insert(item.clone(), value);
        }
        result
    }

    /// Singleton list holding the maximum entry, or an empty list.
    #[must_use]
    pub fn max_as_list(&self) -> Self {
        let mut result = Self {
            entries: OrdMap::new(),
            origins: self.origins.clone(),
        };
        if let Some((item, value)) = self.max_item() {
            result.entries.insert(item.clone(), value);
        }
        result
    }

    fn min_value(&self) -> i64 {
        self.min_item().map_or(0, |(_, v)| v)
    }

    fn max_value(&self) -> i64 {
        self.max_item().map_or(0, |(_, v)| v)
    }
}

// Equality is over entries only; origin references are provenance, not
// part of the value.
impl PartialEq for StoryList {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for StoryList {}

impl fmt::Debug for StoryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (item, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item:?}={value}")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for StoryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Items print in value order, not key order
        let mut ordered: Vec<_> = self.entries.iter().collect();
        ordered.sort_by(|(a_item, a_value), (b_item, b_value)| {
            a_value.cmp(b_value).then_with(|| a_item.cmp(b_item))
        });
        for (i, (item, _)) in ordered.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item.name())?;
        }
        Ok(())
    }
}
