//! Filter engine
//!
//! Computes which categories and items are visible for a category filter and
//! a query. The category pass always runs first: an item whose category is
//! hidden is never matched against the query.
//!
//! # Iterator Adapters
//!
//! [`ItemMatchExt`] adds query matching to any iterator of `&Item`, which is
//! how both the filter engine and the suggestion ranker select items:
//!
//! ```ignore
//! use menufind::search::filter::ItemMatchExt;
//!
//! let hits: Vec<_> = catalog.items().iter().matching(&query).collect();
//! ```

use super::query::{CategoryFilter, SearchQuery};
use crate::catalog::{Catalog, Item, ItemId};
use serde::Serialize;

/// Result of one filter pass
///
/// `items[i]` is `None` when item `i` sits in a hidden category and was not
/// evaluated; otherwise it tells whether the item matched the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    pub visible_count: usize,
    pub categories: Vec<bool>,
    pub items: Vec<Option<bool>>,
}

impl FilterOutcome {
    /// Whether an item is visible after both passes
    #[must_use]
    pub fn is_item_visible(&self, id: ItemId) -> bool {
        self.items.get(id.0).copied().flatten().unwrap_or(false)
    }

    /// Ids of the visible items, in catalog order
    pub fn visible_items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, visible)| **visible == Some(true))
            .map(|(pos, _)| ItemId(pos))
    }
}

/// Run the category pass and then the text pass over the catalog
#[must_use]
pub fn apply(catalog: &Catalog, category: &CategoryFilter, query: &SearchQuery) -> FilterOutcome {
    let categories: Vec<bool> = catalog
        .categories()
        .iter()
        .map(|c| category.admits(&c.key))
        .collect();

    let mut visible_count = 0;
    let items = catalog
        .items()
        .iter()
        .map(|item| {
            if !categories.get(item.group.0).copied().unwrap_or(false) {
                return None;
            }
            let matches = item_matches(item, query);
            if matches {
                visible_count += 1;
            }
            Some(matches)
        })
        .collect();

    FilterOutcome {
        visible_count,
        categories,
        items,
    }
}

/// An inactive query matches everything
#[must_use]
pub fn item_matches(item: &Item, query: &SearchQuery) -> bool {
    !query.is_active() || item.contains(query.normalized())
}

/// Extension trait for filtering iterators of items by a query
pub trait ItemMatchExt<'a>: Iterator<Item = &'a Item> + Sized {
    /// Keep items whose name or description contains the query
    ///
    /// An inactive query keeps every item.
    fn matching(self, query: &'a SearchQuery) -> impl Iterator<Item = &'a Item> {
        self.filter(move |item| item_matches(item, query))
    }
}

impl<'a, I> ItemMatchExt<'a> for I where I: Iterator<Item = &'a Item> {}
