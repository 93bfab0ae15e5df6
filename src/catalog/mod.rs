//! Catalog index
//!
//! The catalog is the fixed, read-only list of searchable items for a session.
//! It is built once from category groups (as rendered on a menu page, or as
//! loaded from a catalog file) and never mutated afterwards.
//!
//! # Data Flow
//!
//! ```text
//! CategoryGroup ─┐
//! CategoryGroup ─┼─► Catalog::build ─► Catalog { categories, items }
//! CategoryGroup ─┘
//! ```
//!
//! Items carry an [`ItemId`], which is their position in the catalog. Frontends
//! use it as a non-owning handle to show, hide, or scroll to the element that
//! displays the item.

pub mod error;
pub mod source;

pub use error::CatalogError;
pub use source::load_groups;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of an item in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ItemId(pub usize);

/// Position of a category in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CategoryId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry of a category group, as it appears in the source
///
/// Every field is optional: a page may render an entry without a description
/// or without a price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySource {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

impl EntrySource {
    /// Create an entry with all three fields set
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            price: Some(price.into()),
        }
    }

    /// Create an entry that only has a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// A group of entries sharing one category key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Category key used by the category filter
    pub key: String,
    /// Human readable title (defaults to the key)
    #[serde(default)]
    pub title: Option<String>,
    /// Entries in display order
    #[serde(default)]
    pub items: Vec<EntrySource>,
}

impl CategoryGroup {
    /// Create a group with the given key and entries
    #[must_use]
    pub fn new(key: impl Into<String>, items: Vec<EntrySource>) -> Self {
        Self {
            key: key.into(),
            title: None,
            items,
        }
    }

    /// Set the display title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A searchable catalog item
///
/// All fields are public for direct access. `name_key` and `description_key`
/// are the lower-cased forms used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: String,
    /// Key of the category this item belongs to
    pub category: String,
    /// Group that contained the item at build time
    pub group: CategoryId,
    pub name_key: String,
    pub description_key: String,
}

impl Item {
    /// Check whether a normalized (trimmed, lower-cased) needle occurs in the
    /// name or the description
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.name_key.contains(needle) || self.description_key.contains(needle)
    }
}

/// A category of the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub key: String,
    pub title: String,
}

/// Immutable list of categories and items
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    items: Vec<Item>,
}

impl Catalog {
    /// Build the catalog from category groups
    ///
    /// Groups are scanned once, in order. Missing descriptions and prices
    /// default to an empty string. Entries with an empty name are unusable
    /// placeholders and are skipped. Every group becomes a category, even if
    /// none of its entries survive.
    #[must_use]
    pub fn build(groups: impl IntoIterator<Item = CategoryGroup>) -> Self {
        let mut categories = Vec::new();
        let mut items = Vec::new();

        for group in groups {
            let category_id = CategoryId(categories.len());

            for entry in group.items {
                let name = entry.name.unwrap_or_default();
                if name.is_empty() {
                    log::warn!(
                        "skipping entry without a name in category '{}'",
                        group.key
                    );
                    continue;
                }

                let description = entry.description.unwrap_or_default();
                let price = entry.price.unwrap_or_default();

                items.push(Item {
                    id: ItemId(items.len()),
                    name_key: name.to_lowercase(),
                    description_key: description.to_lowercase(),
                    name,
                    description,
                    price,
                    category: group.key.clone(),
                    group: category_id,
                });
            }

            let title = group.title.unwrap_or_else(|| group.key.clone());
            categories.push(Category {
                id: category_id,
                key: group.key,
                title,
            });
        }

        log::debug!(
            "built catalog with {} items in {} categories",
            items.len(),
            categories.len()
        );

        Self { categories, items }
    }

    /// All items in catalog order
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// All categories in catalog order
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0)
    }

    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(id.0)
    }

    /// Find a category by its key
    #[must_use]
    pub fn category_by_key(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Items belonging to a category, in catalog order
    pub fn items_in(&self, id: CategoryId) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.group == id)
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
