//! Suggestion ranker
//!
//! Suggestions search the whole catalog, ignoring the active category filter:
//! the user may be looking for something in another category. There is no
//! relevance scoring; matches keep their catalog order and the list is cut at
//! the configured limit.

use super::filter::ItemMatchExt;
use super::query::SearchQuery;
use crate::catalog::{Catalog, Item, ItemId};
use serde::Serialize;

/// Default number of entries offered in the dropdown
pub const MAX_SUGGESTIONS: usize = 6;

/// One rendered dropdown entry
///
/// Entries are identified by `position` in the current list, not by the item
/// they point to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionEntry {
    pub position: usize,
    pub item: ItemId,
    pub name: String,
    pub price: String,
}

impl SuggestionEntry {
    fn from_item(position: usize, item: &Item) -> Self {
        Self {
            position,
            item: item.id,
            name: item.name.clone(),
            price: item.price.clone(),
        }
    }
}

/// Compute the suggestion list for a query
///
/// An inactive query yields no suggestions.
#[must_use]
pub fn rank(catalog: &Catalog, query: &SearchQuery, limit: usize) -> Vec<SuggestionEntry> {
    if !query.is_active() {
        return Vec::new();
    }

    catalog
        .items()
        .iter()
        .matching(query)
        .take(limit)
        .enumerate()
        .map(|(position, item)| SuggestionEntry::from_item(position, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{dessert_catalog, sample_catalog};

    #[test]
    fn test_rank_single_match() {
        let catalog = sample_catalog();
        let suggestions = rank(&catalog, &SearchQuery::new("pizza"), MAX_SUGGESTIONS);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "Margherita Pizza");
        assert_eq!(suggestions[0].price, "$14");
        assert_eq!(suggestions[0].position, 0);
    }

    #[test]
    fn test_empty_query_has_no_suggestions() {
        let catalog = sample_catalog();
        assert!(rank(&catalog, &SearchQuery::default(), MAX_SUGGESTIONS).is_empty());
        assert!(rank(&catalog, &SearchQuery::new("  "), MAX_SUGGESTIONS).is_empty());
    }

    #[test]
    fn test_rank_caps_in_catalog_order() {
        let catalog = dessert_catalog();
        let query = SearchQuery::new("cake");
        let all_matches: Vec<ItemId> = catalog
            .items()
            .iter()
            .filter(|item| item.contains("cake"))
            .map(|item| item.id)
            .collect();
        assert!(all_matches.len() > MAX_SUGGESTIONS);

        let suggestions = rank(&catalog, &query, MAX_SUGGESTIONS);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);

        let ids: Vec<ItemId> = suggestions.iter().map(|s| s.item).collect();
        assert_eq!(ids.as_slice(), &all_matches[..MAX_SUGGESTIONS]);

        let positions: Vec<usize> = suggestions.iter().map(|s| s.position).collect();
        assert_eq!(positions, (0..MAX_SUGGESTIONS).collect::<Vec<_>>());
    }

    #[test]
    fn test_custom_limit() {
        let catalog = dessert_catalog();
        assert_eq!(rank(&catalog, &SearchQuery::new("cake"), 2).len(), 2);
    }

    #[test]
    fn test_matches_description() {
        let catalog = sample_catalog();
        let suggestions = rank(&catalog, &SearchQuery::new("Croutons"), MAX_SUGGESTIONS);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "Caesar Salad");
    }
}
