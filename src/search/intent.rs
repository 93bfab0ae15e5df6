//! Side-effect intents
//!
//! State transitions never touch a rendering surface. They return a list of
//! [`Intent`]s which the host applies in order (see
//! [`PageSurface`](crate::ui::PageSurface)). This keeps every transition
//! testable without a live frontend.

use super::filter::FilterOutcome;
use super::suggest::SuggestionEntry;
use crate::catalog::{CategoryId, ItemId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a scrolled-to element ends up in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    Start,
    #[default]
    Center,
    End,
    Nearest,
}

impl ScrollBlock {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
            Self::Nearest => "nearest",
        }
    }
}

impl fmt::Display for ScrollBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A side effect requested by a state transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Intent {
    /// Show or hide a whole category group
    CategoryVisibility { category: CategoryId, visible: bool },
    /// Show or hide one item
    ItemVisibility { item: ItemId, visible: bool },
    /// Replace the text shown in the query input
    InputValue(String),
    /// Show or hide the clear button
    ClearButton(bool),
    /// Show the empty-state message with a term, or hide it
    EmptyState(Option<String>),
    /// Replace the dropdown entries
    RenderDropdown(Vec<SuggestionEntry>),
    /// Show or hide the dropdown
    DropdownVisible(bool),
    /// Highlight a dropdown entry by position, or none
    Highlight(Option<usize>),
    /// Scroll an item's element into view
    ScrollIntoView { item: ItemId, block: ScrollBlock },
    /// Move focus back to the query input
    FocusInput,
}

impl Intent {
    /// Visibility intents for a filter outcome
    ///
    /// Items that were not evaluated (hidden category) produce no intent; the
    /// hidden group already hides them.
    pub fn visibility(outcome: &FilterOutcome) -> impl Iterator<Item = Self> + '_ {
        let categories = outcome
            .categories
            .iter()
            .enumerate()
            .map(|(pos, &visible)| Self::CategoryVisibility {
                category: CategoryId(pos),
                visible,
            });

        let items = outcome
            .items
            .iter()
            .enumerate()
            .filter_map(|(pos, visible)| {
                visible.map(|visible| Self::ItemVisibility {
                    item: ItemId(pos),
                    visible,
                })
            });

        categories.chain(items)
    }
}
