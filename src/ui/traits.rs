//! Core traits for the surface abstraction layer

use crate::catalog::{CategoryId, ItemId};
use crate::search::{Intent, ScrollBlock, SuggestionEntry};

/// A rendering surface the search engine drives
///
/// Implementations own the actual elements: category groups, item entries,
/// the query input, the clear button, the empty-state message and the
/// dropdown list. They only ever show, hide, or fill these in; the engine
/// never asks for structural changes.
pub trait PageSurface {
    /// Show or hide a category group
    fn set_category_visible(&mut self, category: CategoryId, visible: bool);

    /// Show or hide an item entry
    fn set_item_visible(&mut self, item: ItemId, visible: bool);

    /// Replace the text in the query input
    fn set_input_value(&mut self, value: &str);

    /// Show or hide the clear button
    fn set_clear_visible(&mut self, visible: bool);

    /// Show the empty-state message for `term`, or hide it with `None`
    fn set_empty_state(&mut self, term: Option<&str>);

    /// Replace the dropdown entries
    fn render_dropdown(&mut self, entries: &[SuggestionEntry]);

    /// Show or hide the dropdown
    fn set_dropdown_visible(&mut self, visible: bool);

    /// Mark the dropdown entry at `position` as active, or none
    fn highlight(&mut self, position: Option<usize>);

    /// Scroll the element of `item` into view
    fn scroll_into_view(&mut self, item: ItemId, block: ScrollBlock);

    /// Give focus back to the query input
    fn focus_input(&mut self);
}

impl Intent {
    /// Apply this intent to a surface
    pub fn apply_to<S: PageSurface + ?Sized>(&self, surface: &mut S) {
        match self {
            Self::CategoryVisibility { category, visible } => {
                surface.set_category_visible(*category, *visible);
            }
            Self::ItemVisibility { item, visible } => surface.set_item_visible(*item, *visible),
            Self::InputValue(value) => surface.set_input_value(value),
            Self::ClearButton(visible) => surface.set_clear_visible(*visible),
            Self::EmptyState(term) => surface.set_empty_state(term.as_deref()),
            Self::RenderDropdown(entries) => surface.render_dropdown(entries),
            Self::DropdownVisible(visible) => surface.set_dropdown_visible(*visible),
            Self::Highlight(position) => surface.highlight(*position),
            Self::ScrollIntoView { item, block } => surface.scroll_into_view(*item, *block),
            Self::FocusInput => surface.focus_input(),
        }
    }
}
