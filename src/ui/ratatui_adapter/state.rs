//! Terminal surface state
//!
//! `TerminalSurface` is the [`PageSurface`] of the terminal frontend. It keeps
//! what the engine asked to show, plus the view state only the terminal
//! needs: focus, scroll offset, status messages and the last rendered
//! dropdown area (for mouse hit testing).

use crate::catalog::{Catalog, CategoryId, ItemId};
use crate::search::{ScrollBlock, SuggestionEntry};
use crate::ui::output::MessageLevel;
use crate::ui::traits::PageSurface;
use ratatui::layout::Rect;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Status message with timestamp for auto-expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    pub created_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Which control receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The query input
    #[default]
    Input,
    /// The category selector
    Categories,
}

/// One line of the menu listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow {
    Header(CategoryId),
    Item(ItemId),
}

/// Surface state of the terminal frontend
#[derive(Debug)]
pub struct TerminalSurface {
    pub hidden_categories: HashSet<CategoryId>,
    pub hidden_items: HashSet<ItemId>,
    pub input_value: String,
    pub clear_visible: bool,
    pub empty_state: Option<String>,
    pub dropdown: Vec<SuggestionEntry>,
    pub dropdown_visible: bool,
    pub highlighted: Option<usize>,
    pub focus: Focus,
    /// First menu row on screen
    pub scroll_offset: usize,
    /// Height of the menu viewport (set during render)
    pub visible_height: usize,
    /// Dropdown rectangle of the last frame (set during render)
    pub dropdown_area: Option<Rect>,
    /// Query input rectangle of the last frame (set during render)
    pub input_area: Option<Rect>,
    /// Item the user jumped to most recently
    pub focused_item: Option<ItemId>,
    pub messages: Vec<StatusMessage>,
    pub message_ttl: Duration,
    pending_scroll: Option<(ItemId, ScrollBlock)>,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSurface {
    #[must_use]
    pub fn new() -> Self {
        Self {
            hidden_categories: HashSet::new(),
            hidden_items: HashSet::new(),
            input_value: String::new(),
            clear_visible: false,
            empty_state: None,
            dropdown: Vec::new(),
            dropdown_visible: false,
            highlighted: None,
            focus: Focus::Input,
            scroll_offset: 0,
            visible_height: 0,
            dropdown_area: None,
            input_area: None,
            focused_item: None,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(4),
            pending_scroll: None,
        }
    }

    /// Rows of the menu listing that are currently shown
    #[must_use]
    pub fn rows(&self, catalog: &Catalog) -> Vec<MenuRow> {
        let mut rows = Vec::new();
        for category in catalog.categories() {
            if self.hidden_categories.contains(&category.id) {
                continue;
            }
            rows.push(MenuRow::Header(category.id));
            rows.extend(
                catalog
                    .items_in(category.id)
                    .filter(|item| !self.hidden_items.contains(&item.id))
                    .map(|item| MenuRow::Item(item.id)),
            );
        }
        rows
    }

    /// Settle the scroll offset for the rows about to be drawn
    ///
    /// Applies a pending scroll request, then keeps the offset inside the
    /// scrollable range.
    pub fn settle_scroll(&mut self, rows: &[MenuRow]) {
        if let Some((item, block)) = self.pending_scroll.take()
            && let Some(index) = rows.iter().position(|row| *row == MenuRow::Item(item))
        {
            self.scroll_offset =
                scroll_offset_for(index, self.visible_height, self.scroll_offset, block);
        }
        let max_offset = rows.len().saturating_sub(self.visible_height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    /// Scroll the menu listing by `delta` rows
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
    }

    /// Dropdown entry under a terminal cell, if the dropdown is showing
    #[must_use]
    pub fn dropdown_hit(&self, column: u16, row: u16) -> Option<usize> {
        if !self.dropdown_visible {
            return None;
        }
        let area = self.dropdown_area?;
        let inside = column > area.x
            && column < area.right().saturating_sub(1)
            && row > area.y
            && row < area.bottom().saturating_sub(1);
        if !inside {
            return None;
        }
        let index = usize::from(row - area.y - 1);
        (index < self.dropdown.len()).then_some(index)
    }

    /// Whether a terminal cell lies on the query input
    #[must_use]
    pub fn input_hit(&self, column: u16, row: u16) -> bool {
        self.input_area
            .is_some_and(|area| area.contains(ratatui::layout::Position::new(column, row)))
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text.into()));
    }

    /// Remove expired messages
    pub fn cleanup_expired_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|msg| !msg.is_expired(ttl));
    }

    /// Get active (non-expired) messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|msg| !msg.is_expired(self.message_ttl))
            .collect()
    }
}

/// Offset that places row `index` in a viewport of `height` rows per `block`
#[must_use]
pub fn scroll_offset_for(index: usize, height: usize, current: usize, block: ScrollBlock) -> usize {
    if height == 0 {
        return current;
    }
    match block {
        ScrollBlock::Start => index,
        ScrollBlock::Center => index.saturating_sub(height / 2),
        ScrollBlock::End => (index + 1).saturating_sub(height),
        ScrollBlock::Nearest if index < current => index,
        ScrollBlock::Nearest if index >= current + height => index + 1 - height,
        ScrollBlock::Nearest => current,
    }
}

impl PageSurface for TerminalSurface {
    fn set_category_visible(&mut self, category: CategoryId, visible: bool) {
        if visible {
            self.hidden_categories.remove(&category);
        } else {
            self.hidden_categories.insert(category);
        }
    }

    fn set_item_visible(&mut self, item: ItemId, visible: bool) {
        if visible {
            self.hidden_items.remove(&item);
        } else {
            self.hidden_items.insert(item);
        }
    }

    fn set_input_value(&mut self, value: &str) {
        value.clone_into(&mut self.input_value);
    }

    fn set_clear_visible(&mut self, visible: bool) {
        self.clear_visible = visible;
    }

    fn set_empty_state(&mut self, term: Option<&str>) {
        self.empty_state = term.map(str::to_string);
    }

    fn render_dropdown(&mut self, entries: &[SuggestionEntry]) {
        self.dropdown = entries.to_vec();
        self.highlighted = None;
    }

    fn set_dropdown_visible(&mut self, visible: bool) {
        self.dropdown_visible = visible;
    }

    fn highlight(&mut self, position: Option<usize>) {
        self.highlighted = position;
    }

    fn scroll_into_view(&mut self, item: ItemId, block: ScrollBlock) {
        self.focused_item = Some(item);
        self.pending_scroll = Some((item, block));
    }

    fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{dessert_catalog, sample_catalog};

    #[test]
    fn test_rows_skip_hidden() {
        let catalog = sample_catalog();
        let mut surface = TerminalSurface::new();
        surface.set_category_visible(CategoryId(1), false);
        surface.set_item_visible(ItemId(2), false);

        assert_eq!(
            surface.rows(&catalog),
            vec![
                MenuRow::Header(CategoryId(0)),
                MenuRow::Item(ItemId(0)),
                MenuRow::Header(CategoryId(2)),
            ]
        );

        surface.set_category_visible(CategoryId(1), true);
        assert!(surface.rows(&catalog).contains(&MenuRow::Item(ItemId(1))));
    }

    #[test]
    fn test_scroll_offset_blocks() {
        assert_eq!(scroll_offset_for(20, 10, 0, ScrollBlock::Start), 20);
        assert_eq!(scroll_offset_for(20, 10, 0, ScrollBlock::Center), 15);
        assert_eq!(scroll_offset_for(20, 10, 0, ScrollBlock::End), 11);
        assert_eq!(scroll_offset_for(3, 10, 0, ScrollBlock::Center), 0);
    }

    #[test]
    fn test_scroll_offset_nearest() {
        assert_eq!(scroll_offset_for(5, 10, 2, ScrollBlock::Nearest), 2);
        assert_eq!(scroll_offset_for(1, 10, 2, ScrollBlock::Nearest), 1);
        assert_eq!(scroll_offset_for(15, 10, 2, ScrollBlock::Nearest), 6);
    }

    #[test]
    fn test_settle_scroll_centers_item() {
        let catalog = dessert_catalog();
        let mut surface = TerminalSurface::new();
        surface.visible_height = 4;

        surface.scroll_into_view(ItemId(6), ScrollBlock::Center);
        let rows = surface.rows(&catalog);
        surface.settle_scroll(&rows);

        // Row 0 is the category header, so item #6 sits on row 7
        assert_eq!(surface.scroll_offset, 5);
        assert_eq!(surface.focused_item, Some(ItemId(6)));
    }

    #[test]
    fn test_settle_scroll_clamps() {
        let catalog = sample_catalog();
        let mut surface = TerminalSurface::new();
        surface.visible_height = 4;
        surface.scroll_by(100);

        let rows = surface.rows(&catalog);
        surface.settle_scroll(&rows);
        assert_eq!(surface.scroll_offset, rows.len() - 4);

        surface.scroll_by(-100);
        assert_eq!(surface.scroll_offset, 0);
    }

    #[test]
    fn test_dropdown_hit() {
        let mut surface = TerminalSurface::new();
        surface.render_dropdown(&[
            SuggestionEntry {
                position: 0,
                item: ItemId(0),
                name: "Margherita Pizza".to_string(),
                price: "$14".to_string(),
            },
            SuggestionEntry {
                position: 1,
                item: ItemId(3),
                name: "Pizza Soda".to_string(),
                price: "$2".to_string(),
            },
        ]);
        surface.dropdown_area = Some(Rect::new(2, 3, 30, 4));

        assert_eq!(surface.dropdown_hit(5, 4), None);

        surface.set_dropdown_visible(true);
        assert_eq!(surface.dropdown_hit(5, 4), Some(0));
        assert_eq!(surface.dropdown_hit(5, 5), Some(1));
        assert_eq!(surface.dropdown_hit(5, 3), None);
        assert_eq!(surface.dropdown_hit(2, 4), None);
        assert_eq!(surface.dropdown_hit(50, 4), None);
    }

    #[test]
    fn test_focus_input_intent() {
        let mut surface = TerminalSurface::new();
        surface.focus = Focus::Categories;
        surface.focus_input();
        assert_eq!(surface.focus, Focus::Input);
    }

    #[test]
    fn test_message_expiry() {
        let mut surface = TerminalSurface::new();
        surface.add_message(MessageLevel::Info, "hello");
        assert_eq!(surface.active_messages().len(), 1);

        surface.message_ttl = Duration::ZERO;
        std::thread::sleep(Duration::from_millis(2));
        surface.cleanup_expired_messages();
        assert!(surface.messages.is_empty());
    }
}
