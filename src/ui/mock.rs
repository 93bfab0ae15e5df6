//! Recording surface and output writer for testing

use super::output::{MessageLevel, OutputWriter};
use super::traits::PageSurface;
use crate::catalog::{CategoryId, ItemId};
use crate::search::{ScrollBlock, SuggestionEntry};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory surface that keeps the rendered state
///
/// Useful for testing without a terminal or a browser: every call updates
/// the public fields so tests can compare what is "on screen" with the
/// engine state.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub categories: HashMap<CategoryId, bool>,
    pub items: HashMap<ItemId, bool>,
    pub input_value: String,
    pub clear_visible: bool,
    pub empty_state: Option<String>,
    pub dropdown: Vec<SuggestionEntry>,
    pub dropdown_visible: bool,
    pub highlighted: Option<usize>,
    pub scrolled_to: Vec<(ItemId, ScrollBlock)>,
    pub focus_requests: usize,
    /// Number of surface calls received
    pub calls: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an item is on screen: its category and the item itself are shown
    ///
    /// Elements never touched count as shown, like a freshly rendered page.
    #[must_use]
    pub fn is_item_shown(&self, item: ItemId, category: CategoryId) -> bool {
        self.categories.get(&category).copied().unwrap_or(true)
            && self.items.get(&item).copied().unwrap_or(true)
    }

    /// Names in the dropdown, in order
    #[must_use]
    pub fn dropdown_names(&self) -> Vec<&str> {
        self.dropdown.iter().map(|e| e.name.as_str()).collect()
    }
}

impl PageSurface for RecordingSurface {
    fn set_category_visible(&mut self, category: CategoryId, visible: bool) {
        self.calls += 1;
        self.categories.insert(category, visible);
    }

    fn set_item_visible(&mut self, item: ItemId, visible: bool) {
        self.calls += 1;
        self.items.insert(item, visible);
    }

    fn set_input_value(&mut self, value: &str) {
        self.calls += 1;
        self.input_value = value.to_string();
    }

    fn set_clear_visible(&mut self, visible: bool) {
        self.calls += 1;
        self.clear_visible = visible;
    }

    fn set_empty_state(&mut self, term: Option<&str>) {
        self.calls += 1;
        self.empty_state = term.map(str::to_string);
    }

    fn render_dropdown(&mut self, entries: &[SuggestionEntry]) {
        self.calls += 1;
        self.dropdown = entries.to_vec();
        self.highlighted = None;
    }

    fn set_dropdown_visible(&mut self, visible: bool) {
        self.calls += 1;
        self.dropdown_visible = visible;
    }

    fn highlight(&mut self, position: Option<usize>) {
        self.calls += 1;
        self.highlighted = position;
    }

    fn scroll_into_view(&mut self, item: ItemId, block: ScrollBlock) {
        self.calls += 1;
        self.scrolled_to.push((item, block));
    }

    fn focus_input(&mut self) {
        self.calls += 1;
        self.focus_requests += 1;
    }
}

/// Output writer that keeps every line in memory
#[derive(Debug, Default)]
pub struct MemoryWriter {
    lines: RefCell<Vec<(MessageLevel, String)>>,
}

impl MemoryWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, with its level
    #[must_use]
    pub fn lines(&self) -> Vec<(MessageLevel, String)> {
        self.lines.borrow().clone()
    }

    /// Text written at `level`
    #[must_use]
    pub fn texts(&self, level: MessageLevel) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text.clone())
            .collect()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }
}

impl OutputWriter for MemoryWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}
