//! Category selector widget

use crate::catalog::Catalog;
use crate::search::CategoryFilter;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Tabs, Widget},
};

/// Tabs for "All" followed by every catalog category
pub struct CategoryTabs<'a> {
    catalog: &'a Catalog,
    filter: &'a CategoryFilter,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> CategoryTabs<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog, filter: &'a CategoryFilter, theme: &'a Theme) -> Self {
        Self {
            catalog,
            filter,
            theme,
            focused: false,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Tab index of the active filter; unknown keys select nothing
    fn selected(&self) -> Option<usize> {
        match self.filter {
            CategoryFilter::All => Some(0),
            CategoryFilter::Key(key) => self
                .catalog
                .categories()
                .iter()
                .position(|c| &c.key == key)
                .map(|pos| pos + 1),
        }
    }
}

impl Widget for CategoryTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles = std::iter::once("All").chain(
            self.catalog
                .categories()
                .iter()
                .map(|c| c.title.as_str()),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.frame_for(self.focused))
            .title(" Category ");

        Tabs::new(titles)
            .block(block)
            .select(self.selected())
            .style(self.theme.muted_style())
            .highlight_style(self.theme.heading_style())
            .render(area, buf);
    }
}

/// Key of the category `step` tabs away from the active one
///
/// Wraps around; `""` stands for "All".
#[must_use]
pub fn cycle_category(catalog: &Catalog, filter: &CategoryFilter, step: isize) -> String {
    let keys: Vec<&str> = std::iter::once("")
        .chain(catalog.categories().iter().map(|c| c.key.as_str()))
        .collect();

    let current = match filter {
        CategoryFilter::All => 0,
        CategoryFilter::Key(key) => keys.iter().position(|k| *k == key.as_str()).unwrap_or(0),
    };
    let len = keys.len() as isize;
    let next = (current as isize + step).rem_euclid(len) as usize;
    keys[next].to_string()
}
