//! Menu listing widget
//!
//! Draws the visible category headers and items, starting at the surface's
//! scroll offset. When nothing is visible and the engine reported an empty
//! state, the listing shows the "no results" message instead.

use crate::catalog::{Catalog, ItemId};
use crate::ui::ratatui_adapter::state::MenuRow;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

const MAX_ROW_WIDTH: usize = 72;
const DESCRIPTION_SEPARATOR: &str = "  ";

/// Shorten a description to `room` characters, or drop it when too little
/// room is left to be readable
fn fit_description(description: &str, room: usize) -> Option<String> {
    if description.is_empty() || room < 4 {
        return None;
    }
    if description.chars().count() <= room {
        return Some(description.to_string());
    }
    let mut short: String = description.chars().take(room - 1).collect();
    short.push('…');
    Some(short)
}

pub struct MenuList<'a> {
    catalog: &'a Catalog,
    rows: &'a [MenuRow],
    scroll_offset: usize,
    theme: &'a Theme,
    empty_state: Option<&'a str>,
    focused_item: Option<ItemId>,
}

impl<'a> MenuList<'a> {
    #[must_use]
    pub const fn new(
        catalog: &'a Catalog,
        rows: &'a [MenuRow],
        scroll_offset: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            catalog,
            rows,
            scroll_offset,
            theme,
            empty_state: None,
            focused_item: None,
        }
    }

    /// Term for the empty-state message
    #[must_use]
    pub const fn empty_state(mut self, term: Option<&'a str>) -> Self {
        self.empty_state = term;
        self
    }

    /// Emphasize the item the user jumped to
    #[must_use]
    pub const fn focused_item(mut self, item: Option<ItemId>) -> Self {
        self.focused_item = item;
        self
    }

    fn visible_items(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, MenuRow::Item(_)))
            .count()
    }

    fn render_row(&self, row: MenuRow, width: usize) -> Option<ListItem<'a>> {
        match row {
            MenuRow::Header(id) => {
                let category = self.catalog.category(id)?;
                Some(ListItem::new(Line::from(Span::styled(
                    category.title.as_str(),
                    self.theme.heading_style(),
                ))))
            }
            MenuRow::Item(id) => {
                let item = self.catalog.item(id)?;
                let name_style = if self.focused_item == Some(id) {
                    self.theme.landed_style()
                } else {
                    self.theme.plain_style()
                };

                // indent + name + at least one space before the price
                let fixed = 2 + item.name.chars().count() + item.price.chars().count() + 1;
                let description = fit_description(
                    &item.description,
                    width.saturating_sub(fixed).saturating_sub(DESCRIPTION_SEPARATOR.len()),
                );

                let mut spans = vec![
                    Span::raw("  "),
                    Span::styled(item.name.as_str(), name_style),
                ];
                let mut used = fixed - 1;
                if let Some(description) = description {
                    used += DESCRIPTION_SEPARATOR.len() + description.chars().count();
                    spans.push(Span::raw(DESCRIPTION_SEPARATOR));
                    spans.push(Span::styled(description, self.theme.muted_style()));
                }
                spans.push(Span::raw(" ".repeat(width.saturating_sub(used).max(1))));
                spans.push(Span::styled(item.price.as_str(), self.theme.price_style()));
                Some(ListItem::new(Line::from(spans)))
            }
        }
    }
}

impl Widget for MenuList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Menu ({}/{}) ", self.visible_items(), self.catalog.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.frame_style())
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.visible_items() == 0
            && let Some(term) = self.empty_state
        {
            Paragraph::new(vec![
                Line::raw(""),
                Line::from(vec![
                    Span::raw("No results for "),
                    Span::styled(format!("\"{term}\""), self.theme.warning_style()),
                ]),
                Line::styled("Try a different dish or ingredient.", self.theme.muted_style()),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
            return;
        }

        // Name, description and price share a column of this width
        let width = usize::from(inner.width).min(MAX_ROW_WIDTH);
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .skip(self.scroll_offset)
            .take(usize::from(inner.height))
            .filter_map(|row| self.render_row(*row, width))
            .collect();

        List::new(items).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryId;
    use crate::testing::sample_catalog;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_renders_headers_and_items() {
        let catalog = sample_catalog();
        let theme = Theme::default();
        let rows = [
            MenuRow::Header(CategoryId(0)),
            MenuRow::Item(ItemId(0)),
        ];

        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        MenuList::new(&catalog, &rows, 0, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Menu (1/3)"));
        assert!(text.contains("Mains"));
        assert!(text.contains("Margherita Pizza"));
        assert!(text.contains("$14"));
    }

    #[test]
    fn test_description_sits_before_price() {
        let catalog = sample_catalog();
        let theme = Theme::default();
        let rows = [MenuRow::Item(ItemId(0))];

        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        MenuList::new(&catalog, &rows, 0, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        let description = text.find("Tomato, fresh mozzarella and basil").unwrap();
        let price = text.find("$14").unwrap();
        assert!(description < price);
    }

    #[test]
    fn test_narrow_row_shortens_description_and_keeps_price() {
        let catalog = sample_catalog();
        let theme = Theme::default();
        let rows = [MenuRow::Item(ItemId(0))];

        let area = Rect::new(0, 0, 32, 3);
        let mut buf = Buffer::empty(area);
        MenuList::new(&catalog, &rows, 0, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Margherita Pizza"));
        assert!(text.contains("Tomat…"));
        assert!(text.contains("$14"));
    }

    #[test]
    fn test_fit_description() {
        assert_eq!(fit_description("", 20), None);
        assert_eq!(fit_description("Romaine", 3), None);
        assert_eq!(fit_description("Romaine", 10).as_deref(), Some("Romaine"));
        assert_eq!(fit_description("Romaine", 5).as_deref(), Some("Roma…"));
    }

    #[test]
    fn test_renders_empty_state() {
        let catalog = sample_catalog();
        let theme = Theme::default();

        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        MenuList::new(&catalog, &[], 0, &theme)
            .empty_state(Some("sushi"))
            .render(area, &mut buf);

        assert!(buffer_text(&buf).contains("\"sushi\""));
    }
}
