//! Suggestion dropdown widget
//!
//! Drawn over the menu listing, directly below the search bar.

use crate::search::SuggestionEntry;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Widget},
};

pub struct SuggestionDropdown<'a> {
    entries: &'a [SuggestionEntry],
    highlighted: Option<usize>,
    theme: &'a Theme,
}

impl<'a> SuggestionDropdown<'a> {
    #[must_use]
    pub const fn new(
        entries: &'a [SuggestionEntry],
        highlighted: Option<usize>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            entries,
            highlighted,
            theme,
        }
    }

    /// Rectangle the dropdown occupies when anchored below `anchor`
    ///
    /// One row per entry plus borders, clipped to `bounds`.
    #[must_use]
    pub fn area(entry_count: usize, anchor: Rect, bounds: Rect) -> Rect {
        let height = u16::try_from(entry_count + 2).unwrap_or(u16::MAX);
        let y = anchor.bottom();
        Rect::new(anchor.x, y, anchor.width, height).intersection(bounds)
    }
}

impl Widget for SuggestionDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.accent_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let width = usize::from(inner.width);
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let used = entry.name.chars().count() + entry.price.chars().count() + 1;
                let line = Line::from(vec![
                    Span::raw(" "),
                    Span::raw(entry.name.as_str()),
                    Span::raw(" ".repeat(width.saturating_sub(used + 1).max(1))),
                    Span::styled(entry.price.as_str(), self.theme.price_style()),
                ]);
                if self.highlighted == Some(entry.position) {
                    ListItem::new(line).style(self.theme.highlight_style())
                } else {
                    ListItem::new(line)
                }
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemId;

    #[test]
    fn test_area_below_anchor() {
        let anchor = Rect::new(0, 3, 40, 3);
        let bounds = Rect::new(0, 0, 40, 20);

        assert_eq!(SuggestionDropdown::area(3, anchor, bounds), Rect::new(0, 6, 40, 5));
        assert_eq!(SuggestionDropdown::area(30, anchor, bounds).bottom(), 20);
    }

    #[test]
    fn test_highlighted_entry_is_styled() {
        let theme = Theme::default();
        let entries = vec![
            SuggestionEntry {
                position: 0,
                item: ItemId(0),
                name: "Carrot Cake".to_string(),
                price: "$5".to_string(),
            },
            SuggestionEntry {
                position: 1,
                item: ItemId(1),
                name: "Cheesecake".to_string(),
                price: "$6".to_string(),
            },
        ];

        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        SuggestionDropdown::new(&entries, Some(1), &theme).render(area, &mut buf);

        assert_eq!(buf[(2, 2)].bg, theme.highlight_bg);
        assert_ne!(buf[(2, 1)].bg, theme.highlight_bg);
    }
}
