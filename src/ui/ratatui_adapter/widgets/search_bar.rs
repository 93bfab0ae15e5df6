//! Search bar widget for query input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    query: &'a str,
    theme: &'a Theme,
    focused: bool,
    /// Show the clear button
    clear_visible: bool,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(query: &'a str, theme: &'a Theme) -> Self {
        Self {
            query,
            theme,
            focused: true,
            clear_visible: false,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show or hide the clear button
    #[must_use]
    pub const fn clear_visible(mut self, visible: bool) -> Self {
        self.clear_visible = visible;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.frame_for(self.focused))
            .title(" Search the menu ");

        if self.clear_visible {
            block = block.title_bottom(
                Line::from(Span::styled(" ✕ ctrl-u ", self.theme.muted_style())).right_aligned(),
            );
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![
            Span::styled(">", self.theme.muted_style()),
            Span::raw(" "),
            Span::raw(self.query),
        ];
        if self.focused {
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        } else if self.query.is_empty() {
            spans.push(Span::styled("Dish or ingredient", self.theme.muted_style()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
