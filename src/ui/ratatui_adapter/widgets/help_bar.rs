//! Help bar widget for displaying keybind hints

use crate::keybinds::{KeybindConfig, action_name};
use crate::search::NavKey;
use crate::ui::ratatui_adapter::state::Focus;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "down", "ctrl-u")
    pub key: String,
    /// Action description (e.g., "next", "clear")
    pub action: String,
}

impl KeyHint {
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Hints for the focused control
///
/// Dropdown hints show the first configured key of each action; disabled
/// actions are left out.
#[must_use]
pub fn hints_for(focus: Focus, keybinds: &KeybindConfig) -> Vec<KeyHint> {
    match focus {
        Focus::Input => {
            let mut hints: Vec<KeyHint> = [
                (NavKey::SelectNext, "next"),
                (NavKey::SelectPrevious, "previous"),
                (NavKey::Commit, "jump to"),
                (NavKey::Dismiss, "close"),
            ]
            .into_iter()
            .map(|(nav, label)| (action_name(nav), label))
            .filter(|(action, _)| !keybinds.is_disabled(action))
            .filter_map(|(action, label)| {
                keybinds
                    .get(action)
                    .into_iter()
                    .next()
                    .map(|key| KeyHint::new(key, label))
            })
            .collect();
            hints.push(KeyHint::new("ctrl-u", "clear"));
            hints.push(KeyHint::new("tab", "categories"));
            hints.push(KeyHint::new("ctrl-c", "quit"));
            hints
        }
        Focus::Categories => vec![
            KeyHint::new("←/→", "category"),
            KeyHint::new("↑/↓", "scroll"),
            KeyHint::new("tab", "search"),
            KeyHint::new("q", "quit"),
        ],
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.muted_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.accent_style()));
            spans.push(Span::styled(":", self.theme.muted_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
