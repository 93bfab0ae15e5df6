//! Colors and styles for the menu browser

use crate::config::ThemeName;
use crate::ui::output::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Palette used by every widget of the browser
#[derive(Debug, Clone)]
pub struct Theme {
    /// Focused frames, the cursor and key names in the help bar
    pub accent: Color,
    /// Background of the highlighted dropdown entry
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    /// Category headers and the active tab
    pub heading: Color,
    pub price: Color,
    /// Unfocused frames
    pub frame: Color,
    /// Hints, placeholders and item descriptions
    pub muted: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Palette for dark terminals (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            highlight_bg: Color::Blue,
            highlight_fg: Color::White,
            heading: Color::Magenta,
            price: Color::Green,
            frame: Color::DarkGray,
            muted: Color::DarkGray,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
        }
    }

    /// Palette for light terminals
    #[must_use]
    pub const fn light() -> Self {
        Self {
            accent: Color::Blue,
            highlight_bg: Color::LightBlue,
            highlight_fg: Color::Black,
            heading: Color::Magenta,
            price: Color::Green,
            frame: Color::Gray,
            muted: Color::Gray,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Blue,
        }
    }

    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::new()
            .bg(self.highlight_bg)
            .fg(self.highlight_fg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn plain_style(&self) -> Style {
        Style::new()
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn heading_style(&self) -> Style {
        Style::new()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Item that was just scrolled to after a commit
    #[must_use]
    pub fn landed_style(&self) -> Style {
        Style::new().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    #[must_use]
    pub fn price_style(&self) -> Style {
        Style::new().fg(self.price)
    }

    #[must_use]
    pub fn frame_style(&self) -> Style {
        Style::new().fg(self.frame)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::new().fg(self.warning)
    }

    /// Frame style of a control, accented while it has focus
    #[must_use]
    pub fn frame_for(&self, focused: bool) -> Style {
        if focused {
            self.accent_style()
        } else {
            self.frame_style()
        }
    }

    /// Style of a status message
    #[must_use]
    pub fn message_style(&self, level: MessageLevel) -> Style {
        let color = match level {
            MessageLevel::Success => self.success,
            MessageLevel::Error => self.error,
            MessageLevel::Warning => self.warning,
            MessageLevel::Info => self.info,
            MessageLevel::Normal => return self.plain_style(),
        };
        Style::new().fg(color)
    }
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_follows_focus() {
        let theme = Theme::default();
        assert_eq!(theme.frame_for(true).fg, Some(theme.accent));
        assert_eq!(theme.frame_for(false).fg, Some(theme.frame));
    }

    #[test]
    fn test_theme_from_config_name() {
        assert_eq!(Theme::from(ThemeName::Light).accent, Color::Blue);
        assert_eq!(Theme::from(ThemeName::Dark).accent, Color::Cyan);
    }

    #[test]
    fn test_message_colors() {
        let theme = Theme::light();
        assert_eq!(theme.message_style(MessageLevel::Error).fg, Some(Color::Red));
        assert_eq!(theme.message_style(MessageLevel::Normal), Style::new());
    }
}
