//! Interactive menu browser
//!
//! Runs a [`SearchWidget`] over a [`TerminalSurface`] in the alternate
//! screen. The loop ticks the widget (so deferred dismissal fires), redraws,
//! then waits briefly for the next event.

use super::events::{Action, poll_action};
use super::state::{Focus, TerminalSurface};
use super::theme::Theme;
use super::widgets::{
    CategoryTabs, HelpBar, MenuList, SearchBar, StatusBar, SuggestionDropdown, cycle_category,
    hints_for,
};
use crate::catalog::Catalog;
use crate::config::MenufindConfig;
use crate::search::{CategoryFilter, SearchError};
use crate::ui::error::{Result, UiError};
use crate::ui::output::MessageLevel;
use crate::ui::widget::SearchWidget;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(30);

type MenuWidget<'a> = SearchWidget<'a, TerminalSurface>;

/// Terminal browser for one catalog
pub struct BrowseApp<'a> {
    catalog: &'a Catalog,
    config: &'a MenufindConfig,
    theme: Theme,
}

impl<'a> BrowseApp<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, config: &'a MenufindConfig) -> Self {
        Self {
            catalog,
            config,
            theme: Theme::default(),
        }
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the browser until the user quits
    ///
    /// # Errors
    ///
    /// Returns `SearchError::UiError` if the terminal cannot be set up,
    /// drawn to, or restored.
    pub fn run(&self) -> std::result::Result<(), SearchError> {
        let mut widget = SearchWidget::builder()
            .catalog(self.catalog)
            .surface(TerminalSurface::new())
            .config(self.config)
            .build()?;

        widget.surface_mut().add_message(
            MessageLevel::Info,
            format!(
                "{} items in {} categories",
                self.catalog.len(),
                self.catalog.categories().len()
            ),
        );

        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, &mut widget);
        Self::cleanup_terminal()?;

        result.map_err(Into::into)
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        widget: &mut MenuWidget<'a>,
    ) -> Result<()> {
        loop {
            widget.tick();
            widget.surface_mut().cleanup_expired_messages();

            let filter = widget.coordinator().state().category.clone();
            let surface = widget.surface_mut();
            terminal
                .draw(|frame| self.render(frame, surface, &filter))
                .map_err(|e| UiError::Terminal(e.to_string()))?;

            let focus = widget.surface().focus;
            match poll_action(focus, &self.config.keybinds, POLL_INTERVAL)? {
                Action::Quit => return Ok(()),
                action => self.dispatch(widget, action),
            }
        }
    }

    fn dispatch(&self, widget: &mut MenuWidget<'a>, action: Action) {
        let jumped_before = widget.surface().focused_item;
        let focus = widget.surface().focus;

        match action {
            Action::Navigate(key) => widget.key(key),
            Action::Insert(c) => {
                let mut text = widget.surface().input_value.clone();
                text.push(c);
                widget.type_text(&text);
            }
            Action::Backspace => {
                let mut text = widget.surface().input_value.clone();
                if text.pop().is_some() {
                    widget.type_text(&text);
                }
            }
            Action::ClearQuery => widget.clear(),
            Action::ToggleFocus => match focus {
                Focus::Input => {
                    widget.surface_mut().focus = Focus::Categories;
                    widget.blur();
                }
                Focus::Categories => {
                    widget.surface_mut().focus = Focus::Input;
                    widget.focus();
                }
            },
            Action::CycleCategory(step) => {
                let current = &widget.coordinator().state().category;
                let key = cycle_category(self.catalog, current, step);
                widget.select_category(&key);
            }
            Action::Click { column, row } => self.click(widget, column, row),
            Action::Scroll(delta) => widget.surface_mut().scroll_by(delta),
            Action::Quit | Action::Ignored => {}
        }

        let jumped_after = widget.surface().focused_item;
        if jumped_after != jumped_before
            && let Some(item) = jumped_after.and_then(|id| self.catalog.item(id))
        {
            let text = format!("Jumped to {} ({})", item.name, item.category);
            widget.surface_mut().add_message(MessageLevel::Success, text);
        }
    }

    fn click(&self, widget: &mut MenuWidget<'a>, column: u16, row: u16) {
        if let Some(position) = widget.surface().dropdown_hit(column, row) {
            widget.pointer_select(position);
            return;
        }

        let on_input = widget.surface().input_hit(column, row);
        match (widget.surface().focus, on_input) {
            (Focus::Categories, true) => {
                widget.surface_mut().focus = Focus::Input;
                widget.focus();
            }
            (Focus::Input, false) => {
                widget.surface_mut().focus = Focus::Categories;
                widget.blur();
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, surface: &mut TerminalSurface, filter: &CategoryFilter) {
        let area = frame.area();
        let theme = &self.theme;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Length(3), // Categories
                Constraint::Min(3),    // Menu
                Constraint::Length(3), // Status bar
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        surface.input_area = Some(layout[0]);
        surface.visible_height = usize::from(layout[2].height.saturating_sub(2));
        let rows = surface.rows(self.catalog);
        surface.settle_scroll(&rows);

        surface.dropdown_area = (surface.dropdown_visible && !surface.dropdown.is_empty())
            .then(|| SuggestionDropdown::area(surface.dropdown.len(), layout[0], area));

        let focus = surface.focus;
        let search_bar = SearchBar::new(&surface.input_value, theme)
            .focused(focus == Focus::Input)
            .clear_visible(surface.clear_visible);
        frame.render_widget(search_bar, layout[0]);

        let tabs =
            CategoryTabs::new(self.catalog, filter, theme).focused(focus == Focus::Categories);
        frame.render_widget(tabs, layout[1]);

        let menu = MenuList::new(self.catalog, &rows, surface.scroll_offset, theme)
            .empty_state(surface.empty_state.as_deref())
            .focused_item(surface.focused_item);
        frame.render_widget(menu, layout[2]);

        let category_label = match filter {
            CategoryFilter::All => "All",
            CategoryFilter::Key(key) => self
                .catalog
                .category_by_key(key)
                .map_or(key.as_str(), |c| c.title.as_str()),
        };
        let messages = surface.active_messages();
        frame.render_widget(StatusBar::new(&messages, category_label, theme), layout[3]);

        let hints = hints_for(focus, &self.config.keybinds);
        frame.render_widget(HelpBar::new(&hints, theme), layout[4]);

        if let Some(dropdown_area) = surface.dropdown_area {
            let dropdown = SuggestionDropdown::new(&surface.dropdown, surface.highlighted, theme);
            frame.render_widget(dropdown, dropdown_area);
        }
    }
}
