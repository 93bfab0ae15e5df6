//! Input coordinator
//!
//! Owns the authoritative [`SearchState`] and wires user input to the filter
//! engine, the suggestion ranker and the dropdown controller. Every public
//! method runs to completion and returns the intents needed to bring a
//! surface in line with the new state; after it returns, the query, the
//! reported visibility and the dropdown agree with each other.
//!
//! # Event Map
//!
//! | Event                  | Method                 |
//! |------------------------|------------------------|
//! | text typed / pasted    | `on_query_changed`     |
//! | category selector      | `on_category_changed`  |
//! | clear button           | `clear`                |
//! | arrow keys, enter, esc | `on_key`               |
//! | pointer on suggestion  | `on_pointer_select`    |
//! | input loses focus      | `on_blur`              |
//! | input gains focus      | `on_focus`             |
//! | timer poll             | `tick`                 |

use super::dropdown::Dropdown;
use super::filter::{self, FilterOutcome};
use super::intent::{Intent, ScrollBlock};
use super::query::{CategoryFilter, SearchQuery, SearchState};
use super::suggest::{self, MAX_SUGGESTIONS, SuggestionEntry};
use super::timer::{DEFAULT_BLUR_GRACE, Deferred};
use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Navigation keys understood by the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavKey {
    /// Move the selection down
    SelectNext,
    /// Move the selection up
    SelectPrevious,
    /// Commit the selected suggestion
    Commit,
    /// Close the dropdown and clear the query
    Dismiss,
}

/// Tunables for the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of dropdown entries
    pub max_suggestions: usize,
    /// Delay between blur and dismissal
    pub blur_grace: Duration,
    /// Viewport alignment when scrolling to a committed item
    pub scroll_block: ScrollBlock,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_suggestions: MAX_SUGGESTIONS,
            blur_grace: DEFAULT_BLUR_GRACE,
            scroll_block: ScrollBlock::Center,
        }
    }
}

/// Coordinates query state, filtering and the dropdown
#[derive(Debug)]
pub struct InputCoordinator<'a> {
    catalog: &'a Catalog,
    options: SearchOptions,
    state: SearchState,
    outcome: FilterOutcome,
    empty_state: Option<String>,
    dropdown: Dropdown,
    blur: Deferred,
}

impl<'a> InputCoordinator<'a> {
    /// Create a coordinator with an empty query and all categories visible
    #[must_use]
    pub fn new(catalog: &'a Catalog, options: SearchOptions) -> Self {
        let state = SearchState::default();
        let outcome = filter::apply(catalog, &state.category, &state.query);

        Self {
            catalog,
            options,
            state,
            outcome,
            empty_state: None,
            dropdown: Dropdown::new(),
            blur: Deferred::new(options.blur_grace),
        }
    }

    /// Intents that render the current state from scratch
    #[must_use]
    pub fn render_all(&self) -> Vec<Intent> {
        let mut intents: Vec<Intent> = Intent::visibility(&self.outcome).collect();
        intents.push(Intent::InputValue(
            self.state.query.display_value().to_string(),
        ));
        intents.push(Intent::ClearButton(self.state.query.is_active()));
        intents.push(Intent::EmptyState(self.empty_state.clone()));
        intents.push(Intent::RenderDropdown(self.dropdown.entries().to_vec()));
        intents.push(Intent::Highlight(self.dropdown.selection()));
        intents.push(Intent::DropdownVisible(self.dropdown.is_visible()));
        intents
    }

    /// The user edited the query text
    pub fn on_query_changed(&mut self, raw: &str) -> Vec<Intent> {
        self.apply_query(raw, true)
    }

    /// The user picked a category; resets the text search
    pub fn on_category_changed(&mut self, key: &str) -> Vec<Intent> {
        self.state.category = CategoryFilter::from(key);
        log::debug!("category changed to {}", self.state.category);

        self.blur.cancel();
        let mut intents = self.dropdown.dismiss();
        intents.extend(self.apply_query("", false));
        intents
    }

    /// Clear button: empty the query, hide the dropdown, focus the input
    pub fn clear(&mut self) -> Vec<Intent> {
        self.blur.cancel();
        let mut intents = self.apply_query("", false);
        intents.extend(self.dropdown.dismiss());
        intents.push(Intent::FocusInput);
        intents
    }

    /// Keyboard navigation inside the query input
    pub fn on_key(&mut self, key: NavKey) -> Vec<Intent> {
        match key {
            NavKey::SelectNext => self.dropdown.move_selection(1).into_iter().collect(),
            NavKey::SelectPrevious => self.dropdown.move_selection(-1).into_iter().collect(),
            NavKey::Commit => match self.dropdown.commit_selected() {
                Some(entry) => self.apply_commit(&entry),
                None => Vec::new(),
            },
            NavKey::Dismiss => {
                self.blur.cancel();
                let mut intents = self.dropdown.dismiss();
                intents.extend(self.apply_query("", false));
                intents
            }
        }
    }

    /// Pointer pressed on the dropdown entry at `index`
    pub fn on_pointer_select(&mut self, index: usize) -> Vec<Intent> {
        match self.dropdown.commit(index) {
            Some(entry) => self.apply_commit(&entry),
            None => Vec::new(),
        }
    }

    /// The query input lost focus; dismissal is deferred
    pub fn on_blur(&mut self, now: Instant) -> Vec<Intent> {
        if self.dropdown.is_visible() {
            log::trace!("blur: dismissal scheduled in {:?}", self.blur.delay());
            self.blur.schedule(now);
        }
        Vec::new()
    }

    /// The query input regained focus
    pub fn on_focus(&mut self) -> Vec<Intent> {
        if self.blur.cancel() {
            log::trace!("focus: pending dismissal cancelled");
        }
        self.dropdown.reopen(self.state.query.is_active())
    }

    /// Run deferred work that is due at `now`
    pub fn tick(&mut self, now: Instant) -> Vec<Intent> {
        if self.blur.fire_if_due(now) {
            log::trace!("deferred dismissal fired");
            self.dropdown.dismiss()
        } else {
            Vec::new()
        }
    }

    fn apply_commit(&mut self, entry: &SuggestionEntry) -> Vec<Intent> {
        self.blur.cancel();
        log::debug!("committed suggestion '{}' ({})", entry.name, entry.item);

        let mut intents = self.apply_query(&entry.name, false);
        intents.extend(self.dropdown.dismiss());
        intents.push(Intent::ScrollIntoView {
            item: entry.item,
            block: self.options.scroll_block,
        });
        intents
    }

    /// Replace the query and re-run both filters
    ///
    /// With `open_dropdown` unset the suggestion list is still recomputed (so
    /// focus can reopen it) but kept hidden.
    fn apply_query(&mut self, raw: &str, open_dropdown: bool) -> Vec<Intent> {
        let revision = self.state.set_query(SearchQuery::new(raw));
        let query = &self.state.query;

        self.outcome = filter::apply(self.catalog, &self.state.category, query);
        self.empty_state =
            (query.is_active() && self.outcome.visible_count == 0).then(|| raw.to_string());

        let mut intents: Vec<Intent> = Intent::visibility(&self.outcome).collect();
        intents.push(Intent::InputValue(query.display_value().to_string()));
        intents.push(Intent::ClearButton(query.is_active()));
        intents.push(Intent::EmptyState(self.empty_state.clone()));

        let suggestions = suggest::rank(self.catalog, query, self.options.max_suggestions);
        log::debug!(
            "query '{}' in {}: {} visible, {} suggestions",
            query.normalized(),
            self.state.category,
            self.outcome.visible_count,
            suggestions.len()
        );

        let show = open_dropdown && query.is_active();
        intents.extend(self.dropdown.show(revision, show, suggestions));
        intents
    }

    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub const fn outcome(&self) -> &FilterOutcome {
        &self.outcome
    }

    /// Term shown in the empty-state message, if it is visible
    #[must_use]
    pub fn empty_state(&self) -> Option<&str> {
        self.empty_state.as_deref()
    }

    #[must_use]
    pub const fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    /// Current suggestion list
    #[must_use]
    pub fn suggestions(&self) -> &[SuggestionEntry] {
        self.dropdown.entries()
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[must_use]
    pub const fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Whether a blur dismissal is waiting to fire
    #[must_use]
    pub const fn is_dismissal_pending(&self) -> bool {
        self.blur.is_pending()
    }
}
