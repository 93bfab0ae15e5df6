//! Search widget and builder pattern
//!
//! Binds an [`InputCoordinator`] to a [`PageSurface`] and a [`Clock`]:
//! ```
//! use menufind::catalog::{Catalog, CategoryGroup, EntrySource};
//! use menufind::ui::{RecordingSurface, SearchWidget};
//! # fn example() -> Result<(), menufind::search::SearchError> {
//! let catalog = Catalog::build(vec![CategoryGroup::new(
//!     "desserts",
//!     vec![EntrySource::new("Tiramisu", "Mascarpone", "$7")],
//! )]);
//!
//! let mut widget = SearchWidget::builder()
//!     .catalog(&catalog)
//!     .surface(RecordingSurface::new())
//!     .build()?;
//!
//! widget.type_text("tira");
//! assert!(widget.surface().dropdown_visible);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use super::traits::PageSurface;
use crate::catalog::Catalog;
use crate::config::MenufindConfig;
use crate::search::{
    Clock, InputCoordinator, Intent, NavKey, SearchError, SearchOptions, SystemClock,
};

/// A search box bound to a surface
///
/// Every event is forwarded to the coordinator and the resulting intents are
/// applied to the surface before the method returns.
pub struct SearchWidget<'a, S: PageSurface, C: Clock = SystemClock> {
    coordinator: InputCoordinator<'a>,
    surface: S,
    clock: C,
}

impl<'a, S: PageSurface> SearchWidget<'a, S, SystemClock> {
    /// Create a new builder for constructing a `SearchWidget`
    #[must_use]
    pub fn builder() -> SearchWidgetBuilder<'a, S, SystemClock> {
        SearchWidgetBuilder::new()
    }
}

impl<'a, S: PageSurface, C: Clock> SearchWidget<'a, S, C> {
    /// Text in the query input changed
    pub fn type_text(&mut self, raw: &str) {
        let intents = self.coordinator.on_query_changed(raw);
        self.dispatch(&intents);
    }

    /// Category selector changed (`""` selects all)
    pub fn select_category(&mut self, key: &str) {
        let intents = self.coordinator.on_category_changed(key);
        self.dispatch(&intents);
    }

    /// Clear button pressed
    pub fn clear(&mut self) {
        let intents = self.coordinator.clear();
        self.dispatch(&intents);
    }

    /// Navigation key pressed in the query input
    pub fn key(&mut self, key: NavKey) {
        let intents = self.coordinator.on_key(key);
        self.dispatch(&intents);
    }

    /// Pointer pressed on the dropdown entry at `position`
    pub fn pointer_select(&mut self, position: usize) {
        let intents = self.coordinator.on_pointer_select(position);
        self.dispatch(&intents);
    }

    /// Query input lost focus
    pub fn blur(&mut self) {
        let intents = self.coordinator.on_blur(self.clock.now());
        self.dispatch(&intents);
    }

    /// Query input gained focus
    pub fn focus(&mut self) {
        let intents = self.coordinator.on_focus();
        self.dispatch(&intents);
    }

    /// Run deferred work that is due; call this from the host's event loop
    pub fn tick(&mut self) {
        let intents = self.coordinator.tick(self.clock.now());
        self.dispatch(&intents);
    }

    /// Re-render everything from the current state
    pub fn refresh(&mut self) {
        let intents = self.coordinator.render_all();
        self.dispatch(&intents);
    }

    fn dispatch(&mut self, intents: &[Intent]) {
        for intent in intents {
            intent.apply_to(&mut self.surface);
        }
    }

    #[must_use]
    pub const fn coordinator(&self) -> &InputCoordinator<'a> {
        &self.coordinator
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Take the surface back
    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// Builder for `SearchWidget`
///
/// The catalog and the surface are required; a widget without them cannot do
/// anything useful, so `build` refuses instead of degrading.
pub struct SearchWidgetBuilder<'a, S: PageSurface, C: Clock> {
    catalog: Option<&'a Catalog>,
    surface: Option<S>,
    clock: C,
    options: SearchOptions,
}

impl<'a, S: PageSurface> SearchWidgetBuilder<'a, S, SystemClock> {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: None,
            surface: None,
            clock: SystemClock,
            options: SearchOptions::default(),
        }
    }
}

impl<S: PageSurface> Default for SearchWidgetBuilder<'_, S, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S: PageSurface, C: Clock> SearchWidgetBuilder<'a, S, C> {
    /// Set the catalog (required)
    #[must_use]
    pub const fn catalog(mut self, catalog: &'a Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the rendering surface (required)
    #[must_use]
    pub fn surface(mut self, surface: S) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Set engine options
    #[must_use]
    pub const fn options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Take engine options from the application configuration
    #[must_use]
    pub const fn config(self, config: &MenufindConfig) -> Self {
        self.options(config.search_options())
    }

    /// Replace the clock used for deferred dismissal
    #[must_use]
    pub fn clock<C2: Clock>(self, clock: C2) -> SearchWidgetBuilder<'a, S, C2> {
        SearchWidgetBuilder {
            catalog: self.catalog,
            surface: self.surface,
            clock,
            options: self.options,
        }
    }

    /// Build the `SearchWidget` and render its initial state
    ///
    /// # Errors
    ///
    /// Returns `SearchError::BuildError` if:
    /// - Catalog is not provided
    /// - Surface is not provided
    pub fn build(self) -> Result<SearchWidget<'a, S, C>, SearchError> {
        let catalog = self
            .catalog
            .ok_or_else(|| SearchError::BuildError("Catalog is required".to_string()))?;
        let surface = self
            .surface
            .ok_or_else(|| SearchError::BuildError("Surface is required".to_string()))?;

        let mut widget = SearchWidget {
            coordinator: InputCoordinator::new(catalog, self.options),
            surface,
            clock: self.clock,
        };
        widget.refresh();
        Ok(widget)
    }
}
