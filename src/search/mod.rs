//! Search-and-filter engine
//!
//! Incremental free-text search combined with a category filter and an
//! autocomplete dropdown:
//! 1. `filter` decides which categories and items are visible
//! 2. `suggest` computes the dropdown entries for the query
//! 3. `dropdown` tracks dropdown visibility and keyboard selection
//! 4. `coordinator` owns the query state and ties the three together
//!
//! Transitions return [`Intent`]s instead of rendering; see [`crate::ui`] for
//! the surfaces that apply them.

pub mod coordinator;
pub mod dropdown;
pub mod error;
pub mod filter;
pub mod intent;
pub mod query;
pub mod suggest;
pub mod timer;

pub use coordinator::{InputCoordinator, NavKey, SearchOptions};
pub use dropdown::Dropdown;
pub use error::SearchError;
pub use filter::{FilterOutcome, ItemMatchExt};
pub use intent::{Intent, ScrollBlock};
pub use query::{CategoryFilter, SearchQuery, SearchState};
pub use suggest::{MAX_SUGGESTIONS, SuggestionEntry};
pub use timer::{Clock, Deferred, ManualClock, SystemClock};
