//! Ratatui-based terminal frontend
//!
//! Implements [`PageSurface`](crate::ui::PageSurface) for the terminal and runs
//! the interactive `browse` command.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           BrowseApp                         │
//! │  (event loop, owns the SearchWidget)        │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  Terminal  │ │  Ratatui  │ │ Crossterm │
//! │  Surface   │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! # Layout
//!
//! - **Search bar** with clear button hint
//! - **Category tabs** ("All" plus every catalog category)
//! - **Menu listing** with the empty-state message
//! - **Suggestion dropdown** drawn over the listing
//! - **Status bar** and **help bar**

mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::BrowseApp;
pub use events::{Action, key_to_string, map_key, map_mouse};
pub use state::{Focus, MenuRow, StatusMessage, TerminalSurface, scroll_offset_for};
pub use theme::Theme;
