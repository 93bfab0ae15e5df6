//! Surface abstraction layer
//!
//! The search engine returns intents; this module turns them into calls on a
//! concrete surface. The abstraction allows the same engine to drive a
//! terminal frontend, a test recorder, or any other host without changing
//! search logic.
//!
//! # Core Traits
//!
//! - **`PageSurface`** - Visibility toggles, dropdown rendering, scroll and focus
//! - **`OutputWriter`** - Status messages with severity levels (CLI output)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Search Engine                      │
//! │   (coordinator, filter, dropdown)       │
//! └────────────────┬────────────────────────┘
//!                  │ Vec<Intent>
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      SearchWidget                       │
//! │   (dispatches intents, owns clock)      │
//! └────────────────┬────────────────────────┘
//!                  │ PageSurface calls
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ Recording     │  │ TerminalSurface   │
//! │ (tests)       │  │ (ratatui)         │
//! └───────────────┘  └───────────────────┘
//! ```

pub mod error;
pub mod mock;
pub mod output;
pub mod ratatui_adapter;
pub mod traits;
pub mod widget;

pub use error::{Result, UiError};
pub use mock::{MemoryWriter, RecordingSurface};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use traits::PageSurface;
pub use widget::{SearchWidget, SearchWidgetBuilder};
