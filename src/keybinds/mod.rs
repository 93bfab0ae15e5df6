//! Keybind system for the search dropdown.
//!
//! Maps key strings (`"down"`, `"ctrl-n"`, `"enter"`) to the navigation
//! actions the dropdown understands. Bindings are configurable per action.

pub mod config;

pub use config::{KeybindConfig, KeybindDef, action_name};
