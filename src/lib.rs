//! Menufind - live search over a restaurant menu
//!
//! This library provides the engine behind a menu page's search box: a
//! substring filter over a fixed catalog, a capped suggestion dropdown with
//! keyboard and pointer selection, and a category filter that takes
//! precedence over the query. Rendering is abstracted behind
//! [`ui::PageSurface`]; a ratatui frontend and a recording surface for tests
//! are included, along with the page's contact form validation.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod contact;
pub mod keybinds;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum MenufindError {
    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Search error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Terminal frontend error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// A contact form field failed validation
    #[error("Invalid contact form: {0}")]
    ValidationError(#[from] contact::ValidationError),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
