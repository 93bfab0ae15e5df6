//! Search-specific error types
//!
//! The search engine itself never fails: malformed catalog data and dropdown
//! operations on an empty or hidden list degrade to no-ops. Errors only arise
//! while assembling a search widget, where a missing collaborator is a
//! configuration fault that must surface immediately.
//!
//! # Error Types
//!
//! - **`BuildError`**: A required collaborator (catalog, surface) was not provided
//! - **`CatalogError`**: The catalog could not be loaded (wraps `CatalogError`)
//! - **`UiError`**: The frontend failed while running the widget (wraps `UiError`)

use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    CatalogError(#[from] crate::catalog::CatalogError),

    /// UI error occurred while running the search widget
    #[error("UI error: {0}")]
    UiError(#[from] crate::ui::UiError),

    /// Failed to assemble the search widget
    #[error("Failed to build search widget: {0}")]
    BuildError(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
