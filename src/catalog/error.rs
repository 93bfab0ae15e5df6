//! Catalog-specific error types
//!
//! Building a catalog from in-memory groups never fails; malformed entries are
//! skipped instead. Errors only occur when category groups are loaded from a
//! file on disk.
//!
//! # Error Types
//!
//! - **`NotFound`**: The catalog file does not exist
//! - **`ConfigError`**: The file could not be read or deserialized

use std::path::PathBuf;
use thiserror::Error;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file does not exist
    #[error("Catalog file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Catalog file could not be parsed
    #[error("Failed to read catalog: {0}")]
    ConfigError(#[from] config::ConfigError),
}
