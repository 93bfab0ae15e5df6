//! Loading category groups from a catalog file
//!
//! A catalog file is TOML or JSON (picked by extension) with a `categories`
//! array:
//!
//! ```toml
//! [[categories]]
//! key = "mains"
//! title = "Main Courses"
//!
//! [[categories.items]]
//! name = "Margherita Pizza"
//! description = "Tomato, mozzarella, basil"
//! price = "$14"
//! ```

use super::error::CatalogError;
use super::{Catalog, CategoryGroup};
use config::{Config, File};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<CategoryGroup>,
}

/// Read the category groups stored in a catalog file
///
/// # Errors
///
/// Returns `CatalogError::NotFound` if the file does not exist, or
/// `CatalogError::ConfigError` if it cannot be parsed.
pub fn load_groups(path: impl AsRef<Path>) -> Result<Vec<CategoryGroup>, CatalogError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }

    let settings = Config::builder().add_source(File::from(path)).build()?;
    let file: CatalogFile = settings.try_deserialize()?;

    log::info!(
        "loaded {} category groups from {}",
        file.categories.len(),
        path.display()
    );

    Ok(file.categories)
}

impl Catalog {
    /// Load and build a catalog from a file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be found or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        load_groups(path).map(Self::build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_toml_groups() {
        let file = write_file(
            ".toml",
            r#"
[[categories]]
key = "mains"
title = "Main Courses"

[[categories.items]]
name = "Margherita Pizza"
description = "Tomato, mozzarella, basil"
price = "$14"

[[categories.items]]
name = "Lasagne"

[[categories]]
key = "desserts"
"#,
        );

        let groups = load_groups(file.path()).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "mains");
        assert_eq!(groups[0].title.as_deref(), Some("Main Courses"));
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[0].items[1].description, None);
        assert!(groups[1].items.is_empty());
    }

    #[test]
    fn test_load_json_catalog() {
        let file = write_file(
            ".json",
            r#"{"categories": [
                {"key": "drinks", "items": [{"name": "Espresso", "price": "$3"}]}
            ]}"#,
        );

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].price, "$3");
        assert_eq!(catalog.items()[0].category, "drinks");
    }

    #[test]
    fn test_missing_file() {
        let result = load_groups("definitely_missing_catalog.toml");
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_malformed_file() {
        let file = write_file(".toml", "[[categories]\nkey = ");
        let result = load_groups(file.path());
        assert!(matches!(result, Err(CatalogError::ConfigError(_))));
    }
}
