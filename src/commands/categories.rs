//! Categories command - list the categories of a catalog

use crate::{MenufindError, catalog::Catalog, ui::OutputWriter};
use colored::Colorize;
use std::path::Path;

type Result<T> = std::result::Result<T, MenufindError>;

/// Execute the categories command
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub fn execute(catalog_path: &Path, output: &impl OutputWriter) -> Result<()> {
    let catalog = Catalog::load(catalog_path)?;
    list(&catalog, output);
    Ok(())
}

/// Print one line per category: key, title and item count
pub fn list(catalog: &Catalog, output: &impl OutputWriter) {
    if catalog.categories().is_empty() {
        output.info("No categories found in catalog.");
        return;
    }

    output.info("Categories:");
    for category in catalog.categories() {
        let count = catalog.items_in(category.id).count();
        output.write(&format!(
            "{}  {} ({})",
            category.key.cyan(),
            category.title,
            count.to_string().dimmed()
        ));
    }
}
