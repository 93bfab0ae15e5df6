//! Browse command - interactive terminal search

use crate::{
    MenufindError,
    catalog::Catalog,
    config::MenufindConfig,
    ui::ratatui_adapter::{BrowseApp, Theme},
};
use std::path::Path;

type Result<T> = std::result::Result<T, MenufindError>;

/// Execute the browse command
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the terminal fails.
pub fn execute(catalog_path: &Path, config: &MenufindConfig) -> Result<()> {
    let catalog = Catalog::load(catalog_path)?;
    if catalog.is_empty() {
        return Err(MenufindError::InvalidInput(format!(
            "Catalog {} has no items",
            catalog_path.display()
        )));
    }

    BrowseApp::new(&catalog, config)
        .with_theme(Theme::from(config.theme))
        .run()?;
    Ok(())
}
