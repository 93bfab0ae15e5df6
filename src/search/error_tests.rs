//! Unit tests for search error types

#[cfg(test)]
mod tests {
    use crate::catalog::CatalogError;
    use crate::search::error::SearchError;
    use crate::ui::UiError;
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_build_error() {
        let error = SearchError::BuildError("Catalog is required".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to build search widget: Catalog is required"
        );
    }

    #[test]
    fn test_catalog_error_from_catalog_error() {
        let catalog_error = CatalogError::NotFound(PathBuf::from("menu.toml"));
        let search_error: SearchError = catalog_error.into();

        assert!(search_error.to_string().contains("Catalog error"));
        assert!(search_error.to_string().contains("menu.toml"));
    }

    #[test]
    fn test_ui_error_from_ui_error() {
        let ui_error = UiError::Terminal("no tty".to_string());
        let search_error: SearchError = ui_error.into();

        assert!(matches!(search_error, SearchError::UiError(_)));
        assert!(search_error.to_string().contains("no tty"));
    }

    #[test]
    fn test_error_source_chain() {
        let catalog_error = CatalogError::NotFound(PathBuf::from("menu.toml"));
        let search_error = SearchError::from(catalog_error);

        assert!(search_error.source().is_some());
    }

    #[test]
    fn test_build_error_has_no_source() {
        let error = SearchError::BuildError("Surface is required".to_string());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_debug() {
        let error = SearchError::BuildError("x".to_string());
        let debug = format!("{error:?}");
        assert!(debug.contains("BuildError"));
    }
}
