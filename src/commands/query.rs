//! Query command - run one query and report what the page would show

use crate::{
    MenufindError,
    catalog::{Catalog, Item},
    config::MenufindConfig,
    search::{CategoryFilter, InputCoordinator, SearchOptions, SuggestionEntry},
    ui::OutputWriter,
};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

type Result<T> = std::result::Result<T, MenufindError>;

/// A visible item in a query report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportItem {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
}

impl From<&Item> for ReportItem {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.clone(),
            category: item.category.clone(),
        }
    }
}

/// Everything one query shows: visible items, empty state and suggestions
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    pub query: String,
    pub category: CategoryFilter,
    pub visible_count: usize,
    pub total_count: usize,
    pub items: Vec<ReportItem>,
    pub empty_state: Option<String>,
    pub suggestions: Vec<SuggestionEntry>,
}

/// Run a query the way the page would: pick the category, then type the text
#[must_use]
pub fn run(
    catalog: &Catalog,
    text: &str,
    category: Option<&str>,
    options: SearchOptions,
) -> QueryReport {
    let mut coordinator = InputCoordinator::new(catalog, options);
    if let Some(key) = category {
        coordinator.on_category_changed(key);
    }
    coordinator.on_query_changed(text);

    let outcome = coordinator.outcome();
    let items = outcome
        .visible_items()
        .filter_map(|id| catalog.item(id))
        .map(ReportItem::from)
        .collect();

    QueryReport {
        query: text.to_string(),
        category: coordinator.state().category.clone(),
        visible_count: outcome.visible_count,
        total_count: catalog.len(),
        items,
        empty_state: coordinator.empty_state().map(str::to_string),
        suggestions: coordinator.suggestions().to_vec(),
    }
}

/// Execute the query command
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the JSON report cannot
/// be serialized.
pub fn execute(
    catalog_path: &Path,
    text: &str,
    category: Option<&str>,
    json: bool,
    config: &MenufindConfig,
    output: &impl OutputWriter,
) -> Result<()> {
    let catalog = Catalog::load(catalog_path)?;

    if let Some(key) = category.filter(|k| !k.is_empty())
        && catalog.category_by_key(key).is_none()
    {
        log::warn!("category '{key}' is not in {}", catalog_path.display());
        output.warning(&format!("Unknown category '{key}'; no items will match"));
    }

    let report = run(&catalog, text, category, config.search_options());

    if json {
        output.write(&serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, output);
    }
    Ok(())
}

fn print_report(report: &QueryReport, output: &impl OutputWriter) {
    for item in &report.items {
        output.write(&format!(
            "{}  {}  {}",
            item.name.bold(),
            item.price.green(),
            format!("({})", item.category).dimmed()
        ));
    }

    if let Some(term) = &report.empty_state {
        output.warning(&format!("No results for \"{term}\""));
    }

    output.info(&format!(
        "{} of {} items shown (category: {})",
        report.visible_count, report.total_count, report.category
    ));

    if !report.suggestions.is_empty() {
        output.info("Suggestions:");
        for entry in &report.suggestions {
            output.info(&format!("  {}. {}  {}", entry.position + 1, entry.name, entry.price));
        }
    }
}
