//! Query and search state
//!
//! [`SearchState`] is the single authoritative record of what the user is
//! searching for: the query text and the active category. It is owned by the
//! [`InputCoordinator`](super::InputCoordinator); everything else reads it.

use serde::Serialize;
use std::fmt;

/// Free-text query
///
/// Keeps the raw text exactly as entered, for display, next to its normalized
/// form (trimmed and lower-cased) used for matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    normalized: String,
}

impl SearchQuery {
    /// Create a query from raw input text
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = raw.trim().to_lowercase();
        Self { raw, normalized }
    }

    /// Text as entered
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Trimmed, lower-cased text used for matching
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Value shown in the input control (leading whitespace removed)
    #[must_use]
    pub fn display_value(&self) -> &str {
        self.raw.trim_start()
    }

    /// A query is active when it has non-whitespace content
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.normalized.is_empty()
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Mutually exclusive category filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Every category is visible
    #[default]
    All,
    /// Only the category with this key is visible
    Key(String),
}

impl CategoryFilter {
    /// Check whether a category key passes the filter
    #[must_use]
    pub fn admits(&self, key: &str) -> bool {
        match self {
            Self::All => true,
            Self::Key(active) => active == key,
        }
    }
}

impl From<&str> for CategoryFilter {
    /// The empty key selects all categories
    fn from(key: &str) -> Self {
        if key.is_empty() {
            Self::All
        } else {
            Self::Key(key.to_string())
        }
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(key: Option<&str>) -> Self {
        key.map_or(Self::All, Self::from)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Key(key) => write!(f, "{key}"),
        }
    }
}

/// Authoritative search state
///
/// `revision` increases every time the query is replaced, so consumers can
/// discard work that was computed for an older query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: SearchQuery,
    pub category: CategoryFilter,
    pub revision: u64,
}

impl SearchState {
    /// Replace the query and bump the revision
    pub fn set_query(&mut self, query: SearchQuery) -> u64 {
        self.query = query;
        self.revision += 1;
        self.revision
    }
}
