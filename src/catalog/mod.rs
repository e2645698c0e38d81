//! Loader, categorizer and filter over the link catalog.

pub mod cache;
pub mod categories;
pub mod filter;
pub mod loader;

pub use cache::{load_cached, LinkCache};
pub use categories::distinct_categories;
pub use filter::{filter_links, matches};
pub use loader::{load_links, parse_links};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::constants::ALL_CATEGORIES;
use crate::domain::{LinkItem, LinkQuery};
use crate::error::Result;

/// A loaded links file together with its ordered categories.
#[derive(Debug, Clone)]
pub struct Catalog {
    source: PathBuf,
    items: Arc<Vec<LinkItem>>,
    categories: Vec<String>,
}

impl Catalog {
    /// Load through the process-wide cache.
    pub fn open(path: &Path) -> Result<Self> {
        let items = load_cached(path)?;
        Ok(Self::from_items(path, items))
    }

    pub fn from_items(source: impl Into<PathBuf>, items: Arc<Vec<LinkItem>>) -> Self {
        let categories = distinct_categories(&items);
        Self {
            source: source.into(),
            items,
            categories,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn items(&self) -> &[LinkItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Selector options: `"All"` followed by the ordered categories.
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(self.categories.iter().cloned())
            .collect()
    }

    pub fn filter(&self, query: &LinkQuery) -> Vec<&LinkItem> {
        filter_links(&self.items, query)
    }
}
