//! Catalog data shapes shared by the loader, the filter and both shells.

use serde::{Deserialize, Serialize};

use crate::constants::{ALL_CATEGORIES, MAX_CARD_TAGS};

/// One catalog entry after normalization.
///
/// `name` and `category` are never empty and `tags` is always a list; the
/// loader guarantees both, so nothing downstream re-checks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub status: String,
    pub note: String,
}

impl LinkItem {
    pub fn has_url(&self) -> bool {
        self.url.is_some()
    }

    pub fn badge(&self) -> StatusBadge {
        StatusBadge::from_status(&self.status)
    }

    /// Tags shown on a card.
    pub fn display_tags(&self) -> &[String] {
        let end = self.tags.len().min(MAX_CARD_TAGS);
        &self.tags[..end]
    }

    /// Lower-cased text searched by free-text queries.
    pub fn haystack(&self) -> String {
        let tags = self.tags.join(" ");
        [
            self.name.as_str(),
            self.description.as_str(),
            self.category.as_str(),
            tags.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

/// Display-only classification of `LinkItem::status`. Never used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Linked,
    Omitted,
    Caution,
}

impl StatusBadge {
    pub fn from_status(status: &str) -> Self {
        match status {
            "ok" => StatusBadge::Linked,
            "omitted" => StatusBadge::Omitted,
            _ => StatusBadge::Caution,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StatusBadge::Linked => "ok",
            StatusBadge::Omitted => "omitted",
            StatusBadge::Caution => "caution",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusBadge::Linked => "Linked",
            StatusBadge::Omitted => "Unlinked by default",
            StatusBadge::Caution => "Caution",
        }
    }
}

/// Category restriction applied by the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelection {
    #[default]
    All,
    Named(String),
}

impl CategorySelection {
    /// `""` and `"All"` mean no restriction; anything else is an exact name.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Named(raw.to_string())
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Named(name) => name,
        }
    }
}

/// Inputs of the filter: free text, category and the unlinked toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkQuery {
    pub query: String,
    pub category: CategorySelection,
    pub include_unlinked: bool,
}

impl Default for LinkQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CategorySelection::All,
            include_unlinked: true,
        }
    }
}

impl LinkQuery {
    pub fn new(query: impl Into<String>, category: CategorySelection, include_unlinked: bool) -> Self {
        Self {
            query: query.into(),
            category,
            include_unlinked,
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.query.is_empty() && self.category == CategorySelection::All && self.include_unlinked
    }
}
