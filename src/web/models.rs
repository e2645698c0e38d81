use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::{CategorySelection, LinkItem, LinkQuery};

/// Query-string parameters accepted by `/`, `/links` and `/api/links`.
///
/// `filtered` is set by the filter form; when present an absent
/// `show_unlinked` means the checkbox was cleared.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct LinkParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub show_unlinked: Option<String>,
    pub filtered: Option<String>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

impl LinkParams {
    pub fn to_query(&self) -> LinkQuery {
        LinkQuery::new(
            self.q.clone().unwrap_or_default(),
            CategorySelection::parse(self.category.as_deref().unwrap_or_default()),
            self.include_unlinked(),
        )
    }

    fn include_unlinked(&self) -> bool {
        match self.show_unlinked.as_deref() {
            Some(value) => parse_flag(value),
            None => self.filtered.is_none(),
        }
    }

    /// Apply `offset`/`limit` slicing.
    pub fn page<'a>(&self, links: Vec<&'a LinkItem>) -> Vec<&'a LinkItem> {
        let offset = self.offset.unwrap_or(0);
        let limit = self.limit.unwrap_or(usize::MAX);
        links.into_iter().skip(offset).take(limit).collect()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "on" | "true" | "1" | "yes"
    )
}

/// Body of `GET /api/links`.
#[derive(Serialize, Debug)]
pub struct LinksResponse<'a> {
    pub app: &'a str,
    pub count: usize,
    pub links: Vec<&'a LinkItem>,
}

/// A link as rendered on a card.
#[derive(Debug, Clone)]
pub struct LinkCard {
    pub name: String,
    pub description: String,
    pub note: String,
    pub category: String,
    pub url: Option<String>,
    pub badge_class: &'static str,
    pub badge_label: &'static str,
    pub tags: Vec<String>,
}

impl From<&LinkItem> for LinkCard {
    fn from(item: &LinkItem) -> Self {
        let badge = item.badge();
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            note: item.note.clone(),
            category: item.category.clone(),
            url: item.url.clone(),
            badge_class: badge.css_class(),
            badge_label: badge.label(),
            tags: item.display_tags().to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub name: String,
    pub selected: bool,
}

/// Everything the listing templates need: controls state, cards and counts.
#[derive(Debug, Clone)]
pub struct Listing {
    pub query: String,
    pub categories: Vec<CategoryOption>,
    pub show_unlinked: bool,
    pub cards: Vec<LinkCard>,
    pub shown: usize,
    pub total: usize,
    pub source: String,
}

impl Listing {
    pub fn build(catalog: &Catalog, query: &LinkQuery) -> Self {
        let matched = catalog.filter(query);
        let selected = query.category.as_param();
        Self {
            query: query.query.clone(),
            categories: catalog
                .category_options()
                .into_iter()
                .map(|name| CategoryOption {
                    selected: name == selected,
                    name,
                })
                .collect(),
            show_unlinked: query.include_unlinked,
            shown: matched.len(),
            total: catalog.len(),
            cards: matched.into_iter().map(LinkCard::from).collect(),
            source: catalog.source().display().to_string(),
        }
    }
}
