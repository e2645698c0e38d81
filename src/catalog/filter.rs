use crate::domain::{CategorySelection, LinkItem, LinkQuery};

/// True when `item` passes every active predicate of `query`.
pub fn matches(item: &LinkItem, query: &LinkQuery) -> bool {
    if !query.include_unlinked && !item.has_url() {
        return false;
    }
    if let CategorySelection::Named(category) = &query.category {
        if item.category != *category {
            return false;
        }
    }
    if !query.query.is_empty() && !item.haystack().contains(&query.query.to_lowercase()) {
        return false;
    }
    true
}

/// Items passing `query`, in their original order.
pub fn filter_links<'a>(items: &'a [LinkItem], query: &LinkQuery) -> Vec<&'a LinkItem> {
    items.iter().filter(|item| matches(item, query)).collect()
}
