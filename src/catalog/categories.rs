use std::collections::BTreeSet;

use crate::constants::PREFERRED_CATEGORIES;
use crate::domain::LinkItem;

/// Distinct categories: preferred ones first in their fixed order, then the
/// rest in ascending lexicographic order.
pub fn distinct_categories(items: &[LinkItem]) -> Vec<String> {
    let present: BTreeSet<&str> = items.iter().map(|it| it.category.as_str()).collect();

    let preferred = PREFERRED_CATEGORIES
        .iter()
        .copied()
        .filter(|cat| present.contains(cat));
    let remaining = present
        .iter()
        .copied()
        .filter(|cat| !PREFERRED_CATEGORIES.contains(cat));

    preferred.chain(remaining).map(str::to_string).collect()
}
