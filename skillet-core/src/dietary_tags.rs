//! Dietary tag resolution for ingredient selections.

use crate::catalog::Catalog;
use crate::selection::SelectionSet;
use std::collections::BTreeSet;

/// Resolve the set of dietary tags implied by a selection.
///
/// Unions the tags of every category containing each selected ingredient.
/// Ingredients with no catalog entry contribute nothing. An ingredient that
/// appears in several categories contributes the tags of all of them.
pub fn resolve_tags(catalog: &Catalog, selection: &SelectionSet) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();

    for ingredient in selection.deduped() {
        let mut known = false;
        for category in catalog.categories_of(ingredient) {
            known = true;
            tags.extend(category.tags().iter().cloned());
        }
        if !known {
            tracing::debug!(ingredient, "not in catalog, no dietary tags");
        }
    }

    tags
}
