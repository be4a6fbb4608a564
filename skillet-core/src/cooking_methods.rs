//! Cooking method suggestions for ingredient selections.

use crate::catalog::Catalog;
use crate::selection::SelectionSet;
use std::collections::BTreeSet;

/// Suggest cooking methods for a selection.
///
/// Unions the `cooking_methods` of every selected ingredient that has a
/// profile. An empty result means no suggestion is available, which callers
/// must treat as optional rather than as a failure.
pub fn suggest_methods(catalog: &Catalog, selection: &SelectionSet) -> BTreeSet<String> {
    let mut methods = BTreeSet::new();

    for ingredient in selection.deduped() {
        if let Some(profile) = catalog.profile_of(ingredient) {
            methods.extend(profile.cooking_methods.iter().cloned());
        }
    }

    methods
}
