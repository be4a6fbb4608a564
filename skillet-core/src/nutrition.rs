//! Coarse nutrition estimation.
//!
//! This is a deliberate placeholder model, not a nutrition lookup: calories
//! scale with ingredient name length, protein and carbs with membership in
//! the Proteins and Pantry categories. The factors are part of the contract
//! and must not be "corrected" against real nutrition data.

use crate::catalog::{Catalog, PANTRY_CATEGORY, PROTEINS_CATEGORY};
use crate::selection::SelectionSet;
use serde::{Deserialize, Serialize};

const CALORIES_PER_CHAR: u32 = 10;
const PROTEIN_PER_ITEM: u32 = 15;
const CARBS_PER_ITEM: u32 = 20;

/// Estimated nutritional content of a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionEstimate {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
}

/// Estimate the nutrition of a selection.
///
/// Operates on the raw sequence: an ingredient listed twice counts twice.
/// Never fails; an empty selection estimates to all zeros.
pub fn estimate_nutrition(catalog: &Catalog, selection: &SelectionSet) -> NutritionEstimate {
    let proteins = catalog.category(PROTEINS_CATEGORY);
    let pantry = catalog.category(PANTRY_CATEGORY);

    let mut estimate = NutritionEstimate::default();
    for ingredient in selection.iter() {
        estimate.calories += CALORIES_PER_CHAR * ingredient.chars().count() as u32;
        if proteins.is_some_and(|c| c.contains(ingredient)) {
            estimate.protein += PROTEIN_PER_ITEM;
        }
        if pantry.is_some_and(|c| c.contains(ingredient)) {
            estimate.carbs += CARBS_PER_ITEM;
        }
    }
    estimate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn selection(items: &[&str]) -> SelectionSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_is_all_zeros() {
        assert_eq!(
            estimate_nutrition(catalog(), &SelectionSet::new()),
            NutritionEstimate::default()
        );
    }

    #[test]
    fn test_calories_from_name_length() {
        let estimate = estimate_nutrition(catalog(), &selection(&["Eggs"]));
        assert_eq!(estimate.calories, 40);
    }

    #[test]
    fn test_protein_counts_proteins_category() {
        let estimate = estimate_nutrition(catalog(), &selection(&["Eggs", "Chicken", "Tomato"]));
        assert_eq!(estimate.protein, 30);
    }

    #[test]
    fn test_carbs_counts_pantry_category() {
        let estimate = estimate_nutrition(catalog(), &selection(&["Rice", "Pasta", "Basil"]));
        assert_eq!(estimate.carbs, 40);
    }

    #[test]
    fn test_duplicates_count_multiple_times() {
        let single = estimate_nutrition(catalog(), &selection(&["Rice"]));
        let double = estimate_nutrition(catalog(), &selection(&["Rice", "Rice"]));
        assert_eq!(double.calories, 2 * single.calories);
        assert_eq!(double.carbs, 2 * single.carbs);
    }

    #[test]
    fn test_unknown_ingredient_still_counts_calories() {
        let estimate = estimate_nutrition(catalog(), &selection(&["Xy"]));
        assert_eq!(estimate.calories, 20);
        assert_eq!(estimate.protein, 0);
        assert_eq!(estimate.carbs, 0);
    }
}
