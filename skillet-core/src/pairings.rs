//! Popular ingredient combinations across the recipe history.

use crate::history::RecipeEntry;
use std::collections::{BTreeSet, HashMap};

/// Default number of pairs reported by the analytics view.
pub const DEFAULT_TOP_PAIRS: usize = 3;

/// How often two distinct ingredients co-occurred across history entries.
/// `first < second` lexicographically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCount {
    pub first: String,
    pub second: String,
    pub count: u32,
}

/// Rank co-occurring ingredient pairs across all history entries.
///
/// Each entry's selection is deduplicated, then every unordered pair of
/// distinct ingredients in it counts once, under a canonical lexicographic
/// key. Pairs are ranked by count descending; ties keep first-encountered
/// order (entries in history order, pairs in lexicographic order within an
/// entry). Returns at most `k` pairs; an empty history yields an empty vec.
pub fn top_pairs(entries: &[RecipeEntry], k: usize) -> Vec<PairCount> {
    let mut counts: HashMap<(String, String), u32> = HashMap::new();
    // Keys in first-encountered order, for the tie-break.
    let mut order: Vec<(String, String)> = Vec::new();

    for entry in entries {
        // BTreeSet both dedupes the entry's selection and fixes the pair
        // enumeration order within the entry.
        let unique: BTreeSet<&str> = entry.ingredients.iter().map(String::as_str).collect();
        let unique: Vec<&str> = unique.into_iter().collect();

        for (i, first) in unique.iter().enumerate() {
            for second in &unique[i + 1..] {
                let key = (first.to_string(), second.to_string());
                let count = counts.entry(key.clone()).or_insert(0);
                if *count == 0 {
                    order.push(key);
                }
                *count += 1;
            }
        }
    }

    // Stable sort keeps first-encountered order among equal counts.
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));

    order
        .into_iter()
        .take(k)
        .map(|key| {
            let count = counts[&key];
            PairCount {
                first: key.0,
                second: key.1,
                count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::RecipeEntry;

    fn entry(ingredients: &[&str]) -> RecipeEntry {
        RecipeEntry::new(
            "recipe".to_string(),
            ingredients.iter().map(|s| s.to_string()).collect(),
            vec![],
        )
    }

    fn pair(first: &str, second: &str, count: u32) -> PairCount {
        PairCount {
            first: first.to_string(),
            second: second.to_string(),
            count,
        }
    }

    #[test]
    fn test_empty_history() {
        assert!(top_pairs(&[], 3).is_empty());
    }

    #[test]
    fn test_counts_accumulate_across_entries() {
        let history = [
            entry(&["A", "B"]),
            entry(&["A", "B"]),
            entry(&["A", "C"]),
        ];
        assert_eq!(
            top_pairs(&history, 2),
            vec![pair("A", "B", 2), pair("A", "C", 1)]
        );
    }

    #[test]
    fn test_pairs_canonicalized_lexicographically() {
        let history = [entry(&["Basil", "Tomato"]), entry(&["Tomato", "Basil"])];
        assert_eq!(top_pairs(&history, 3), vec![pair("Basil", "Tomato", 2)]);
    }

    #[test]
    fn test_duplicates_within_entry_count_once() {
        let history = [entry(&["Rice", "Rice", "Eggs"])];
        assert_eq!(top_pairs(&history, 3), vec![pair("Eggs", "Rice", 1)]);
    }

    #[test]
    fn test_fewer_pairs_than_k_returns_all() {
        let history = [entry(&["A", "B"])];
        assert_eq!(top_pairs(&history, 10), vec![pair("A", "B", 1)]);
    }

    #[test]
    fn test_ties_keep_first_encountered_order() {
        // All three pairs of the first entry count once, plus one pair from
        // the second entry. First-encountered order breaks the 1-count tie.
        let history = [entry(&["A", "B", "C"]), entry(&["B", "C"])];
        assert_eq!(
            top_pairs(&history, 3),
            vec![pair("B", "C", 2), pair("A", "B", 1), pair("A", "C", 1)]
        );
    }

    #[test]
    fn test_k_zero_returns_nothing() {
        let history = [entry(&["A", "B"])];
        assert!(top_pairs(&history, 0).is_empty());
    }

    #[test]
    fn test_single_ingredient_entries_produce_no_pairs() {
        let history = [entry(&["A"]), entry(&[])];
        assert!(top_pairs(&history, 3).is_empty());
    }
}
