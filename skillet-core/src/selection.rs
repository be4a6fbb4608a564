//! The user's current ingredient selection.
//!
//! Insertion order is preserved for display; the analytics functions
//! deduplicate where their contracts call for it.

use serde::{Deserialize, Serialize};

/// An ordered sequence of ingredient names chosen by the user.
///
/// [`SelectionSet::add`] rejects duplicates, matching the picker behavior,
/// but a set built from an existing sequence keeps whatever it is given so
/// that persisted snapshots round-trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    items: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient to the selection. Returns false if already present.
    pub fn add(&mut self, ingredient: impl Into<String>) -> bool {
        let ingredient = ingredient.into();
        if self.items.contains(&ingredient) {
            return false;
        }
        self.items.push(ingredient);
        true
    }

    /// Remove an ingredient. Returns false if it was not selected.
    pub fn remove(&mut self, ingredient: &str) -> bool {
        match self.items.iter().position(|i| i == ingredient) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The raw sequence, duplicates and all.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Unique ingredients in first-occurrence order.
    pub fn deduped(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for item in self.iter() {
            if !seen.contains(&item) {
                seen.push(item);
            }
        }
        seen
    }
}

impl From<Vec<String>> for SelectionSet {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

impl FromIterator<String> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_duplicates() {
        let mut selection = SelectionSet::new();
        assert!(selection.add("Tomato"));
        assert!(!selection.add("Tomato"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut selection = SelectionSet::new();
        selection.add("Tomato");
        assert!(selection.remove("Tomato"));
        assert!(!selection.remove("Tomato"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut selection = SelectionSet::new();
        selection.add("Onion");
        selection.add("Basil");
        selection.add("Chicken");
        let items: Vec<&str> = selection.iter().collect();
        assert_eq!(items, vec!["Onion", "Basil", "Chicken"]);
    }

    #[test]
    fn test_deduped_keeps_first_occurrence_order() {
        let selection = SelectionSet::from(vec![
            "Rice".to_string(),
            "Eggs".to_string(),
            "Rice".to_string(),
            "Tofu".to_string(),
        ]);
        assert_eq!(selection.deduped(), vec!["Rice", "Eggs", "Tofu"]);
        // The raw sequence still carries the duplicate.
        assert_eq!(selection.len(), 4);
    }
}
