//! Static ingredient reference data.
//!
//! Categories (with their dietary tags) and per-ingredient profiles are
//! loaded from `data/catalog.json` at compile time. The tables are built
//! once and never mutated at runtime.

use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

/// Category name used by the nutrition estimator's protein count.
pub const PROTEINS_CATEGORY: &str = "Proteins";

/// Category name used by the nutrition estimator's carb count.
pub const PANTRY_CATEGORY: &str = "Pantry";

/// The raw JSON structure of the catalog data file.
#[derive(Deserialize)]
struct CatalogData {
    categories: HashMap<String, CategoryData>,
    profiles: HashMap<String, IngredientProfile>,
}

#[derive(Deserialize)]
struct CategoryData {
    items: Vec<String>,
    tags: Vec<String>,
}

/// Per-ingredient metadata: pairing suggestions, flavor notes, and
/// applicable cooking methods. Not every ingredient has one.
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientProfile {
    pub pairs_with: Vec<String>,
    pub flavor_profile: Vec<String>,
    pub cooking_methods: Vec<String>,
}

/// An ingredient category with its members and implied dietary tags.
#[derive(Debug)]
pub struct Category {
    name: String,
    items: BTreeSet<String>,
    tags: BTreeSet<String>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.items.contains(ingredient)
    }

    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

/// Immutable lookup tables over the ingredient vocabulary.
#[derive(Debug)]
pub struct Catalog {
    /// Sorted by category name for deterministic iteration.
    categories: Vec<Category>,
    profiles: HashMap<String, IngredientProfile>,
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let json = include_str!("../data/catalog.json");
    Catalog::from_json(json).expect("Failed to parse catalog.json")
});

/// The built-in catalog, parsed once on first use.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

impl Catalog {
    pub(crate) fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let data: CatalogData = serde_json::from_str(json)?;

        let mut categories: Vec<Category> = data
            .categories
            .into_iter()
            .map(|(name, category)| Category {
                name,
                items: category.items.into_iter().collect(),
                tags: category.tags.into_iter().collect(),
            })
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self {
            categories,
            profiles: data.profiles,
        })
    }

    /// All categories, ordered by name.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// The dietary tags implied by membership in a category.
    pub fn tags_of(&self, category_name: &str) -> Option<&BTreeSet<String>> {
        self.category(category_name).map(Category::tags)
    }

    /// The first category containing the ingredient, if any.
    ///
    /// The reference data partitions ingredients across categories, but
    /// callers that care about multi-category membership should use
    /// [`Catalog::categories_of`] instead of assuming uniqueness.
    pub fn category_of<'a>(&'a self, ingredient: &'a str) -> Option<&'a Category> {
        self.categories_of(ingredient).next()
    }

    /// Every category containing the ingredient.
    pub fn categories_of<'a>(&'a self, ingredient: &'a str) -> impl Iterator<Item = &'a Category> {
        self.categories.iter().filter(move |c| c.contains(ingredient))
    }

    /// The ingredient's profile, if one exists.
    pub fn profile_of(&self, ingredient: &str) -> Option<&IngredientProfile> {
        self.profiles.get(ingredient)
    }

    /// Suggested pairings for an ingredient. Empty when no profile exists.
    pub fn pairing_suggestions(&self, ingredient: &str) -> &[String] {
        self.profile_of(ingredient)
            .map(|p| p.pairs_with.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_of_known_ingredient() {
        let category = catalog().category_of("Tomato").unwrap();
        assert_eq!(category.name(), "Vegetables");
        assert!(category.tags().contains("vegan"));
    }

    #[test]
    fn test_category_of_unknown_ingredient() {
        assert!(catalog().category_of("Unobtainium").is_none());
    }

    #[test]
    fn test_tags_of_category() {
        let tags = catalog().tags_of("Proteins").unwrap();
        assert_eq!(
            tags.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["high-protein"]
        );
        assert!(catalog().tags_of("Desserts").is_none());
    }

    #[test]
    fn test_profile_lookup() {
        let profile = catalog().profile_of("Chicken").unwrap();
        assert!(profile.cooking_methods.contains(&"grilled".to_string()));
        assert!(catalog().profile_of("Salt").is_none());
    }

    #[test]
    fn test_pairing_suggestions() {
        let pairs = catalog().pairing_suggestions("Tomato");
        assert!(pairs.contains(&"Basil".to_string()));
        assert!(catalog().pairing_suggestions("Salt").is_empty());
    }

    #[test]
    fn test_categories_sorted_by_name() {
        let names: Vec<&str> = catalog().categories().map(Category::name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_multi_category_membership() {
        let json = r#"{
            "categories": {
                "Vegetables": {"items": ["Tomato"], "tags": ["vegan"]},
                "Fruits": {"items": ["Tomato"], "tags": ["sweet"]}
            },
            "profiles": {}
        }"#;
        let catalog = Catalog::from_json(json).unwrap();

        let containing: Vec<&str> = catalog
            .categories_of("Tomato")
            .map(Category::name)
            .collect();
        assert_eq!(containing, vec!["Fruits", "Vegetables"]);
    }
}
