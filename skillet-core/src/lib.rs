pub mod catalog;
pub mod config;
pub mod cooking_methods;
pub mod dietary_tags;
pub mod history;
pub mod llm;
pub mod nutrition;
pub mod pairings;
pub mod selection;

pub use catalog::{catalog, Catalog, Category, IngredientProfile};
pub use config::AppConfig;
pub use cooking_methods::suggest_methods;
pub use dietary_tags::resolve_tags;
pub use history::{HistoryError, HistoryStore, RecipeEntry};
pub use llm::{
    build_recipe_prompt, create_cached_generator_from_env, create_generator_from_env,
    CachingGenerator, FakeGenerator, GenerationError, MistralGenerator, RecipeGenerator,
    RecipeRequest,
};
pub use nutrition::{estimate_nutrition, NutritionEstimate};
pub use pairings::{top_pairs, PairCount, DEFAULT_TOP_PAIRS};
pub use selection::SelectionSet;
