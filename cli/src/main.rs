use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skillet_core::{
    catalog, create_cached_generator_from_env, estimate_nutrition, resolve_tags, suggest_methods,
    top_pairs, AppConfig, Catalog, HistoryStore, RecipeEntry, RecipeRequest, SelectionSet,
    DEFAULT_TOP_PAIRS,
};

#[derive(Parser)]
#[command(name = "skillet")]
#[command(about = "Ingredient-driven recipe generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the ingredient catalog grouped by category
    Ingredients,
    /// Show dietary tags, cooking methods, and nutrition for a selection
    Analyze {
        /// Ingredient to include (repeatable)
        #[arg(short, long = "ingredient", required = true)]
        ingredients: Vec<String>,
    },
    /// Generate a recipe and record it in the history
    Generate {
        /// Ingredient to include (repeatable)
        #[arg(short, long = "ingredient", required = true)]
        ingredients: Vec<String>,
        /// Cooking method hint for the generator
        #[arg(long)]
        method: Option<String>,
        /// Difficulty hint (e.g. Beginner, Intermediate, Advanced)
        #[arg(long)]
        difficulty: Option<String>,
    },
    /// List past generated recipes
    History {
        /// Show only the most recent N entries
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Like the most recent recipe
    Like,
    /// Show the most frequent ingredient pairings across the history
    Pairs {
        /// Number of pairs to show
        #[arg(short, default_value_t = DEFAULT_TOP_PAIRS)]
        k: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    match cli.command {
        Commands::Ingredients => list_ingredients(catalog()),
        Commands::Analyze { ingredients } => analyze(catalog(), &ingredients.into()),
        Commands::Generate {
            ingredients,
            method,
            difficulty,
        } => generate(catalog(), &config, ingredients.into(), method, difficulty).await?,
        Commands::History { limit } => show_history(&config, limit)?,
        Commands::Like => like(&config)?,
        Commands::Pairs { k } => show_pairs(&config, k)?,
    }

    Ok(())
}

fn list_ingredients(catalog: &Catalog) {
    for category in catalog.categories() {
        let tags: Vec<&str> = category.tags().iter().map(String::as_str).collect();
        println!("{} [{}]", category.name(), tags.join(", "));
        for item in category.items() {
            println!("  - {item}");
        }
    }
}

fn analyze(catalog: &Catalog, selection: &SelectionSet) {
    let tags = resolve_tags(catalog, selection);
    if tags.is_empty() {
        println!("Dietary tags: none");
    } else {
        let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
        println!("Dietary tags: {}", tags.join(", "));
    }

    let methods = suggest_methods(catalog, selection);
    if methods.is_empty() {
        println!("Suggested cooking methods: none");
    } else {
        let methods: Vec<&str> = methods.iter().map(String::as_str).collect();
        println!("Suggested cooking methods: {}", methods.join(", "));
    }

    let nutrition = estimate_nutrition(catalog, selection);
    println!(
        "Estimated nutrition: {} kcal, {}g protein, {}g carbs",
        nutrition.calories, nutrition.protein, nutrition.carbs
    );

    for ingredient in selection.deduped() {
        let pairs = catalog.pairing_suggestions(ingredient);
        if !pairs.is_empty() {
            println!("Pairs well with {ingredient}: {}", pairs.join(", "));
        }
    }
}

async fn generate(
    catalog: &Catalog,
    config: &AppConfig,
    selection: SelectionSet,
    method: Option<String>,
    difficulty: Option<String>,
) -> Result<()> {
    // Open the store before generating so a corrupt history fails fast
    // instead of after a paid API call.
    let mut store = HistoryStore::open(&config.history_path)
        .with_context(|| format!("opening history at {}", config.history_path.display()))?;

    let generator = create_cached_generator_from_env()?;

    let request = RecipeRequest {
        ingredients: selection.deduped().iter().map(|s| s.to_string()).collect(),
        cooking_method: method,
        difficulty,
    };

    let recipe = generator
        .generate(&request)
        .await
        .context("recipe generation failed; nothing was added to the history")?;

    println!("{recipe}");
    println!();
    analyze(catalog, &selection);

    let tags = resolve_tags(catalog, &selection);
    store.append(RecipeEntry::new(
        recipe,
        request.ingredients,
        tags.into_iter().collect(),
    ))?;

    let pairs = top_pairs(store.entries(), DEFAULT_TOP_PAIRS);
    if !pairs.is_empty() {
        println!("\nPopular combinations:");
        for pair in pairs {
            println!("  {} + {} ({} times)", pair.first, pair.second, pair.count);
        }
    }

    Ok(())
}

fn show_history(config: &AppConfig, limit: Option<usize>) -> Result<()> {
    let store = HistoryStore::open(&config.history_path)?;
    let entries = store.entries();
    let skip = limit.map_or(0, |n| entries.len().saturating_sub(n));

    if entries.is_empty() {
        println!("No recipes generated yet.");
        return Ok(());
    }

    for entry in &entries[skip..] {
        println!(
            "{} | {} | likes: {} | tags: {}",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.ingredients.join(", "),
            entry.likes,
            entry.dietary_tags.join(", ")
        );
    }
    Ok(())
}

fn like(config: &AppConfig) -> Result<()> {
    let mut store = HistoryStore::open(&config.history_path)?;
    let likes = store.like_last()?;
    println!("Liked the latest recipe ({likes} total).");
    Ok(())
}

fn show_pairs(config: &AppConfig, k: usize) -> Result<()> {
    let store = HistoryStore::open(&config.history_path)?;
    let pairs = top_pairs(store.entries(), k);

    if pairs.is_empty() {
        println!("Not enough history for pairing analytics yet.");
        return Ok(());
    }

    for pair in pairs {
        println!("{} + {} ({} times)", pair.first, pair.second, pair.count);
    }
    Ok(())
}
