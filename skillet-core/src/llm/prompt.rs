//! Prompt construction for recipe generation.

use super::RecipeRequest;

/// Render the generation prompt for a request.
///
/// The optional cooking-method and difficulty lines are only present when
/// the request carries them.
pub fn build_recipe_prompt(request: &RecipeRequest) -> String {
    let ingredients = request.ingredients.join(", ");

    let method_line = request
        .cooking_method
        .as_deref()
        .map(|m| format!("Use this cooking method: {m}\n"))
        .unwrap_or_default();
    let difficulty_line = request
        .difficulty
        .as_deref()
        .map(|d| format!("Target difficulty level: {d}\n"))
        .unwrap_or_default();

    format!(
        r#"Create a detailed recipe using these ingredients: {ingredients}.
{method_line}{difficulty_line}
Include:
- Creative recipe name
- Preparation time
- Cooking time
- Difficulty level
- Calorie estimate
- Detailed step-by-step instructions
- Pro tips and variations
- Plating suggestions
- Wine pairing (if appropriate)
- Storage instructions

Use metric measurements and casual cooking style.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(ingredients: &[&str]) -> RecipeRequest {
        RecipeRequest {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            cooking_method: None,
            difficulty: None,
        }
    }

    #[test]
    fn test_prompt_lists_ingredients() {
        let prompt = build_recipe_prompt(&request(&["Tomato", "Basil", "Garlic"]));
        assert!(prompt.contains("these ingredients: Tomato, Basil, Garlic."));
        assert!(prompt.contains("Creative recipe name"));
        assert!(prompt.contains("metric measurements"));
    }

    #[test]
    fn test_optional_lines_absent_by_default() {
        let prompt = build_recipe_prompt(&request(&["Rice"]));
        assert!(!prompt.contains("cooking method"));
        assert!(!prompt.contains("difficulty level:"));
    }

    #[test]
    fn test_optional_lines_present_when_set() {
        let mut req = request(&["Chicken"]);
        req.cooking_method = Some("grilled".to_string());
        req.difficulty = Some("Intermediate".to_string());

        let prompt = build_recipe_prompt(&req);
        assert!(prompt.contains("Use this cooking method: grilled"));
        assert!(prompt.contains("Target difficulty level: Intermediate"));
    }
}
