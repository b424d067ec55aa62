//! Prompt builders for the two generation calls.

use savora_core::{defaults::SUGGESTION_COUNT, Category};

/// Prompt for generating a full recipe from a dish description.
pub fn recipe_generation_prompt(dish: &str) -> String {
    let categories = Category::labels()
        .iter()
        .map(|label| format!("'{label}'"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Generate a cooking recipe for: {dish}.\n\
         Determine the most appropriate category strictly from this list: {categories}.\n\
         Return a JSON object only."
    )
}

/// Prompt for suggesting dishes from a pantry ingredient list.
pub fn dish_suggestion_prompt(ingredients: &str) -> String {
    format!(
        "I have these ingredients: {ingredients}. Suggest {SUGGESTION_COUNT} distinct recipes I can make.\n\
         Focus on rustic, home-cooked meals.\n\
         For each suggestion, list what ingredients from my list are used, and what key \
         ingredients might be missing (salt, pepper, oil, water are assumed to be available).\n\
         Return a JSON array."
    )
}
