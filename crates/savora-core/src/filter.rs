//! Recipe filter engine.
//!
//! A pure, stable composition of three independent predicates over the
//! in-memory recipe list: name substring match, cooking-time upper bound,
//! and category equality. The visible subset is the logical AND of all
//! three, recomputed by a full linear rescan whenever the list or any
//! criterion changes; no indexing is needed at this data scale.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Recipe};

/// Category criterion: the `All` sentinel matches everything, otherwise
/// exact equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }
}

/// Filter criteria for the collection view. Transient, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeFilter {
    /// Case-insensitive substring match against the recipe name.
    /// Empty matches everything.
    pub query: String,
    /// Exclusive upper bound on cooking time in minutes.
    /// `None` matches everything; a recipe at exactly the bound is excluded.
    pub max_minutes: Option<u32>,
    pub category: CategoryFilter,
}

impl RecipeFilter {
    /// Create an empty filter that matches every recipe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name search query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the exclusive cooking-time bound in minutes.
    pub fn with_max_minutes(mut self, minutes: Option<u32>) -> Self {
        self.max_minutes = minutes;
        self
    }

    /// Restrict to a single category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    /// True when the recipe passes all three predicates.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_name(recipe) && self.matches_time(recipe) && self.matches_category(recipe)
    }

    fn matches_name(&self, recipe: &Recipe) -> bool {
        recipe
            .name
            .to_lowercase()
            .contains(&self.query.to_lowercase())
    }

    fn matches_time(&self, recipe: &Recipe) -> bool {
        // Strictly less than: a recipe at exactly the bound is excluded.
        self.max_minutes
            .map_or(true, |limit| recipe.cooking_time < limit)
    }

    fn matches_category(&self, recipe: &Recipe) -> bool {
        self.category.matches(recipe.category)
    }
}

/// Visible subset of `recipes` under `filter`, preserving relative order.
pub fn filter_recipes(recipes: &[Recipe], filter: &RecipeFilter) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}
