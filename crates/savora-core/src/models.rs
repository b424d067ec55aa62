//! Core data models for savora.
//!
//! These types are shared across all savora crates and represent the
//! domain entities: recipes, notebook entries, and ephemeral pantry
//! suggestions. Wire names are camelCase and timestamps are epoch
//! milliseconds, matching the persisted JSON collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// CATEGORY
// =============================================================================

/// Recipe category.
///
/// Single source of truth for the category allow-list: the UI option set,
/// the remote response-schema enum, and the read-side migration default all
/// derive from this type so they cannot drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Drinks,
    Soups,
    #[serde(rename = "Grilled Food")]
    GrilledFood,
    #[serde(rename = "Myanmar Traditional Food")]
    MyanmarTraditional,
    #[serde(rename = "Thai Traditional Food")]
    ThaiTraditional,
    #[serde(rename = "Ta'ang (Palaung) Traditional Food")]
    TaangTraditional,
    #[default]
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 7] = [
        Category::Drinks,
        Category::Soups,
        Category::GrilledFood,
        Category::MyanmarTraditional,
        Category::ThaiTraditional,
        Category::TaangTraditional,
        Category::Other,
    ];

    /// Human-readable label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Drinks => "Drinks",
            Category::Soups => "Soups",
            Category::GrilledFood => "Grilled Food",
            Category::MyanmarTraditional => "Myanmar Traditional Food",
            Category::ThaiTraditional => "Thai Traditional Food",
            Category::TaangTraditional => "Ta'ang (Palaung) Traditional Food",
            Category::Other => "Other",
        }
    }

    /// Labels for every category, in display order.
    ///
    /// This is the allow-list handed to the remote response-schema builder.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.label()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// RECIPE
// =============================================================================

/// One dish record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique within the collection, assigned at creation, immutable.
    pub id: Uuid,
    pub name: String,
    /// Ordered free-text lines (insertion order = display order).
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Total cooking time in minutes.
    pub cooking_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Defaults to `Other` on legacy records missing the field; this
    /// serde default is the read-side migration.
    #[serde(default)]
    pub category: Category,
    /// Assigned at creation, immutable. Persisted as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Image URL to display: the stored URL, or a deterministic placeholder
    /// derived from the recipe name and category when absent or blank.
    pub fn display_image_url(&self) -> String {
        match &self.image_url {
            Some(url) if !url.trim().is_empty() => url.clone(),
            _ => format!(
                "https://picsum.photos/seed/{}/400/300",
                image_seed(&self.name, self.category)
            ),
        }
    }
}

/// Slug used to seed the placeholder image service.
fn image_seed(name: &str, category: Category) -> String {
    let mut seed = String::new();
    for part in [name, category.label()] {
        for ch in part.chars() {
            if ch.is_ascii_alphanumeric() {
                seed.push(ch.to_ascii_lowercase());
            } else if !seed.ends_with('-') && !seed.is_empty() {
                seed.push('-');
            }
        }
        if !seed.ends_with('-') {
            seed.push('-');
        }
    }
    seed.trim_matches('-').to_string()
}

/// Form data for creating or editing a recipe, and the shape the remote
/// generator fills in. `ingredients` and `steps` are raw text blocks; use
/// [`RecipeDraft::ingredient_lines`] / [`RecipeDraft::step_lines`] to
/// derive the ordered line sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub name: String,
    /// Multi-line (or, from the generator, comma-separated) text block.
    pub ingredients: String,
    pub steps: String,
    pub cooking_time: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Category,
}

impl Default for RecipeDraft {
    /// The empty creation form: blank fields, default cooking time.
    fn default() -> Self {
        Self {
            name: String::new(),
            ingredients: String::new(),
            steps: String::new(),
            cooking_time: crate::defaults::DEFAULT_COOKING_TIME,
            image_url: None,
            category: Category::Other,
        }
    }
}

impl RecipeDraft {
    /// Pre-fill a draft from an existing recipe (edit modal).
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.join("\n"),
            steps: recipe.steps.join("\n"),
            cooking_time: recipe.cooking_time,
            image_url: recipe.image_url.clone(),
            category: recipe.category,
        }
    }

    /// Ordered ingredient lines derived from the text block.
    pub fn ingredient_lines(&self) -> Vec<String> {
        split_text_block(&self.ingredients)
    }

    /// Ordered instruction lines derived from the text block.
    pub fn step_lines(&self) -> Vec<String> {
        split_text_block(&self.steps)
    }
}

/// Split a free-text block into ordered non-blank lines.
///
/// Splits on newlines and discards lines that are blank after trimming.
/// A single line containing commas is treated as a comma-separated list,
/// the convention the remote generator uses for ingredients.
pub fn split_text_block(block: &str) -> Vec<String> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if let [only] = lines.as_slice() {
        if only.contains(',') {
            return only
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }

    lines.into_iter().map(String::from).collect()
}

/// Request for creating a new recipe. The repository assigns `id` and
/// `created_at`.
#[derive(Debug, Clone)]
pub struct CreateRecipeRequest {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub cooking_time: u32,
    pub image_url: Option<String>,
    pub category: Category,
}

impl CreateRecipeRequest {
    /// Build a create request from a submitted form draft.
    pub fn from_draft(draft: &RecipeDraft) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            ingredients: draft.ingredient_lines(),
            steps: draft.step_lines(),
            cooking_time: draft.cooking_time,
            image_url: draft
                .image_url
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
            category: draft.category,
        }
    }
}

// =============================================================================
// NOTEBOOK
// =============================================================================

/// Sentinel attribution for notes recorded without a source.
pub const UNKNOWN_SOURCE: &str = "Unknown";

fn default_source() -> String {
    UNKNOWN_SOURCE.to_string()
}

/// One free-text cooking note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookEntry {
    pub id: Uuid,
    pub title: String,
    /// Free-text attribution ("Grandma", "Auntie May", ...).
    #[serde(default = "default_source")]
    pub source: String,
    pub content: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Request for creating a notebook entry. A blank or absent `source`
/// becomes [`UNKNOWN_SOURCE`].
#[derive(Debug, Clone)]
pub struct CreateNotebookEntryRequest {
    pub title: String,
    pub source: Option<String>,
    pub content: String,
}

// =============================================================================
// PANTRY SUGGESTIONS
// =============================================================================

/// One dish recommendation produced from a pantry ingredient list.
/// Ephemeral: held only in view state, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSuggestion {
    pub name: String,
    pub description: String,
    pub used_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
}
