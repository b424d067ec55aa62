//! # savora-core
//!
//! Core types, traits, and abstractions for the savora recipe manager.
//!
//! This crate provides the domain entities (recipes, notebook entries,
//! pantry suggestions), the error taxonomy, the pure recipe filter engine,
//! and the trait seams implemented by the storage and inference crates.

pub mod defaults;
pub mod error;
pub mod filter;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use filter::{filter_recipes, CategoryFilter, RecipeFilter};
pub use models::{
    split_text_block, Category, CreateNotebookEntryRequest, CreateRecipeRequest, NotebookEntry,
    Recipe, RecipeDraft, RecipeSuggestion, UNKNOWN_SOURCE,
};
pub use traits::{NotebookRepository, RecipeRepository, SuggestionBackend};
