//! Core traits for savora abstractions.
//!
//! These traits define the seams between the application layer and its
//! collaborators: the persistence gateway and the remote suggestion
//! backend. Concrete implementations live in `savora-store` and
//! `savora-inference`; tests substitute in-memory fakes.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{
    CreateNotebookEntryRequest, CreateRecipeRequest, NotebookEntry, Recipe, RecipeDraft,
    RecipeSuggestion,
};

/// Repository for the persisted recipe collection.
///
/// All writes are whole-collection rewrites: read the full collection,
/// mutate in memory, write it back. Concurrent writers are not
/// coordinated; the last write wins at collection granularity.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Return all recipes, newest first. Seeds default data on first
    /// access and defaults a missing category to `Other` on read.
    async fn list(&self) -> Result<Vec<Recipe>>;

    /// Assign a fresh id and timestamp, prepend, persist, and return the
    /// created record.
    async fn create(&self, req: CreateRecipeRequest) -> Result<Recipe>;

    /// Replace the record with a matching id in place, preserving
    /// collection order. Silent no-op when the id is unknown.
    async fn update(&self, recipe: Recipe) -> Result<()>;

    /// Remove the record with the given id. Silent no-op when absent.
    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Repository for the persisted notebook collection.
///
/// Entries are create/delete only; there is no update operation.
#[async_trait]
pub trait NotebookRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<NotebookEntry>>;

    async fn create(&self, req: CreateNotebookEntryRequest) -> Result<NotebookEntry>;

    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Remote text-generation backend producing structured recipe content.
#[async_trait]
pub trait SuggestionBackend: Send + Sync {
    /// Generate a full recipe draft from a free-text dish description.
    ///
    /// Fails with `Error::Config` when no credential is configured
    /// (before any network call) and `Error::Generation` when the remote
    /// reply is empty or not shape-valid.
    async fn generate_recipe(&self, prompt: &str) -> Result<RecipeDraft>;

    /// Suggest dishes cookable from a free-text ingredient list.
    async fn suggest_dishes(&self, ingredients: &str) -> Result<Vec<RecipeSuggestion>>;
}
