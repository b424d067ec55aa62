//! In-memory recipe store backed by the persistence gateway.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use savora_core::{
    filter_recipes, CreateRecipeRequest, Error, Recipe, RecipeDraft, RecipeFilter,
    RecipeRepository, Result,
};

/// Authoritative in-memory copy of the recipe collection plus a loading
/// flag.
///
/// Every mutation is followed by an unconditional full reload from the
/// gateway instead of an optimistic local patch: after any completed
/// mutation the in-memory state is never out of sync with persisted
/// state, and gateway-assigned fields (id, creation time) need no local
/// reconciliation.
pub struct RecipeStore {
    repo: Arc<dyn RecipeRepository>,
    recipes: Vec<Recipe>,
    loading: bool,
}

impl RecipeStore {
    pub fn new(repo: Arc<dyn RecipeRepository>) -> Self {
        Self {
            repo,
            recipes: Vec::new(),
            loading: false,
        }
    }

    /// The last successfully loaded collection.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// True while a collection reload is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The visible subset under `filter`, order preserved.
    pub fn visible(&self, filter: &RecipeFilter) -> Vec<Recipe> {
        filter_recipes(&self.recipes, filter)
    }

    /// Reload the collection from the gateway. On failure the in-memory
    /// state is left at its last successfully loaded value.
    pub async fn reload(&mut self) -> Result<()> {
        self.loading = true;
        let result = self.repo.list().await;
        self.loading = false;

        self.recipes = result?;
        debug!(count = self.recipes.len(), "recipe store: reloaded");
        Ok(())
    }

    /// Persist a submitted form draft, then reload.
    ///
    /// With `editing` set, the existing record's id and creation time are
    /// preserved and the remaining fields are replaced; otherwise a new
    /// record is created.
    pub async fn submit(&mut self, draft: &RecipeDraft, editing: Option<&Recipe>) -> Result<()> {
        let req = CreateRecipeRequest::from_draft(draft);

        match editing {
            Some(existing) => {
                if req.name.is_empty() {
                    return Err(Error::InvalidInput("recipe name is empty".to_string()));
                }
                self.repo
                    .update(Recipe {
                        id: existing.id,
                        name: req.name,
                        ingredients: req.ingredients,
                        steps: req.steps,
                        cooking_time: req.cooking_time,
                        image_url: req.image_url,
                        category: req.category,
                        created_at: existing.created_at,
                    })
                    .await?;
            }
            None => {
                self.repo.create(req).await?;
            }
        }

        self.reload().await
    }

    /// Delete by id, then reload.
    pub async fn delete(&mut self, id: Uuid) -> Result<()> {
        self.repo.delete(id).await?;
        self.reload().await
    }
}
