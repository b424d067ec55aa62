//! Recipe repository over the JSON store.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use savora_core::{
    defaults::RECIPES_KEY, CreateRecipeRequest, Error, Recipe, RecipeRepository, Result,
};

use crate::json_store::JsonStore;
use crate::seed;

/// JSON-file implementation of [`RecipeRepository`].
pub struct JsonRecipeRepository {
    store: JsonStore,
}

impl JsonRecipeRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Load the full collection, seeding it on first access.
    async fn load(&self) -> Result<Vec<Recipe>> {
        match self.store.get::<Recipe>(RECIPES_KEY).await? {
            Some(recipes) => Ok(recipes),
            None => {
                let seeded = seed::default_recipes();
                self.store.set(RECIPES_KEY, &seeded).await?;
                info!(count = seeded.len(), "recipes: seeded default collection");
                Ok(seeded)
            }
        }
    }
}

#[async_trait]
impl RecipeRepository for JsonRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>> {
        self.load().await
    }

    async fn create(&self, req: CreateRecipeRequest) -> Result<Recipe> {
        if req.name.trim().is_empty() {
            return Err(Error::InvalidInput("recipe name is empty".to_string()));
        }

        let mut recipes = self.load().await?;
        let recipe = Recipe {
            id: Uuid::new_v4(),
            name: req.name,
            ingredients: req.ingredients,
            steps: req.steps,
            cooking_time: req.cooking_time,
            image_url: req.image_url,
            category: req.category,
            created_at: Utc::now(),
        };

        // Newest first.
        recipes.insert(0, recipe.clone());
        self.store.set(RECIPES_KEY, &recipes).await?;

        debug!(recipe_id = %recipe.id, name = %recipe.name, "recipes: created");
        Ok(recipe)
    }

    async fn update(&self, recipe: Recipe) -> Result<()> {
        let mut recipes = self.load().await?;
        match recipes.iter().position(|r| r.id == recipe.id) {
            Some(index) => {
                recipes[index] = recipe;
                self.store.set(RECIPES_KEY, &recipes).await?;
                debug!(recipe_id = %recipes[index].id, "recipes: updated");
            }
            None => {
                // Unknown id is a silent no-op, not an error.
                debug!(recipe_id = %recipe.id, "recipes: update for unknown id ignored");
            }
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut recipes = self.load().await?;
        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        if recipes.len() == before {
            debug!(recipe_id = %id, "recipes: delete for unknown id");
        }
        // The filtered collection is persisted either way, mirroring the
        // unconditional rewrite of the original gateway.
        self.store.set(RECIPES_KEY, &recipes).await?;
        Ok(())
    }
}
