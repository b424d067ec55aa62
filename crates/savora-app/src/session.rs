//! Application session: one aggregate owning the stores, the suggestion
//! backend, and all transient UI state.
//!
//! Constructed once per application session and passed by reference to
//! consumers; there are no module-level singletons. Gateway errors are
//! contained at this boundary: logged, converted to a visible message,
//! never allowed to crash the shell.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use savora_core::{
    CategoryFilter, CreateNotebookEntryRequest, NotebookRepository, Recipe, RecipeDraft,
    RecipeFilter, RecipeRepository, RecipeSuggestion, SuggestionBackend,
};

use crate::pantry::PantryState;
use crate::view::{ModalState, ModalTab, View};
use crate::{NotebookStore, RecipeStore};

/// Map an operation failure to the non-fatal message surfaced to the
/// shell. Configuration problems keep their actionable text; everything
/// else gets a generic retry message (no call is retried automatically).
fn operation_error_message(err: &savora_core::Error) -> String {
    match err {
        savora_core::Error::Config(msg) | savora_core::Error::InvalidInput(msg) => msg.clone(),
        _ => "Something went wrong. Please try again.".to_string(),
    }
}

/// Top-level application state.
pub struct Session {
    pub recipes: RecipeStore,
    pub notebook: NotebookStore,
    pub pantry: PantryState,
    backend: Arc<dyn SuggestionBackend>,

    view: View,
    drawer_open: bool,
    modal: ModalState,
    viewing: Option<Recipe>,
    filter: RecipeFilter,
    last_error: Option<String>,
}

impl Session {
    pub fn new(
        recipe_repo: Arc<dyn RecipeRepository>,
        notebook_repo: Arc<dyn NotebookRepository>,
        backend: Arc<dyn SuggestionBackend>,
    ) -> Self {
        Self {
            recipes: RecipeStore::new(recipe_repo),
            notebook: NotebookStore::new(notebook_repo),
            pantry: PantryState::new(),
            backend,
            view: View::default(),
            drawer_open: false,
            modal: ModalState::Closed,
            viewing: None,
            filter: RecipeFilter::new(),
            last_error: None,
        }
    }

    /// Initial load of both collections. Failures are contained.
    pub async fn start(&mut self) {
        if let Err(e) = self.recipes.reload().await {
            warn!(error = %e, "session: initial recipe load failed");
            self.last_error = Some(operation_error_message(&e));
        }
        if let Err(e) = self.notebook.reload().await {
            warn!(error = %e, "session: initial notebook load failed");
            self.last_error = Some(operation_error_message(&e));
        }
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    pub fn view(&self) -> View {
        self.view
    }

    /// Switch views. Closes the drawer; leaving the pantry discards its
    /// ephemeral suggestions.
    pub fn navigate(&mut self, view: View) {
        if self.view == View::Pantry && view != View::Pantry {
            self.pantry.clear();
        }
        self.view = view;
        self.drawer_open = false;
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn set_drawer(&mut self, open: bool) {
        self.drawer_open = open;
    }

    // =========================================================================
    // SEARCH & FILTERS
    // =========================================================================

    pub fn filter(&self) -> &RecipeFilter {
        &self.filter
    }

    /// Update the global search query. A non-empty query entered outside
    /// the collection view routes there: a search gesture implies intent
    /// to view results.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        if !self.filter.query.is_empty() && self.view != View::Collection {
            self.navigate(View::Collection);
        }
    }

    pub fn set_time_filter(&mut self, max_minutes: Option<u32>) {
        self.filter.max_minutes = max_minutes;
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    /// Recipes visible under the current filter criteria.
    pub fn visible_recipes(&self) -> Vec<Recipe> {
        self.recipes.visible(&self.filter)
    }

    // =========================================================================
    // MODAL & DETAIL VIEW
    // =========================================================================

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn open_create_modal(&mut self) {
        self.modal = ModalState::create();
    }

    pub fn open_edit_modal(&mut self, recipe: Recipe) {
        self.modal = ModalState::edit(recipe);
    }

    /// Pantry hand-off: open the creation modal with the generation tab
    /// active and the prompt pre-filled with the suggested dish name.
    pub fn cook_suggestion(&mut self, suggestion: &RecipeSuggestion) {
        self.modal = ModalState::create_from_suggestion(suggestion.name.clone());
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    pub fn viewing(&self) -> Option<&Recipe> {
        self.viewing.as_ref()
    }

    pub fn view_recipe(&mut self, recipe: Recipe) {
        self.viewing = Some(recipe);
    }

    pub fn close_recipe_view(&mut self) {
        self.viewing = None;
    }

    /// Message from the last failed operation, cleared by the next one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // =========================================================================
    // STORE OPERATIONS (error containment boundary)
    // =========================================================================

    /// Persist the modal's draft: update when the modal is editing a
    /// recipe, create otherwise. Closes the modal on success; on failure
    /// the modal stays open and the error becomes a visible message.
    pub async fn submit_recipe(&mut self, draft: &RecipeDraft) {
        self.last_error = None;

        let editing = match &self.modal {
            ModalState::Edit { recipe } => Some(recipe.clone()),
            _ => None,
        };

        match self.recipes.submit(draft, editing.as_ref()).await {
            Ok(()) => self.close_modal(),
            Err(e) => {
                warn!(error = %e, "session: recipe submit failed");
                self.last_error = Some(operation_error_message(&e));
            }
        }
    }

    pub async fn delete_recipe(&mut self, id: Uuid) {
        self.last_error = None;
        if let Err(e) = self.recipes.delete(id).await {
            warn!(error = %e, recipe_id = %id, "session: recipe delete failed");
            self.last_error = Some(operation_error_message(&e));
        }
    }

    pub async fn add_notebook_entry(&mut self, req: CreateNotebookEntryRequest) {
        self.last_error = None;
        if let Err(e) = self.notebook.add(req).await {
            warn!(error = %e, "session: notebook add failed");
            self.last_error = Some(operation_error_message(&e));
        }
    }

    pub async fn delete_notebook_entry(&mut self, id: Uuid) {
        self.last_error = None;
        if let Err(e) = self.notebook.remove(id).await {
            warn!(error = %e, entry_id = %id, "session: notebook delete failed");
            self.last_error = Some(operation_error_message(&e));
        }
    }

    // =========================================================================
    // GENERATION
    // =========================================================================

    /// Run a pantry suggestion search. Failures surface on
    /// [`PantryState::error`], not here.
    pub async fn search_pantry(&mut self, ingredients: &str) {
        let backend = self.backend.clone();
        self.pantry.search(backend.as_ref(), ingredients).await;
    }

    /// Generate a recipe draft from the modal's AI prompt. On success the
    /// creation modal switches to the manual tab so the filled form can
    /// be reviewed before saving.
    pub async fn generate_recipe(&mut self, prompt: &str) -> Option<RecipeDraft> {
        self.last_error = None;

        match self.backend.generate_recipe(prompt).await {
            Ok(draft) => {
                if let ModalState::Create { tab, .. } = &mut self.modal {
                    *tab = ModalTab::Manual;
                }
                Some(draft)
            }
            Err(e) => {
                warn!(error = %e, "session: recipe generation failed");
                self.last_error = Some(operation_error_message(&e));
                None
            }
        }
    }
}
