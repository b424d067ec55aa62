//! Integration tests for the application session: navigation, search
//! routing, pantry hand-off, store reload discipline, and error
//! containment.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use savora_app::{ModalState, ModalTab, Session, View};
use savora_core::{
    Category, CategoryFilter, CreateNotebookEntryRequest, Error, RecipeDraft, RecipeSuggestion,
    Result, SuggestionBackend,
};
use savora_store::{JsonNotebookRepository, JsonRecipeRepository, JsonStore};

/// Deterministic backend: echoes the prompt into a draft and returns one
/// fixed suggestion.
struct CannedBackend;

#[async_trait]
impl SuggestionBackend for CannedBackend {
    async fn generate_recipe(&self, prompt: &str) -> Result<RecipeDraft> {
        Ok(RecipeDraft {
            name: prompt.to_string(),
            ingredients: "day-old rice\n2 eggs\nsoy sauce".to_string(),
            steps: "Scramble the eggs.\nFold in the rice.".to_string(),
            cooking_time: 15,
            image_url: None,
            category: Category::Other,
        })
    }

    async fn suggest_dishes(&self, _ingredients: &str) -> Result<Vec<RecipeSuggestion>> {
        Ok(vec![RecipeSuggestion {
            name: "Fried Rice".to_string(),
            description: "A quick skillet of day-old rice and eggs.".to_string(),
            used_ingredients: vec!["rice".to_string(), "eggs".to_string()],
            missing_ingredients: vec!["spring onion".to_string()],
        }])
    }
}

/// Backend with no credential configured.
struct UnconfiguredBackend;

#[async_trait]
impl SuggestionBackend for UnconfiguredBackend {
    async fn generate_recipe(&self, _prompt: &str) -> Result<RecipeDraft> {
        Err(Error::Config(
            "no API key configured; set GEMINI_API_KEY".to_string(),
        ))
    }

    async fn suggest_dishes(&self, _ingredients: &str) -> Result<Vec<RecipeSuggestion>> {
        Err(Error::Config(
            "no API key configured; set GEMINI_API_KEY".to_string(),
        ))
    }
}

fn session_with(dir: &tempfile::TempDir, backend: Arc<dyn SuggestionBackend>) -> Session {
    let store = JsonStore::new(dir.path()).with_latency(Duration::ZERO);
    Session::new(
        Arc::new(JsonRecipeRepository::new(store.clone())),
        Arc::new(JsonNotebookRepository::new(store)),
        backend,
    )
}

async fn started_session(dir: &tempfile::TempDir) -> Session {
    let mut session = session_with(dir, Arc::new(CannedBackend));
    session.start().await;
    session
}

#[tokio::test]
async fn test_initial_state() {
    let dir = tempfile::tempdir().unwrap();
    let session = started_session(&dir).await;

    assert_eq!(session.view(), View::Collection);
    assert!(!session.modal().is_open());
    assert!(!session.drawer_open());
    assert_eq!(session.recipes.recipes().len(), 8);
    assert_eq!(session.notebook.entries().len(), 2);
    assert!(session.last_error().is_none());
}

#[tokio::test]
async fn test_navigate_closes_drawer() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = started_session(&dir).await;

    session.set_drawer(true);
    session.navigate(View::Notebook);
    assert_eq!(session.view(), View::Notebook);
    assert!(!session.drawer_open());
}

#[tokio::test]
async fn test_global_search_routes_to_collection() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = started_session(&dir).await;

    session.navigate(View::Library);
    session.set_search("tom");

    assert_eq!(session.view(), View::Collection);
    assert_eq!(session.filter().query, "tom");

    let visible = session.visible_recipes();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Tom Yum Goong");
}

#[tokio::test]
async fn test_clearing_search_does_not_navigate() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = started_session(&dir).await;

    session.navigate(View::Library);
    session.set_search("");
    assert_eq!(session.view(), View::Library);
}

#[tokio::test]
async fn test_pantry_handoff_prefills_generation_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = started_session(&dir).await;

    session.navigate(View::Pantry);
    session.search_pantry("eggs, rice").await;
    assert!(session.pantry.error().is_none());
    assert_eq!(session.pantry.suggestions().len(), 1);

    let suggestion = session.pantry.suggestions()[0].clone();
    session.cook_suggestion(&suggestion);

    match session.modal() {
        ModalState::Create { tab, ai_prompt } => {
            assert_eq!(*tab, ModalTab::Ai);
            assert_eq!(ai_prompt, "Fried Rice");
        }
        other => panic!("expected create modal, got {other:?}"),
    }
}

#[tokio::test]
async fn test_leaving_pantry_discards_suggestions() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = started_session(&dir).await;

    session.navigate(View::Pantry);
    session.search_pantry("eggs, rice").await;
    assert!(!session.pantry.suggestions().is_empty());

    session.navigate(View::Collection);
    assert!(session.pantry.suggestions().is_empty());
}

#[tokio::test]
async fn test_submit_creates_reloads_and_closes_modal() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = started_session(&dir).await;

    session.open_create_modal();
    let draft = RecipeDraft {
        name: "Midnight Fried Rice".to_string(),
        ingredients: "rice\neggs".to_string(),
        steps: "fry".to_string(),
        cooking_time: 15,
        image_url: None,
        category: Category::Other,
    };
    session.submit_recipe(&draft).await;

    assert!(!session.modal().is_open());
    assert!(session.last_error().is_none());
    assert_eq!(session.recipes.recipes().len(), 9);
    assert_eq!(session.recipes.recipes()[0].name, "Midnight Fried Rice");

    // A fresh session over the same directory sees the persisted record.
    let mut reopened = started_session(&dir).await;
    reopened.set_search("midnight");
    assert_eq!(reopened.visible_recipes().len(), 1);
}

#[tokio::test]
async fn test_submit_edit_preserves_identity_and_position() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = started_session(&dir).await;

    let original = session.recipes.recipes()[2].clone();
    session.open_edit_modal(original.clone());

    let mut draft = RecipeDraft::from_recipe(&original);
    draft.name = "Renamed Dish".to_string();
    session.submit_recipe(&draft).await;

    let after = session.recipes.recipes();
    assert_eq!(after.len(), 8);
    assert_eq!(after[2].id, original.id);
    assert_eq!(after[2].created_at, original.created_at);
    assert_eq!(after[2].name, "Renamed Dish");
}

#[tokio::test]
async fn test_delete_recipe_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = started_session(&dir).await;

    let doomed = session.recipes.recipes()[0].id;
    session.delete_recipe(doomed).await;

    assert_eq!(session.recipes.recipes().len(), 7);
    assert!(!session.recipes.recipes().iter().any(|r| r.id == doomed));
}

#[tokio::test]
async fn test_notebook_add_and_delete() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = started_session(&dir).await;

    session
        .add_notebook_entry(CreateNotebookEntryRequest {
            title: "Chili Oil Timing".to_string(),
            source: None,
            content: "Pour at 180 degrees.".to_string(),
        })
        .await;
    assert_eq!(session.notebook.entries().len(), 3);
    assert_eq!(session.notebook.entries()[0].source, "Unknown");

    let id = session.notebook.entries()[0].id;
    session.delete_notebook_entry(id).await;
    assert_eq!(session.notebook.entries().len(), 2);
}

#[tokio::test]
async fn test_filter_composition_through_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = started_session(&dir).await;

    session.set_search("tom");
    session.set_time_filter(savora_core::defaults::TIME_FILTER_PRESETS[2]);
    session.set_category_filter(CategoryFilter::Only(Category::ThaiTraditional));

    let visible = session.visible_recipes();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Tom Yum Goong");

    // The 30-minute recipe is excluded by an exclusive 30-minute bound.
    session.set_time_filter(Some(30));
    assert!(session.visible_recipes().is_empty());
}

#[tokio::test]
async fn test_recipe_detail_view() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = started_session(&dir).await;

    assert!(session.viewing().is_none());
    let recipe = session.recipes.recipes()[0].clone();
    session.view_recipe(recipe.clone());
    assert_eq!(session.viewing(), Some(&recipe));

    session.close_recipe_view();
    assert!(session.viewing().is_none());
}

#[tokio::test]
async fn test_unconfigured_backend_is_contained() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_with(&dir, Arc::new(UnconfiguredBackend));
    session.start().await;

    session.navigate(View::Pantry);
    session.search_pantry("eggs, rice").await;

    assert!(session.pantry.suggestions().is_empty());
    let message = session.pantry.error().expect("expected a visible message");
    assert!(message.contains("GEMINI_API_KEY"));

    // The session stays usable.
    session.navigate(View::Collection);
    assert_eq!(session.view(), View::Collection);
    assert_eq!(session.recipes.recipes().len(), 8);

    let draft = session.generate_recipe("Fried Rice").await;
    assert!(draft.is_none());
    assert!(session.last_error().unwrap().contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn test_generation_switches_modal_to_manual_tab() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = started_session(&dir).await;

    let suggestion = RecipeSuggestion {
        name: "Fried Rice".to_string(),
        description: String::new(),
        used_ingredients: vec![],
        missing_ingredients: vec![],
    };
    session.cook_suggestion(&suggestion);

    let draft = session.generate_recipe("Fried Rice").await.unwrap();
    assert_eq!(draft.name, "Fried Rice");
    assert_eq!(draft.ingredient_lines().len(), 3);

    match session.modal() {
        ModalState::Create { tab, ai_prompt } => {
            assert_eq!(*tab, ModalTab::Manual);
            assert_eq!(ai_prompt, "Fried Rice");
        }
        other => panic!("expected create modal, got {other:?}"),
    }
}
