//! Startup wiring for embedding shells.
//!
//! A shell calls [`init_logging`] once, then [`build_session`] to get a
//! fully wired [`Session`] over the local JSON store and the Gemini
//! backend. Environment is read once here: `.env` is loaded, the data
//! directory and API credential are resolved, and nothing re-derives
//! them per call.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use savora_core::defaults::{DATA_DIR, DATA_DIR_ENV};
use savora_inference::GeminiBackend;
use savora_store::{JsonNotebookRepository, JsonRecipeRepository, JsonStore};

use crate::Session;

/// Initialize tracing with an env-filter (`RUST_LOG` wins, otherwise a
/// sensible default). Safe to call more than once.
pub fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "savora=debug".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .ok();
}

/// Resolve the data directory: `SAVORA_DATA_DIR`, or `./data`.
pub fn data_dir() -> PathBuf {
    std::env::var(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DATA_DIR))
}

/// Build the application session from the process environment.
pub fn build_session() -> Session {
    dotenvy::dotenv().ok();

    let dir = data_dir();
    let store = JsonStore::new(&dir);
    let backend = GeminiBackend::from_env();

    info!(
        data_dir = %dir.display(),
        credential = backend.has_credential(),
        "session: bootstrapped"
    );

    Session::new(
        Arc::new(JsonRecipeRepository::new(store.clone())),
        Arc::new(JsonNotebookRepository::new(store)),
        Arc::new(backend),
    )
}
