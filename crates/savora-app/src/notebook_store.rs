//! In-memory notebook store backed by the persistence gateway.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use savora_core::{
    CreateNotebookEntryRequest, NotebookEntry, NotebookRepository, Result,
};

/// Simpler parallel of [`crate::RecipeStore`] for free-text notes: no
/// filtering, no update operation, same reload-after-mutation discipline.
pub struct NotebookStore {
    repo: Arc<dyn NotebookRepository>,
    entries: Vec<NotebookEntry>,
    loading: bool,
}

impl NotebookStore {
    pub fn new(repo: Arc<dyn NotebookRepository>) -> Self {
        Self {
            repo,
            entries: Vec::new(),
            loading: false,
        }
    }

    pub fn entries(&self) -> &[NotebookEntry] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn reload(&mut self) -> Result<()> {
        self.loading = true;
        let result = self.repo.list().await;
        self.loading = false;

        self.entries = result?;
        debug!(count = self.entries.len(), "notebook store: reloaded");
        Ok(())
    }

    pub async fn add(&mut self, req: CreateNotebookEntryRequest) -> Result<()> {
        self.repo.create(req).await?;
        self.reload().await
    }

    pub async fn remove(&mut self, id: Uuid) -> Result<()> {
        self.repo.delete(id).await?;
        self.reload().await
    }
}
