//! Notebook repository over the JSON store.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use savora_core::{
    defaults::NOTEBOOK_KEY, CreateNotebookEntryRequest, Error, NotebookEntry, NotebookRepository,
    Result, UNKNOWN_SOURCE,
};

use crate::json_store::JsonStore;
use crate::seed;

/// JSON-file implementation of [`NotebookRepository`].
pub struct JsonNotebookRepository {
    store: JsonStore,
}

impl JsonNotebookRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Vec<NotebookEntry>> {
        match self.store.get::<NotebookEntry>(NOTEBOOK_KEY).await? {
            Some(entries) => Ok(entries),
            None => {
                let seeded = seed::default_notebook_entries();
                self.store.set(NOTEBOOK_KEY, &seeded).await?;
                info!(count = seeded.len(), "notebook: seeded default entries");
                Ok(seeded)
            }
        }
    }
}

#[async_trait]
impl NotebookRepository for JsonNotebookRepository {
    async fn list(&self) -> Result<Vec<NotebookEntry>> {
        self.load().await
    }

    async fn create(&self, req: CreateNotebookEntryRequest) -> Result<NotebookEntry> {
        if req.title.trim().is_empty() {
            return Err(Error::InvalidInput("entry title is empty".to_string()));
        }
        if req.content.trim().is_empty() {
            return Err(Error::InvalidInput("entry content is empty".to_string()));
        }

        let source = req
            .source
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());

        let mut entries = self.load().await?;
        let entry = NotebookEntry {
            id: Uuid::new_v4(),
            title: req.title,
            source,
            content: req.content,
            created_at: Utc::now(),
        };

        entries.insert(0, entry.clone());
        self.store.set(NOTEBOOK_KEY, &entries).await?;

        debug!(entry_id = %entry.id, title = %entry.title, "notebook: created");
        Ok(entry)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut entries = self.load().await?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            debug!(entry_id = %id, "notebook: delete for unknown id");
        }
        self.store.set(NOTEBOOK_KEY, &entries).await?;
        Ok(())
    }
}
