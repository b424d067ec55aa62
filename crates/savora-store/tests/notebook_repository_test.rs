//! Integration tests for the notebook repository: seeding, source
//! defaulting, and create/delete contracts.

use std::time::Duration;

use savora_core::{CreateNotebookEntryRequest, Error, NotebookRepository, UNKNOWN_SOURCE};
use savora_store::{JsonNotebookRepository, JsonStore};
use uuid::Uuid;

fn repository(dir: &tempfile::TempDir) -> JsonNotebookRepository {
    JsonNotebookRepository::new(JsonStore::new(dir.path()).with_latency(Duration::ZERO))
}

#[tokio::test]
async fn test_first_access_seeds_two_entries() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repository(&dir);

    let entries = repo.list().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(repo.list().await.unwrap(), entries);
}

#[tokio::test]
async fn test_create_prepends_entry() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repository(&dir);
    let seeded = repo.list().await.unwrap();

    let created = repo
        .create(CreateNotebookEntryRequest {
            title: "Chili Oil Timing".to_string(),
            source: Some("Auntie May".to_string()),
            content: "Pour the oil at 180 degrees, not hotter.".to_string(),
        })
        .await
        .unwrap();

    let entries = repo.list().await.unwrap();
    assert_eq!(entries.len(), seeded.len() + 1);
    assert_eq!(entries[0], created);
    assert_eq!(entries[0].source, "Auntie May");
}

#[tokio::test]
async fn test_blank_source_defaults_to_unknown() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repository(&dir);

    let from_none = repo
        .create(CreateNotebookEntryRequest {
            title: "No Source".to_string(),
            source: None,
            content: "content".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(from_none.source, UNKNOWN_SOURCE);

    let from_blank = repo
        .create(CreateNotebookEntryRequest {
            title: "Blank Source".to_string(),
            source: Some("   ".to_string()),
            content: "content".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(from_blank.source, UNKNOWN_SOURCE);
}

#[tokio::test]
async fn test_create_requires_title_and_content() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repository(&dir);

    let missing_title = repo
        .create(CreateNotebookEntryRequest {
            title: " ".to_string(),
            source: None,
            content: "content".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(missing_title, Error::InvalidInput(_)));

    let missing_content = repo
        .create(CreateNotebookEntryRequest {
            title: "Title".to_string(),
            source: None,
            content: "".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(missing_content, Error::InvalidInput(_)));
}

#[tokio::test]
async fn test_delete_is_silent_for_unknown_id() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repository(&dir);

    let before = repo.list().await.unwrap();
    repo.delete(Uuid::new_v4()).await.unwrap();
    assert_eq!(repo.list().await.unwrap(), before);

    repo.delete(before[0].id).await.unwrap();
    let after = repo.list().await.unwrap();
    assert_eq!(after.len(), before.len() - 1);
    assert!(!after.iter().any(|e| e.id == before[0].id));
}
