//! # savora-store
//!
//! Local JSON persistence gateway for savora.
//!
//! This crate provides:
//! - A directory-rooted async key-value store with one JSON document per
//!   collection and atomic whole-file writes
//! - Repository implementations for recipes and notebook entries
//! - First-access seeding with a fixed default dataset
//! - Read-side defaulting for legacy records missing a category
//!
//! Writes are whole-collection rewrites (read, mutate in memory, write
//! back). There is no cross-process locking: concurrent writers race at
//! collection granularity and the last write wins.

pub mod json_store;
pub mod notebook;
pub mod recipes;
pub mod seed;

// Re-export core types
pub use savora_core::*;

pub use json_store::JsonStore;
pub use notebook::JsonNotebookRepository;
pub use recipes::JsonRecipeRepository;
