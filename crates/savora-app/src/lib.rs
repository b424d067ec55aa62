//! # savora-app
//!
//! Application session layer for savora.
//!
//! This crate coordinates the pieces a GUI shell embeds: the recipe and
//! notebook stores (authoritative in-memory collections with a
//! reload-after-mutation discipline), ephemeral pantry suggestion state,
//! and the four-view navigation state machine with its modal and drawer
//! side state.
//!
//! Control flow: a user interaction mutates navigation/filter/modal state
//! or invokes a store operation; store operations call the persistence or
//! suggestion gateway, then reload their collection; the filter engine
//! recomputes the visible subset; the shell re-renders.

pub mod bootstrap;
pub mod notebook_store;
pub mod pantry;
pub mod recipe_store;
pub mod session;
pub mod view;

pub use bootstrap::{build_session, data_dir, init_logging};
pub use notebook_store::NotebookStore;
pub use pantry::PantryState;
pub use recipe_store::RecipeStore;
pub use session::Session;
pub use view::{ModalState, ModalTab, View};
