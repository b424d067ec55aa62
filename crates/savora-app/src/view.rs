//! View navigation and modal state.

use savora_core::Recipe;

/// Top-level views, mutually exclusive. Any view can transition to any
/// other; there is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Collection,
    Pantry,
    Notebook,
    Library,
}

/// Tabs of the create modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTab {
    Manual,
    Ai,
}

/// The create/edit modal. Orthogonal to the active view, but its pre-fill
/// depends on how it was opened.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState {
    Closed,
    /// Editing an existing recipe. The AI tab is not offered.
    Edit { recipe: Recipe },
    /// Creating a new recipe, manually or via generation.
    Create { tab: ModalTab, ai_prompt: String },
}

impl ModalState {
    /// Open for manual creation: manual tab active, empty prompt.
    pub fn create() -> Self {
        ModalState::Create {
            tab: ModalTab::Manual,
            ai_prompt: String::new(),
        }
    }

    /// Open from a pantry suggestion: generation tab active, prompt
    /// pre-filled with the suggested dish name.
    pub fn create_from_suggestion(dish: impl Into<String>) -> Self {
        ModalState::Create {
            tab: ModalTab::Ai,
            ai_prompt: dish.into(),
        }
    }

    /// Open pre-filled with an existing recipe's fields.
    pub fn edit(recipe: Recipe) -> Self {
        ModalState::Edit { recipe }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// The AI tab is offered only when creating, never when editing.
    pub fn offers_ai_tab(&self) -> bool {
        matches!(self, ModalState::Create { .. })
    }
}
