//! Ephemeral pantry suggestion state.

use tracing::warn;

use savora_core::{Error, RecipeSuggestion, SuggestionBackend};

/// Suggestion results for the pantry view. Never persisted: results are
/// discarded on the next search or on navigation away from the view.
#[derive(Default)]
pub struct PantryState {
    suggestions: Vec<RecipeSuggestion>,
    searching: bool,
    error: Option<String>,
}

impl PantryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suggestions(&self) -> &[RecipeSuggestion] {
        &self.suggestions
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// User-facing message from the last failed search, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Ask the backend for dish suggestions. Failures are contained here
    /// as a visible message; they never propagate out of the view state.
    pub async fn search(&mut self, backend: &dyn SuggestionBackend, ingredients: &str) {
        self.searching = true;
        self.error = None;
        self.suggestions.clear();

        match backend.suggest_dishes(ingredients).await {
            Ok(suggestions) => self.suggestions = suggestions,
            Err(e) => {
                warn!(error = %e, "pantry: suggestion search failed");
                self.error = Some(search_error_message(&e));
            }
        }

        self.searching = false;
    }

    /// Drop results and any error, e.g. when navigating away.
    pub fn clear(&mut self) {
        self.suggestions.clear();
        self.error = None;
    }
}

/// Map a gateway error to the message shown in the pantry view.
///
/// A missing credential gets the actionable text (which variable to set);
/// everything else gets a generic retry message, since no call is retried
/// automatically.
fn search_error_message(err: &Error) -> String {
    match err {
        Error::Config(msg) | Error::InvalidInput(msg) => msg.clone(),
        _ => "Failed to get suggestions. Please try again.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_keep_their_actionable_text() {
        let msg = search_error_message(&Error::Config("set GEMINI_API_KEY".to_string()));
        assert!(msg.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_generation_errors_become_a_retry_message() {
        let msg = search_error_message(&Error::Generation("shape mismatch".to_string()));
        assert!(msg.contains("try again"));
        assert!(!msg.contains("shape mismatch"));
    }
}
