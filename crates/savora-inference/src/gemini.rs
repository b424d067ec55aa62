//! Gemini generation backend.
//!
//! Thin passthrough to the `generateContent` REST endpoint. Each call
//! carries a strict response schema; the reply text is parsed and shape-
//! validated immediately after receipt so malformed output never travels
//! deeper into the system.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

use savora_core::{
    defaults::{API_KEY_ENV_VARS, GEMINI_BASE_URL, GEMINI_MODEL, GEN_TIMEOUT_SECS},
    Category, Error, RecipeDraft, RecipeSuggestion, Result, SuggestionBackend,
};

use crate::credentials::{resolve_api_key, ApiCredential};
use crate::prompts;
use crate::schema;

/// Gemini inference backend.
pub struct GeminiBackend {
    client: Client,
    base_url: String,
    model: String,
    credential: Option<ApiCredential>,
}

impl GeminiBackend {
    /// Create a backend with an explicit (possibly absent) credential.
    pub fn new(credential: Option<ApiCredential>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(GEN_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: GEMINI_BASE_URL.to_string(),
            model: GEMINI_MODEL.to_string(),
            credential,
        }
    }

    /// Create from the process environment, resolving the credential once.
    pub fn from_env() -> Self {
        Self::new(resolve_api_key())
    }

    /// Override the endpoint base URL (used by tests against a local mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the generation model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// True when a credential was resolved at construction.
    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// The credential, or an actionable configuration error.
    ///
    /// Checked before any network I/O: a missing key is the most common
    /// integration failure, so the message names the variable to set.
    fn require_credential(&self) -> Result<&ApiCredential> {
        self.credential.as_ref().ok_or_else(|| {
            Error::Config(format!(
                "no API key configured; set {} (or one of: {})",
                API_KEY_ENV_VARS[0],
                API_KEY_ENV_VARS[1..].join(", ")
            ))
        })
    }

    /// Send one schema-constrained generation request and return the raw
    /// JSON text payload from the first candidate.
    async fn generate_json(&self, prompt: &str, response_schema: Value) -> Result<String> {
        let credential = self.require_credential()?;
        let start = Instant::now();

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &credential.key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Request(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Request(format!("Gemini returned {status}: {body}")));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::Generation(format!("failed to parse response envelope: {e}")))?;

        let text = result
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::Generation("model returned no content".to_string()));
        }

        let elapsed = start.elapsed().as_millis() as u64;
        debug!(
            response_len = text.len(),
            duration_ms = elapsed,
            "generation complete"
        );
        if elapsed > 30_000 {
            warn!(
                duration_ms = elapsed,
                prompt_len = prompt.len(),
                slow = true,
                "slow generation operation"
            );
        }
        Ok(text)
    }
}

/// Request payload for `generateContent`.
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

/// Response envelope from `generateContent`.
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Parse and shape-validate a generated recipe payload.
fn parse_recipe_draft(text: &str) -> Result<RecipeDraft> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| Error::Generation(format!("response is not valid JSON: {e}")))?;
    let object = value
        .as_object()
        .ok_or_else(|| Error::Generation("expected a JSON object".to_string()))?;

    let field = |name: &str| -> Result<String> {
        object
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| Error::Generation(format!("missing or empty field: {name}")))
    };

    let name = field("name")?;
    let ingredients = field("ingredients")?;
    let steps = field("steps")?;

    let cooking_time = object
        .get("cookingTime")
        .and_then(Value::as_f64)
        .filter(|m| *m >= 1.0)
        .map(|m| m.round() as u32)
        .ok_or_else(|| {
            Error::Generation("cookingTime must be a positive number of minutes".to_string())
        })?;

    let category: Category = object
        .get("category")
        .cloned()
        .map(serde_json::from_value)
        .transpose()
        .map_err(|_| Error::Generation("category is outside the allowed set".to_string()))?
        .ok_or_else(|| Error::Generation("missing or empty field: category".to_string()))?;

    Ok(RecipeDraft {
        name,
        ingredients,
        steps,
        cooking_time,
        image_url: None,
        category,
    })
}

/// Parse and shape-validate a suggestion-array payload.
fn parse_suggestions(text: &str) -> Result<Vec<RecipeSuggestion>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| Error::Generation(format!("response is not valid JSON: {e}")))?;
    if !value.is_array() {
        return Err(Error::Generation("expected a JSON array".to_string()));
    }
    serde_json::from_value(value)
        .map_err(|e| Error::Generation(format!("suggestion shape mismatch: {e}")))
}

#[async_trait]
impl SuggestionBackend for GeminiBackend {
    #[instrument(skip(self, prompt), fields(subsystem = "inference", component = "gemini", op = "generate_recipe", model = %self.model, prompt_len = prompt.len()))]
    async fn generate_recipe(&self, prompt: &str) -> Result<RecipeDraft> {
        if prompt.trim().is_empty() {
            return Err(Error::InvalidInput("prompt is empty".to_string()));
        }

        let text = self
            .generate_json(
                &prompts::recipe_generation_prompt(prompt),
                schema::recipe_schema(),
            )
            .await?;
        parse_recipe_draft(&text)
    }

    #[instrument(skip(self, ingredients), fields(subsystem = "inference", component = "gemini", op = "suggest_dishes", model = %self.model))]
    async fn suggest_dishes(&self, ingredients: &str) -> Result<Vec<RecipeSuggestion>> {
        if ingredients.trim().is_empty() {
            return Err(Error::InvalidInput("ingredient list is empty".to_string()));
        }

        let text = self
            .generate_json(
                &prompts::dish_suggestion_prompt(ingredients),
                schema::suggestions_schema(),
            )
            .await?;
        parse_suggestions(&text)
    }
}
