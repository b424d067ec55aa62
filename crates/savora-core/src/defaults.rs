//! Centralized default constants for savora.
//!
//! **This module is the single source of truth** for shared default values.
//! Crates reference these constants instead of defining their own magic
//! numbers.

// =============================================================================
// PERSISTENCE
// =============================================================================

/// Storage key for the recipe collection.
pub const RECIPES_KEY: &str = "recipes";

/// Storage key for the notebook entry collection.
pub const NOTEBOOK_KEY: &str = "notebook_entries";

/// Simulated latency per storage operation in milliseconds.
///
/// Preserves realistic loading-state behavior in embedding shells; set to
/// zero in tests via `JsonStore::with_latency`.
pub const SIMULATED_LATENCY_MS: u64 = 300;

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "SAVORA_DATA_DIR";

/// Default data directory when `SAVORA_DATA_DIR` is unset.
pub const DATA_DIR: &str = "./data";

// =============================================================================
// GENERATION
// =============================================================================

/// Default Gemini REST endpoint base.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generation model.
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Timeout for generation requests (seconds).
pub const GEN_TIMEOUT_SECS: u64 = 60;

/// Number of dish suggestions requested per pantry search.
///
/// A target passed to the model in the prompt, not enforced on the reply.
pub const SUGGESTION_COUNT: usize = 3;

/// Credential environment variables, checked in priority order.
/// First non-empty value wins.
pub const API_KEY_ENV_VARS: [&str; 3] = ["GEMINI_API_KEY", "GOOGLE_API_KEY", "API_KEY"];

// =============================================================================
// UI
// =============================================================================

/// Cooking-time presets offered by the collection view's time filter,
/// as exclusive upper bounds in minutes (`None` = no bound).
pub const TIME_FILTER_PRESETS: [Option<u32>; 3] = [None, Some(30), Some(60)];

/// Default cooking time pre-filled into an empty recipe form.
pub const DEFAULT_COOKING_TIME: u32 = 30;
