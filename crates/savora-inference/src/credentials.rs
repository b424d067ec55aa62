//! API credential resolution.
//!
//! The credential is looked up from a fixed priority list of environment
//! variables (canonical name first, then deployment-convention fallbacks)
//! and resolved once at backend construction, not per call.

use tracing::debug;

use savora_core::defaults::API_KEY_ENV_VARS;

/// A resolved API credential and the environment variable it came from.
#[derive(Debug, Clone)]
pub struct ApiCredential {
    pub key: String,
    pub source_var: &'static str,
}

impl ApiCredential {
    pub fn new(key: impl Into<String>, source_var: &'static str) -> Self {
        Self {
            key: key.into(),
            source_var,
        }
    }
}

/// Resolve the API credential from the process environment.
///
/// Checks [`API_KEY_ENV_VARS`] in order; the first non-empty value wins.
pub fn resolve_api_key() -> Option<ApiCredential> {
    resolve_api_key_with(|name| std::env::var(name).ok())
}

/// Resolve the API credential through an injected lookup.
pub fn resolve_api_key_with(lookup: impl Fn(&str) -> Option<String>) -> Option<ApiCredential> {
    for name in API_KEY_ENV_VARS {
        if let Some(value) = lookup(name) {
            if !value.trim().is_empty() {
                debug!(source_var = name, "credentials: resolved API key");
                return Some(ApiCredential::new(value, name));
            }
        }
    }
    debug!("credentials: no API key found in environment");
    None
}
