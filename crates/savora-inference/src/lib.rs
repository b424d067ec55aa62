//! # savora-inference
//!
//! Remote text-generation gateway for savora.
//!
//! This crate provides:
//! - Ordered environment-variable credential resolution
//! - Strict JSON response-schema builders (the category allow-list comes
//!   from `savora_core::Category`, so the schema cannot drift from the
//!   domain enum)
//! - Prompt builders for recipe generation and pantry suggestions
//! - A Gemini `generateContent` backend with post-receipt shape validation
//!
//! Schema-constrained generation is the load-bearing decision here: the
//! remote service is asked to return JSON matching an exact descriptor,
//! so replies parse deterministically without free-text extraction.

pub mod credentials;
pub mod gemini;
pub mod prompts;
pub mod schema;

// Re-export core types
pub use savora_core::*;

pub use credentials::{resolve_api_key, resolve_api_key_with, ApiCredential};
pub use gemini::GeminiBackend;
