//! Gemini API key detection.
//!
//! Resolution order:
//! 1. `--api-key` flag
//! 2. `GEMINI_API_KEY` environment variable

use std::env;

use crate::error::GeminiError;

/// Environment variable holding the API key.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Resolve the API key from the flag value, falling back to the environment.
///
/// Empty values count as missing.
pub fn resolve_api_key(flag: Option<&str>) -> Result<String, GeminiError> {
    if let Some(key) = flag.map(str::trim).filter(|k| !k.is_empty()) {
        return Ok(key.to_string());
    }

    match env::var(API_KEY_ENV_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(GeminiError::MissingApiKey),
    }
}
