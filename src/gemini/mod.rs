//! Gemini generation API integration.

pub mod auth;
pub mod client;
pub mod prompt;
pub mod response;

pub use auth::{API_KEY_ENV_VAR, resolve_api_key};
pub use client::GeminiClient;
pub use prompt::PromptTemplate;
pub use response::extract_text;
