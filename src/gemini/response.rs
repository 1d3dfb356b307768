//! `generateContent` request and response shapes.

use serde::{Deserialize, Serialize};

use crate::error::GeminiError;

/// Request body: a single user turn with one text part.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestContent<'a> {
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart<'a> {
    pub text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    pub fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

/// Response body. Only the fields we read are modelled.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: String,
}

/// Pull the first candidate's first text part out of a response body.
pub fn extract_text(body: &str) -> Result<String, GeminiError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| GeminiError::MalformedResponse(format!("{}. Response: {}", e, truncate(body))))?;

    response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| GeminiError::MalformedResponse("response contained no candidates".to_string()))?
        .content
        .parts
        .into_iter()
        .next()
        .map(|part| part.text)
        .ok_or_else(|| GeminiError::MalformedResponse("first candidate has no content parts".to_string()))
}

/// Limit a response body to 500 characters for error messages.
pub(crate) fn truncate(body: &str) -> String {
    body.chars().take(500).collect()
}
