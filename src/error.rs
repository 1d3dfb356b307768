//! Error types for tagscribe modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from git subprocess invocations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found on PATH. Install git and run tagscribe from inside a repository.")]
    NotInstalled,

    #[error("Failed to spawn git process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("A git command failed: '{command}' exited with {}: {stderr}",
             .code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Errors from the Gemini generation API.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error(
        "Gemini API key is missing. Provide it with the --api-key flag or set the GEMINI_API_KEY environment variable."
    )]
    MissingApiKey,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Gemini API request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Error calling Gemini API: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Gemini API returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Error parsing Gemini API response: {0}")]
    MalformedResponse(String),
}

/// Errors from writing the output artifacts.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Error writing to file '{}': {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from loading run settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read prompt template '{}': {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Prompt template '{}' does not contain the {{commits}} placeholder", .path.display())]
    TemplateMissingPlaceholder { path: PathBuf },
}

/// Any failure that ends a pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Gemini(#[from] GeminiError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
