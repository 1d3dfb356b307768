//! Run settings: output locations, HTTP timeout, prompt template.
//!
//! Every setting has a built-in default. Environment variables override the
//! timeout and the prompt template; invalid overrides fall back to the
//! default with a warning.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::warn;

use crate::error::ConfigError;
use crate::gemini::prompt::PromptTemplate;

/// File the raw commit list is written to.
pub const COMMIT_HISTORY_FILENAME: &str = "commit_history.txt";

/// File the generated changelog is written to.
pub const CHANGELOG_FILENAME: &str = "changelog.txt";

/// Default timeout for the generation request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable to override the request timeout (seconds).
pub const TIMEOUT_ENV_VAR: &str = "TAGSCRIBE_HTTP_TIMEOUT";

/// Environment variable naming a file that replaces the built-in prompt template.
pub const PROMPT_FILE_ENV_VAR: &str = "TAGSCRIBE_PROMPT_FILE";

/// Environment variable holding the tracing filter for diagnostics.
pub const LOG_ENV_VAR: &str = "TAGSCRIBE_LOG";

/// Filter used when `TAGSCRIBE_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for one run of the pipeline.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub timeout: Duration,
    pub prompt: PromptTemplate,
}

impl Settings {
    /// Settings with built-in defaults, writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            prompt: PromptTemplate::default(),
        }
    }

    /// Settings with environment overrides applied.
    pub fn from_env(output_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let prompt = match env::var_os(PROMPT_FILE_ENV_VAR) {
            Some(path) if !path.is_empty() => PromptTemplate::from_file(Path::new(&path))?,
            _ => PromptTemplate::default(),
        };

        Ok(Self {
            output_dir: output_dir.into(),
            timeout: get_timeout(),
            prompt,
        })
    }

    pub fn history_path(&self) -> PathBuf {
        self.output_dir.join(COMMIT_HISTORY_FILENAME)
    }

    pub fn changelog_path(&self) -> PathBuf {
        self.output_dir.join(CHANGELOG_FILENAME)
    }
}

/// Get the configured request timeout.
///
/// Reads `TAGSCRIBE_HTTP_TIMEOUT` if set, otherwise uses 60 seconds.
/// Zero, empty, or non-numeric values log a warning and use the default.
pub fn get_timeout() -> Duration {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}
