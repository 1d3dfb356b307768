//! tagscribe - turn the commits of the latest tagged release into a changelog.
//!
//! # Overview
//!
//! tagscribe picks the commit range of the most recent release from the
//! repository's tags, writes the commit subjects to `commit_history.txt`,
//! asks Gemini to summarize them, and writes the result to `changelog.txt`.

pub mod config;
pub mod error;
pub mod gemini;
pub mod git;
pub mod output;
pub mod pipeline;

// Re-export commonly used types
pub use config::Settings;
pub use error::{ConfigError, GeminiError, GitError, OutputError, PipelineError};
pub use gemini::GeminiClient;
pub use git::{CommitHistory, CommitRange, GitExecutor, SystemGit};
pub use pipeline::{RunReport, run, run_with_client};
