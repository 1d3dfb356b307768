//! git operations via the system `git` binary.

pub mod command;
pub mod history;
pub mod range;
pub mod tags;

pub use command::{FailurePolicy, GitExecutor, GitOutput, SystemGit, check_git_installed, run_git};
pub use history::{CommitHistory, NO_COMMITS_MESSAGE, fetch_history};
pub use range::{CommitRange, resolve_commit_range, resolve_range};
pub use tags::{get_version_from_tag, list_tags};
