//! Commit subject extraction for a range.

use tracing::{Level, debug};

use crate::error::GitError;

use super::command::{FailurePolicy, GitExecutor, run_git};
use super::range::CommitRange;

/// Substituted when the range contains no commits.
pub const NO_COMMITS_MESSAGE: &str = "No new commits found in the specified range.";

/// `git log` format: one bulleted subject line per commit.
const LOG_FORMAT: &str = "--pretty=format:- %s";

/// Bulleted commit subjects for one range, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitHistory {
    pub text: String,
    /// Zero when the range was empty and the sentinel message was used.
    pub commit_count: usize,
}

impl CommitHistory {
    /// Build from raw `git log` output, substituting the sentinel when empty.
    pub fn from_log_output(output: &str) -> Self {
        let text = output.trim();
        if text.is_empty() {
            return Self {
                text: NO_COMMITS_MESSAGE.to_string(),
                commit_count: 0,
            };
        }

        Self {
            text: text.to_string(),
            commit_count: text.lines().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commit_count == 0
    }

    /// The bulleted subject lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines().take(self.commit_count)
    }
}

/// Fetch the commit subjects in `range`.
///
/// An empty range is not an error; it yields the sentinel history.
/// The revision is followed by `--` so a tag named like a worktree path is
/// never read as a path.
pub async fn fetch_history<E: GitExecutor + ?Sized>(
    executor: &E,
    range: &CommitRange,
) -> Result<CommitHistory, GitError> {
    let rev = range.rev_spec();

    if tracing::enabled!(Level::DEBUG) {
        let count = run_git(
            executor,
            &["rev-list", "--count", rev.as_str(), "--"],
            FailurePolicy::Tolerated,
        )
        .await?;
        if !count.is_empty() {
            debug!(range = %rev, commits = %count, "Counted commits in range");
        }
    }

    let output = run_git(
        executor,
        &["log", rev.as_str(), LOG_FORMAT, "--"],
        FailurePolicy::Fatal,
    )
    .await?;
    Ok(CommitHistory::from_log_output(&output))
}
