//! Commit range resolution from the tag list.

use std::fmt;

use crate::error::GitError;

use super::command::GitExecutor;
use super::tags::list_tags;

/// The span of commits that belongs to the latest release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitRange {
    /// No tags: everything reachable from HEAD.
    Head,
    /// A single tag: everything up to and including it.
    UpTo { tag: String },
    /// Commits after `previous`, through `latest`.
    Between { previous: String, latest: String },
}

impl CommitRange {
    /// The revision expression passed to `git log`.
    pub fn rev_spec(&self) -> String {
        match self {
            CommitRange::Head => "HEAD".to_string(),
            CommitRange::UpTo { tag } => tag.clone(),
            CommitRange::Between { previous, latest } => format!("{previous}..{latest}"),
        }
    }

    /// Progress line telling the operator which range was picked.
    pub fn describe(&self) -> String {
        match self {
            CommitRange::Head => "No tags found. Getting everything since the root commit.".to_string(),
            CommitRange::UpTo { tag } => {
                format!("Found only one tag. Getting all commits up to '{tag}'.")
            }
            CommitRange::Between { previous, latest } => {
                format!("Getting commits between {previous} and {latest}.")
            }
        }
    }
}

impl fmt::Display for CommitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rev_spec())
    }
}

/// Pick the range for a tag list sorted newest first.
///
/// Only the first two tags matter; older tags are ignored.
pub fn resolve_range(tags: &[String]) -> CommitRange {
    match tags {
        [] => CommitRange::Head,
        [tag] => CommitRange::UpTo { tag: tag.clone() },
        [latest, previous, ..] => CommitRange::Between {
            previous: previous.clone(),
            latest: latest.clone(),
        },
    }
}

/// List the repository's tags and resolve the range of the latest release.
///
/// Prints which branch of the policy was taken.
pub async fn resolve_commit_range<E: GitExecutor + ?Sized>(
    executor: &E,
) -> Result<CommitRange, GitError> {
    println!("Analyzing git tags to determine commit range...");
    let tags = list_tags(executor).await?;
    let range = resolve_range(&tags);
    println!("{}", range.describe());
    Ok(range)
}
