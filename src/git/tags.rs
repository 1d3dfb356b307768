//! Tag enumeration and version detection.

use semver::Version;
use tracing::debug;

use crate::error::GitError;

use super::command::{FailurePolicy, GitExecutor, run_git};

/// List all tags, newest version first.
///
/// Ordering is git's own version sort (`--sort=-v:refname`), so tags that
/// are not semantic versions still get a deterministic position.
pub async fn list_tags<E: GitExecutor + ?Sized>(executor: &E) -> Result<Vec<String>, GitError> {
    let output = run_git(executor, &["tag", "--sort=-v:refname"], FailurePolicy::Fatal).await?;
    let tags = parse_tag_list(&output);

    for tag in tags.iter().take(2) {
        if get_version_from_tag(tag).is_none() {
            debug!(tag = %tag, "Tag is not a semantic version; ordering follows git's version sort");
        }
    }

    Ok(tags)
}

/// Split `git tag` output into tag names, dropping blank lines.
pub fn parse_tag_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract semver version from a tag name.
/// Handles both "v1.2.3" and "1.2.3" formats.
pub fn get_version_from_tag(tag_name: &str) -> Option<Version> {
    let version_str = tag_name.strip_prefix('v').unwrap_or(tag_name);
    Version::parse(version_str).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::command::{GitOutput, MockGitExecutor};

    #[test]
    fn test_version_from_tag_with_v() {
        assert_eq!(get_version_from_tag("v1.2.3"), Some(Version::new(1, 2, 3)));
    }

    #[test]
    fn test_version_from_tag_without_v() {
        assert_eq!(get_version_from_tag("1.2.3"), Some(Version::new(1, 2, 3)));
    }

    #[test]
    fn test_version_from_tag_invalid() {
        assert_eq!(get_version_from_tag("nightly-2025-01-01"), None);
    }

    #[test]
    fn test_parse_tag_list_empty() {
        assert!(parse_tag_list("").is_empty());
    }

    #[test]
    fn test_parse_tag_list_drops_blank_lines() {
        let tags = parse_tag_list("v2.0.0\n\n  v1.0.0  \n");
        assert_eq!(tags, vec!["v2.0.0".to_string(), "v1.0.0".to_string()]);
    }

    #[tokio::test]
    async fn test_list_tags_requests_version_sort() {
        let mut mock = MockGitExecutor::new();
        mock.expect_exec()
            .withf(|args| args == &["tag".to_string(), "--sort=-v:refname".to_string()])
            .times(1)
            .returning(|_| {
                Ok(GitOutput {
                    success: true,
                    code: Some(0),
                    stdout: "v1.10.0\nv1.9.0\nv1.0.0\n".to_string(),
                    stderr: String::new(),
                })
            });

        let tags = list_tags(&mock).await.unwrap();
        assert_eq!(tags, vec!["v1.10.0", "v1.9.0", "v1.0.0"]);
    }

    #[tokio::test]
    async fn test_list_tags_failure_is_fatal() {
        let mut mock = MockGitExecutor::new();
        mock.expect_exec().returning(|_| {
            Ok(GitOutput {
                success: false,
                code: Some(128),
                stdout: String::new(),
                stderr: "fatal: not a git repository".to_string(),
            })
        });

        let result = list_tags(&mock).await;
        assert!(matches!(result, Err(GitError::CommandFailed { .. })));
    }
}
