//! git subprocess execution.
//!
//! Shells out to the system `git` binary so the user's git config and
//! repository layout are respected exactly as on the command line.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::GitError;

/// Raw result of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// What to do when git exits with a non-zero status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report the command, exit detail and stderr as an error.
    Fatal,
    /// Log a warning and continue with an empty result.
    Tolerated,
}

/// Trait for executing git commands.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitExecutor: Send + Sync {
    /// Run `git <args>` and return its exit status and captured output.
    async fn exec(&self, args: Vec<String>) -> Result<GitOutput, GitError>;
}

/// Executor that runs the real `git` binary in a working directory.
#[derive(Debug, Clone)]
pub struct SystemGit {
    workdir: PathBuf,
}

impl SystemGit {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }
}

#[async_trait]
impl GitExecutor for SystemGit {
    async fn exec(&self, args: Vec<String>) -> Result<GitOutput, GitError> {
        let output = Command::new("git")
            .args(&args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(GitError::SpawnFailed)?;

        Ok(GitOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Check that a `git` executable is available on PATH.
pub fn check_git_installed() -> Result<(), GitError> {
    which::which("git").map(|_| ()).map_err(|_| GitError::NotInstalled)
}

/// Run a git command and return its trimmed stdout.
///
/// A non-zero exit is an error under [`FailurePolicy::Fatal`]. Under
/// [`FailurePolicy::Tolerated`] it is logged and yields an empty string.
/// Failing to spawn git at all is always an error.
pub async fn run_git<E: GitExecutor + ?Sized>(
    executor: &E,
    args: &[&str],
    policy: FailurePolicy,
) -> Result<String, GitError> {
    let command = format!("git {}", args.join(" "));
    debug!(%command, "Running git");

    let output = executor
        .exec(args.iter().map(|a| a.to_string()).collect())
        .await?;

    if output.success {
        return Ok(output.stdout.trim().to_string());
    }

    let stderr = output.stderr.trim().to_string();
    match policy {
        FailurePolicy::Fatal => Err(GitError::CommandFailed {
            command,
            code: output.code,
            stderr,
        }),
        FailurePolicy::Tolerated => {
            warn!(%command, code = ?output.code, %stderr, "git command failed; continuing without its output");
            Ok(String::new())
        }
    }
}
