//! The three stages, in order: resolve range, extract history, generate changelog.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Settings;
use crate::error::{GeminiError, PipelineError};
use crate::gemini::{GeminiClient, PromptTemplate, resolve_api_key};
use crate::git::{CommitHistory, CommitRange, GitExecutor, fetch_history, resolve_commit_range};
use crate::output::write_artifact;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub range: CommitRange,
    pub history: CommitHistory,
    pub history_path: PathBuf,
    pub changelog: String,
    pub changelog_path: PathBuf,
}

/// Run the full pipeline against the production Gemini endpoint.
///
/// The API key is resolved before any git or network work, so a missing key
/// stops the run without touching either.
pub async fn run<E: GitExecutor + ?Sized>(
    settings: &Settings,
    executor: &E,
    api_key_flag: Option<&str>,
) -> Result<RunReport, PipelineError> {
    let api_key = resolve_api_key(api_key_flag)?;
    let client = GeminiClient::new(api_key, settings.timeout)?;

    run_with_client(settings, executor, &client).await
}

/// Run the full pipeline with a prebuilt client.
pub async fn run_with_client<E: GitExecutor + ?Sized>(
    settings: &Settings,
    executor: &E,
    client: &GeminiClient,
) -> Result<RunReport, PipelineError> {
    let range = resolve_commit_range(executor).await?;
    let history = extract_history(executor, &range, &settings.history_path()).await?;

    finish(settings, client, range, history).await
}

async fn finish(
    settings: &Settings,
    client: &GeminiClient,
    range: CommitRange,
    history: CommitHistory,
) -> Result<RunReport, PipelineError> {
    println!("\nSending commit history to the Gemini API...");
    let changelog = generate_changelog(client, &settings.prompt, &history).await?;

    let changelog_path = settings.changelog_path();
    write_artifact(&changelog_path, &changelog)?;
    println!("\nLog saved: '{}'", changelog_path.display());

    Ok(RunReport {
        range,
        history,
        history_path: settings.history_path(),
        changelog,
        changelog_path,
    })
}

/// Fetch the commit list for `range` and save it to `path`.
pub async fn extract_history<E: GitExecutor + ?Sized>(
    executor: &E,
    range: &CommitRange,
    path: &Path,
) -> Result<CommitHistory, PipelineError> {
    let history = fetch_history(executor, range).await?;
    write_artifact(path, &history.text)?;
    println!("Successfully saved raw commit list to '{}'", path.display());
    Ok(history)
}

/// Render the prompt for `history` and ask Gemini for the changelog text.
pub async fn generate_changelog(
    client: &GeminiClient,
    template: &PromptTemplate,
    history: &CommitHistory,
) -> Result<String, GeminiError> {
    let prompt = template.render(&history.text);
    debug!(commits = history.commit_count, "Rendered changelog prompt");
    client.generate(&prompt).await
}
