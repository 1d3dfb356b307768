//! Prompt construction for changelog generation.

use std::path::Path;

use crate::error::ConfigError;

/// Placeholder replaced by the commit list.
pub const COMMITS_PLACEHOLDER: &str = "{commits}";

/// Built-in instructions. Wording lives here so it can change without
/// touching control flow.
pub const DEFAULT_TEMPLATE: &str = r#"You are an expert release-manager. Your task is to write a user-friendly changelog.
Analyze the following list of git commit messages and summarize them into a clean,
human-readable changelog for a new software release.

Formatting rules:
- Start with a single sentence summarizing the release.
- Group related changes under bolded categories such as **New Features**, **Bug Fixes** and **Improvements**. Do not use markdown headings.
- Do not add a release number or version header.
- Do not add meta-commentary about the commits or about these instructions.
- Never use emoji.
- Follow the structure of the example below.

Example:
This release adds a sleep timer and fixes playback after calls.

**New Features**
- Added a sleep timer that stops playback after a chosen duration.

**Bug Fixes**
- Playback now resumes correctly after a phone call.

Here are the commit messages:
```
{commits}
```"#;

/// Instruction template with a `{commits}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplate {
    /// Load a template from a file. It must contain `{commits}`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;

        if !text.contains(COMMITS_PLACEHOLDER) {
            return Err(ConfigError::TemplateMissingPlaceholder {
                path: path.to_path_buf(),
            });
        }

        Ok(Self { text })
    }

    /// Build the prompt, embedding the commit list verbatim.
    pub fn render(&self, commits: &str) -> String {
        self.text.replace(COMMITS_PLACEHOLDER, commits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_has_placeholder() {
        assert!(DEFAULT_TEMPLATE.contains(COMMITS_PLACEHOLDER));
    }

    #[test]
    fn test_render_embeds_commits_in_fenced_block() {
        let prompt = PromptTemplate::default().render("- fix: crash on start\n- feat: timer");
        assert!(prompt.contains("```\n- fix: crash on start\n- feat: timer\n```"));
        assert!(!prompt.contains(COMMITS_PLACEHOLDER));
    }

    #[test]
    fn test_default_template_carries_formatting_rules() {
        let prompt = PromptTemplate::default().render("- x");
        assert!(prompt.contains("release-manager"));
        assert!(prompt.contains("Never use emoji"));
        assert!(prompt.contains("single sentence"));
        assert!(prompt.contains("**New Features**"));
    }

    #[test]
    fn test_render_keeps_commit_text_verbatim() {
        let commits = "- chore: bump `deps` ## {odd}";
        let prompt = PromptTemplate::default().render(commits);
        assert!(prompt.contains(commits));
    }

    #[test]
    fn test_from_file_missing() {
        let result = PromptTemplate::from_file(Path::new("/nonexistent/tagscribe/prompt.txt"));
        assert!(matches!(result, Err(ConfigError::TemplateRead { .. })));
    }
}
