//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use git2::{Oid, Repository, Signature};
use serde_json::{Value, json};
use tagscribe::git::SystemGit;

/// Request path of the generateContent endpoint.
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Executor running the system git binary inside this repository.
    pub fn git(&self) -> SystemGit {
        SystemGit::new(self.dir.path())
    }

    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Create a commit with the given message. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = self.signature();

        let file_path = self.dir.path().join("test.txt");
        let content = format!(
            "{}\n{}",
            message,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        );
        std::fs::write(&file_path, content).expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(Path::new("test.txt"))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a lightweight tag pointing to the given OID.
    pub fn tag_lightweight(&self, name: &str, oid: Oid) {
        let obj = self.repo.find_object(oid, None).expect("Failed to find object");
        self.repo
            .tag_lightweight(name, &obj, false)
            .expect("Failed to create lightweight tag");
    }

    /// Create an annotated tag pointing to the given OID.
    pub fn tag_annotated(&self, name: &str, oid: Oid, message: &str) {
        let sig = self.signature();
        let obj = self.repo.find_object(oid, None).expect("Failed to find object");
        self.repo
            .tag(name, &obj, &sig, message, false)
            .expect("Failed to create annotated tag");
    }

    /// Read a file from the repository directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }
}

/// A well-formed generateContent response carrying `text`.
pub fn gemini_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": text }],
                "role": "model"
            },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {
            "promptTokenCount": 120,
            "candidatesTokenCount": 40,
            "totalTokenCount": 160
        },
        "modelVersion": "gemini-2.0-flash"
    })
}
