//! Shared test utilities for E2E tests.
//!
//! This module provides a fixture for building directory trees that contain
//! real bare repositories, plus helpers for running the binary against them.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     if !git_available() {
//!         return;
//!     }
//!     let fixture = TestFixture::new().with_bare_repo("A", Some("git@host:org/a.git"));
//!     fixture.command().assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    pub use super::git_available;
    pub use super::TestFixture;
}

/// Check whether the system `git` command can be run.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(args: &[&str], git_dir: Option<&Path>) {
    let mut command = Command::new("git");
    if let Some(dir) = git_dir {
        command.arg("--git-dir").arg(dir);
    }
    let status = command.args(args).status().expect("Failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}

/// A temporary directory tree to scan.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a bare repository at `path`, optionally with an `origin` remote.
    pub fn with_bare_repo(self, path: &str, remote: Option<&str>) -> Self {
        let repo = self.temp_dir.child(path);
        repo.create_dir_all().expect("Failed to create repo directory");
        git(
            &["init", "--bare", "--quiet", &repo.path().to_string_lossy()],
            None,
        );
        if let Some(url) = remote {
            git(&["config", "remote.origin.url", url], Some(repo.path()));
        }
        self
    }

    /// Create an empty directory.
    #[allow(dead_code)]
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Add a file with the given path and content.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Read the generated `livegrep.json` as JSON.
    #[allow(dead_code)]
    pub fn config_json(&self) -> serde_json::Value {
        let text = std::fs::read_to_string(self.path().join("livegrep.json"))
            .expect("Failed to read livegrep.json");
        serde_json::from_str(&text).expect("livegrep.json is not valid JSON")
    }

    /// A command for the binary with this fixture's directory as ROOT.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("directory-livegrep");
        cmd.arg(self.path())
            .arg("--color")
            .arg("never")
            .env_remove("RUST_LOG")
            .env_remove("LIVEGREP_CONFIG_NAME")
            .env_remove("LIVEGREP_REMOTE");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
