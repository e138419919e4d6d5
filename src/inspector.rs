//! # Repository Inspection
//!
//! Discovery and config synthesis need exactly two answers about a
//! directory: is it a bare repository, and what is its remote URL. The
//! `RepositoryInspector` trait captures those two questions so the core
//! logic never depends on how they are answered.
//!
//! - **`GitInspector`** asks the system `git` command (see [`crate::git`]).
//! - **`MemoryInspector`** answers from in-memory tables. Tests and
//!   benchmarks use it to describe repositories without running git.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Error, Result};

/// Remote read by default when none is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// Trait for repository queries - allows faking in tests
pub trait RepositoryInspector: Send + Sync {
    /// Reports whether `path` is the root of a bare repository.
    ///
    /// An error means the question could not be answered (not a git
    /// directory, git missing). Callers treat it the same as `false`.
    fn is_bare(&self, path: &Path) -> Result<bool>;

    /// Returns the configured remote URL of the repository at `path`, as
    /// raw text.
    fn remote_url(&self, path: &Path) -> Result<String>;
}

/// Inspector backed by the system `git` command.
#[derive(Debug, Clone)]
pub struct GitInspector {
    remote: String,
}

impl GitInspector {
    /// Creates an inspector that reads the URL of `remote`.
    pub fn new(remote: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
        }
    }

    /// The remote whose URL is looked up.
    pub fn remote(&self) -> &str {
        &self.remote
    }
}

impl Default for GitInspector {
    fn default() -> Self {
        Self::new(DEFAULT_REMOTE)
    }
}

impl RepositoryInspector for GitInspector {
    fn is_bare(&self, path: &Path) -> Result<bool> {
        crate::git::is_bare_repository(path)
    }

    fn remote_url(&self, path: &Path) -> Result<String> {
        crate::git::remote_url(path, &self.remote)
    }
}

/// In-memory inspector for tests and benchmarks.
///
/// Paths registered with [`with_bare`](Self::with_bare) are bare
/// repositories, paths registered with
/// [`with_git_dir`](Self::with_git_dir) are git directories that are not
/// bare, and every other path fails the query the way `git` does for a
/// plain directory.
///
/// `is_bare` queries are only logged after
/// [`recording_probes`](Self::recording_probes); read them back with
/// [`probed`](Self::probed).
#[derive(Debug, Default)]
pub struct MemoryInspector {
    bare: BTreeSet<PathBuf>,
    non_bare: BTreeSet<PathBuf>,
    remotes: BTreeMap<PathBuf, String>,
    probed: Option<Mutex<Vec<PathBuf>>>,
}

impl MemoryInspector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a bare repository without a remote.
    pub fn with_bare(mut self, path: impl Into<PathBuf>) -> Self {
        self.bare.insert(path.into());
        self
    }

    /// Registers a bare repository whose remote reports `url`.
    pub fn with_remote(mut self, path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        let path = path.into();
        self.bare.insert(path.clone());
        self.remotes.insert(path, url.into());
        self
    }

    /// Registers a git directory that belongs to a work tree.
    pub fn with_git_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.non_bare.insert(path.into());
        self
    }

    /// Starts logging every path passed to `is_bare`.
    pub fn recording_probes(mut self) -> Self {
        self.probed = Some(Mutex::default());
        self
    }

    /// Every path passed to `is_bare`, in call order. Empty unless
    /// recording was enabled.
    pub fn probed(&self) -> Vec<PathBuf> {
        self.probed
            .as_ref()
            .map(|log| {
                log.lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .clone()
            })
            .unwrap_or_default()
    }

    fn not_a_repository(command: &str, path: &Path) -> Error {
        Error::GitCommand {
            command: command.to_string(),
            path: path.to_path_buf(),
            stderr: "fatal: not a git repository".to_string(),
        }
    }
}

impl RepositoryInspector for MemoryInspector {
    fn is_bare(&self, path: &Path) -> Result<bool> {
        if let Some(log) = &self.probed {
            log.lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push(path.to_path_buf());
        }

        if self.bare.contains(path) {
            Ok(true)
        } else if self.non_bare.contains(path) {
            Ok(false)
        } else {
            Err(Self::not_a_repository("rev-parse --is-bare-repository", path))
        }
    }

    fn remote_url(&self, path: &Path) -> Result<String> {
        if !self.bare.contains(path) && !self.non_bare.contains(path) {
            return Err(Self::not_a_repository("config --get remote.url", path));
        }
        self.remotes
            .get(path)
            .map(|url| format!("{}\n", url))
            .ok_or_else(|| Error::GitCommand {
                command: "config --get remote.url".to_string(),
                path: path.to_path_buf(),
                stderr: "exit status: 1".to_string(),
            })
    }
}
