//! # Index Configuration
//!
//! This module defines the document consumed by livegrep's `codesearch`
//! indexer and builds it from a list of discovered repository locations.
//!
//! ## Document shape
//!
//! ```json
//! {
//!   "name": "livegrep-config",
//!   "repositories": [
//!     {
//!       "path": "/data/team/a",
//!       "name": "a",
//!       "revisions": ["HEAD"],
//!       "metadata": { "github": "git@host:org/a" }
//!     }
//!   ]
//! }
//! ```
//!
//! ## Building entries
//!
//! For every location the remote URL is read through the
//! [`RepositoryInspector`]. A location without a usable URL contributes no
//! entry and is reported in [`BuildOutcome::skipped`]. Otherwise:
//!
//! - `path` is the location relative to the scan root, joined onto the
//!   container mount point (see [`container_path`]).
//! - `name` is the last segment of the location.
//! - `revisions` is always `["HEAD"]`.
//! - `metadata` maps the configured key (default `github`) to the URL with
//!   whitespace trimmed and a trailing `.git` removed (see
//!   [`normalize_remote_url`]).
//!
//! Entries keep the order of the input locations.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::inspector::{RepositoryInspector, DEFAULT_REMOTE};

/// Default value of the document's `name` field.
pub const DEFAULT_CONFIG_NAME: &str = "livegrep-config";

/// Default container mount point for the scanned tree.
pub const DEFAULT_MOUNT: &str = "/data";

/// Default metadata key for the remote URL.
pub const DEFAULT_METADATA_KEY: &str = "github";

/// The only revision ever indexed.
pub const HEAD_REVISION: &str = "HEAD";

/// Root of the livegrep configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    pub name: String,
    pub repositories: Vec<RepoConfig>,
}

/// One repository to index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoConfig {
    /// Location of the repository inside the container.
    pub path: String,
    pub name: String,
    pub revisions: Vec<String>,
    pub metadata: BTreeMap<String, String>,
}

impl IndexConfig {
    /// Creates a document with no repositories.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repositories: Vec::new(),
        }
    }
}

/// Settings that shape the generated entries.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Value of the document's `name` field.
    pub config_name: String,
    /// Where the scan root is mounted inside the container.
    pub mount: String,
    /// Metadata key holding the remote URL.
    pub metadata_key: String,
    /// Name of the remote the inspector reads, used in skip notices.
    pub remote: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            config_name: DEFAULT_CONFIG_NAME.to_string(),
            mount: DEFAULT_MOUNT.to_string(),
            metadata_key: DEFAULT_METADATA_KEY.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
        }
    }
}

/// Why a discovered repository produced no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The remote URL could not be read or was empty.
    NoRemote(String),
    /// The location does not lie beneath the scan root.
    PathOutsideRoot,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoRemote(detail) => write!(f, "no remote URL ({})", detail),
            SkipReason::PathOutsideRoot => write!(f, "not located under the scan root"),
        }
    }
}

/// A discovered repository left out of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRepository {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// The assembled document and the repositories that were left out.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub config: IndexConfig,
    pub skipped: Vec<SkippedRepository>,
}

/// Build the index configuration for `locations` found under `root`.
pub fn build(
    root: &Path,
    locations: &[PathBuf],
    inspector: &dyn RepositoryInspector,
    options: &BuildOptions,
) -> BuildOutcome {
    let mut config = IndexConfig::new(options.config_name.clone());
    let mut skipped = Vec::new();

    for location in locations {
        let lookup = inspector
            .remote_url(location)
            .map_err(|err| err.to_string())
            .and_then(|raw| normalize_remote_url(&raw).ok_or_else(|| "empty URL".to_string()));
        let url = match lookup {
            Ok(url) => url,
            Err(detail) => {
                warn!(
                    "No remote {} URL defined for {}, skipping...",
                    options.remote,
                    location.display()
                );
                skipped.push(SkippedRepository {
                    path: location.clone(),
                    reason: SkipReason::NoRemote(detail),
                });
                continue;
            }
        };

        let Some(path) = container_path(root, location, &options.mount) else {
            warn!(
                "{} is not under {}, skipping...",
                location.display(),
                root.display()
            );
            skipped.push(SkippedRepository {
                path: location.clone(),
                reason: SkipReason::PathOutsideRoot,
            });
            continue;
        };

        let mut metadata = BTreeMap::new();
        metadata.insert(options.metadata_key.clone(), url);

        config.repositories.push(RepoConfig {
            path,
            name: repository_name(location),
            revisions: vec![HEAD_REVISION.to_string()],
            metadata,
        });
    }

    BuildOutcome { config, skipped }
}

/// Serialize the document as pretty-printed JSON with two-space indentation.
pub fn to_json(config: &IndexConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Clean the raw output of a remote URL query.
///
/// Surrounding whitespace is trimmed and one trailing `.git` is removed.
/// Returns `None` when nothing is left.
pub fn normalize_remote_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let url = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

/// Rewrite `location` to where it appears inside the container.
///
/// The root is removed component-wise, so a trailing separator on either
/// side makes no difference. Returns `None` when `location` is not under
/// `root`.
pub fn container_path(root: &Path, location: &Path, mount: &str) -> Option<String> {
    let relative = location.strip_prefix(root).ok()?;

    let mut path = mount.trim_end_matches('/').to_string();
    for component in relative.components() {
        path.push('/');
        path.push_str(&component.as_os_str().to_string_lossy());
    }
    if path.is_empty() {
        path.push('/');
    }
    Some(path)
}

fn repository_name(location: &Path) -> String {
    location
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| location.to_string_lossy().into_owned())
}
