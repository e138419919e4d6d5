//! Repository Discovery
//!
//! Walks a directory tree and collects every directory that the
//! [`RepositoryInspector`] classifies as a bare repository.
//!
//! ## Rules
//!
//! 1.  **Deterministic order**: entries are visited depth-first with siblings
//!     sorted by file name.
//! 2.  **Hidden directories**: a directory below the root whose name starts
//!     with `.` is neither classified nor descended into. The root itself is
//!     exempt.
//! 3.  **No descent into repositories**: once a directory is classified as
//!     bare, nothing beneath it is visited. Its `objects/` and `refs/` are
//!     never candidates.
//! 4.  **Per-entry failures**: an entry that cannot be read is recorded in
//!     [`Discovery::skipped`] and the walk carries on. Only an unreadable root
//!     fails the call.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::inspector::RepositoryInspector;

/// Walker settings.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    /// Follow symbolic links while walking.
    pub follow_links: bool,
    /// Maximum depth below the root to visit; `None` walks the whole tree.
    pub max_depth: Option<usize>,
}

/// A directory entry that could not be inspected during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// The offending path, when the walker could name one.
    pub path: Option<PathBuf>,
    pub reason: String,
}

/// Result of a walk: repository locations in traversal order, plus the
/// entries that had to be skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub locations: Vec<PathBuf>,
    pub skipped: Vec<SkippedEntry>,
}

impl Discovery {
    /// Number of repositories found.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Walk `root` and return every bare repository beneath it.
pub fn discover(
    root: &Path,
    inspector: &dyn RepositoryInspector,
    options: &DiscoveryOptions,
) -> Result<Discovery> {
    check_root(root)?;

    let mut walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by_file_name();
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut discovery = Discovery::default();
    let mut entries = walker.into_iter();

    while let Some(next) = entries.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(Error::RootInaccessible {
                    path: root.to_path_buf(),
                    message: err.to_string(),
                });
            }
            Err(err) => {
                let path = err.path().map(Path::to_path_buf);
                warn!(
                    "Skipping {}: {}",
                    path.as_deref().unwrap_or(root).display(),
                    err
                );
                discovery.skipped.push(SkippedEntry {
                    path,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        if entry.depth() > 0 && is_hidden(&entry) {
            debug!("Ignoring hidden directory {}", entry.path().display());
            entries.skip_current_dir();
            continue;
        }

        match inspector.is_bare(entry.path()) {
            Ok(true) => {
                info!("Adding {} to livegrep index", entry.path().display());
                discovery.locations.push(entry.into_path());
                entries.skip_current_dir();
            }
            Ok(false) => {}
            Err(err) => debug!("{} is not a bare repository: {}", entry.path().display(), err),
        }
    }

    Ok(discovery)
}

fn check_root(root: &Path) -> Result<()> {
    let inaccessible = |message: String| Error::RootInaccessible {
        path: root.to_path_buf(),
        message,
    };

    let metadata = fs::metadata(root).map_err(|e| inaccessible(e.to_string()))?;
    if !metadata.is_dir() {
        return Err(inaccessible("not a directory".to_string()));
    }
    fs::read_dir(root).map_err(|e| inaccessible(e.to_string()))?;
    Ok(())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
