//! # directory-livegrep
//!
//! Finds bare git repositories under a directory tree and generates the
//! configuration a [livegrep](https://github.com/livegrep/livegrep)
//! deployment needs to index them: a `livegrep.json` repository list and a
//! `docker-compose.yaml` that serves the index.
//!
//! ## Quick Example
//!
//! ```
//! use directory_livegrep::config::{build, to_json, BuildOptions};
//! use directory_livegrep::inspector::MemoryInspector;
//! use std::path::{Path, PathBuf};
//!
//! let inspector = MemoryInspector::new()
//!     .with_remote("/srv/git/tools", "git@github.com:acme/tools.git");
//! let locations = vec![PathBuf::from("/srv/git/tools")];
//!
//! let outcome = build(Path::new("/srv/git"), &locations, &inspector, &BuildOptions::default());
//! let repo = &outcome.config.repositories[0];
//! assert_eq!(repo.path, "/data/tools");
//! assert_eq!(repo.metadata["github"], "git@github.com:acme/tools");
//!
//! let json = to_json(&outcome.config).unwrap();
//! assert!(json.contains("\"revisions\""));
//! ```
//!
//! ## Core Concepts
//!
//! - **Inspection (`inspector`, `git`)**: the two questions asked about a
//!   directory, answered by the system `git` command or from memory.
//! - **Discovery (`discovery`)**: the tree walk that collects bare
//!   repositories, skipping hidden directories and never descending into a
//!   repository.
//! - **Configuration (`config`)**: the livegrep document and how entries are
//!   derived from locations and remotes.
//! - **Output (`write`, `manifest`, `output`)**: writing the files and
//!   telling the operator what to run next.
//! - **Pipeline (`pipeline`)**: one sequential run over all of the above.

pub mod config;
pub mod discovery;
pub mod error;
pub mod git;
pub mod inspector;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod write;

#[cfg(test)]
mod config_proptest;
