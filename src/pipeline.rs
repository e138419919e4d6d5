//! Orchestrator for a complete generation run
//!
//! Runs the stages in order, each to completion:
//! 1. Discover bare repositories under the root
//! 2. Build the index configuration from their remotes
//! 3. Serialize it
//! 4. Write `livegrep.json` and `docker-compose.yaml` into the root
//!
//! Per-item skips from stages 1 and 2 are carried into the [`RunSummary`];
//! any error returned from here is fatal.

use std::path::PathBuf;

use log::info;

use crate::config::{self, BuildOptions, SkippedRepository};
use crate::discovery::{self, DiscoveryOptions, SkippedEntry};
use crate::error::Result;
use crate::inspector::RepositoryInspector;
use crate::manifest::{COMPOSE_FILE_NAME, CONFIG_FILE_NAME, DOCKER_COMPOSE};
use crate::write::write_file;

/// Everything a run needs to know.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Tree to scan; also where the output files are written.
    pub root: PathBuf,
    pub discovery: DiscoveryOptions,
    pub build: BuildOptions,
    /// Write `docker-compose.yaml` next to the configuration.
    pub write_manifest: bool,
    /// Produce the document without writing anything.
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            discovery: DiscoveryOptions::default(),
            build: BuildOptions::default(),
            write_manifest: true,
            dry_run: false,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    pub fn compose_path(&self) -> PathBuf {
        self.root.join(COMPOSE_FILE_NAME)
    }
}

/// What a run did.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub root: PathBuf,
    /// Bare repositories found by discovery.
    pub discovered: usize,
    /// Entries in the written document.
    pub emitted: usize,
    pub skipped_entries: Vec<SkippedEntry>,
    pub skipped_repositories: Vec<SkippedRepository>,
    /// Files written, in write order. Empty for a dry run.
    pub written: Vec<PathBuf>,
    /// The serialized configuration document.
    pub json: String,
}

/// Execute a complete run
pub fn execute(
    options: &GenerateOptions,
    inspector: &dyn RepositoryInspector,
) -> Result<RunSummary> {
    let discovery = discovery::discover(&options.root, inspector, &options.discovery)?;
    info!(
        "Found {} bare repositories under {}",
        discovery.len(),
        options.root.display()
    );

    let outcome = config::build(&options.root, &discovery.locations, inspector, &options.build);
    let json = config::to_json(&outcome.config)?;

    let mut written = Vec::new();
    if !options.dry_run {
        let config_path = options.config_path();
        write_file(&config_path, &json)?;
        written.push(config_path);

        if options.write_manifest {
            let compose_path = options.compose_path();
            write_file(&compose_path, DOCKER_COMPOSE)?;
            written.push(compose_path);
        }
    }

    Ok(RunSummary {
        root: options.root.clone(),
        discovered: discovery.len(),
        emitted: outcome.config.repositories.len(),
        skipped_entries: discovery.skipped,
        skipped_repositories: outcome.skipped,
        written,
        json,
    })
}
