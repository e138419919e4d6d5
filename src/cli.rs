//! CLI argument parsing and command execution

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use directory_livegrep::config::{BuildOptions, DEFAULT_CONFIG_NAME, DEFAULT_METADATA_KEY};
use directory_livegrep::discovery::DiscoveryOptions;
use directory_livegrep::inspector::{GitInspector, DEFAULT_REMOTE};
use directory_livegrep::output::{render_summary, OutputConfig};
use directory_livegrep::pipeline::{self, GenerateOptions};

/// Generate a livegrep configuration for every bare git repository under a directory
#[derive(Parser, Debug)]
#[command(name = "directory-livegrep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Absolute path of the directory tree to scan
    #[arg(value_name = "ROOT")]
    root: PathBuf,

    /// Value of the `name` field in livegrep.json
    #[arg(long, value_name = "NAME", env = "LIVEGREP_CONFIG_NAME", default_value = DEFAULT_CONFIG_NAME)]
    name: String,

    /// Remote whose URL is recorded for each repository
    #[arg(long, value_name = "REMOTE", env = "LIVEGREP_REMOTE", default_value = DEFAULT_REMOTE)]
    remote: String,

    /// Metadata key the remote URL is stored under
    #[arg(long, value_name = "KEY", default_value = DEFAULT_METADATA_KEY)]
    metadata_key: String,

    /// Do not descend more than this many levels below ROOT
    #[arg(long, value_name = "DEPTH")]
    max_depth: Option<usize>,

    /// Follow symbolic links while scanning
    #[arg(long)]
    follow_links: bool,

    /// Only write livegrep.json
    #[arg(long)]
    skip_manifest: bool,

    /// Print livegrep.json to stdout instead of writing any files
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Suppress the summary and instructions
    #[arg(short, long)]
    quiet: bool,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", env = "RUST_LOG", default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let root = resolve_root(&self.root)?;
        debug!("Scanning {}", root.display());

        let options = GenerateOptions {
            root,
            discovery: DiscoveryOptions {
                follow_links: self.follow_links,
                max_depth: self.max_depth,
            },
            build: BuildOptions {
                config_name: self.name,
                metadata_key: self.metadata_key,
                remote: self.remote.clone(),
                ..BuildOptions::default()
            },
            write_manifest: !self.skip_manifest,
            dry_run: self.dry_run,
        };
        let inspector = GitInspector::new(self.remote);

        let summary = pipeline::execute(&options, &inspector).with_context(|| {
            format!(
                "Failed to generate configuration for {}",
                options.root.display()
            )
        })?;

        if self.dry_run {
            println!("{}", summary.json);
        } else if !self.quiet {
            let output = OutputConfig::from_env_and_flag(&self.color);
            print!("{}", render_summary(&output, &summary));
        }

        Ok(())
    }
}

fn init_logging(level: &str) {
    // A second initialization only happens in tests; keep the first logger.
    let _ = env_logger::Builder::new()
        .parse_filters(level)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

/// Make `root` absolute and drop any trailing separator.
fn resolve_root(root: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(root)
        .with_context(|| format!("Invalid root directory '{}'", root.display()))?;
    Ok(absolute.components().collect())
}
