//! Thin wrappers around the system `git` command.
//!
//! Every query is run with an explicit `--git-dir`, so git never searches
//! parent directories and a plain directory simply fails the query.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Run `git --git-dir <git_dir> <args>` and return its stdout.
///
/// A non-zero exit status is reported as `Error::GitCommand` with the
/// captured stderr, or the exit status when git printed nothing.
fn run(git_dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .arg("--git-dir")
        .arg(git_dir)
        .args(args)
        .output()
        .map_err(|e| Error::GitCommand {
            command: args.join(" "),
            path: git_dir.to_path_buf(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Error::GitCommand {
            command: args.join(" "),
            path: git_dir.to_path_buf(),
            stderr: if stderr.is_empty() {
                output.status.to_string()
            } else {
                stderr
            },
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Ask git whether `path` is the object store of a bare repository.
///
/// Returns `Ok(false)` for the git directory of a repository with a work
/// tree, and an error when `path` is not a git directory at all.
pub fn is_bare_repository(path: &Path) -> Result<bool> {
    let stdout = run(path, &["rev-parse", "--is-bare-repository"])?;
    Ok(stdout.trim() == "true")
}

/// Read `remote.<remote>.url` from the repository's own configuration.
///
/// The text is returned exactly as git printed it, trailing newline included.
/// git exits with status 1 when the key is not set, which surfaces here as
/// an error.
pub fn remote_url(path: &Path, remote: &str) -> Result<String> {
    let key = format!("remote.{}.url", remote);
    run(path, &["config", "--get", &key])
}
