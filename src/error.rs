//! # Error Handling
//!
//! This module defines the error type shared by the discovery, build and
//! write stages. It uses `thiserror` to derive descriptive messages.
//!
//! Only structural failures travel through this type to the caller:
//!
//! - The scan root cannot be opened.
//! - The configuration document cannot be serialized.
//! - An output file cannot be written.
//!
//! Per-item problems (an unreadable directory entry, a repository without a
//! remote) are recorded as skip values by the stage that hit them and never
//! abort a run. `GitCommand` is the error the production inspector reports
//! for a single repository and is absorbed the same way.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for directory-livegrep operations
#[derive(Error, Debug)]
pub enum Error {
    /// The directory tree to scan could not be opened.
    #[error("Cannot open scan root {}: {message}", .path.display())]
    RootInaccessible { path: PathBuf, message: String },

    /// A `git` invocation failed or could not be started.
    #[error("Git command failed for {}: {command} - {stderr}", .path.display())]
    GitCommand {
        command: String,
        path: PathBuf,
        stderr: String,
    },

    /// A host filesystem operation failed while writing output.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// The index configuration could not be encoded.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            message: err.to_string(),
        }
    }
}
