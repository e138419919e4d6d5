//! Writing output files
//!
//! Both generated files go through [`write_file`], which creates any missing
//! parent directories and then replaces the file contents. A failure here is
//! fatal for the run.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Write `contents` to `path`, creating parent directories as needed.
///
/// Existing files are overwritten.
pub fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
                message: format!("Failed to create directory '{}': {}", parent.display(), e),
            })?;
        }
    }

    fs::write(path, contents).map_err(|e| Error::Filesystem {
        message: format!("Failed to write file '{}': {}", path.display(), e),
    })
}
