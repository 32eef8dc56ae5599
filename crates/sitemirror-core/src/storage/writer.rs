//! Text writer for one mirrored document.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::local_path::LocalPath;

/// What happened to a document handed to [`persist_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// Content written to this path.
    Written(PathBuf),
    /// Only-update mode and the file already existed; nothing written.
    AlreadyPresent(PathBuf),
}

/// Writes `content` as UTF-8 to `target`, creating its directory first.
///
/// With `only_update`, an existing destination is left untouched.
pub fn persist_text(target: &LocalPath, content: &str, only_update: bool) -> Result<PersistOutcome> {
    let path = target.full_path();
    if only_update && path.exists() {
        return Ok(PersistOutcome::AlreadyPresent(path));
    }

    fs::create_dir_all(&target.directory)
        .with_context(|| format!("failed to create directory: {}", target.directory.display()))?;
    fs::write(&path, content.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(PersistOutcome::Written(path))
}
