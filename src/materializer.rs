//! Tree materializer: creates the declared directories and files on disk.
//!
//! Traversal is depth-first preorder over an explicit work stack, so a
//! deeply nested spec cannot overflow the call stack. A parent directory is
//! fully created before any of its children; siblings are processed in spec
//! order. Creation is idempotent: an entry that already exists with the
//! right kind is success, and existing file contents are never touched.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::errors::{BuildError, BuildResult, EntryKind};
use crate::spec::TreeEntry;

/// Materialize `entries` below `root`.
///
/// Aborts on the first filesystem rejection; entries created before the
/// failing one remain in place (no rollback).
#[instrument(skip(entries))]
pub fn materialize(entries: &[TreeEntry], root: &Path) -> BuildResult<()> {
    // Push in reverse so the stack pops siblings in spec order.
    let mut stack: Vec<(PathBuf, &TreeEntry)> = entries
        .iter()
        .rev()
        .map(|e| (root.join(e.name()), e))
        .collect();

    while let Some((path, entry)) = stack.pop() {
        match entry {
            TreeEntry::Directory { children, .. } => {
                create_directory(&path)?;
                for child in children.iter().rev() {
                    stack.push((path.join(child.name()), child));
                }
            }
            TreeEntry::File { .. } => create_empty_file(&path)?,
        }
    }
    Ok(())
}

/// Create `path` as a directory, including missing ancestors.
/// Exists-as-directory is success; exists-as-file is a type conflict.
fn create_directory(path: &Path) -> BuildResult<()> {
    if path.is_dir() {
        debug!("directory exists, skipping: {}", path.display());
        return Ok(());
    }
    if path.exists() {
        return Err(BuildError::TypeConflict {
            path: path.to_path_buf(),
            expected: EntryKind::Directory,
            found: EntryKind::File,
        });
    }
    fs::create_dir_all(path)
        .map_err(|e| BuildError::filesystem(format!("creating directory {}", path.display()), e))?;
    debug!("created directory {}", path.display());
    Ok(())
}

/// Create an empty file at `path` if absent. An existing regular file is
/// left untouched; an existing directory is a type conflict.
fn create_empty_file(path: &Path) -> BuildResult<()> {
    if path.is_file() {
        debug!("file exists, skipping: {}", path.display());
        return Ok(());
    }
    if path.exists() {
        return Err(BuildError::TypeConflict {
            path: path.to_path_buf(),
            expected: EntryKind::File,
            found: EntryKind::Directory,
        });
    }
    fs::File::create(path)
        .map_err(|e| BuildError::filesystem(format!("creating file {}", path.display()), e))?;
    debug!("created file {}", path.display());
    Ok(())
}
