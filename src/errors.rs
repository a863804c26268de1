//! Build errors: input, filesystem, and config-write failures.
//!
//! None of these are recovered locally. Each aborts the run and surfaces one
//! diagnostic to the invoker; entries already created stay on disk.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("spec file not found: {0}")]
    SpecNotFound(PathBuf),

    #[error("failed to parse spec {path}: {source}")]
    SpecParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("filesystem operation rejected: {context}")]
    Filesystem {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("path {path} already exists as a {found}, expected a {expected}")]
    TypeConflict {
        path: PathBuf,
        expected: EntryKind,
        found: EntryKind,
    },

    #[error("failed to write logging config {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    /// Create an I/O error with context (spec reading, cwd resolution).
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a filesystem error with context (directory/file creation).
    pub fn filesystem(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Filesystem {
            context: context.into(),
            source,
        }
    }
}

/// Kind of filesystem entry, for type-conflict diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Directory => f.write_str("directory"),
            EntryKind::File => f.write_str("file"),
        }
    }
}

pub type BuildResult<T> = Result<T, BuildError>;
