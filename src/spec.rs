//! Specification loader: parses the YAML project spec into typed entities.
//!
//! The whole document is schema-validated here, at load time. A malformed
//! spec fails before any filesystem mutation happens; the materializer never
//! sees an untyped or half-valid tree.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{BuildError, BuildResult};

/// Parsed project specification: `project`, `directories`, `logging`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSpec {
    pub project: ProjectMeta,
    pub directories: Vec<TreeEntry>,
    pub logging: LoggingSpec,
}

/// Project metadata. Informational only, printed as a banner after loading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectMeta {
    pub name: String,
    pub version: String,
    pub description: String,
}

/// One node of the skeleton to create on disk.
///
/// Deserialized through [`RawEntry`] so that stray keys and `children` on a
/// `file` entry are rejected at load time, not discovered mid-traversal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEntry")]
pub enum TreeEntry {
    Directory {
        name: String,
        children: Vec<TreeEntry>,
    },
    File {
        name: String,
    },
}

/// Raw entry shape as it appears in the YAML, before the `type` discriminator
/// is folded into the variant.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    name: String,
    #[serde(rename = "type")]
    kind: RawEntryKind,
    children: Option<Vec<TreeEntry>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawEntryKind {
    Directory,
    File,
}

impl TryFrom<RawEntry> for TreeEntry {
    type Error = String;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        match raw.kind {
            RawEntryKind::Directory => Ok(TreeEntry::Directory {
                name: raw.name,
                children: raw.children.unwrap_or_default(),
            }),
            RawEntryKind::File => {
                if raw.children.is_some() {
                    return Err(format!("file entry '{}' cannot have children", raw.name));
                }
                Ok(TreeEntry::File { name: raw.name })
            }
        }
    }
}

impl TreeEntry {
    pub fn name(&self) -> &str {
        match self {
            TreeEntry::Directory { name, .. } => name,
            TreeEntry::File { name } => name,
        }
    }
}

/// Logging section of the spec: feeds the emitted configuration artifact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSpec {
    pub root_log_level: LogLevel,
    pub log_file_path: PathBuf,
}

/// Supported root log levels. Anything else is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        };
        f.write_str(s)
    }
}

/// Load and parse a spec file.
///
/// # Errors
/// * [`BuildError::SpecNotFound`] if `path` does not exist
/// * [`BuildError::SpecParse`] if the YAML is syntactically invalid or does
///   not match the expected shape
pub fn load_spec(path: &Path) -> BuildResult<ProjectSpec> {
    if !path.is_file() {
        return Err(BuildError::SpecNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)
        .map_err(|e| BuildError::io(format!("reading spec file {}", path.display()), e))?;
    let spec: ProjectSpec = serde_yaml::from_str(&content).map_err(|source| {
        BuildError::SpecParse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
project:
  name: demo
  version: "0.1"
  description: example
directories:
  - name: src
    type: directory
    children:
      - name: models
        type: directory
      - name: __init__.py
        type: file
logging:
  root_log_level: INFO
  log_file_path: logs/app.log
"#;

    #[test]
    fn given_minimal_yaml_when_parsing_then_builds_typed_tree() {
        let spec: ProjectSpec = serde_yaml::from_str(MINIMAL).unwrap();

        assert_eq!(spec.project.name, "demo");
        assert_eq!(spec.directories.len(), 1);
        match &spec.directories[0] {
            TreeEntry::Directory { name, children } => {
                assert_eq!(name, "src");
                assert_eq!(children.len(), 2);
                assert_eq!(children[1], TreeEntry::File {
                    name: "__init__.py".into()
                });
            }
            other => panic!("expected directory entry, got {:?}", other),
        }
        assert_eq!(spec.logging.root_log_level, LogLevel::Info);
        assert_eq!(spec.logging.log_file_path, PathBuf::from("logs/app.log"));
    }

    #[test]
    fn given_directory_without_children_when_parsing_then_children_default_empty() {
        let entry: TreeEntry =
            serde_yaml::from_str("name: data\ntype: directory\n").unwrap();

        assert_eq!(entry, TreeEntry::Directory {
            name: "data".into(),
            children: vec![],
        });
    }

    #[test]
    fn given_unknown_entry_type_when_parsing_then_errors() {
        let result: Result<TreeEntry, _> =
            serde_yaml::from_str("name: x\ntype: symlink\n");

        assert!(result.is_err());
    }

    #[test]
    fn given_file_entry_with_children_when_parsing_then_errors() {
        let yaml = "name: notes.txt\ntype: file\nchildren:\n  - name: y\n    type: file\n";
        let result: Result<TreeEntry, _> = serde_yaml::from_str(yaml);

        assert!(result.is_err());
    }

    #[test]
    fn given_entry_with_stray_key_when_parsing_then_errors() {
        let result: Result<TreeEntry, _> =
            serde_yaml::from_str("name: src\ntype: directory\nmode: 755\n");

        assert!(result.is_err());
    }

    #[test]
    fn given_logging_section_with_typo_key_when_parsing_then_errors() {
        let yaml = "root_log_levl: INFO\nlog_file_path: a.log\n";
        let result: Result<LoggingSpec, _> = serde_yaml::from_str(yaml);

        assert!(result.is_err());
    }

    #[test]
    fn given_project_meta_with_stray_key_when_parsing_then_errors() {
        let yaml = "name: x\nversion: \"0\"\ndescription: y\nauthor: z\n";
        let result: Result<ProjectMeta, _> = serde_yaml::from_str(yaml);

        assert!(result.is_err());
    }

    #[test]
    fn given_unrecognized_log_level_when_parsing_then_errors() {
        let result: Result<LoggingSpec, _> =
            serde_yaml::from_str("root_log_level: VERBOSE\nlog_file_path: a.log\n");

        assert!(result.is_err());
    }

    #[test]
    fn given_all_levels_when_displayed_then_uppercase() {
        for (level, expected) in [
            (LogLevel::Debug, "DEBUG"),
            (LogLevel::Info, "INFO"),
            (LogLevel::Warning, "WARNING"),
            (LogLevel::Error, "ERROR"),
            (LogLevel::Critical, "CRITICAL"),
        ] {
            assert_eq!(level.to_string(), expected);
        }
    }
}
