//! Logging-config emitter: derives the `logging_config.json` artifact from
//! the spec's `logging` section.
//!
//! The document is a Python `dictConfig`-shaped structure: one `standard`
//! formatter, a console handler, a rotating file handler pointing at the
//! spec's log file path, and a root logger at the spec's level wired to both
//! handlers. It is rebuilt and written in full on every run, overwriting any
//! prior version. Only the level and the file path vary; everything else is
//! fixed boilerplate.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use crate::errors::{BuildError, BuildResult};
use crate::spec::{LogLevel, LoggingSpec};

/// Relative location of the artifact below the project root.
pub const CONFIG_RELATIVE_PATH: &str = "configs/logging/logging_config.json";

const FORMAT_STANDARD: &str = "%(asctime)s - %(name)s - %(levelname)s - %(message)s";
const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;
const BACKUP_COUNT: u32 = 5;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LoggingConfig {
    pub version: u8,
    pub disable_existing_loggers: bool,
    pub formatters: BTreeMap<String, Formatter>,
    pub handlers: Handlers,
    pub root: RootLogger,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Formatter {
    pub format: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Handlers {
    pub console: ConsoleHandler,
    pub file: FileHandler,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ConsoleHandler {
    pub class: String,
    pub level: LogLevel,
    pub formatter: String,
    pub stream: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FileHandler {
    pub class: String,
    pub level: LogLevel,
    pub formatter: String,
    pub filename: PathBuf,
    #[serde(rename = "maxBytes")]
    pub max_bytes: u64,
    #[serde(rename = "backupCount")]
    pub backup_count: u32,
    pub encoding: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RootLogger {
    pub level: LogLevel,
    pub handlers: Vec<String>,
}

impl LoggingConfig {
    /// Assemble the full document from the variable inputs.
    pub fn new(log_file_path: &Path, root_log_level: LogLevel) -> Self {
        let mut formatters = BTreeMap::new();
        formatters.insert(
            "standard".to_string(),
            Formatter {
                format: FORMAT_STANDARD.to_string(),
            },
        );
        Self {
            version: 1,
            disable_existing_loggers: false,
            formatters,
            handlers: Handlers {
                console: ConsoleHandler {
                    class: "logging.StreamHandler".to_string(),
                    level: LogLevel::Debug,
                    formatter: "standard".to_string(),
                    stream: "ext://sys.stdout".to_string(),
                },
                file: FileHandler {
                    class: "logging.handlers.RotatingFileHandler".to_string(),
                    level: LogLevel::Debug,
                    formatter: "standard".to_string(),
                    filename: log_file_path.to_path_buf(),
                    max_bytes: MAX_LOG_BYTES,
                    backup_count: BACKUP_COUNT,
                    encoding: "utf8".to_string(),
                },
            },
            root: RootLogger {
                level: root_log_level,
                handlers: vec!["console".to_string(), "file".to_string()],
            },
        }
    }
}

/// Serialize the config derived from `logging` and write it to
/// `<root>/configs/logging/logging_config.json`, creating missing parent
/// directories first. Overwrites unconditionally, no merge.
#[instrument(skip(logging))]
pub fn emit_logging_config(logging: &LoggingSpec, root: &Path) -> BuildResult<PathBuf> {
    let target = root.join(CONFIG_RELATIVE_PATH);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| BuildError::io(format!("creating directory {}", parent.display()), e))?;
    }

    let config = LoggingConfig::new(&logging.log_file_path, logging.root_log_level);
    let json = serde_json::to_string_pretty(&config).map_err(|e| BuildError::ConfigWrite {
        path: target.clone(),
        source: e.into(),
    })?;

    fs::write(&target, json).map_err(|source| BuildError::ConfigWrite {
        path: target.clone(),
        source,
    })?;
    debug!("logging configuration saved at {}", target.display());
    Ok(target)
}
