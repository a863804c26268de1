//! mlscaffold: materialize an ML project skeleton from a declarative YAML spec.
//!
//! Two stages, loader first: [`spec::load_spec`] parses and validates the
//! document, then [`build_project`] creates the declared directory/file tree
//! and emits the logging-configuration artifact. A load failure means zero
//! filesystem mutation.

use std::path::Path;

pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod logconfig;
pub mod materializer;
pub mod spec;
pub mod util;

use errors::BuildResult;
use spec::ProjectSpec;

/// Materialize `spec` below `root`: directory/file tree first, then the
/// logging-config artifact. The two side effects are independent; a config
/// write failure leaves already-created entries in place.
pub fn build_project(spec: &ProjectSpec, root: &Path) -> BuildResult<()> {
    materializer::materialize(&spec.directories, root)?;
    logconfig::emit_logging_config(&spec.logging, root)?;
    Ok(())
}
