//! Centralized configuration for the rosmodel CLI.
//!
//! Defaults live here and each can be overridden by an environment
//! variable, so bridges and tests can point the tool at their own graph
//! directory or template set.

use std::path::PathBuf;

/// Default graph directory scanned for node presence files.
/// Override with `ROSMODEL_GRAPH_DIR`.
pub const DEFAULT_GRAPH_DIR: &str = "/dev/shm/rosmodel/nodes";

/// Get the graph directory from env var or default.
pub fn graph_dir() -> PathBuf {
    std::env::var("ROSMODEL_GRAPH_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_GRAPH_DIR))
}

/// Get the template directory from `ROSMODEL_TEMPLATE_DIR`, if set.
/// When unset the renderer falls back to its built-in template.
pub fn template_dir() -> Option<PathBuf> {
    std::env::var("ROSMODEL_TEMPLATE_DIR").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_graph_dir() {
        // Env overrides are process-global; only check the default constant.
        assert!(DEFAULT_GRAPH_DIR.ends_with("rosmodel/nodes"));
    }

    #[test]
    fn test_graph_dir_is_absolute_by_default() {
        if std::env::var("ROSMODEL_GRAPH_DIR").is_err() {
            assert!(graph_dir().is_absolute());
        }
    }
}
