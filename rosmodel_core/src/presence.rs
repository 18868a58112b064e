//! Node presence files: the file-backed graph backend.
//!
//! Each live node (or a bridge acting for it) writes `{name}.json` into the
//! graph directory at startup and removes it at shutdown. [`GraphDir`] scans
//! that directory to answer [`NodeGraph`] and [`ParameterService`] queries.
//!
//! Structure: `{graph_dir}/{node_name}.json`

use crate::error::Result;
use crate::graph::{NodeGraph, ParameterService};
use crate::model::{InterfaceRecord, ParameterDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Presence record one node writes into the graph directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodePresence {
    /// Fully-qualified node name
    pub name: String,
    /// Process ID, when the node runs on this host. Liveness is only
    /// checked when present; bridged nodes carry no local pid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,
    #[serde(default)]
    pub subscribers: Vec<InterfaceRecord>,
    #[serde(default)]
    pub publishers: Vec<InterfaceRecord>,
    #[serde(default)]
    pub service_servers: Vec<InterfaceRecord>,
    #[serde(default)]
    pub service_clients: Vec<InterfaceRecord>,
    #[serde(default)]
    pub action_servers: Vec<InterfaceRecord>,
    #[serde(default)]
    pub action_clients: Vec<InterfaceRecord>,
    /// Authoritative endpoint name -> type table
    #[serde(default)]
    pub endpoint_types: HashMap<String, String>,
    /// Declared parameters with their value types
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

impl NodePresence {
    /// Create an empty presence record for the current process.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            pid: Some(std::process::id()),
            subscribers: Vec::new(),
            publishers: Vec::new(),
            service_servers: Vec::new(),
            service_clients: Vec::new(),
            action_servers: Vec::new(),
            action_clients: Vec::new(),
            endpoint_types: HashMap::new(),
            parameters: Vec::new(),
        }
    }

    /// File name for a node's presence file. Namespace separators are
    /// flattened so `/a/b` lands in one directory entry.
    fn file_name(node_name: &str) -> String {
        format!("{}.json", node_name.trim_start_matches('/').replace('/', "__"))
    }

    /// Write this record into the graph directory (called at node start).
    pub fn write_to(&self, dir: &Path) -> std::io::Result<()> {
        fs::create_dir_all(dir)?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(dir.join(Self::file_name(&self.name)), json)
    }

    /// Remove a node's presence file (called at node shutdown).
    pub fn remove_from(dir: &Path, node_name: &str) -> std::io::Result<()> {
        let path = dir.join(Self::file_name(node_name));
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// A graph directory holding presence files, serving both the discovery and
/// parameter seams. Opened per scope and dropped when the scope ends.
pub struct GraphDir {
    root: PathBuf,
}

impl GraphDir {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read all presence records, skipping unreadable or malformed files.
    /// Entries whose pid no longer exists are dropped and their stale files
    /// removed.
    fn read_all(&self) -> Result<Vec<NodePresence>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut nodes = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "json") {
                continue;
            }
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(_) => continue,
            };
            let presence = match serde_json::from_str::<NodePresence>(&content) {
                Ok(presence) => presence,
                Err(e) => {
                    log::debug!("skipping malformed presence file {:?}: {}", path, e);
                    continue;
                }
            };
            match presence.pid {
                Some(pid) if !process_exists(pid) => {
                    log::debug!("removing stale presence file {:?} (pid {})", path, pid);
                    let _ = fs::remove_file(&path);
                }
                _ => nodes.push(presence),
            }
        }
        Ok(nodes)
    }

    /// First record claiming the given fully-qualified name. Which duplicate
    /// wins when several files claim the same name is unspecified.
    fn find(&self, node: &str) -> Result<Option<NodePresence>> {
        Ok(self.read_all()?.into_iter().find(|p| p.name == node))
    }
}

/// Hidden-name convention: any path segment starting with `_`.
pub fn is_hidden(name: &str) -> bool {
    name.split('/').any(|segment| segment.starts_with('_'))
}

fn visible(records: Vec<InterfaceRecord>, include_hidden: bool) -> Vec<InterfaceRecord> {
    if include_hidden {
        records
    } else {
        records.into_iter().filter(|r| !is_hidden(&r.name)).collect()
    }
}

impl NodeGraph for GraphDir {
    fn node_names(&self, include_hidden: bool) -> Result<Vec<String>> {
        Ok(self
            .read_all()?
            .into_iter()
            .map(|p| p.name)
            .filter(|name| include_hidden || !is_hidden(name))
            .collect())
    }

    fn subscribers(&self, node: &str, include_hidden: bool) -> Result<Vec<InterfaceRecord>> {
        let records = self.find(node)?.map(|p| p.subscribers).unwrap_or_default();
        Ok(visible(records, include_hidden))
    }

    fn publishers(&self, node: &str, include_hidden: bool) -> Result<Vec<InterfaceRecord>> {
        let records = self.find(node)?.map(|p| p.publishers).unwrap_or_default();
        Ok(visible(records, include_hidden))
    }

    fn service_servers(&self, node: &str, include_hidden: bool) -> Result<Vec<InterfaceRecord>> {
        let records = self
            .find(node)?
            .map(|p| p.service_servers)
            .unwrap_or_default();
        Ok(visible(records, include_hidden))
    }

    fn service_clients(&self, node: &str, include_hidden: bool) -> Result<Vec<InterfaceRecord>> {
        let records = self
            .find(node)?
            .map(|p| p.service_clients)
            .unwrap_or_default();
        Ok(visible(records, include_hidden))
    }

    fn action_servers(&self, node: &str, include_hidden: bool) -> Result<Vec<InterfaceRecord>> {
        let records = self
            .find(node)?
            .map(|p| p.action_servers)
            .unwrap_or_default();
        Ok(visible(records, include_hidden))
    }

    fn action_clients(&self, node: &str, include_hidden: bool) -> Result<Vec<InterfaceRecord>> {
        let records = self
            .find(node)?
            .map(|p| p.action_clients)
            .unwrap_or_default();
        Ok(visible(records, include_hidden))
    }

    fn endpoint_type(&self, node: &str, endpoint: &str) -> Result<Option<String>> {
        Ok(self
            .find(node)?
            .and_then(|p| p.endpoint_types.get(endpoint).cloned()))
    }
}

impl ParameterService for GraphDir {
    fn list_parameters(&self, node: &str) -> Result<Vec<String>> {
        Ok(self
            .find(node)?
            .map(|p| p.parameters.into_iter().map(|d| d.name).collect())
            .unwrap_or_default())
    }

    fn describe_parameters(
        &self,
        node: &str,
        names: &[String],
    ) -> Result<Vec<ParameterDescriptor>> {
        let declared = self.find(node)?.map(|p| p.parameters).unwrap_or_default();
        // Preserve the requested order exactly.
        Ok(names
            .iter()
            .filter_map(|name| declared.iter().find(|d| &d.name == name).cloned())
            .collect())
    }
}

/// Check if a process exists
fn process_exists(pid: u32) -> bool {
    #[cfg(unix)]
    {
        // SAFETY: kill(pid, 0) sends no signal; only checks if process exists. No memory is accessed.
        unsafe { libc::kill(pid as i32, 0) == 0 }
    }

    #[cfg(not(unix))]
    {
        // Fallback: assume process exists
        let _ = pid;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParameterKind;
    use tempfile::TempDir;

    fn talker() -> NodePresence {
        let mut presence = NodePresence::new("/talker");
        presence.publishers = vec![InterfaceRecord::new("/talker/chatter", "std_msgs/String")];
        presence
    }

    #[test]
    fn test_write_then_enumerate() {
        let dir = TempDir::new().unwrap();
        talker().write_to(dir.path()).unwrap();

        let graph = GraphDir::open(dir.path());
        assert_eq!(graph.node_names(false).unwrap(), vec!["/talker"]);
        let publishers = graph.publishers("/talker", false).unwrap();
        assert_eq!(publishers.len(), 1);
        assert_eq!(publishers[0].name, "/talker/chatter");
    }

    #[test]
    fn test_remove_deletes_presence_file() {
        let dir = TempDir::new().unwrap();
        talker().write_to(dir.path()).unwrap();
        NodePresence::remove_from(dir.path(), "/talker").unwrap();

        let graph = GraphDir::open(dir.path());
        assert!(graph.node_names(false).unwrap().is_empty());
    }

    #[test]
    fn test_namespaced_name_flattens_to_one_file() {
        let dir = TempDir::new().unwrap();
        let mut presence = talker();
        presence.name = "/ns/talker".to_string();
        presence.write_to(dir.path()).unwrap();

        assert!(dir.path().join("ns__talker.json").exists());
        let graph = GraphDir::open(dir.path());
        assert_eq!(graph.node_names(false).unwrap(), vec!["/ns/talker"]);
    }

    #[test]
    fn test_stale_pid_skipped_and_file_removed() {
        let dir = TempDir::new().unwrap();
        let mut presence = talker();
        // PID 999999999 almost certainly doesn't exist
        presence.pid = Some(999_999_999);
        presence.write_to(dir.path()).unwrap();

        let graph = GraphDir::open(dir.path());
        assert!(graph.node_names(false).unwrap().is_empty());
        assert!(!dir.path().join("talker.json").exists());
    }

    #[test]
    fn test_missing_pid_is_trusted() {
        let dir = TempDir::new().unwrap();
        let mut presence = talker();
        presence.pid = None;
        presence.write_to(dir.path()).unwrap();

        let graph = GraphDir::open(dir.path());
        assert_eq!(graph.node_names(false).unwrap(), vec!["/talker"]);
    }

    #[test]
    fn test_hidden_node_requires_flag() {
        let dir = TempDir::new().unwrap();
        let mut presence = talker();
        presence.name = "/_rosout".to_string();
        presence.write_to(dir.path()).unwrap();

        let graph = GraphDir::open(dir.path());
        assert!(graph.node_names(false).unwrap().is_empty());
        assert_eq!(graph.node_names(true).unwrap(), vec!["/_rosout"]);
    }

    #[test]
    fn test_hidden_endpoint_requires_flag() {
        let dir = TempDir::new().unwrap();
        let mut presence = talker();
        presence
            .publishers
            .push(InterfaceRecord::new("/talker/_private", "std_msgs/Empty"));
        presence.write_to(dir.path()).unwrap();

        let graph = GraphDir::open(dir.path());
        assert_eq!(graph.publishers("/talker", false).unwrap().len(), 1);
        assert_eq!(graph.publishers("/talker", true).unwrap().len(), 2);
    }

    #[test]
    fn test_duplicate_names_kept_in_enumeration() {
        let dir = TempDir::new().unwrap();
        talker().write_to(dir.path()).unwrap();
        let mut other = talker();
        other.publishers.clear();
        // Same node name, different file
        fs::write(
            dir.path().join("talker_2.json"),
            serde_json::to_string(&other).unwrap(),
        )
        .unwrap();

        let graph = GraphDir::open(dir.path());
        let names = graph.node_names(false).unwrap();
        assert_eq!(names.iter().filter(|n| *n == "/talker").count(), 2);
        // One of the duplicates answers; which one is unspecified.
        assert!(graph.find("/talker").unwrap().is_some());
    }

    #[test]
    fn test_malformed_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        talker().write_to(dir.path()).unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

        let graph = GraphDir::open(dir.path());
        assert_eq!(graph.node_names(false).unwrap(), vec!["/talker"]);
    }

    #[test]
    fn test_missing_graph_dir_is_empty() {
        let graph = GraphDir::open("/nonexistent/rosmodel/nodes");
        assert!(graph.node_names(false).unwrap().is_empty());
    }

    #[test]
    fn test_endpoint_type_lookup() {
        let dir = TempDir::new().unwrap();
        let mut presence = talker();
        presence
            .endpoint_types
            .insert("/talker/chatter".to_string(), "std_msgs/String".to_string());
        presence.write_to(dir.path()).unwrap();

        let graph = GraphDir::open(dir.path());
        assert_eq!(
            graph.endpoint_type("/talker", "/talker/chatter").unwrap(),
            Some("std_msgs/String".to_string())
        );
        assert_eq!(graph.endpoint_type("/talker", "/other").unwrap(), None);
    }

    #[test]
    fn test_describe_preserves_requested_order() {
        let dir = TempDir::new().unwrap();
        let mut presence = talker();
        presence.parameters = vec![
            ParameterDescriptor {
                name: "verbose".to_string(),
                kind: ParameterKind::Bool,
            },
            ParameterDescriptor {
                name: "rate".to_string(),
                kind: ParameterKind::Double,
            },
        ];
        presence.write_to(dir.path()).unwrap();

        let graph = GraphDir::open(dir.path());
        let names = vec!["rate".to_string(), "verbose".to_string()];
        let descriptors = graph.describe_parameters("/talker", &names).unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].name, "rate");
        assert_eq!(descriptors[1].name, "verbose");
    }
}
