//! Narrow seams to the discovery and parameter collaborators.
//!
//! The collector only ever talks to these two traits. [`crate::GraphDir`]
//! implements both over presence files; tests substitute in-memory fakes.

use crate::error::Result;
use crate::model::{InterfaceRecord, ParameterDescriptor};

/// Read-only view of the live node graph.
///
/// Per-category accessors return ordered `(name, type)` records exactly as
/// the backend enumerates them; normalization is the collector's job.
pub trait NodeGraph {
    /// Fully-qualified names of all currently known nodes. Duplicates are
    /// preserved so callers can detect ambiguous matches.
    fn node_names(&self, include_hidden: bool) -> Result<Vec<String>>;

    fn subscribers(&self, node: &str, include_hidden: bool) -> Result<Vec<InterfaceRecord>>;
    fn publishers(&self, node: &str, include_hidden: bool) -> Result<Vec<InterfaceRecord>>;
    fn service_servers(&self, node: &str, include_hidden: bool) -> Result<Vec<InterfaceRecord>>;
    fn service_clients(&self, node: &str, include_hidden: bool) -> Result<Vec<InterfaceRecord>>;
    fn action_servers(&self, node: &str, include_hidden: bool) -> Result<Vec<InterfaceRecord>>;
    fn action_clients(&self, node: &str, include_hidden: bool) -> Result<Vec<InterfaceRecord>>;

    /// Authoritative type lookup for one `(node, endpoint)` pair, used to
    /// repair records whose type was not resolved by enumeration.
    fn endpoint_type(&self, node: &str, endpoint: &str) -> Result<Option<String>>;
}

/// Access to a node's declared parameters.
pub trait ParameterService {
    /// Names of all parameters the node has declared.
    fn list_parameters(&self, node: &str) -> Result<Vec<String>>;

    /// Descriptors for the given names, in the given order.
    fn describe_parameters(
        &self,
        node: &str,
        names: &[String],
    ) -> Result<Vec<ParameterDescriptor>>;
}
