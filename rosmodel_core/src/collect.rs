//! Interface collection for one running node.
//!
//! The collection sequence is fixed and part of the observable contract:
//! resolve the name, count exact matches, then walk the six interface
//! categories in order (subscribers, publishers, service servers, service
//! clients, action servers, action clients), applying type repair before
//! name shortening on each. Parameters are collected separately, in sorted
//! name order.

use crate::error::{ModelError, Result};
use crate::graph::{NodeGraph, ParameterService};
use crate::model::InterfaceRecord;

/// Warning text for a fully-qualified name matching more than one live node.
pub fn nonunique_warning(count: usize, node_name: &str) -> String {
    format!(
        "There are {} nodes in the graph with the exact name \"{}\". \
         You are seeing information about only one of them.",
        count, node_name
    )
}

/// Resolve a possibly-relative node name to its fully-qualified form.
pub fn absolute_name(name: &str) -> String {
    if name.starts_with('/') {
        name.to_string()
    } else {
        format!("/{}", name)
    }
}

/// Outcome of resolving a node name against the live graph.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// Fully-qualified node name
    pub fqn: String,
    /// Exact matches in the enumeration; greater than one means the caller
    /// should warn and proceed with whichever node the backend yields.
    pub matches: usize,
}

/// Count live nodes matching the name exactly. Zero matches is the only
/// failure this stage models; everything else propagates from the backend.
pub fn resolve(graph: &dyn NodeGraph, node_name: &str, include_hidden: bool) -> Result<Resolved> {
    let fqn = absolute_name(node_name);
    let names = graph.node_names(include_hidden)?;
    let matches = names.iter().filter(|name| **name == fqn).count();
    if matches == 0 {
        return Err(ModelError::NodeNotFound(node_name.to_string()));
    }
    Ok(Resolved { fqn, matches })
}

/// Fill in missing types from the graph's authoritative endpoint table.
/// Never overwrites a non-empty type; mutates in place without reordering.
pub fn repair_types(
    graph: &dyn NodeGraph,
    fqn: &str,
    records: &mut [InterfaceRecord],
) -> Result<()> {
    for record in records.iter_mut() {
        if record.type_name.is_empty() {
            if let Some(type_name) = graph.endpoint_type(fqn, &record.name)? {
                record.type_name = type_name;
            }
        }
    }
    Ok(())
}

/// Rewrite names relative to the node: `/a/b/c` under node `/a/b` becomes
/// `c`; names outside the node's namespace are left unchanged. Returns a
/// fresh sequence.
pub fn relative_names(fqn: &str, records: Vec<InterfaceRecord>) -> Vec<InterfaceRecord> {
    let prefix = format!("{}/", fqn);
    records
        .into_iter()
        .map(|record| match record.name.strip_prefix(&prefix) {
            Some(rest) if !rest.is_empty() => InterfaceRecord {
                name: rest.to_string(),
                type_name: record.type_name,
            },
            _ => record,
        })
        .collect()
}

/// The six interface categories of one node, already normalized.
#[derive(Debug, Clone, Default)]
pub struct InterfaceSet {
    pub subscribers: Vec<InterfaceRecord>,
    pub publishers: Vec<InterfaceRecord>,
    pub service_servers: Vec<InterfaceRecord>,
    pub service_clients: Vec<InterfaceRecord>,
    pub action_servers: Vec<InterfaceRecord>,
    pub action_clients: Vec<InterfaceRecord>,
}

fn normalized(
    graph: &dyn NodeGraph,
    fqn: &str,
    mut records: Vec<InterfaceRecord>,
) -> Result<Vec<InterfaceRecord>> {
    repair_types(graph, fqn, &mut records)?;
    Ok(relative_names(fqn, records))
}

/// Collect all six interface categories for a resolved node.
pub fn collect_interfaces(
    graph: &dyn NodeGraph,
    fqn: &str,
    include_hidden: bool,
) -> Result<InterfaceSet> {
    Ok(InterfaceSet {
        subscribers: normalized(graph, fqn, graph.subscribers(fqn, include_hidden)?)?,
        publishers: normalized(graph, fqn, graph.publishers(fqn, include_hidden)?)?,
        service_servers: normalized(graph, fqn, graph.service_servers(fqn, include_hidden)?)?,
        service_clients: normalized(graph, fqn, graph.service_clients(fqn, include_hidden)?)?,
        action_servers: normalized(graph, fqn, graph.action_servers(fqn, include_hidden)?)?,
        action_clients: normalized(graph, fqn, graph.action_clients(fqn, include_hidden)?)?,
    })
}

/// Collect a node's parameters: list, sort lexicographically, then describe
/// exactly that sorted set. The resulting records keep the sorted order.
pub fn collect_parameters(
    params: &dyn ParameterService,
    fqn: &str,
) -> Result<Vec<InterfaceRecord>> {
    let mut names = params.list_parameters(fqn)?;
    names.sort();
    let descriptors = params.describe_parameters(fqn, &names)?;
    Ok(descriptors
        .into_iter()
        .map(|descriptor| InterfaceRecord::new(descriptor.name, descriptor.kind.label()))
        .collect())
}
