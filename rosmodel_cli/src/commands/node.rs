//! Node command - dump information about a running node into a model file.
//!
//! The pipeline is one linear pass: resolve the node against the graph,
//! collect the six interface categories, collect parameters through a
//! second backend scope, then render and write the model.

use crate::cli_output;
use crate::render::ModelRenderer;
use colored::*;
use rosmodel_core::{collect, GraphDir, NodeModel, Result};
use std::path::Path;

/// Run the node command.
pub fn run_node(
    node_name: &str,
    include_hidden: bool,
    output: &Path,
    template_dir: Option<&Path>,
    graph_dir: &Path,
) -> Result<()> {
    let mut model = NodeModel {
        node_name: node_name.to_string(),
        ..Default::default()
    };

    // Graph scope: existence check plus the six interface categories.
    // The backend handle is released when the block ends, on every path.
    let fqn = {
        let graph = GraphDir::open(graph_dir);
        let resolved = collect::resolve(&graph, node_name, include_hidden)?;
        if resolved.matches > 1 {
            cli_output::warn(&collect::nonunique_warning(resolved.matches, node_name));
        }
        cli_output::info(&format!(
            "Collecting interfaces for {}",
            node_name.white().bold()
        ));

        let interfaces = collect::collect_interfaces(&graph, &resolved.fqn, include_hidden)?;
        model.subscribers = interfaces.subscribers;
        model.publishers = interfaces.publishers;
        model.service_servers = interfaces.service_servers;
        model.service_clients = interfaces.service_clients;
        model.action_servers = interfaces.action_servers;
        model.action_clients = interfaces.action_clients;
        resolved.fqn
    };

    // Parameter scope: a separate, non-overlapping session.
    {
        let params = GraphDir::open(graph_dir);
        model.parameters = collect::collect_parameters(&params, &fqn)?;
    }

    let renderer = ModelRenderer::new(template_dir)?;
    renderer.write(&model, output)?;

    let shown = output
        .canonicalize()
        .unwrap_or_else(|_| output.to_path_buf());
    cli_output::success(&format!("Model written to {}", shown.display()));
    Ok(())
}
