//! List command - print the nodes currently present in the graph.

use crate::cli_output;
use colored::*;
use rosmodel_core::{GraphDir, NodeGraph, Result};
use std::path::Path;

/// Run the list command.
pub fn run_list(include_hidden: bool, graph_dir: &Path) -> Result<()> {
    let graph = GraphDir::open(graph_dir);
    let names = graph.node_names(include_hidden)?;

    if names.is_empty() {
        cli_output::empty(
            "No nodes found in the graph.",
            Some("Point ROSMODEL_GRAPH_DIR (or --graph-dir) at a graph directory with presence files"),
        );
        return Ok(());
    }

    for name in &names {
        println!("{}", name);
    }
    println!();
    println!("  {} {} node(s)", "Total:".dimmed(), names.len());
    Ok(())
}
