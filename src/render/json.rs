use anyhow::Result;
use petgraph::visit::EdgeRef;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::core::DependencyGraph;

/// Plain machine-readable dump of the finalized graph: a node array and an
/// edge array referencing node identities.
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_to_file(&self, graph: &DependencyGraph, output_path: &Path) -> Result<()> {
        fs::write(output_path, self.render_to_string(graph)?)?;
        Ok(())
    }

    pub fn render_to_string(&self, graph: &DependencyGraph) -> Result<String> {
        let nodes: Vec<_> = graph
            .node_indices()
            .filter_map(|idx| graph.node_weight(idx))
            .map(|node| {
                json!({
                    "id": node.id,
                    "label": node.label,
                    "kind": node.kind,
                    "language": node.language.map(|l| l.name()),
                })
            })
            .collect();

        let edges: Vec<_> = graph
            .edge_references()
            .map(|edge| {
                json!({
                    "from": graph[edge.source()].id,
                    "to": graph[edge.target()].id,
                    "kind": edge.weight().kind,
                })
            })
            .collect();

        let document = json!({ "nodes": nodes, "edges": edges });
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}
