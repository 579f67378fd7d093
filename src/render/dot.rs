use anyhow::Result;
use petgraph::visit::EdgeRef;
use std::fs;
use std::path::Path;

use crate::core::{DependencyGraph, EdgeKind, NodeKind};

/// Graphviz output for piping into `dot -Tsvg` and friends.
pub struct DotRenderer;

impl DotRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_to_file(&self, graph: &DependencyGraph, output_path: &Path) -> Result<()> {
        fs::write(output_path, self.render_to_string(graph)?)?;
        Ok(())
    }

    pub fn render_to_string(&self, graph: &DependencyGraph) -> Result<String> {
        let mut out = String::from("digraph dependencies {\n    rankdir=LR;\n");
        for idx in graph.node_indices() {
            if let Some(node) = graph.node_weight(idx) {
                let shape = match node.kind {
                    NodeKind::LocalFile => "box",
                    NodeKind::ExternalModule => "ellipse",
                };
                out.push_str(&format!(
                    "    n{} [label=\"{}\", shape={}];\n",
                    idx.index(),
                    escape(&node.label),
                    shape
                ));
            }
        }
        for edge in graph.edge_references() {
            let style = match edge.weight().kind {
                EdgeKind::Local => "solid",
                EdgeKind::External => "dashed",
            };
            out.push_str(&format!(
                "    n{} -> n{} [style={}];\n",
                edge.source().index(),
                edge.target().index(),
                style
            ));
        }
        out.push_str("}\n");
        Ok(out)
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new()
    }
}
