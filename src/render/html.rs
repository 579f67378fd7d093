use anyhow::Result;
use petgraph::visit::EdgeRef;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::core::{DependencyGraph, EdgeKind, NodeKind};

const EXTERNAL_COLOR: &str = "#888888";

/// Interactive force-directed graph as a single HTML page (vis-network).
pub struct HtmlRenderer;

impl HtmlRenderer {
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
            .filter_map(|idx| graph.node_weight(idx).map(|node| (idx, node)))
            .map(|(idx, node)| {
                let color = match node.kind {
                    NodeKind::LocalFile => node
                        .language
                        .map(|l| l.color())
                        .unwrap_or(EXTERNAL_COLOR),
                    NodeKind::ExternalModule => EXTERNAL_COLOR,
                };
                let title = match (node.kind, node.language) {
                    (NodeKind::LocalFile, Some(lang)) => format!("{} file", lang.name()),
                    (NodeKind::ExternalModule, Some(lang)) => {
                        format!("external module ({})", lang.name())
                    }
                    _ => "unknown".to_string(),
                };
                json!({
                    "id": idx.index(),
                    "label": node.label,
                    "shape": "box",
                    "color": color,
                    "font": { "size": 12 },
                    "title": title,
                })
            })
            .collect();

        let edges: Vec<_> = graph
            .edge_references()
            .map(|edge| {
                json!({
                    "from": edge.source().index(),
                    "to": edge.target().index(),
                    "width": 0.5,
                    "dashes": edge.weight().kind == EdgeKind::External,
                })
            })
            .collect();

        let nodes_json = serde_json::to_string(&nodes)?;
        let edges_json = serde_json::to_string(&edges)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Dependency Graph</title>
  <script src="https://unpkg.com/vis-network@9/standalone/umd/vis-network.min.js"></script>
  <style>
    body {{ margin: 0; background: #222222; }}
    #graph {{ width: 100%; height: 100vh; }}
  </style>
</head>
<body>
  <div id="graph"></div>
  <script>
    const nodes = new vis.DataSet({nodes_json});
    const edges = new vis.DataSet({edges_json});
    const container = document.getElementById("graph");
    const options = {{
      physics: {{
        forceAtlas2Based: {{
          gravitationalConstant: -100,
          centralGravity: 0.02,
          springLength: 150,
          springConstant: 0.05,
          damping: 0.4
        }},
        minVelocity: 0.75,
        solver: "forceAtlas2Based",
        stabilization: {{ enabled: true, iterations: 1000 }}
      }},
      nodes: {{
        borderWidth: 1,
        borderWidthSelected: 2,
        shadow: {{ enabled: true }},
        font: {{ color: "white" }}
      }},
      edges: {{
        smooth: {{ type: "continuous" }},
        arrows: {{ to: {{ enabled: true, scaleFactor: 0.5 }} }}
      }}
    }};
    new vis.Network(container, {{ nodes, edges }}, options);
  </script>
</body>
</html>
"#
        ))
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}
