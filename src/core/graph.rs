use petgraph::graph::NodeIndex;
use petgraph::{Directed, Graph};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::languages::LanguageId;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    LocalFile,
    ExternalModule,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    Local,
    External,
}

#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Tree-relative path for local files, `external:<key>` for modules.
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    /// Importing language for external modules, own language for files.
    pub language: Option<LanguageId>,
}

impl Node {
    pub fn local(path: &str, language: LanguageId) -> Self {
        Self {
            id: path.to_string(),
            label: path.to_string(),
            kind: NodeKind::LocalFile,
            language: Some(language),
        }
    }

    pub fn external(key: &str, origin: LanguageId) -> Self {
        Self {
            id: format!("external:{key}"),
            label: key.to_string(),
            kind: NodeKind::ExternalModule,
            language: Some(origin),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    pub kind: EdgeKind,
}

pub type DependencyGraph = Graph<Node, Edge, Directed>;

/// Accumulates nodes and edges with de-duplication. Nodes are upserted by
/// identity; edges are unique on the (from, to, kind) triple; self-edges are
/// never recorded.
pub struct GraphBuilder {
    graph: DependencyGraph,
    node_map: HashMap<String, NodeIndex>,
    edge_set: HashSet<(NodeIndex, NodeIndex, EdgeKind)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
            edge_set: HashSet::new(),
        }
    }

    /// Insert the node if its identity is new, otherwise return the existing
    /// index. Edge targets are registered through here, so every edge
    /// endpoint exists in the graph by construction.
    pub fn ensure_node(&mut self, node: Node) -> NodeIndex {
        if let Some(index) = self.node_map.get(&node.id) {
            return *index;
        }
        let id = node.id.clone();
        let index = self.graph.add_node(node);
        self.node_map.insert(id, index);
        index
    }

    /// Returns false when the edge is a duplicate or a self-edge.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, kind: EdgeKind) -> bool {
        if from == to {
            return false;
        }
        if !self.edge_set.insert((from, to, kind)) {
            return false;
        }
        self.graph.add_edge(from, to, Edge { kind });
        true
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    pub fn build(self) -> DependencyGraph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
