//! Layout-free graph handed from derivation to a rendering sink.

use crate::error::CoreError;
use crate::hash::Fingerprint;
use crate::label::Label;
use crate::serialize::content_hash;
use serde::Serialize;
use std::collections::HashSet;

const TAG_ABSTRACT_GRAPH: &str = "abstract_graph";

/// Risk color hint.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Orange,
    Red,
    Blue,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Record,
    Box,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Record => "record",
            Self::Box => "box",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Node {
    pub id: String,
    pub label: Label,
    pub shape: Shape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// Visual grouping of the target nodes of one modified resource.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Cluster {
    /// Logical resource id.
    pub id: String,
    pub label: Label,
    pub color: Color,
    /// Ids of nodes drawn inside the cluster, in emission order.
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AbstractGraph {
    pub name: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub clusters: Vec<Cluster>,
}

impl AbstractGraph {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn cluster(&self, id: &str) -> Option<&Cluster> {
        self.clusters.iter().find(|c| c.id == id)
    }

    /// Nodes that are not inside any cluster.
    pub fn top_level_nodes(&self) -> impl Iterator<Item = &Node> {
        let members: HashSet<&str> = self
            .clusters
            .iter()
            .flat_map(|c| c.members.iter().map(String::as_str))
            .collect();
        self.nodes
            .iter()
            .filter(move |n| !members.contains(n.id.as_str()))
    }

    /// Content digest; equal graphs always share a fingerprint.
    pub fn fingerprint(&self) -> Result<Fingerprint, CoreError> {
        content_hash(TAG_ABSTRACT_GRAPH, self)
    }
}

/// Consumer of a derived graph (DOT text, JSON, ...).
pub trait RenderSink {
    type Output;
    type Error: From<CoreError>;

    fn render(&self, graph: &AbstractGraph) -> Result<Self::Output, Self::Error>;
}

/// Accumulates a graph with set semantics: the first emission of a node id
/// or an edge wins and later duplicates are dropped.
#[derive(Debug, Default)]
pub(crate) struct GraphBuilder {
    graph: AbstractGraph,
    node_ids: HashSet<String>,
    edge_keys: HashSet<Edge>,
}

impl GraphBuilder {
    pub fn new(name: String) -> Self {
        Self {
            graph: AbstractGraph {
                name,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Returns false when a node with the same id already exists.
    pub fn add_node(&mut self, node: Node) -> bool {
        if !self.node_ids.insert(node.id.clone()) {
            return false;
        }
        self.graph.nodes.push(node);
        true
    }

    pub fn add_edge(&mut self, source: &str, target: &str) {
        let edge = Edge {
            source: source.to_string(),
            target: target.to_string(),
        };
        if self.edge_keys.insert(edge.clone()) {
            self.graph.edges.push(edge);
        }
    }

    pub fn add_cluster(&mut self, cluster: Cluster) {
        self.graph.clusters.push(cluster);
    }

    pub fn finish(self) -> AbstractGraph {
        self.graph
    }
}
