use crate::graph::traits::{Graph, MutableGraph, NodeId};
use crate::{Error, Result};
use log::info;
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::{self, Debug};

/// A directed graph whose nodes carry unique string labels
///
/// Nodes live in an arena and are addressed by [`NodeId`]; the label index is
/// only used to resolve labels to handles.
#[derive(Debug, Clone)]
pub struct LabeledGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Label of each node, indexed by node id
    labels: Vec<String>,

    /// Label -> node id
    index: HashMap<String, NodeId>,

    /// Outgoing edges for each node: node id -> [(neighbor, weight)]
    adjacency: Vec<Vec<(NodeId, W)>>,
}

/// Node and edge counts of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph has {} nodes and {} edges", self.nodes, self.edges)
    }
}

impl<W> Default for LabeledGraph<W>
where
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> LabeledGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        LabeledGraph {
            labels: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Creates a new graph with room for the specified number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        LabeledGraph {
            labels: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
        }
    }

    /// Returns the node with the given label, creating it on first use
    pub fn get_or_create_node(&mut self, label: &str) -> NodeId {
        if let Some(&node) = self.index.get(label) {
            return node;
        }

        let node = NodeId(self.labels.len());
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), node);
        self.adjacency.push(Vec::new());
        node
    }

    /// Looks up a node by label without creating it
    pub fn node(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Returns the label of a node
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.labels.get(node.0).map(String::as_str)
    }

    /// Iterates over all nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.labels.len()).map(NodeId)
    }

    /// Adds the directed edge `from -> to`
    ///
    /// An existing edge between the same pair keeps its slot and takes the new
    /// weight. Negative and NaN weights are rejected.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> Result<()> {
        if !self.has_node(from) {
            return Err(Error::InvalidNode(from.0));
        }
        if !self.has_node(to) {
            return Err(Error::InvalidNode(to.0));
        }
        if weight.is_nan() || weight < W::zero() {
            return Err(Error::InvalidWeight {
                from: from.0,
                to: to.0,
                weight: weight.to_f64().unwrap_or(f64::NAN),
            });
        }

        let edges = &mut self.adjacency[from.0];
        match edges.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => edges.push((to, weight)),
        }
        Ok(())
    }

    /// Adds edges in both directions with the same weight
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, weight: W) -> Result<()> {
        self.add_directed_edge(a, b, weight)?;
        self.add_directed_edge(b, a, weight)
    }

    /// Logs and returns the node and edge counts
    pub fn report(&self) -> GraphSummary {
        let summary = GraphSummary {
            nodes: self.node_count(),
            edges: self.edge_count(),
        };
        info!("{}", summary);
        summary
    }
}

impl<W> Graph<W> for LabeledGraph<W>
where
    W: Float + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.labels.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_> {
        match self.adjacency.get(node.0) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> MutableGraph<W> for LabeledGraph<W>
where
    W: Float + Debug + Copy,
{
    fn add_node(&mut self, label: &str) -> NodeId {
        self.get_or_create_node(label)
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> Result<()> {
        self.add_directed_edge(from, to, weight)
    }
}
