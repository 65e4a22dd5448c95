use std::fmt::{self, Debug};
use num_traits::Float;

use crate::Result;

/// Stable handle of a node inside one graph
///
/// Node identity is the arena index assigned at creation, never the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Float + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges `(neighbor, weight)` of a node
    fn outgoing_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: NodeId) -> bool {
        node.0 < self.node_count()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}

/// Trait for graph construction
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Debug + Copy,
{
    /// Returns the node with the given label, creating it if needed
    fn add_node(&mut self, label: &str) -> NodeId;

    /// Adds a directed edge, replacing the weight if the edge already exists
    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> Result<()>;
}
