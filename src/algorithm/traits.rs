use std::fmt::Debug;
use num_traits::Float;
use crate::graph::{Graph, NodeId};
use crate::Result;

/// Distance from the origin and backpointer of one reached node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathRecord<W>
where
    W: Float + Debug + Copy,
{
    /// Length of the best known path from the origin
    pub distance: W,

    /// Previous node on that path, `None` for the origin
    pub previous: Option<NodeId>,
}

/// Result of a shortest path algorithm execution
///
/// `records[v]` is `Some` exactly when `v` is reachable from `origin`.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Path record per node, indexed by node id
    pub records: Vec<Option<PathRecord<W>>>,

    /// Origin node of the computation
    pub origin: NodeId,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Returns the record of a node, if it was reached
    pub fn record(&self, node: NodeId) -> Option<&PathRecord<W>> {
        self.records.get(node.0).and_then(Option::as_ref)
    }

    /// Returns the distance to `node`, or positive infinity if it is unreachable
    pub fn distance(&self, node: NodeId) -> W {
        self.record(node)
            .map(|record| record.distance)
            .unwrap_or_else(W::infinity)
    }

    /// Reconstructs the path from the origin to `target` by following backpointers
    ///
    /// The path contains both endpoints; if `target` is the origin it appears once.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        let mut path = Vec::new();
        let mut current = Some(target);

        while let Some(node) = current {
            let record = self.record(node)?;
            path.push(node);
            current = record.previous;
        }

        path.reverse();
        Some(path)
    }

    /// Iterates over reachable nodes and their distances in node id order
    pub fn reachable(&self) -> impl Iterator<Item = (NodeId, W)> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter_map(|(i, record)| record.as_ref().map(|r| (NodeId(i), r.distance)))
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from an origin node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, origin: NodeId) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
