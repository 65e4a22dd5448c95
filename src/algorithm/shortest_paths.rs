use std::fmt::Debug;
use std::marker::PhantomData;
use num_traits::Float;

use crate::algorithm::{Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Single-source shortest paths over a borrowed graph
///
/// Sample usage:
///
/// ```
/// use ordered_float::OrderedFloat;
/// use shortest_paths::{LabeledGraph, ShortestPaths};
///
/// let mut g = LabeledGraph::new();
/// let a = g.get_or_create_node("A");
/// let b = g.get_or_create_node("B");
/// let c = g.get_or_create_node("C");
/// g.add_directed_edge(a, b, OrderedFloat(2.0)).unwrap();
/// g.add_directed_edge(b, c, OrderedFloat(3.0)).unwrap();
///
/// let mut sp = ShortestPaths::new(&g);
/// sp.compute(a).unwrap();
/// assert_eq!(sp.shortest_path(c).unwrap(), Some(vec![a, b, c]));
/// assert_eq!(sp.shortest_path_length(c).unwrap(), OrderedFloat(5.0));
/// ```
///
/// Every call to [`compute`](ShortestPaths::compute) replaces the previous
/// results. The graph is only read, so several instances may share it.
#[derive(Debug)]
pub struct ShortestPaths<'g, G, W>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    graph: &'g G,
    algorithm: Dijkstra,
    result: Option<ShortestPathResult<W>>,
    _weight: PhantomData<W>,
}

impl<'g, G, W> ShortestPaths<'g, G, W>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    /// Creates an engine over `graph` with no computation yet
    pub fn new(graph: &'g G) -> Self {
        ShortestPaths {
            graph,
            algorithm: Dijkstra::new(),
            result: None,
            _weight: PhantomData,
        }
    }

    /// Computes shortest paths from `origin` to every reachable node
    ///
    /// Prior results are discarded before the new computation starts, so a
    /// failed call leaves the engine uncomputed.
    pub fn compute(&mut self, origin: NodeId) -> Result<()> {
        self.result = None;
        self.result = Some(self.algorithm.compute_shortest_paths(self.graph, origin)?);
        Ok(())
    }

    /// Length of the shortest path to `destination`, infinity if unreachable
    pub fn shortest_path_length(&self, destination: NodeId) -> Result<W> {
        Ok(self.computed()?.distance(destination))
    }

    /// Nodes along the shortest path from the origin to `destination`
    ///
    /// Returns `None` if no path exists.
    pub fn shortest_path(&self, destination: NodeId) -> Result<Option<Vec<NodeId>>> {
        Ok(self.computed()?.path_to(destination))
    }

    /// Origin of the current computation
    pub fn origin(&self) -> Option<NodeId> {
        self.result.as_ref().map(|result| result.origin)
    }

    /// Raw per-node results of the current computation
    pub fn result(&self) -> Option<&ShortestPathResult<W>> {
        self.result.as_ref()
    }

    /// The graph this engine operates on
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    fn computed(&self) -> Result<&ShortestPathResult<W>> {
        self.result.as_ref().ok_or(Error::NotComputed)
    }
}
