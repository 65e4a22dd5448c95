use std::fmt::Debug;
use log::{debug, trace};
use num_traits::Float;

use crate::graph::{Graph, NodeId};
use crate::algorithm::{PathRecord, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedMinHeap;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with an indexed heap
///
/// Each node enters the queue once, when it is first reached, and its priority
/// is lowered in place whenever a strictly shorter path is found. Edge weights
/// must be non-negative; this is not checked here. Settled nodes are never
/// updated again, so a negative edge yields wrong distances rather than an
/// error.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, origin: NodeId) -> Result<ShortestPathResult<W>> {
        if !graph.has_node(origin) {
            return Err(Error::InvalidNode(origin.0));
        }

        let n = graph.node_count();
        debug!("Computing shortest paths from {} over {} nodes", origin, n);

        let mut records: Vec<Option<PathRecord<W>>> = vec![None; n];
        records[origin.0] = Some(PathRecord {
            distance: W::zero(),
            previous: None,
        });

        let mut frontier = IndexedMinHeap::with_capacity(n);
        frontier.insert(origin.0, W::zero())?;

        let mut settled = 0usize;
        let mut relaxations = 0usize;

        while let Some((f, dist_f)) = frontier.extract_min() {
            settled += 1;
            let from = NodeId(f);

            for (w, weight) in graph.outgoing_edges(from) {
                relaxations += 1;
                let candidate = dist_f + weight;

                match records[w.0].map(|record| record.distance) {
                    None => {
                        trace!("Reached {} via {} at {:?}", w, from, candidate);
                        records[w.0] = Some(PathRecord {
                            distance: candidate,
                            previous: Some(from),
                        });
                        frontier.insert(w.0, candidate)?;
                    }
                    Some(current) if candidate < current && frontier.contains(w.0) => {
                        trace!("Improved {} via {} to {:?}", w, from, candidate);
                        records[w.0] = Some(PathRecord {
                            distance: candidate,
                            previous: Some(from),
                        });
                        frontier.decrease_priority(w.0, candidate)?;
                    }
                    Some(_) => {}
                }
            }
        }

        debug!(
            "Settled {} nodes with {} relaxation checks from {}",
            settled, relaxations, origin
        );

        Ok(ShortestPathResult { records, origin })
    }
}
