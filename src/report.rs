//! Printable results of a shortest path query
//!
//! The command-line binary renders these either as plain text or as JSON.

use std::fmt;

use serde::Serialize;

use crate::algorithm::ShortestPaths;
use crate::graph::{LabeledGraph, NodeId};
use crate::{Error, Result, Weight};

/// Distance to one reachable node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReachableNode {
    pub label: String,
    pub distance: f64,
}

/// Every node reachable from an origin, nearest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReachableReport {
    pub origin: String,
    pub nodes: Vec<ReachableNode>,
}

/// Shortest path between two nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub origin: String,
    pub destination: String,
    /// Labels along the path, `None` if the destination is unreachable
    pub path: Option<Vec<String>>,
    /// Total length, absent when the destination is unreachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

fn label_of(graph: &LabeledGraph<Weight>, node: NodeId) -> Result<String> {
    graph
        .label(node)
        .map(str::to_string)
        .ok_or(Error::InvalidNode(node.0))
}

impl ReachableReport {
    /// Collects all reachable nodes sorted by distance, then label
    pub fn build(engine: &ShortestPaths<'_, LabeledGraph<Weight>, Weight>) -> Result<Self> {
        let graph = engine.graph();
        let result = engine.result().ok_or(Error::NotComputed)?;

        let mut nodes = result
            .reachable()
            .map(|(node, distance)| {
                Ok(ReachableNode {
                    label: label_of(graph, node)?,
                    distance: distance.into_inner(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        nodes.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.label.cmp(&b.label))
        });

        Ok(ReachableReport {
            origin: label_of(graph, result.origin)?,
            nodes,
        })
    }
}

impl PathReport {
    /// Reconstructs the path to `destination` with its labels and length
    pub fn build(
        engine: &ShortestPaths<'_, LabeledGraph<Weight>, Weight>,
        destination: NodeId,
    ) -> Result<Self> {
        let graph = engine.graph();
        let origin = engine.origin().ok_or(Error::NotComputed)?;

        let path = match engine.shortest_path(destination)? {
            Some(nodes) => Some(
                nodes
                    .into_iter()
                    .map(|node| label_of(graph, node))
                    .collect::<Result<Vec<_>>>()?,
            ),
            None => None,
        };
        let length = path
            .as_ref()
            .map(|_| engine.shortest_path_length(destination))
            .transpose()?
            .map(|length| length.into_inner());

        Ok(PathReport {
            origin: label_of(graph, origin)?,
            destination: label_of(graph, destination)?,
            path,
            length,
        })
    }
}

impl fmt::Display for ReachableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{} {}", node.label, node.distance)?;
        }
        Ok(())
    }
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.path, self.length) {
            (Some(path), Some(length)) => {
                writeln!(f, "{}", path.join(" "))?;
                writeln!(f, "{}", length)
            }
            _ => writeln!(f, "No path from {} to {}", self.origin, self.destination),
        }
    }
}
