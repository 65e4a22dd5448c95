//! Shortest Paths - Dijkstra single-source shortest paths
//!
//! The engine runs Dijkstra's algorithm over a labeled, weighted, directed graph
//! using an indexed binary min-heap with decrease-priority support, and
//! reconstructs paths by walking backpointers from a destination to the origin.
//!
//! ```
//! use ordered_float::OrderedFloat;
//! use shortest_paths::{LabeledGraph, ShortestPaths};
//!
//! let mut graph = LabeledGraph::new();
//! let a = graph.get_or_create_node("A");
//! let b = graph.get_or_create_node("B");
//! graph.add_directed_edge(a, b, OrderedFloat(1.0)).unwrap();
//!
//! let mut sp = ShortestPaths::new(&graph);
//! sp.compute(a).unwrap();
//! assert_eq!(sp.shortest_path_length(b).unwrap(), OrderedFloat(1.0));
//! assert_eq!(sp.shortest_path(b).unwrap(), Some(vec![a, b]));
//! ```

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod parser;
pub mod report;

pub use algorithm::{
    dijkstra::Dijkstra, shortest_paths::ShortestPaths, PathRecord, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{LabeledGraph, NodeId};
pub use parser::{parse_graph, GraphFormat};

/// Edge weight and distance type used by the parsers and binaries
pub type Weight = ordered_float::OrderedFloat<f64>;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Item {0} is already in the priority queue")]
    DuplicateItem(usize),

    #[error("Item {0} is not in the priority queue")]
    ItemNotFound(usize),

    #[error("New priority for item {0} is not smaller than its current priority")]
    PriorityIncrease(usize),

    #[error("Invalid node: {0}")]
    InvalidNode(usize),

    #[error("Invalid edge weight from {from} to {to}: {weight}")]
    InvalidWeight { from: usize, to: usize, weight: f64 },

    #[error("Shortest paths have not been computed yet")]
    NotComputed,

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Could not open file {0}")]
    SourceNotFound(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unknown node label: {0}")]
    UnknownLabel(String),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
