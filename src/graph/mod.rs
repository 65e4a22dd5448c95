pub mod traits;
pub mod labeled;
pub mod generators;

pub use traits::{Graph, MutableGraph, NodeId};
pub use labeled::{GraphSummary, LabeledGraph};
