pub mod traits;
pub mod dijkstra;
pub mod shortest_paths;

pub use dijkstra::Dijkstra;
pub use shortest_paths::ShortestPaths;
pub use traits::{PathRecord, ShortestPathAlgorithm, ShortestPathResult};
