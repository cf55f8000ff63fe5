//! # Wayfinder
//!
//! Weighted undirected graphs with validated value types and Dijkstra shortest paths.
//!
//! Every value is checked when it is built: vertex and graph names are non-blank and at
//! most 255 chars, weights sit in `0..=1000`, an edge never joins a vertex to itself and a
//! graph never holds more than 100 edges. Names compare case-insensitively.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install wayfinder
//! wayfinder --http-port 8080 --storage json --data-dir ./data
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use wayfinder::prelude::*;
//!
//! let v = |name: &str| Vertex::new(name).unwrap();
//! let w = |value: i64| Weight::new(value).unwrap();
//!
//! let mut graph = Graph::new(GraphName::new("Roads").unwrap());
//! graph.upsert_edge(WeightedEdge::new(v("A"), v("B"), w(1)).unwrap()).unwrap();
//! graph.upsert_edge(WeightedEdge::new(v("B"), v("C"), w(1)).unwrap()).unwrap();
//! graph.upsert_edge(WeightedEdge::new(v("A"), v("C"), w(3)).unwrap()).unwrap();
//!
//! let provider = ShortestPathProvider::new(graph.edges().to_vec()).unwrap();
//! let result = provider.shortest_path(&v("a"), &v("c"));
//! assert!(result.is_success());
//! assert_eq!(result.total_weight(), 2);
//! ```
//!
//! ## Crate Structure
//!
//! - [`wayfinder-core`](https://docs.rs/wayfinder-core) - Value types, graph container, shortest path
//! - [`wayfinder-storage`](https://docs.rs/wayfinder-storage) - Snapshot persistence (memory, JSON files, LMDB) and `GraphManager`
//! - [`wayfinder-api`](https://docs.rs/wayfinder-api) - REST API

// Re-export core types
pub use wayfinder_core::{
    Edge, EdgeLike, WeightedEdge,
    Graph, GraphName, Snapshot,
    Vertex, Weight,
    PathResult, ShortestPathProvider,
    Error, Result, ValidationError,
    MAX_EDGES,
};

// Re-export storage
pub use wayfinder_storage::{GraphManager, GraphStorage, StorageBackend};

// Re-export API
pub use wayfinder_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Edge, EdgeLike, WeightedEdge,
        Graph, GraphName, Snapshot,
        Vertex, Weight,
        PathResult, ShortestPathProvider,
        Error, Result,
        GraphManager, StorageBackend,
    };
}
