//! # Wayfinder Core
//!
//! Core library for the Wayfinder graph service.
//!
//! This crate provides the graph model and the path search:
//!
//! - [`Vertex`], [`Weight`], [`GraphName`] - validated value types
//! - [`Edge`], [`WeightedEdge`] - undirected edges with symmetric identity
//! - [`Graph`] - named, bounded, deduplicated edge container
//! - [`Snapshot`] - flat form of a graph used by storage
//! - [`ShortestPathProvider`] - minimum-weight path search
//!
//! ## Example
//!
//! ```rust
//! use wayfinder_core::{Graph, GraphName, ShortestPathProvider, Vertex, Weight, WeightedEdge};
//!
//! let edge = |a: &str, b: &str, w: i64| -> wayfinder_core::Result<WeightedEdge> {
//!     WeightedEdge::new(Vertex::new(a)?, Vertex::new(b)?, Weight::new(w)?)
//! };
//!
//! let mut graph = Graph::new(GraphName::new("triangle")?);
//! graph.upsert_edge(edge("A", "B", 1)?)?;
//! graph.upsert_edge(edge("B", "C", 1)?)?;
//! graph.upsert_edge(edge("A", "C", 3)?)?;
//!
//! let provider = ShortestPathProvider::new(graph.edges().to_vec())?;
//! let result = provider.shortest_path(&Vertex::new("A")?, &Vertex::new("C")?);
//! assert!(result.is_success());
//! assert_eq!(result.total_weight(), 2);
//! # Ok::<(), wayfinder_core::Error>(())
//! ```

pub mod error;
pub mod record;
pub mod name;
pub mod vertex;
pub mod weight;
pub mod edge;
pub mod graph;
pub mod snapshot;
pub mod path;
pub mod dijkstra;

pub use error::{Error, Result, ValidationError};
pub use record::{EdgeRecord, VertexRecord, WeightRecord};
pub use name::GraphName;
pub use vertex::Vertex;
pub use weight::Weight;
pub use edge::{Edge, EdgeLike, WeightedEdge};
pub use graph::{Graph, MAX_EDGES};
pub use snapshot::Snapshot;
pub use path::PathResult;
pub use dijkstra::ShortestPathProvider;
