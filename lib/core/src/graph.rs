use crate::edge::EdgeLike;
use crate::error::{Error, Result};
use crate::name::GraphName;
use crate::snapshot::Snapshot;
use crate::vertex::Vertex;

/// Max. number of distinct vertex pairs a graph may hold
pub const MAX_EDGES: usize = 100;

/// A named, capacity-bounded set of edges deduplicated by vertex pair.
///
/// Not synchronized: owners that share a graph across threads must serialize writes themselves.
#[derive(Debug, Clone)]
pub struct Graph<E: EdgeLike> {
    name: GraphName,
    edges: Vec<E>,
}

impl<E: EdgeLike> Graph<E> {
    #[must_use]
    pub fn new(name: GraphName) -> Self {
        Self {
            name,
            edges: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &GraphName {
        &self.name
    }

    pub fn rename(&mut self, name: GraphName) {
        self.name = name;
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[must_use]
    pub fn contains(&self, edge: &E) -> bool {
        self.edges.contains(edge)
    }

    /// Insert or update an edge.
    ///
    /// An edge over an already present vertex pair replaces the stored one (last write wins),
    /// so the capacity check only applies to new pairs.
    pub fn upsert_edge(&mut self, edge: E) -> Result<()> {
        let existed = self.try_delete_edge(&edge);
        if !existed && self.edges.len() >= MAX_EDGES {
            return Err(Error::CapacityExceeded { max: MAX_EDGES });
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Remove the edge with the same vertex pair, if any. Returns whether one was removed.
    pub fn try_delete_edge(&mut self, edge: &E) -> bool {
        match self.edges.iter().position(|e| e == edge) {
            Some(index) => {
                self.edges.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flip the stored orientation of `edge`, e.g. (A, B) to (B, A).
    pub fn switch_vertices(&mut self, edge: &E) -> Result<()> {
        self.upsert_edge(edge.switch_vertices())
    }

    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    /// Distinct endpoints of all edges, in order of first appearance.
    #[must_use]
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices: Vec<Vertex> = Vec::new();
        for edge in &self.edges {
            for vertex in [edge.source(), edge.destination()] {
                if !vertices.contains(vertex) {
                    vertices.push(vertex.clone());
                }
            }
        }
        vertices
    }

    #[must_use]
    pub fn to_snapshot(&self) -> Snapshot<E> {
        Snapshot {
            name: self.name.value().to_string(),
            edges: self.edges.clone(),
        }
    }

    /// Rebuild a graph by replaying every edge through [`Graph::upsert_edge`], so stored data
    /// is held to the same rules as live mutation.
    pub fn from_snapshot(snapshot: Snapshot<E>) -> Result<Self> {
        let mut graph = Self::new(GraphName::new(snapshot.name)?);
        for edge in snapshot.edges {
            graph.upsert_edge(edge)?;
        }
        Ok(graph)
    }
}
