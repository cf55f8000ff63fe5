use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use crate::error::{Error, Result, ValidationError};
use crate::record::EdgeRecord;
use crate::vertex::Vertex;
use crate::weight::Weight;

/// Capability shared by every edge variant a [`Graph`](crate::Graph) can hold.
///
/// Identity is the unordered vertex pair: implementors must make `(A, B) == (B, A)` and hash
/// both orientations the same way. Extra payload (such as a weight) is never part of identity.
pub trait EdgeLike: Clone + Eq + Hash + fmt::Debug {
    fn source(&self) -> &Vertex;

    fn destination(&self) -> &Vertex;

    /// Returns the same edge with endpoints reversed, payload preserved.
    #[must_use]
    fn switch_vertices(&self) -> Self;

    /// True when the two edges share at least one endpoint.
    fn has_relation<O: EdgeLike>(&self, other: &O) -> bool {
        let (source, destination) = (self.source(), self.destination());
        source == other.source()
            || source == other.destination()
            || destination == other.source()
            || destination == other.destination()
    }

    /// True when this edge joins `a` and `b`, in either orientation.
    fn connects(&self, a: &Vertex, b: &Vertex) -> bool {
        (self.source() == a && self.destination() == b)
            || (self.source() == b && self.destination() == a)
    }

    /// The endpoint across from `vertex`, or `None` if `vertex` is not on this edge.
    fn opposite(&self, vertex: &Vertex) -> Option<&Vertex> {
        if self.source() == vertex {
            Some(self.destination())
        } else if self.destination() == vertex {
            Some(self.source())
        } else {
            None
        }
    }
}

/// Undirected connection between two distinct vertices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "EdgeRecord", into = "EdgeRecord")]
pub struct Edge {
    source: Vertex,
    destination: Vertex,
}

impl Edge {
    pub fn new(source: Vertex, destination: Vertex) -> Result<Self> {
        if source == destination {
            return Err(ValidationError::IdenticalVertices(source.name().to_string()).into());
        }
        Ok(Self { source, destination })
    }

    fn ordered(&self) -> (&Vertex, &Vertex) {
        if self.source <= self.destination {
            (&self.source, &self.destination)
        } else {
            (&self.destination, &self.source)
        }
    }
}

impl EdgeLike for Edge {
    #[inline]
    fn source(&self) -> &Vertex {
        &self.source
    }

    #[inline]
    fn destination(&self) -> &Vertex {
        &self.destination
    }

    fn switch_vertices(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash in canonical order so (A, B) and (B, A) collide
        let (low, high) = self.ordered();
        low.hash(state);
        high.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.destination)
    }
}

impl TryFrom<EdgeRecord> for Edge {
    type Error = Error;

    fn try_from(record: EdgeRecord) -> Result<Self> {
        let source = record.source.ok_or(Error::MissingArgument("source"))?;
        let destination = record.destination.ok_or(Error::MissingArgument("destination"))?;
        Self::new(source, destination)
    }
}

impl From<Edge> for EdgeRecord {
    fn from(edge: Edge) -> Self {
        EdgeRecord {
            source: Some(edge.source),
            destination: Some(edge.destination),
            weight: None,
        }
    }
}

/// An [`Edge`] carrying a [`Weight`].
///
/// Equality and hashing come from the inner edge only: two weighted edges over the same pair
/// are the same edge whatever their weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "EdgeRecord", into = "EdgeRecord")]
pub struct WeightedEdge {
    edge: Edge,
    weight: Weight,
}

impl WeightedEdge {
    pub fn new(source: Vertex, destination: Vertex, weight: Weight) -> Result<Self> {
        Ok(Self {
            edge: Edge::new(source, destination)?,
            weight,
        })
    }

    #[inline]
    #[must_use]
    pub fn from_edge(edge: Edge, weight: Weight) -> Self {
        Self { edge, weight }
    }

    #[inline]
    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    #[inline]
    #[must_use]
    pub fn as_edge(&self) -> &Edge {
        &self.edge
    }
}

impl EdgeLike for WeightedEdge {
    #[inline]
    fn source(&self) -> &Vertex {
        self.edge.source()
    }

    #[inline]
    fn destination(&self) -> &Vertex {
        self.edge.destination()
    }

    fn switch_vertices(&self) -> Self {
        Self {
            edge: self.edge.switch_vertices(),
            weight: self.weight,
        }
    }
}

impl PartialEq for WeightedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.edge == other.edge
    }
}

impl Eq for WeightedEdge {}

impl Hash for WeightedEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.edge.hash(state);
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.source(), self.destination(), self.weight)
    }
}

impl TryFrom<EdgeRecord> for WeightedEdge {
    type Error = Error;

    fn try_from(record: EdgeRecord) -> Result<Self> {
        let weight = record.weight.ok_or(Error::MissingArgument("weight"))?;
        let edge = Edge::try_from(EdgeRecord { weight: None, ..record })?;
        Ok(Self::from_edge(edge, weight))
    }
}

impl From<WeightedEdge> for EdgeRecord {
    fn from(edge: WeightedEdge) -> Self {
        EdgeRecord {
            weight: Some(edge.weight),
            ..EdgeRecord::from(edge.edge)
        }
    }
}
