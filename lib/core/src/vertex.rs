use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use crate::error::Result;
use crate::name::validate_name;
use crate::record::VertexRecord;

/// A named node of the graph.
///
/// The name keeps its original casing for display, but equality, hashing and ordering all go
/// through the lower-cased key, so `Vertex::new("Name1") == Vertex::new("name1")`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "VertexRecord", into = "VertexRecord")]
pub struct Vertex {
    name: String,
    key: String,
}

impl Vertex {
    pub const NAME_MAX_LENGTH: usize = 255;

    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name, "Vertex name", Self::NAME_MAX_LENGTH)?;
        let key = name.to_lowercase();
        Ok(Self { name, key })
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<VertexRecord> for Vertex {
    type Error = crate::Error;

    fn try_from(record: VertexRecord) -> Result<Self> {
        Self::new(record.name)
    }
}

impl From<Vertex> for VertexRecord {
    fn from(vertex: Vertex) -> Self {
        VertexRecord { name: vertex.name }
    }
}
