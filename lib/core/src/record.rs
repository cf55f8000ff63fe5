// Persisted shapes of the value types.
//
// Every domain type (de)serializes through one of these records, so anything read back from
// storage or a request body goes through the same constructors as live values.
use serde::{Deserialize, Serialize};
use crate::vertex::Vertex;
use crate::weight::Weight;

/// `{ "name": "A" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub name: String,
}

/// `{ "value": 3 }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightRecord {
    pub value: i64,
}

/// `{ "source": {..}, "destination": {..}, "weight": {..} }`
///
/// Fields are optional on the wire so that a missing endpoint is reported as a missing
/// argument instead of an opaque decoding failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(default)]
    pub source: Option<Vertex>,
    #[serde(default)]
    pub destination: Option<Vertex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}
