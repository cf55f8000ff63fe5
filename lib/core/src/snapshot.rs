use serde::{Deserialize, Serialize};
use crate::error::{Result, ValidationError};

/// Flat, serializable form of a [`Graph`](crate::Graph): the unit storage reads and writes.
///
/// No edge cap is enforced here. [`Graph::from_snapshot`](crate::Graph::from_snapshot) replays
/// the edges and applies the usual limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<E> {
    pub name: String,
    pub edges: Vec<E>,
}

impl<E> Snapshot<E> {
    pub fn new(name: impl Into<String>, edges: Vec<E>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "Snapshot name" }.into());
        }
        Ok(Self { name, edges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vertex, Weight, WeightedEdge};

    #[test]
    fn test_blank_name_rejected() {
        assert!(Snapshot::<WeightedEdge>::new(" ", Vec::new()).is_err());
        assert!(Snapshot::<WeightedEdge>::new("g", Vec::new()).is_ok());
    }

    #[test]
    fn test_persisted_shape() {
        let edge = WeightedEdge::new(
            Vertex::new("A").unwrap(),
            Vertex::new("B").unwrap(),
            Weight::new(5).unwrap(),
        )
        .unwrap();
        let snapshot = Snapshot::new("Roads", vec![edge]).unwrap();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Roads",
                "edges": [{
                    "source": { "name": "A" },
                    "destination": { "name": "B" },
                    "weight": { "value": 5 }
                }]
            })
        );
    }
}
