use serde::Serialize;
use crate::edge::WeightedEdge;

/// Outcome of a shortest path query.
///
/// `paths` runs from the destination back to the source. An empty path means the destination
/// could not be reached, which is a normal answer rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    is_success: bool,
    paths: Vec<WeightedEdge>,
}

impl PathResult {
    #[must_use]
    pub fn new(paths: Vec<WeightedEdge>) -> Self {
        Self {
            is_success: !paths.is_empty(),
            paths,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.is_success
    }

    #[inline]
    #[must_use]
    pub fn paths(&self) -> &[WeightedEdge] {
        &self.paths
    }

    #[must_use]
    pub fn into_paths(self) -> Vec<WeightedEdge> {
        self.paths
    }

    /// Edges in travel order, source first.
    pub fn from_source(&self) -> impl Iterator<Item = &WeightedEdge> {
        self.paths.iter().rev()
    }

    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.paths.iter().map(|edge| u64::from(edge.weight())).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vertex, Weight};

    fn we(a: &str, b: &str, weight: i64) -> WeightedEdge {
        WeightedEdge::new(Vertex::new(a).unwrap(), Vertex::new(b).unwrap(), Weight::new(weight).unwrap())
            .unwrap()
    }

    #[test]
    fn test_success_tracks_emptiness() {
        assert!(!PathResult::new(Vec::new()).is_success());
        assert!(!PathResult::default().is_success());
        assert!(PathResult::new(vec![we("A", "B", 1)]).is_success());
    }

    #[test]
    fn test_total_and_order() {
        let result = PathResult::new(vec![we("B", "C", 2), we("A", "B", 3)]);
        assert_eq!(result.total_weight(), 5);
        let travel: Vec<String> = result.from_source().map(|e| e.to_string()).collect();
        assert_eq!(travel, vec!["(A, B, 3)", "(B, C, 2)"]);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(PathResult::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "isSuccess": false, "paths": [] }));
    }
}
