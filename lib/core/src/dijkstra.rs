// Shortest path search over a frozen set of weighted edges.
//
// Plain settled-set Dijkstra: every step scans all edges for the cheapest way to reach a new
// vertex from the settled set. Graphs are capped at a few hundred vertices, so there is no
// priority queue.
use ahash::AHashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use crate::edge::{EdgeLike, WeightedEdge};
use crate::error::{Error, Result, ValidationError};
use crate::path::PathResult;
use crate::vertex::Vertex;

/// How a settled vertex was reached
#[derive(Debug, Clone, Copy)]
struct Settled<'a> {
    parent: &'a Vertex,
    total: u64,
    /// Index of the edge from `parent`, `None` for the source itself
    via: Option<usize>,
}

/// Cheapest known way onto an unsettled vertex during one step
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    vertex: &'a Vertex,
    parent: &'a Vertex,
    total: u64,
    via: usize,
}

impl<'a> Candidate<'a> {
    /// Lowest total wins; ties go to the smaller vertex key, then the smaller parent key.
    fn precedes(&self, other: &Candidate<'a>) -> bool {
        (self.total, self.vertex, self.parent) < (other.total, other.vertex, other.parent)
    }
}

/// Computes minimum-weight paths over an immutable edge set.
///
/// The edges are copied in at construction and never change, so one provider can serve
/// concurrent queries.
#[derive(Debug, Clone)]
pub struct ShortestPathProvider {
    edges: Vec<WeightedEdge>,
    vertices: Vec<Vertex>,
}

impl ShortestPathProvider {
    pub fn new<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = WeightedEdge>,
    {
        let edges: Vec<WeightedEdge> = edges.into_iter().collect();
        if edges.is_empty() {
            return Err(ValidationError::Empty { field: "Edges" }.into());
        }

        let mut vertices: Vec<Vertex> = Vec::new();
        for edge in &edges {
            for vertex in [edge.source(), edge.destination()] {
                if !vertices.contains(vertex) {
                    vertices.push(vertex.clone());
                }
            }
        }

        Ok(Self { edges, vertices })
    }

    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Distinct vertices of the frozen edge set
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Minimum total-weight path from `source` to `destination`.
    ///
    /// Unknown or unreachable vertices give an unsuccessful, empty result.
    #[must_use]
    pub fn shortest_path(&self, source: &Vertex, destination: &Vertex) -> PathResult {
        // an unset flag never cancels, so this cannot fail
        let never = AtomicBool::new(false);
        self.shortest_path_cancellable(source, destination, &never)
            .unwrap_or_default()
    }

    /// Like [`shortest_path`](Self::shortest_path), checking `cancel` once per settlement step.
    pub fn shortest_path_cancellable(
        &self,
        source: &Vertex,
        destination: &Vertex,
        cancel: &AtomicBool,
    ) -> Result<PathResult> {
        let settled = self.settle(source, cancel)?;
        Ok(PathResult::new(self.backtrack(&settled, source, destination)))
    }

    fn settle<'a>(
        &'a self,
        source: &'a Vertex,
        cancel: &AtomicBool,
    ) -> Result<AHashMap<&'a Vertex, Settled<'a>>> {
        let mut settled: AHashMap<&'a Vertex, Settled<'a>> =
            AHashMap::with_capacity(self.vertices.len());
        settled.insert(source, Settled { parent: source, total: 0, via: None });

        for _ in 0..self.vertices.len().saturating_sub(1) {
            if cancel.load(Ordering::Relaxed) {
                return Err(Error::Cancelled);
            }

            let mut best: Option<Candidate<'a>> = None;
            for (index, edge) in self.edges.iter().enumerate() {
                let (parent, reached, vertex) =
                    match (settled.get(edge.source()), settled.get(edge.destination())) {
                        (Some(from), None) => (edge.source(), from.total, edge.destination()),
                        (None, Some(from)) => (edge.destination(), from.total, edge.source()),
                        _ => continue,
                    };

                let candidate = Candidate {
                    vertex,
                    parent,
                    total: reached + u64::from(edge.weight()),
                    via: index,
                };
                if best.map_or(true, |current| candidate.precedes(&current)) {
                    best = Some(candidate);
                }
            }

            // Empty frontier: everything reachable from the source is settled
            let Some(next) = best else { break };
            settled.insert(
                next.vertex,
                Settled {
                    parent: next.parent,
                    total: next.total,
                    via: Some(next.via),
                },
            );
        }

        Ok(settled)
    }

    /// Walk parent links from `destination` back to `source`, collecting the edges used.
    fn backtrack(
        &self,
        settled: &AHashMap<&Vertex, Settled<'_>>,
        source: &Vertex,
        destination: &Vertex,
    ) -> Vec<WeightedEdge> {
        let mut paths = Vec::new();
        let mut current: &Vertex = destination;

        // each step moves one vertex closer to the source, so the settled count bounds the walk
        for _ in 0..settled.len() {
            if current == source {
                break;
            }
            let Some(entry) = settled.get(current) else {
                // destination was never reached
                return Vec::new();
            };
            if let Some(edge) = entry.via.and_then(|index| self.edges.get(index)) {
                paths.push(edge.clone());
            }
            current = entry.parent;
        }

        paths
    }
}
