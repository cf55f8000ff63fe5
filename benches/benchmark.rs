// Performance benchmarks for graph building and shortest path search
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use wayfinder_core::{Graph, GraphName, ShortestPathProvider, Vertex, Weight, WeightedEdge, MAX_EDGES};

fn vertex(i: usize) -> Vertex {
    Vertex::new(format!("v{}", i)).unwrap()
}

/// Random connected graph: a spanning chain plus random chords, capped at `edges`.
fn generate_random_edges(vertices: usize, edges: usize) -> Vec<WeightedEdge> {
    let mut rng = rand::rng();
    let mut graph = Graph::new(GraphName::new("bench").unwrap());

    for i in 1..vertices {
        let weight = Weight::new(rng.random_range(0..=1000)).unwrap();
        graph
            .upsert_edge(WeightedEdge::new(vertex(i - 1), vertex(i), weight).unwrap())
            .unwrap();
    }

    while graph.len() < edges {
        let a = rng.random_range(0..vertices);
        let b = rng.random_range(0..vertices);
        if a == b {
            continue;
        }
        let weight = Weight::new(rng.random_range(0..=1000)).unwrap();
        graph
            .upsert_edge(WeightedEdge::new(vertex(a), vertex(b), weight).unwrap())
            .unwrap();
    }

    graph.edges().to_vec()
}

fn benchmark_upsert(c: &mut Criterion) {
    let mut group = c.benchmark_group("upsert");

    for size in [10, 50, MAX_EDGES].iter() {
        let edges = generate_random_edges(size / 2 + 2, *size);
        group.bench_with_input(BenchmarkId::new("graph", size), &edges, |b, edges| {
            b.iter(|| {
                let mut graph = Graph::new(GraphName::new("bench").unwrap());
                for edge in edges {
                    graph.upsert_edge(edge.clone()).unwrap();
                }
                black_box(graph.len())
            });
        });
    }

    group.finish();
}

fn benchmark_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for vertices in [10, 30, 60].iter() {
        let edges = generate_random_edges(*vertices, MAX_EDGES.min(vertices * 3));
        let provider = ShortestPathProvider::new(edges).unwrap();
        let source = vertex(0);
        let destination = vertex(vertices - 1);

        group.bench_with_input(
            BenchmarkId::new("dijkstra", vertices),
            vertices,
            |b, _| {
                b.iter(|| black_box(provider.shortest_path(&source, &destination)));
            },
        );
    }

    group.finish();
}

fn benchmark_provider_build(c: &mut Criterion) {
    let edges = generate_random_edges(50, MAX_EDGES);
    c.bench_function("provider_build", |b| {
        b.iter(|| black_box(ShortestPathProvider::new(edges.clone()).unwrap()));
    });
}

criterion_group!(benches, benchmark_upsert, benchmark_shortest_path, benchmark_provider_build);
criterion_main!(benches);
