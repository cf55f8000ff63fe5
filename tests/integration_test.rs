// Integration tests for Wayfinder
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;
use wayfinder_core::{
    Error, Graph, GraphName, PathResult, ShortestPathProvider, ValidationError, Vertex, Weight,
    WeightedEdge, MAX_EDGES,
};
use wayfinder_storage::{GraphManager, StorageBackend};

fn v(name: &str) -> Vertex {
    Vertex::new(name).unwrap()
}

fn edge(a: &str, b: &str, weight: i64) -> WeightedEdge {
    WeightedEdge::new(v(a), v(b), Weight::new(weight).unwrap()).unwrap()
}

fn city_edges() -> Vec<WeightedEdge> {
    vec![
        edge("S", "A", 5),
        edge("S", "B", 2),
        edge("S", "C", 3),
        edge("A", "D", 4),
        edge("B", "E", 5),
        edge("C", "F", 1),
        edge("F", "G", 2),
        edge("D", "G", 1),
        edge("E", "G", 1),
        edge("A", "B", 6),
    ]
}

fn managers(dir: &TempDir) -> Vec<(StorageBackend, GraphManager)> {
    [StorageBackend::Memory, StorageBackend::Json, StorageBackend::Lmdb]
        .into_iter()
        .map(|backend| {
            let path = dir.path().join(backend.to_string());
            (backend, GraphManager::open(backend, path).unwrap())
        })
        .collect()
}

#[test]
fn test_value_validation() {
    assert!(matches!(
        Vertex::new("   "),
        Err(Error::Validation(ValidationError::Empty { .. }))
    ));
    assert!(Vertex::new("x".repeat(256)).is_err());
    assert!(Vertex::new("x".repeat(255)).is_ok());
    assert!(Weight::new(-1).is_err());
    assert!(Weight::new(1001).is_err());
    assert_eq!(Weight::new(1000).unwrap().value(), 1000);
    assert!(matches!(
        WeightedEdge::new(v("A"), v("a"), Weight::default()),
        Err(Error::Validation(ValidationError::IdenticalVertices(_)))
    ));
}

#[test]
fn test_graph_capacity() {
    let mut graph = Graph::new(GraphName::new("Full").unwrap());
    for i in 0..MAX_EDGES {
        graph.upsert_edge(edge("hub", &format!("n{}", i), 1)).unwrap();
    }
    assert_eq!(graph.len(), MAX_EDGES);

    // replacing an existing pair still fits
    graph.upsert_edge(edge("N0", "HUB", 9)).unwrap();
    assert_eq!(graph.len(), MAX_EDGES);

    assert!(matches!(
        graph.upsert_edge(edge("hub", "overflow", 1)),
        Err(Error::CapacityExceeded { .. })
    ));
    assert_eq!(graph.len(), MAX_EDGES);
}

#[test]
fn test_shortest_path_scenario() {
    let provider = ShortestPathProvider::new(city_edges()).unwrap();
    let result = provider.shortest_path(&v("s"), &v("D"));

    assert!(result.is_success());
    assert_eq!(result.total_weight(), 7);

    let walked: Vec<String> = result.from_source().map(|e| e.to_string()).collect();
    assert_eq!(walked, vec!["(S, C, 3)", "(C, F, 1)", "(F, G, 2)", "(D, G, 1)"]);
}

#[test]
fn test_persistence_across_backends() {
    let dir = TempDir::new().unwrap();

    for (backend, manager) in managers(&dir) {
        let mut graph = Graph::new(GraphName::new("City").unwrap());
        for e in city_edges() {
            graph.upsert_edge(e).unwrap();
        }
        manager.upsert_graph(&graph).unwrap();

        let name = GraphName::new("CITY").unwrap();
        assert!(manager.exists(&name).unwrap(), "{}", backend);

        let loaded = manager.get_graph(&name).unwrap().unwrap();
        assert_eq!(loaded.name().value(), "City");
        assert_eq!(loaded.edges(), graph.edges());

        let result = manager.shortest_path(&name, &v("S"), &v("D")).unwrap();
        assert_eq!(result.total_weight(), 7, "{}", backend);

        manager.upsert_edge(&name, edge("S", "D", 2)).unwrap();
        let result = manager.shortest_path(&name, &v("S"), &v("D")).unwrap();
        assert_eq!(result.paths(), &[edge("S", "D", 2)]);

        let renamed = manager
            .rename_graph(&name, GraphName::new("Town").unwrap())
            .unwrap();
        assert_eq!(renamed.name().value(), "Town");
        assert!(!manager.exists(&name).unwrap());

        let names: Vec<String> = manager
            .list_graphs()
            .unwrap()
            .into_iter()
            .map(|n| n.value().to_string())
            .collect();
        assert_eq!(names, vec!["Town".to_string()], "{}", backend);

        assert!(manager.delete_graph(renamed.name()).unwrap());
        assert!(manager.get_graph(renamed.name()).unwrap().is_none());
    }
}

#[test]
fn test_json_storage_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let name = GraphName::new("Durable").unwrap();

    {
        let manager = GraphManager::open(StorageBackend::Json, dir.path()).unwrap();
        manager.upsert_edge(&name, edge("A", "B", 4)).unwrap();
    }

    let manager = GraphManager::open(StorageBackend::Json, dir.path()).unwrap();
    let graph = manager.get_graph(&name).unwrap().unwrap();
    assert_eq!(graph.edges(), &[edge("A", "B", 4)]);
}

#[test]
fn test_unknown_graph_has_no_path() {
    let dir = TempDir::new().unwrap();
    let manager = GraphManager::open(StorageBackend::Memory, dir.path()).unwrap();

    let result = manager
        .shortest_path(&GraphName::new("Nowhere").unwrap(), &v("A"), &v("B"))
        .unwrap();
    assert_eq!(result, PathResult::default());
}

#[test]
fn test_concurrent_queries() {
    let provider = Arc::new(ShortestPathProvider::new(city_edges()).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let provider = provider.clone();
            thread::spawn(move || provider.shortest_path(&v("S"), &v("E")).total_weight())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 7);
    }
}
