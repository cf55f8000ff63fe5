use parking_lot::Mutex;
use std::path::Path;
use tracing::{debug, error, info};
use wayfinder_core::{
    Error, Graph, GraphName, PathResult, Result, ShortestPathProvider, Vertex, WeightedEdge,
};
use crate::storage::{open_storage, GraphStorage, StorageBackend};

/// Graph operations on top of a storage backend.
///
/// Every mutation is a load / modify / store sequence on a fresh [`Graph`]; the write lock
/// keeps two of them from interleaving on the same snapshot.
pub struct GraphManager {
    storage: Box<dyn GraphStorage<WeightedEdge>>,
    write_lock: Mutex<()>,
}

impl GraphManager {
    #[must_use]
    pub fn new(storage: Box<dyn GraphStorage<WeightedEdge>>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    pub fn open<P: AsRef<Path>>(backend: StorageBackend, data_dir: P) -> Result<Self> {
        let storage = open_storage(backend, data_dir.as_ref())?;
        info!("Opened {} storage in {:?}", backend, data_dir.as_ref());
        Ok(Self::new(storage))
    }

    // ==================== Graph Methods ====================

    pub fn list_graphs(&self) -> Result<Vec<GraphName>> {
        self.storage.list_names()
    }

    #[inline]
    pub fn exists(&self, name: &GraphName) -> Result<bool> {
        self.storage.exists(name)
    }

    /// Load a graph, `None` when nothing is stored under `name`.
    pub fn get_graph(&self, name: &GraphName) -> Result<Option<Graph<WeightedEdge>>> {
        match self.storage.get(name) {
            // stored data breaking graph rules is a storage fault, not a bad request
            Ok(snapshot) => Graph::from_snapshot(snapshot).map(Some).map_err(|e| {
                Error::Storage(format!("stored graph '{}' is invalid: {}", name, e))
            }),
            Err(Error::GraphNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn require_graph(&self, name: &GraphName) -> Result<Graph<WeightedEdge>> {
        self.get_graph(name)?
            .ok_or_else(|| Error::GraphNotFound(name.to_string()))
    }

    /// Store `graph`, replacing whatever was stored under its name
    pub fn upsert_graph(&self, graph: &Graph<WeightedEdge>) -> Result<()> {
        let _guard = self.write_lock.lock();
        self.storage.upsert(&graph.to_snapshot())?;
        info!("Stored graph '{}' ({} edges)", graph.name(), graph.len());
        Ok(())
    }

    pub fn delete_graph(&self, name: &GraphName) -> Result<bool> {
        let _guard = self.write_lock.lock();
        let deleted = self.storage.delete(name)?;
        if deleted {
            info!("Deleted graph '{}'", name);
        }
        Ok(deleted)
    }

    /// Move a graph to a new name. The new entry is written first; if the old one cannot be
    /// removed afterwards the new entry is dropped again, so both names never coexist.
    pub fn rename_graph(&self, from: &GraphName, to: GraphName) -> Result<Graph<WeightedEdge>> {
        let _guard = self.write_lock.lock();
        let mut graph = self.require_graph(from)?;
        if from != &to && self.storage.exists(&to)? {
            return Err(Error::GraphExists(to.to_string()));
        }

        graph.rename(to);
        self.storage.upsert(&graph.to_snapshot())?;
        if from != graph.name() {
            if let Err(e) = self.storage.delete(from) {
                if let Err(rollback) = self.storage.delete(graph.name()) {
                    error!("Rollback of rename '{}' -> '{}' failed: {}", from, graph.name(), rollback);
                }
                return Err(e);
            }
        }

        info!("Renamed graph '{}' to '{}'", from, graph.name());
        Ok(graph)
    }

    // ==================== Edge Methods ====================

    /// Insert or update one edge, creating the graph if it does not exist yet.
    pub fn upsert_edge(&self, name: &GraphName, edge: WeightedEdge) -> Result<Graph<WeightedEdge>> {
        let _guard = self.write_lock.lock();
        let mut graph = self
            .get_graph(name)?
            .unwrap_or_else(|| Graph::new(name.clone()));
        debug!("Upserting edge {} into graph '{}'", edge, name);
        graph.upsert_edge(edge)?;
        self.storage.upsert(&graph.to_snapshot())?;
        Ok(graph)
    }

    pub fn delete_edge(&self, name: &GraphName, edge: &WeightedEdge) -> Result<bool> {
        let _guard = self.write_lock.lock();
        let mut graph = self.require_graph(name)?;
        let deleted = graph.try_delete_edge(edge);
        if deleted {
            self.storage.upsert(&graph.to_snapshot())?;
            debug!("Deleted edge {} from graph '{}'", edge, name);
        }
        Ok(deleted)
    }

    pub fn vertices(&self, name: &GraphName) -> Result<Vec<Vertex>> {
        Ok(self.require_graph(name)?.vertices())
    }

    // ==================== Path Methods ====================

    /// Shortest path inside a stored graph. An unknown graph yields an unsuccessful result.
    pub fn shortest_path(
        &self,
        name: &GraphName,
        source: &Vertex,
        destination: &Vertex,
    ) -> Result<PathResult> {
        let Some(graph) = self.get_graph(name)? else {
            debug!("Graph '{}' not found, no path", name);
            return Ok(PathResult::default());
        };

        let provider = ShortestPathProvider::new(graph.edges().to_vec())?;
        let result = provider.shortest_path(source, destination);
        debug!(
            "Shortest path {} -> {} in '{}': success={}, edges={}, weight={}",
            source,
            destination,
            name,
            result.is_success(),
            result.paths().len(),
            result.total_weight()
        );
        Ok(result)
    }
}
