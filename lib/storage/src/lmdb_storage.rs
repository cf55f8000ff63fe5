// LMDB-backed graph storage
use heed::types::{Bytes, Str};
use heed::{Database, Env, EnvOpenOptions};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};
use wayfinder_core::{Error, GraphName, Result, Snapshot};
use crate::storage::{decode, decode_name, encode, key_of, GraphStorage};

const DB_GRAPHS: &str = "graphs";
const MAP_SIZE: usize = 1024 * 1024 * 1024; // 1GB

fn storage_error(e: heed::Error) -> Error {
    Error::Storage(e.to_string())
}

pub struct LmdbStorage {
    env: Arc<Env>,
    graphs_db: Database<Str, Bytes>,
}

impl LmdbStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        std::fs::create_dir_all(&path)?;

        let env = Arc::new(
            unsafe {
                EnvOpenOptions::new()
                    .map_size(MAP_SIZE)
                    .max_dbs(1)
                    .open(path)
            }
            .map_err(storage_error)?,
        );

        let mut wtxn = env.write_txn().map_err(storage_error)?;
        let graphs_db = env
            .create_database(&mut wtxn, Some(DB_GRAPHS))
            .map_err(storage_error)?;
        wtxn.commit().map_err(storage_error)?;

        Ok(Self { env, graphs_db })
    }

    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let rtxn = self.env.read_txn().map_err(storage_error)?;
        let data = self.graphs_db.get(&rtxn, key).map_err(storage_error)?;
        Ok(data.map(|bytes| bytes.to_vec()))
    }
}

impl<E> GraphStorage<E> for LmdbStorage
where
    E: Serialize + DeserializeOwned,
{
    fn upsert(&self, snapshot: &Snapshot<E>) -> Result<()> {
        let name = key_of(snapshot)?;
        let data = encode(snapshot)?;

        let mut wtxn = self.env.write_txn().map_err(storage_error)?;
        self.graphs_db
            .put(&mut wtxn, name.key(), &data)
            .map_err(storage_error)?;
        wtxn.commit().map_err(storage_error)?;

        debug!("Saved graph '{}' to LMDB", name);
        Ok(())
    }

    fn get(&self, name: &GraphName) -> Result<Snapshot<E>> {
        match self.read(name.key())? {
            Some(data) => decode(&data),
            None => Err(Error::GraphNotFound(name.to_string())),
        }
    }

    fn list_names(&self) -> Result<Vec<GraphName>> {
        let rtxn = self.env.read_txn().map_err(storage_error)?;
        let mut names = Vec::new();
        for result in self.graphs_db.iter(&rtxn).map_err(storage_error)? {
            let (key, data) = result.map_err(storage_error)?;
            match decode_name(data) {
                Ok(name) => names.push(name),
                Err(e) => warn!("Skipping unreadable graph entry '{}': {}", key, e),
            }
        }
        // LMDB iterates in key order already
        Ok(names)
    }

    fn delete(&self, name: &GraphName) -> Result<bool> {
        let mut wtxn = self.env.write_txn().map_err(storage_error)?;
        let existed = self
            .graphs_db
            .delete(&mut wtxn, name.key())
            .map_err(storage_error)?;
        wtxn.commit().map_err(storage_error)?;
        Ok(existed)
    }

    fn exists(&self, name: &GraphName) -> Result<bool> {
        Ok(self.read(name.key())?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_core::{Vertex, Weight, WeightedEdge};

    fn snapshot(name: &str, weight: i64) -> Snapshot<WeightedEdge> {
        let edge = WeightedEdge::new(
            Vertex::new("A").unwrap(),
            Vertex::new("B").unwrap(),
            Weight::new(weight).unwrap(),
        )
        .unwrap();
        Snapshot::new(name, vec![edge]).unwrap()
    }

    #[test]
    fn test_lmdb_workflow() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = LmdbStorage::new(temp_dir.path()).unwrap();
        let name = GraphName::new("Roads").unwrap();

        storage.upsert(&snapshot("Roads", 3)).unwrap();
        assert!(GraphStorage::<WeightedEdge>::exists(&storage, &name).unwrap());

        let loaded: Snapshot<WeightedEdge> = storage.get(&GraphName::new("roads").unwrap()).unwrap();
        assert_eq!(loaded.name, "Roads");
        assert_eq!(loaded.edges[0].weight().value(), 3);

        storage.upsert(&snapshot("ROADS", 8)).unwrap();
        let names = GraphStorage::<WeightedEdge>::list_names(&storage).unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].value(), "ROADS");

        assert!(GraphStorage::<WeightedEdge>::delete(&storage, &name).unwrap());
        assert!(!GraphStorage::<WeightedEdge>::exists(&storage, &name).unwrap());
        let missing: Result<Snapshot<WeightedEdge>> = storage.get(&name);
        assert!(matches!(missing, Err(Error::GraphNotFound(_))));
    }
}
