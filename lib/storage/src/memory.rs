use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use wayfinder_core::{Error, GraphName, Result, Snapshot};
use crate::storage::{decode, encode, key_of, GraphStorage};

struct Entry {
    name: GraphName,
    data: Vec<u8>,
}

/// Process-local storage; snapshots are kept encoded, exactly as a persistent backend would.
#[derive(Default)]
pub struct MemoryStorage {
    graphs: RwLock<HashMap<String, Entry>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.graphs.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graphs.read().is_empty()
    }
}

impl<E> GraphStorage<E> for MemoryStorage
where
    E: Serialize + DeserializeOwned,
{
    fn upsert(&self, snapshot: &Snapshot<E>) -> Result<()> {
        let name = key_of(snapshot)?;
        let data = encode(snapshot)?;
        self.graphs
            .write()
            .insert(name.key().to_string(), Entry { name, data });
        Ok(())
    }

    fn get(&self, name: &GraphName) -> Result<Snapshot<E>> {
        let graphs = self.graphs.read();
        let entry = graphs
            .get(name.key())
            .ok_or_else(|| Error::GraphNotFound(name.to_string()))?;
        decode(&entry.data)
    }

    fn list_names(&self) -> Result<Vec<GraphName>> {
        let mut names: Vec<GraphName> = self
            .graphs
            .read()
            .values()
            .map(|entry| entry.name.clone())
            .collect();
        names.sort_by(|a, b| a.key().cmp(b.key()));
        Ok(names)
    }

    fn delete(&self, name: &GraphName) -> Result<bool> {
        Ok(self.graphs.write().remove(name.key()).is_some())
    }

    fn exists(&self, name: &GraphName) -> Result<bool> {
        Ok(self.graphs.read().contains_key(name.key()))
    }
}
