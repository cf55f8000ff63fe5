use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use wayfinder_core::{Error, GraphName, Result, Snapshot, WeightedEdge};
use crate::json_file::JsonFileStorage;
use crate::lmdb_storage::LmdbStorage;
use crate::memory::MemoryStorage;

/// Named blob store for graph snapshots.
///
/// Keys are [`GraphName::key`], so every lookup is case-insensitive, while the stored snapshot
/// keeps the name exactly as it was given.
pub trait GraphStorage<E>: Send + Sync {
    /// Create or replace the snapshot stored under `snapshot.name`
    fn upsert(&self, snapshot: &Snapshot<E>) -> Result<()>;

    /// Fails with [`Error::GraphNotFound`] when nothing is stored under `name`
    fn get(&self, name: &GraphName) -> Result<Snapshot<E>>;

    fn list_names(&self) -> Result<Vec<GraphName>>;

    /// Returns whether a snapshot was removed
    fn delete(&self, name: &GraphName) -> Result<bool>;

    fn exists(&self, name: &GraphName) -> Result<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    Memory,
    #[default]
    Json,
    Lmdb,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "json" => Ok(StorageBackend::Json),
            "lmdb" => Ok(StorageBackend::Lmdb),
            other => Err(format!("unknown storage backend '{}', expected memory, json or lmdb", other)),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Json => "json",
            StorageBackend::Lmdb => "lmdb",
        };
        f.write_str(name)
    }
}

/// Open the configured backend under `data_dir`.
pub fn open_storage<P: AsRef<Path>>(
    backend: StorageBackend,
    data_dir: P,
) -> Result<Box<dyn GraphStorage<WeightedEdge>>> {
    let data_dir = data_dir.as_ref();
    let storage: Box<dyn GraphStorage<WeightedEdge>> = match backend {
        StorageBackend::Memory => Box::new(MemoryStorage::new()),
        StorageBackend::Json => Box::new(JsonFileStorage::new(data_dir.join("graphs"))?),
        StorageBackend::Lmdb => Box::new(LmdbStorage::new(data_dir.join("lmdb"))?),
    };
    Ok(storage)
}

pub(crate) fn encode<E: Serialize>(snapshot: &Snapshot<E>) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(snapshot).map_err(|e| Error::Serialization(e.to_string()))
}

pub(crate) fn decode<E: DeserializeOwned>(bytes: &[u8]) -> Result<Snapshot<E>> {
    serde_json::from_slice(bytes)
        .map_err(|e| Error::Serialization(format!("stored graph doesn't meet required structure: {}", e)))
}

/// Just the name of a stored snapshot, without decoding its edges
#[derive(Deserialize)]
struct NameOnly {
    name: String,
}

pub(crate) fn decode_name(bytes: &[u8]) -> Result<GraphName> {
    let NameOnly { name } = serde_json::from_slice(bytes)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    GraphName::new(name)
}

pub(crate) fn key_of<E>(snapshot: &Snapshot<E>) -> Result<GraphName> {
    GraphName::new(snapshot.name.as_str())
}
