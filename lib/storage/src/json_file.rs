use atomicwrites::{AtomicFile, OverwriteBehavior};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use wayfinder_core::{Error, GraphName, Result, Snapshot, ValidationError};
use crate::storage::{decode, decode_name, encode, key_of, GraphStorage};

const EXTENSION: &str = "json";

/// Longest file name (in bytes) common file systems accept
const MAX_FILE_NAME_BYTES: usize = 255;

/// Bytes of the key kept in front of the digest when a name is too long for a file name
const LONG_NAME_PREFIX_BYTES: usize = 200;

/// Characters that cannot appear in a graph's file name on any supported platform
const FORBIDDEN_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// One pretty-printed JSON file per graph, named after the lower-cased graph name.
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, name: &GraphName) -> Result<PathBuf> {
        let key = name.key();
        if key.chars().any(|c| c.is_control() || FORBIDDEN_CHARS.contains(&c)) {
            return Err(ValidationError::InvalidCharacters {
                field: "Graph name",
                value: name.value().to_string(),
            }
            .into());
        }
        Ok(self.dir.join(file_stem(key) + "." + EXTENSION))
    }
}

/// The key itself when it fits, otherwise a char-aligned prefix plus a digest of the full key.
fn file_stem(key: &str) -> String {
    if key.len() + 1 + EXTENSION.len() <= MAX_FILE_NAME_BYTES {
        return key.to_string();
    }

    let mut end = LONG_NAME_PREFIX_BYTES;
    while !key.is_char_boundary(end) {
        end -= 1;
    }
    let digest = format!("{:x}", Sha256::digest(key.as_bytes()));
    format!("{}~{}", &key[..end], &digest[..32])
}

impl<E> GraphStorage<E> for JsonFileStorage
where
    E: Serialize + DeserializeOwned,
{
    fn upsert(&self, snapshot: &Snapshot<E>) -> Result<()> {
        let path = self.file_path(&key_of(snapshot)?)?;
        let data = encode(snapshot)?;

        fs::create_dir_all(&self.dir)?;
        AtomicFile::new(&path, OverwriteBehavior::AllowOverwrite)
            .write(|file| file.write_all(&data))
            .map_err(|e| match e {
                atomicwrites::Error::Internal(err) | atomicwrites::Error::User(err) => {
                    Error::Storage(format!("file cannot be saved {:?}: {}", path, err))
                }
            })?;

        debug!("Saved graph '{}' to {:?}", snapshot.name, path);
        Ok(())
    }

    fn get(&self, name: &GraphName) -> Result<Snapshot<E>> {
        let path = self.file_path(name)?;
        match fs::read(&path) {
            Ok(bytes) => {
                let snapshot: Snapshot<E> = decode(&bytes)?;
                // a shortened file name could in theory be taken by a different graph
                if GraphName::new(snapshot.name.as_str())?.key() != name.key() {
                    return Err(Error::GraphNotFound(name.to_string()));
                }
                Ok(snapshot)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Err(Error::GraphNotFound(name.to_string())),
            Err(err) => Err(Error::Storage(format!("file cannot be opened {:?}: {}", path, err))),
        }
    }

    fn list_names(&self) -> Result<Vec<GraphName>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some(EXTENSION) {
                continue;
            }
            match fs::read(&path).map_err(Error::from).and_then(|bytes| decode_name(&bytes)) {
                Ok(name) => names.push(name),
                Err(e) => warn!("Skipping unreadable graph file {:?}: {}", path, e),
            }
        }

        names.sort_by(|a, b| a.key().cmp(b.key()));
        Ok(names)
    }

    fn delete(&self, name: &GraphName) -> Result<bool> {
        let path = self.file_path(name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(Error::Storage(format!("file cannot be deleted {:?}: {}", path, err))),
        }
    }

    fn exists(&self, name: &GraphName) -> Result<bool> {
        Ok(self.file_path(name)?.is_file())
    }
}
