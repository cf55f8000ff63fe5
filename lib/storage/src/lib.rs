pub mod storage;
pub mod memory;
pub mod json_file;
pub mod lmdb_storage;
pub mod manager;

pub use storage::{open_storage, GraphStorage, StorageBackend};
pub use memory::MemoryStorage;
pub use json_file::JsonFileStorage;
pub use lmdb_storage::LmdbStorage;
pub use manager::GraphManager;
