//! Key-value byte stores that hold persisted boards.

mod disk;
mod error;
mod memory;
mod store;

pub use disk::DiskStore;
pub use error::StorageError;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
