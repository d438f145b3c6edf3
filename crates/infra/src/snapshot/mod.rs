//! Snapshot persistence: a key-value store of serialized inventory blobs.

pub mod codec;
pub mod file;
pub mod in_memory;
mod store;

pub use file::FileSnapshotStore;
pub use in_memory::InMemorySnapshotStore;
pub use store::{SnapshotError, SnapshotStore, SNAPSHOT_KEY};
