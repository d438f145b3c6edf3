use thiserror::Error;

/// Fixed key under which the product sequence is persisted.
pub const SNAPSHOT_KEY: &str = "inventory";

/// Snapshot store operation error.
///
/// These are **infrastructure errors** (IO, encoding) as opposed to domain
/// errors (validation, invariants).
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding failed: {0}")]
    Encode(String),

    #[error("snapshot decoding failed: {0}")]
    Decode(String),
}

/// Key-value store of serialized snapshots.
///
/// String keys, string blobs, whole value overwritten on every save. `get`
/// on an absent key is `Ok(None)`, never an error; `remove` of an absent key
/// is a no-op. No versioning, no migration.
pub trait SnapshotStore {
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError>;

    fn put(&mut self, key: &str, value: &str) -> Result<(), SnapshotError>;

    fn remove(&mut self, key: &str) -> Result<(), SnapshotError>;
}

impl<S> SnapshotStore for &mut S
where
    S: SnapshotStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), SnapshotError> {
        (**self).put(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), SnapshotError> {
        (**self).remove(key)
    }
}

impl<S> SnapshotStore for Box<S>
where
    S: SnapshotStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), SnapshotError> {
        (**self).put(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), SnapshotError> {
        (**self).remove(key)
    }
}
