//! Infrastructure layer: snapshot persistence and the per-session service.

pub mod session;
pub mod snapshot;

pub use session::{InventorySession, SessionError};
pub use snapshot::{
    FileSnapshotStore, InMemorySnapshotStore, SnapshotError, SnapshotStore, SNAPSHOT_KEY,
};

#[cfg(test)]
mod integration_tests;
