//! Integration tests for the full session pipeline.
//!
//! Tests: draft → session → snapshot store → reopened session
//!
//! Verifies:
//! - Every mutation re-persists the full sequence
//! - A reopened session reproduces the saved inventory by value
//! - Failed operations leave both memory and the stored snapshot unchanged

use kirana_core::ProductId;
use kirana_engine::Direction;
use kirana_inventory::ProductDraft;

use crate::session::InventorySession;
use crate::snapshot::{FileSnapshotStore, InMemorySnapshotStore, SnapshotStore, SNAPSHOT_KEY};

fn seed(session: &mut InventorySession<impl SnapshotStore>) -> Vec<ProductId> {
    [
        ProductDraft::new("Rice", 50.0, 10, 5),
        ProductDraft::new("Oil", 100.0, 2, 5),
        ProductDraft::new("Sugar", 40.0, 8, 3),
    ]
    .into_iter()
    .map(|draft| session.add(draft).unwrap().id())
    .collect()
}

#[test]
fn a_reopened_session_sees_the_same_inventory() {
    let mut store = InMemorySnapshotStore::new();
    let saved = {
        let mut session = InventorySession::open(&mut store);
        seed(&mut session);
        session.products().to_vec()
    };

    let reopened = InventorySession::open(&mut store);
    assert_eq!(reopened.products(), saved.as_slice());
}

#[test]
fn round_trip_survives_every_kind_of_mutation() {
    let mut store = InMemorySnapshotStore::new();
    let saved = {
        let mut session = InventorySession::open(&mut store);
        let ids = seed(&mut session);

        session
            .update(ids[0], ProductDraft::new("Basmati Rice", 85.0, 12, 4))
            .unwrap();
        session.receive_stock(ids[1], 20).unwrap();
        session.deplete_stock(ids[2], 5).unwrap();
        session.delete(ids[1]).unwrap();

        session.products().to_vec()
    };

    let reopened = InventorySession::open(&mut store);
    assert_eq!(reopened.products(), saved.as_slice());
    assert_eq!(reopened.products().len(), 2);
}

#[test]
fn ids_assigned_after_reopen_do_not_collide_with_persisted_ones() {
    let mut store = InMemorySnapshotStore::new();
    let persisted: Vec<ProductId> = {
        let mut session = InventorySession::open(&mut store);
        seed(&mut session)
    };

    let mut session = InventorySession::open(&mut store);
    let fresh = session.add(ProductDraft::new("Salt", 20.0, 30, 5)).unwrap();

    assert!(persisted.iter().all(|&id| fresh.id() > id));
}

#[test]
fn failed_operations_do_not_rewrite_the_snapshot() {
    let mut store = InMemorySnapshotStore::new();
    let mut session = InventorySession::open(&mut store);
    let ids = seed(&mut session);

    let before = session.products().to_vec();
    let blob_before = crate::snapshot::codec::encode(&before).unwrap();

    assert!(session.deplete_stock(ids[0], 10_000).is_err());
    assert!(session.receive_stock(ids[0], 0).is_err());
    assert!(session
        .update(ids[0], ProductDraft::new("", 1.0, 1, 1))
        .is_err());
    assert!(session
        .update(ProductId::from_raw(999), ProductDraft::new("Ghost", 1.0, 1, 1))
        .is_err());

    assert_eq!(session.products(), before.as_slice());
    drop(session);
    assert_eq!(store.get(SNAPSHOT_KEY).unwrap().as_deref(), Some(blob_before.as_str()));
}

#[test]
fn preview_is_side_effect_free_across_the_stack() {
    let mut store = InMemorySnapshotStore::new();
    let mut session = InventorySession::open(&mut store);
    let ids = seed(&mut session);

    let before = session.products().to_vec();
    for quantity in [-1, 0, 3, 10_000] {
        session.preview(ids[0], quantity, Direction::Receive).unwrap();
        session.preview(ids[0], quantity, Direction::Deplete).unwrap();
    }
    assert_eq!(session.products(), before.as_slice());
}

#[test]
fn file_backed_session_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("kirana");

    let saved = {
        let mut session = InventorySession::open(FileSnapshotStore::new(&root));
        seed(&mut session);
        session.products().to_vec()
    };

    let reopened = InventorySession::open(FileSnapshotStore::new(&root));
    assert_eq!(reopened.products(), saved.as_slice());
}

#[test]
fn file_backed_session_recovers_from_a_corrupt_document() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("kirana");

    {
        let mut session = InventorySession::open(FileSnapshotStore::new(&root));
        seed(&mut session);
    }

    std::fs::write(root.join("inventory.json"), "corrupted ]] blob").unwrap();

    let mut session = InventorySession::open(FileSnapshotStore::new(&root));
    assert!(session.products().is_empty());

    // The session is fully usable after recovery.
    session.add(ProductDraft::new("Rice", 50.0, 10, 5)).unwrap();
    assert_eq!(session.products().len(), 1);
}
