//! The per-session service owning the in-memory inventory and its snapshot.

use thiserror::Error;

use kirana_core::{DomainError, DomainResult, IdGenerator, ProductId};
use kirana_engine::{self as engine, Direction, InventoryStats, TransactionPreview};
use kirana_inventory::{Inventory, Product, ProductDraft};

use crate::snapshot::{codec, SnapshotError, SnapshotStore, SNAPSHOT_KEY};

/// Call-boundary error: domain rejection or persistence failure.
///
/// Everything here is recoverable; callers surface the message and retry or
/// move on with stored data unchanged.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Owns the inventory for the lifetime of one application session.
///
/// The only writer of the persisted snapshot. Every mutating operation
/// validates first, mutates in memory, then re-serializes the full sequence
/// to the store; no partial persistence, no observable intermediate state.
#[derive(Debug)]
pub struct InventorySession<S: SnapshotStore> {
    inventory: Inventory,
    ids: IdGenerator,
    snapshots: S,
}

impl<S: SnapshotStore> InventorySession<S> {
    /// Open a session against `snapshots`.
    ///
    /// Fails soft: an absent, unreadable, or malformed snapshot is treated as
    /// "no data" and the session starts empty. The id generator is seeded
    /// past the largest persisted id so fresh ids never collide.
    pub fn open(snapshots: S) -> Self {
        let inventory = load_inventory(&snapshots);
        let mut ids = IdGenerator::new();
        if let Some(max) = inventory.max_id() {
            ids.seed_past(max);
        }
        Self {
            inventory,
            ids,
            snapshots,
        }
    }

    /// Validate, assign a fresh id, append, persist.
    pub fn add(&mut self, draft: ProductDraft) -> Result<Product, SessionError> {
        draft.validate()?;
        let product = Product::new(self.ids.next(), draft);
        self.inventory.insert(product.clone())?;
        self.persist()?;
        tracing::debug!(id = %product.id(), name = product.name(), "product added");
        Ok(product)
    }

    /// Full overwrite of every field of the product with `id`.
    pub fn update(&mut self, id: ProductId, draft: ProductDraft) -> Result<Product, SessionError> {
        draft.validate()?;
        let product = self
            .inventory
            .get_mut(id)
            .ok_or(DomainError::NotFound)?;
        product.apply_draft(draft);
        let updated = product.clone();
        self.persist()?;
        tracing::debug!(id = %id, "product updated");
        Ok(updated)
    }

    /// Remove the product with `id` if present; absent ids are a no-op, not
    /// an error. Returns whether a product was removed.
    pub fn delete(&mut self, id: ProductId) -> Result<bool, SessionError> {
        let removed = self.inventory.remove(id);
        self.persist()?;
        if removed {
            tracing::debug!(id = %id, "product deleted");
        }
        Ok(removed)
    }

    pub fn find(&self, id: ProductId) -> DomainResult<&Product> {
        self.inventory.get(id).ok_or(DomainError::NotFound)
    }

    /// Read-only ordered view for rendering and export.
    pub fn products(&self) -> &[Product] {
        self.inventory.products()
    }

    /// Apply a stock-in movement. Returns the new stock level.
    pub fn receive_stock(&mut self, id: ProductId, quantity: i64) -> Result<i64, SessionError> {
        let product = self
            .inventory
            .get_mut(id)
            .ok_or(DomainError::NotFound)?;
        let new_stock = engine::receive(product, quantity)?;
        self.persist()?;
        tracing::debug!(id = %id, quantity, new_stock, "stock received");
        Ok(new_stock)
    }

    /// Apply a stock-out movement, all-or-nothing. Returns the new stock
    /// level.
    pub fn deplete_stock(&mut self, id: ProductId, quantity: i64) -> Result<i64, SessionError> {
        let product = self
            .inventory
            .get_mut(id)
            .ok_or(DomainError::NotFound)?;
        let new_stock = engine::deplete(product, quantity)?;
        self.persist()?;
        tracing::debug!(id = %id, quantity, new_stock, "stock depleted");
        Ok(new_stock)
    }

    /// Pure pre-validation of a movement: no mutation, no persistence.
    pub fn preview(
        &self,
        id: ProductId,
        quantity: i64,
        direction: Direction,
    ) -> DomainResult<TransactionPreview> {
        let product = self.find(id)?;
        Ok(engine::preview(product, quantity, direction))
    }

    /// Derived dashboard statistics over the current snapshot.
    pub fn stats(&self) -> InventoryStats {
        engine::compute_stats(self.inventory.products())
    }

    fn persist(&mut self) -> Result<(), SnapshotError> {
        let raw = codec::encode(self.inventory.products())?;
        self.snapshots.put(SNAPSHOT_KEY, &raw)?;
        Ok(())
    }
}

fn load_inventory<S: SnapshotStore>(snapshots: &S) -> Inventory {
    let raw = match snapshots.get(SNAPSHOT_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Inventory::new(),
        Err(error) => {
            tracing::warn!(%error, "snapshot unreadable, starting empty");
            return Inventory::new();
        }
    };

    let products = match codec::decode(&raw) {
        Ok(products) => products,
        Err(error) => {
            tracing::warn!(%error, "snapshot malformed, starting empty");
            return Inventory::new();
        }
    };

    match Inventory::from_products(products) {
        Ok(inventory) => inventory,
        Err(error) => {
            tracing::warn!(%error, "snapshot violates id uniqueness, starting empty");
            Inventory::new()
        }
    }
}
