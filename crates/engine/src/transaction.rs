use serde::{Deserialize, Serialize};

use kirana_core::{DomainError, DomainResult};
use kirana_inventory::Product;

/// Direction of a stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Receive,
    Deplete,
}

/// Prospective outcome of a stock movement, computed without applying it.
///
/// Used by transaction forms to pre-validate before committing. The
/// prospective stock is reported even when negative so callers can surface
/// the shortfall.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionPreview {
    pub current_stock: i64,
    pub new_stock: i64,
    pub valid: bool,
}

fn ensure_quantity(quantity: i64) -> DomainResult<()> {
    if quantity <= 0 {
        return Err(DomainError::invalid_quantity(quantity));
    }
    Ok(())
}

/// Add received units to a product's stock. Returns the new stock level.
pub fn receive(product: &mut Product, quantity: i64) -> DomainResult<i64> {
    ensure_quantity(quantity)?;
    let new_stock = product.stock() + quantity;
    product.set_stock(new_stock)?;
    Ok(new_stock)
}

/// Remove units from a product's stock, all-or-nothing.
///
/// A quantity above the current stock fails with `InsufficientStock` and
/// leaves the product untouched; there is no partial fulfillment.
pub fn deplete(product: &mut Product, quantity: i64) -> DomainResult<i64> {
    ensure_quantity(quantity)?;
    if quantity > product.stock() {
        return Err(DomainError::insufficient_stock(quantity, product.stock()));
    }
    let new_stock = product.stock() - quantity;
    product.set_stock(new_stock)?;
    Ok(new_stock)
}

/// Compute the outcome a movement would have without applying it.
///
/// Mirrors [`receive`]/[`deplete`] exactly: a non-positive quantity or a
/// depletion below zero yields `valid = false`. Invalid quantities contribute
/// no delta to the prospective stock.
pub fn preview(product: &Product, quantity: i64, direction: Direction) -> TransactionPreview {
    let current = product.stock();
    let delta = if quantity > 0 { quantity } else { 0 };
    let new_stock = match direction {
        Direction::Receive => current + delta,
        Direction::Deplete => current - delta,
    };
    TransactionPreview {
        current_stock: current,
        new_stock,
        valid: quantity > 0 && new_stock >= 0,
    }
}
