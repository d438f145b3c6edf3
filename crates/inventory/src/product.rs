use serde::{Deserialize, Serialize};

use kirana_core::{DomainError, DomainResult, ProductId};

/// A tracked product: catalog fields plus current stock.
///
/// The serialized field set (`id`, `name`, `price`, `stock`, `limit`) is the
/// snapshot wire format; renaming a field is a breaking change for persisted
/// data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    stock: i64,
    limit: i64,
}

impl Product {
    /// Build a product from a validated draft.
    ///
    /// Callers must run [`ProductDraft::validate`] first; this constructor
    /// only normalizes (trims the name), it does not re-validate.
    pub fn new(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            price: draft.price,
            stock: draft.stock,
            limit: draft.limit,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price in currency units.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Current on-hand quantity.
    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Reorder threshold.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// A product at or below its reorder threshold needs restocking.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.limit
    }

    /// Value of the on-hand quantity at the unit price.
    pub fn value(&self) -> f64 {
        self.price * self.stock as f64
    }

    /// Set the on-hand quantity directly. Rejects negative values.
    pub fn set_stock(&mut self, stock: i64) -> DomainResult<()> {
        if stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }
        self.stock = stock;
        Ok(())
    }

    /// Full overwrite of every field except the id (not a partial merge).
    ///
    /// Same contract as [`Product::new`]: the draft must already be valid.
    pub fn apply_draft(&mut self, draft: ProductDraft) {
        self.name = draft.name.trim().to_string();
        self.price = draft.price;
        self.stock = draft.stock;
        self.limit = draft.limit;
    }
}

/// The user-supplied field set for creating or updating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub limit: i64,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: f64, stock: i64, limit: i64) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
            limit,
        }
    }

    /// Check every field against the domain rules.
    ///
    /// Create and edit accept any non-negative stock directly; the
    /// non-negativity rules for transactions live in the engine.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::validation(
                "price must be a non-negative number",
            ));
        }
        if self.stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }
        if self.limit < 0 {
            return Err(DomainError::validation(
                "low stock limit cannot be negative",
            ));
        }
        Ok(())
    }
}
