use serde::{Deserialize, Serialize};

use kirana_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;

/// Ordered product sequence, insertion order preserved, ids unique.
///
/// Single source of truth for a session. The persisted snapshot is a full
/// copy of this sequence, not a diff or a log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an inventory from a decoded snapshot.
    ///
    /// Rejects duplicate ids so a corrupted snapshot cannot smuggle in a
    /// broken sequence.
    pub fn from_products(products: Vec<Product>) -> DomainResult<Self> {
        let mut inventory = Self::new();
        for product in products {
            inventory.insert(product)?;
        }
        Ok(inventory)
    }

    /// Append a product. Rejects an id already present in the sequence.
    pub fn insert(&mut self, product: Product) -> DomainResult<()> {
        if self.position(product.id()).is_some() {
            return Err(DomainError::validation(format!(
                "duplicate product id {}",
                product.id()
            )));
        }
        self.products.push(product);
        Ok(())
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.position(id).map(|idx| &self.products[idx])
    }

    pub fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.position(id).map(|idx| &mut self.products[idx])
    }

    /// Remove the product with `id` if present. Absent ids are a no-op.
    pub fn remove(&mut self, id: ProductId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.products.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Read-only ordered view for callers.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Largest id in the sequence, used to seed the id generator on load.
    pub fn max_id(&self) -> Option<ProductId> {
        self.products.iter().map(Product::id).max()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
