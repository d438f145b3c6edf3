//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product.
///
/// Assigned from the wall clock (milliseconds since the epoch) at creation
/// time and treated as an opaque integer afterwards. Immutable once assigned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::validation(format!("ProductId: {e}")))?;
        Ok(Self(raw))
    }
}

/// Issues fresh product identifiers.
///
/// Ids are derived from the current time in milliseconds. The generator
/// remembers the last id it issued and bumps past it whenever the clock has
/// not advanced, so rapid successive creates still get distinct ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never issue an id at or below `id` again.
    ///
    /// Called when resuming from a snapshot so fresh ids cannot collide with
    /// persisted ones.
    pub fn seed_past(&mut self, id: ProductId) {
        self.last = self.last.max(id.as_i64());
    }

    pub fn next(&mut self) -> ProductId {
        let now = Utc::now().timestamp_millis();
        self.last = if now > self.last { now } else { self.last + 1 };
        ProductId(self.last)
    }
}
