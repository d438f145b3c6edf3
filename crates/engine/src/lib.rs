//! Transaction engine: stock movements and derived statistics.
//!
//! This crate contains the validation and arithmetic for stock-in/stock-out
//! transactions plus the read-only dashboard computations, implemented purely
//! as deterministic domain logic (no IO, no rendering, no storage).

pub mod stats;
pub mod transaction;

pub use stats::{chart_series, compute_stats, InventoryStats, StockBar, MAX_CHART_BARS};
pub use transaction::{deplete, preview, receive, Direction, TransactionPreview};
