use serde::Serialize;

use kirana_inventory::Product;

/// Number of bars the dashboard chart renders at most.
pub const MAX_CHART_BARS: usize = 15;

/// Derived dashboard statistics over the current inventory snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryStats {
    pub total_products: usize,
    /// Σ price × stock over all products.
    pub total_value: f64,
    /// Products at or below their reorder threshold, in stored order.
    pub low_stock_items: Vec<Product>,
}

/// One bar of the dashboard stock chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockBar {
    pub name: String,
    pub stock: i64,
    /// Low-stock bars render in the alert color.
    pub low: bool,
}

/// Compute dashboard statistics. Pure, no side effects.
pub fn compute_stats(products: &[Product]) -> InventoryStats {
    InventoryStats {
        total_products: products.len(),
        total_value: products.iter().map(Product::value).sum(),
        low_stock_items: products
            .iter()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect(),
    }
}

/// Bar-chart view-model: the first `max_bars` products in stored order.
pub fn chart_series(products: &[Product], max_bars: usize) -> Vec<StockBar> {
    products
        .iter()
        .take(max_bars)
        .map(|p| StockBar {
            name: p.name().to_string(),
            stock: p.stock(),
            low: p.is_low_stock(),
        })
        .collect()
}
