use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use kirana_inventory::Product;

/// Header row of the backup document.
pub const CSV_HEADER: &str = "Product Name,Price (INR),Current Stock,Low Stock Limit";

const BACKUP_PREFIX: &str = "KiranaStock";

#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export; the dashboard refuses an empty backup.
    #[error("no products to export")]
    Empty,

    #[error("backup write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the full product sequence as a CSV document, one row per product
/// in stored order.
///
/// The name field is always double-quoted with embedded quotes doubled;
/// numeric fields are rendered bare.
pub fn render_csv(products: &[Product]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for product in products {
        let name = product.name().replace('"', "\"\"");
        out.push_str(&format!(
            "\"{}\",{},{},{}\n",
            name,
            product.price(),
            product.stock(),
            product.limit()
        ));
    }
    out
}

/// Name of a backup file stamped with `date`.
pub fn backup_filename(date: NaiveDate) -> String {
    format!("{BACKUP_PREFIX}_{}.csv", date.format("%Y-%m-%d"))
}

/// Write a date-stamped backup document into `dir`, returning its path.
///
/// Refuses an empty inventory with [`ExportError::Empty`].
pub fn write_backup(
    dir: &Path,
    date: NaiveDate,
    products: &[Product],
) -> Result<PathBuf, ExportError> {
    if products.is_empty() {
        return Err(ExportError::Empty);
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(backup_filename(date));
    fs::write(&path, render_csv(products))?;
    tracing::debug!(path = %path.display(), products = products.len(), "backup written");
    Ok(path)
}
