//! CSV backup export.
//!
//! Renders the product sequence as the comma-separated backup document the
//! dashboard offers for download, and writes date-stamped backup files.

pub mod csv;

pub use csv::{backup_filename, render_csv, write_backup, ExportError, CSV_HEADER};
