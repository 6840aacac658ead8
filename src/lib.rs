//! Inventaris - Inventory Management CLI
//!
//! Tracks stock-keeping records in a local JSON file. Supports add, edit,
//! delete, keyword search, sorted listing, low-stock reporting, CSV export
//! and a valuation receipt, driven by a text menu.

pub mod error;
pub mod formatters;
pub mod menu;
pub mod models;
pub mod store;

pub use error::{InventoryError, Result};
pub use models::{Item, Receipt, ReceiptLine, SortKey};
pub use store::{InventoryStore, ItemUpdate, LOW_STOCK_THRESHOLD};
