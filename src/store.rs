//! JSON-backed inventory store
//!
//! Holds the item collection in memory (insertion order = file order) and
//! rewrites the whole data file after every successful mutation.

use crate::error::{InventoryError, Result};
use crate::models::{Item, Receipt, ReceiptLine, SortKey};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Items with quantity strictly below this count as low stock
pub const LOW_STOCK_THRESHOLD: u32 = 50;

/// Optional new values for an edit; `None` or empty text leaves a field alone.
/// Quantity and price arrive as raw text and are validated before anything
/// is assigned.
#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
}

/// In-memory item collection synchronized to a JSON file on every mutation
#[derive(Debug)]
pub struct InventoryStore {
    items: Vec<Item>,
    data_path: PathBuf,
}

impl InventoryStore {
    /// Open a store backed by the given data file. A missing file starts the
    /// collection empty; an existing file must parse as an array of items.
    pub fn open(data_path: impl Into<PathBuf>) -> Result<Self> {
        let data_path = data_path.into();
        let items = if data_path.exists() {
            let content = std::fs::read_to_string(&data_path)?;
            let items: Vec<Item> = serde_json::from_str(&content)?;
            log::info!(
                "Loaded {} items from {}",
                items.len(),
                data_path.display()
            );
            items
        } else {
            log::info!(
                "Data file {} does not exist, starting with empty inventory",
                data_path.display()
            );
            Vec::new()
        };
        Ok(Self { items, data_path })
    }

    /// Write the whole collection to the data file as a pretty-printed JSON
    /// array. The legacy files on disk use 4-space indentation, which
    /// `to_string_pretty` does not produce.
    pub fn persist(&self) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.items.serialize(&mut ser)?;
        std::fs::write(&self.data_path, buf)?;
        log::debug!(
            "Persisted {} items to {}",
            self.items.len(),
            self.data_path.display()
        );
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item and persist. Ids are not checked for uniqueness; the
    /// caller owns id hygiene, lookups act on the first match.
    pub fn add_item(&mut self, item: Item) -> Result<()> {
        self.items.push(item);
        self.persist()
    }

    /// A view of the collection, optionally sorted ascending by price or
    /// quantity. The sort is stable and never reorders the collection itself.
    pub fn list_items(&self, sort_key: Option<SortKey>) -> Vec<&Item> {
        let mut view: Vec<&Item> = self.items.iter().collect();
        match sort_key {
            Some(SortKey::Price) => view.sort_by(|a, b| a.price.total_cmp(&b.price)),
            Some(SortKey::Quantity) => view.sort_by_key(|item| item.quantity),
            None => {}
        }
        view
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Apply an update to the first item whose id matches exactly.
    ///
    /// Both numeric texts are validated before any field is assigned, so a
    /// bad quantity or price aborts the whole edit - including the name
    /// change - and the file is not rewritten. Name is assigned last.
    pub fn edit_item(&mut self, id: &str, update: ItemUpdate) -> Result<()> {
        let index = self
            .position(id)
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))?;

        let new_quantity = match non_empty(update.quantity.as_deref()) {
            Some(text) => Some(
                text.parse::<u32>()
                    .map_err(|_| InventoryError::InvalidQuantity(text.to_string()))?,
            ),
            None => None,
        };
        let new_price = match non_empty(update.price.as_deref()) {
            Some(text) => Some(
                text.parse::<f64>()
                    .map_err(|_| InventoryError::InvalidPrice(text.to_string()))?,
            ),
            None => None,
        };

        let item = &mut self.items[index];
        if let Some(quantity) = new_quantity {
            item.quantity = quantity;
        }
        if let Some(price) = new_price {
            item.price = price;
        }
        if let Some(name) = non_empty(update.name.as_deref()) {
            item.name = name.to_string();
        }

        self.persist()
    }

    /// Remove the first item whose id matches exactly, then persist.
    pub fn delete_item(&mut self, id: &str) -> Result<Item> {
        let index = self
            .position(id)
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))?;
        let removed = self.items.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Items with quantity strictly below the threshold, in collection order
    pub fn low_stock(&self, threshold: u32) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.quantity < threshold)
            .collect()
    }

    /// Case-insensitive substring search over item id and name
    pub fn search(&self, keyword: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.matches_keyword(keyword))
            .collect()
    }

    /// Export the collection as CSV: header `ID,Nama,Jumlah,Harga`, one row
    /// per item in collection order.
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["ID", "Nama", "Jumlah", "Harga"])?;
        for item in &self.items {
            writer.write_record([
                item.id.as_str(),
                item.name.as_str(),
                &item.quantity.to_string(),
                &item.price.to_string(),
            ])?;
        }
        writer.flush()?;
        log::info!("Exported {} items to {}", self.items.len(), path.display());
        Ok(())
    }

    /// Valuation of the collection: one (name, quantity, subtotal) line per
    /// item plus the running total. Purely derived, nothing is persisted.
    pub fn receipt(&self) -> Receipt {
        let mut receipt = Receipt::default();
        for item in &self.items {
            let subtotal = item.subtotal();
            receipt.lines.push(ReceiptLine {
                name: item.name.clone(),
                quantity: item.quantity,
                subtotal,
            });
            receipt.total += subtotal;
        }
        receipt
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
