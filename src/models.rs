use serde::{Deserialize, Serialize};

/// One inventory record, serialized with the legacy data-file keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "item_id")]
    pub id: String,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "jumlah")]
    pub quantity: u32,
    #[serde(rename = "harga")]
    pub price: f64,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Stock value of this record: quantity times unit price
    pub fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    /// Case-insensitive substring match against id or name
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.id.to_lowercase().contains(&keyword) || self.name.to_lowercase().contains(&keyword)
    }
}

/// Sort order for inventory listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Quantity,
}

impl SortKey {
    /// Parse a user-supplied sort choice (e.g. "price", "quantity")
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "price" | "harga" => Some(SortKey::Price),
            "quantity" | "stock" | "stok" => Some(SortKey::Quantity),
            _ => None,
        }
    }
}

/// One line of the valuation receipt
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: u32,
    pub subtotal: f64,
}

/// Valuation of the whole collection: per-item subtotals plus the grand total
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub total: f64,
}
