//! Error types for inventaris

use std::fmt;

/// Unified error type for inventory operations
#[derive(Debug)]
pub enum InventoryError {
    /// Persisted data file exists but is not valid JSON matching the item shape
    Parse(serde_json::Error),
    /// File I/O failed during load, persist or export
    Io(std::io::Error),
    /// CSV export failed
    Csv(csv::Error),
    /// Quantity text did not parse as a non-negative integer
    InvalidQuantity(String),
    /// Price text did not parse as a number
    InvalidPrice(String),
    /// No item with the given id exists
    NotFound(String),
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::Parse(e) => write!(f, "Parse error: {}", e),
            InventoryError::Io(e) => write!(f, "I/O error: {}", e),
            InventoryError::Csv(e) => write!(f, "CSV error: {}", e),
            InventoryError::InvalidQuantity(text) => {
                write!(f, "Invalid quantity: {}", text)
            }
            InventoryError::InvalidPrice(text) => {
                write!(f, "Invalid price: {}", text)
            }
            InventoryError::NotFound(id) => write!(f, "Item id not found: {}", id),
        }
    }
}

impl std::error::Error for InventoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InventoryError::Parse(e) => Some(e),
            InventoryError::Io(e) => Some(e),
            InventoryError::Csv(e) => Some(e),
            InventoryError::InvalidQuantity(_) => None,
            InventoryError::InvalidPrice(_) => None,
            InventoryError::NotFound(_) => None,
        }
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::Parse(err)
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InventoryError::Io(err)
    }
}

impl From<csv::Error> for InventoryError {
    fn from(err: csv::Error) -> Self {
        InventoryError::Csv(err)
    }
}

impl InventoryError {
    /// Returns true for errors the menu loop recovers from with a message
    /// (bad user input, missing id) as opposed to I/O and parse failures.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            InventoryError::InvalidQuantity(_)
                | InventoryError::InvalidPrice(_)
                | InventoryError::NotFound(_)
        )
    }
}

/// Result alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
