//! Plain-text rendering of inventory views for the console menu

use crate::models::{Item, Receipt};

/// Render items as an aligned table with ID, name, quantity and price
/// columns. Returns an explicit message for an empty collection so the menu
/// never prints a bare header with no rows.
pub fn format_inventory_table(items: &[&Item]) -> String {
    if items.is_empty() {
        return "Inventory is empty.\n".to_string();
    }

    let mut max_id_len = 2; // Minimum width for "ID"
    let mut max_name_len = 4;
    let mut max_qty_len = 8;
    let mut max_price_len = 5;

    // Calculate maximum lengths for alignment
    for item in items {
        max_id_len = max_id_len.max(item.id.len());
        max_name_len = max_name_len.max(item.name.len());
        max_qty_len = max_qty_len.max(item.quantity.to_string().len());
        max_price_len = max_price_len.max(format!("{:.2}", item.price).len());
    }

    let header = format!(
        "{:<width_id$} | {:<width_name$} | {:>width_qty$} | {:>width_price$}\n",
        "ID",
        "Name",
        "Quantity",
        "Price",
        width_id = max_id_len,
        width_name = max_name_len,
        width_qty = max_qty_len,
        width_price = max_price_len,
    );
    let separator = format!(
        "{:-<width_id$}-+-{:-<width_name$}-+-{:-<width_qty$}-+-{:-<width_price$}\n",
        "",
        "",
        "",
        "",
        width_id = max_id_len,
        width_name = max_name_len,
        width_qty = max_qty_len,
        width_price = max_price_len,
    );

    let mut output = String::new();
    output.push_str(&header);
    output.push_str(&separator);
    for item in items {
        output.push_str(&format!(
            "{:<width_id$} | {:<width_name$} | {:>width_qty$} | {:>width_price$}\n",
            item.id,
            item.name,
            item.quantity,
            format!("{:.2}", item.price),
            width_id = max_id_len,
            width_name = max_name_len,
            width_qty = max_qty_len,
            width_price = max_price_len,
        ));
    }
    output
}

/// Render the low-stock report, one line per item below the threshold
pub fn format_low_stock(items: &[&Item], threshold: u32) -> String {
    let mut output = format!("Items with low stock (quantity < {}):\n", threshold);
    if items.is_empty() {
        output.push_str("All items have sufficient stock.\n");
    } else {
        for item in items {
            output.push_str(&format!(
                "ID: {}, Name: {}, Quantity: {}\n",
                item.id, item.name, item.quantity
            ));
        }
    }
    output
}

/// Render keyword search results as a table, or a not-found message
pub fn format_search_results(items: &[&Item]) -> String {
    if items.is_empty() {
        return "No items found.\n".to_string();
    }
    let mut output = "Search results:\n".to_string();
    output.push_str(&format_inventory_table(items));
    output
}

/// Render the valuation receipt: per-item subtotals and the grand total
pub fn format_receipt(receipt: &Receipt) -> String {
    let mut output = "===== Inventory Valuation Receipt =====\n".to_string();
    for line in &receipt.lines {
        output.push_str(&format!(
            "{} (x{}) - {:.2}\n",
            line.name, line.quantity, line.subtotal
        ));
    }
    output.push_str(&format!("Total inventory value: {:.2}\n", receipt.total));
    output.push_str("=======================================\n");
    output
}
