//! Interactive console menu
//!
//! Owns all prompting, numeric-input retry loops and table rendering; every
//! inventory operation is delegated to the store. Generic over the input and
//! output streams so the whole loop runs against scripted input in tests.

use crate::error::Result;
use crate::formatters;
use crate::models::{Item, SortKey};
use crate::store::{InventoryStore, ItemUpdate, LOW_STOCK_THRESHOLD};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;

const MENU_TEXT: &str = "
+----------------------------------------------+
|          Inventory Management System         |
+----+-----------------------------------------+
| No | Menu                                    |
+----+-----------------------------------------+
| 1  | Add item                                |
| 2  | Show inventory                          |
| 3  | Edit item                               |
| 4  | Delete item                             |
| 5  | Check low stock                         |
| 6  | Exit                                    |
| 7  | Search items                            |
| 8  | Export to CSV                           |
| 9  | Sort inventory (price/quantity)         |
| 10 | Print valuation receipt                 |
+----+-----------------------------------------+
";

/// Run the menu loop until the operator exits or input reaches EOF.
pub fn run<R: BufRead, W: Write>(
    store: &mut InventoryStore,
    export_path: &Path,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(output, "{}", MENU_TEXT)?;
        let choice = match prompt_line(input, output, "Enter your choice (1-10): ")? {
            Some(choice) => choice,
            None => break,
        };

        match choice.trim() {
            "1" => add_item(store, input, output)?,
            "2" => {
                let view = store.list_items(None);
                write!(output, "\n{}", formatters::format_inventory_table(&view))?;
            }
            "3" => edit_item(store, input, output)?,
            "4" => delete_item(store, input, output)?,
            "5" => {
                let low = store.low_stock(LOW_STOCK_THRESHOLD);
                write!(
                    output,
                    "\n{}",
                    formatters::format_low_stock(&low, LOW_STOCK_THRESHOLD)
                )?;
            }
            "6" => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            "7" => search_items(store, input, output)?,
            "8" => {
                report(output, store.export_csv(export_path).map(|()| {
                    format!("Inventory exported to '{}'", export_path.display())
                }))?;
            }
            "9" => sorted_listing(store, input, output)?,
            "10" => {
                write!(output, "\n{}", formatters::format_receipt(&store.receipt()))?;
            }
            _ => {
                writeln!(output, "Invalid choice. Enter a number between 1 and 10.")?;
            }
        }
    }
    Ok(())
}

fn add_item<R: BufRead, W: Write>(
    store: &mut InventoryStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let id = match prompt_line(input, output, "Enter item ID: ")? {
        Some(id) => id,
        None => return Ok(()),
    };
    let name = match prompt_line(input, output, "Enter item name: ")? {
        Some(name) => name,
        None => return Ok(()),
    };
    let quantity: u32 = match prompt_number(input, output, "Enter quantity: ")? {
        Some(quantity) => quantity,
        None => return Ok(()),
    };
    let price: f64 = match prompt_number(input, output, "Enter price: ")? {
        Some(price) => price,
        None => return Ok(()),
    };

    report(
        output,
        store
            .add_item(Item::new(id, name, quantity, price))
            .map(|()| "Item added successfully.".to_string()),
    )
}

fn edit_item<R: BufRead, W: Write>(
    store: &mut InventoryStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let id = match prompt_line(input, output, "Enter the ID of the item to edit: ")? {
        Some(id) => id,
        None => return Ok(()),
    };
    let name = prompt_line(input, output, "Enter new name (blank to keep): ")?;
    let quantity = prompt_line(input, output, "Enter new quantity (blank to keep): ")?;
    let price = prompt_line(input, output, "Enter new price (blank to keep): ")?;

    let update = ItemUpdate {
        name,
        quantity,
        price,
    };
    report(
        output,
        store
            .edit_item(id.trim(), update)
            .map(|()| "Item updated successfully.".to_string()),
    )
}

fn delete_item<R: BufRead, W: Write>(
    store: &mut InventoryStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let id = match prompt_line(input, output, "Enter the ID of the item to delete: ")? {
        Some(id) => id,
        None => return Ok(()),
    };
    report(
        output,
        store
            .delete_item(id.trim())
            .map(|removed| format!("Item '{}' deleted successfully.", removed.name)),
    )
}

fn search_items<R: BufRead, W: Write>(
    store: &InventoryStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let keyword = match prompt_line(input, output, "Enter an ID or name to search for: ")? {
        Some(keyword) => keyword,
        None => return Ok(()),
    };
    let hits = store.search(keyword.trim());
    write!(output, "\n{}", formatters::format_search_results(&hits))
}

fn sorted_listing<R: BufRead, W: Write>(
    store: &InventoryStore,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let choice = match prompt_line(input, output, "Sort by (price/quantity): ")? {
        Some(choice) => choice,
        None => return Ok(()),
    };
    match SortKey::parse(&choice) {
        Some(sort_key) => {
            let view = store.list_items(Some(sort_key));
            write!(output, "\n{}", formatters::format_inventory_table(&view))
        }
        None => writeln!(output, "Invalid sort choice."),
    }
}

/// Print the success message or the error from a store operation. Recoverable
/// errors (bad input, missing id) only warn; I/O failures are logged as
/// errors but the menu keeps running.
fn report<W: Write>(output: &mut W, result: Result<String>) -> io::Result<()> {
    match result {
        Ok(message) => writeln!(output, "{}", message),
        Err(err) => {
            if err.is_recoverable() {
                log::warn!("{}", err);
            } else {
                log::error!("{}", err);
            }
            writeln!(output, "{}", err)
        }
    }
}

/// Prompt and read one line. Returns `None` at EOF.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompt until the line parses as the requested number type. Returns `None`
/// at EOF.
fn prompt_number<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<T>> {
    loop {
        let line = match prompt_line(input, output, prompt)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => {
                writeln!(output, "Invalid input. Must be a number.")?;
            }
        }
    }
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
