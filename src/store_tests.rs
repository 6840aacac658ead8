use super::*;
use tempfile::TempDir;

fn sample_items() -> Vec<Item> {
    vec![
        Item::new("A1", "Widget", 10, 5.0),
        Item::new("B2", "Gadget", 100, 2.5),
        Item::new("C3", "Sprocket", 49, 9.99),
    ]
}

fn store_with_items(dir: &TempDir, items: Vec<Item>) -> InventoryStore {
    let mut store = InventoryStore::open(dir.path().join("inventory_data.json")).unwrap();
    for item in items {
        store.add_item(item).unwrap();
    }
    store
}

#[test]
fn test_open_missing_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = InventoryStore::open(dir.path().join("inventory_data.json")).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_open_invalid_json_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory_data.json");
    std::fs::write(&path, "not json at all").unwrap();

    let result = InventoryStore::open(&path);
    assert!(matches!(result, Err(InventoryError::Parse(_))));
}

#[test]
fn test_open_wrong_shape_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory_data.json");
    // Valid JSON but missing required item fields
    std::fs::write(&path, r#"[{"item_id": "A1"}]"#).unwrap();

    let result = InventoryStore::open(&path);
    assert!(matches!(result, Err(InventoryError::Parse(_))));
}

#[test]
fn test_add_appends_last_and_preserves_order() {
    let dir = TempDir::new().unwrap();
    let mut store = store_with_items(&dir, sample_items());

    store.add_item(Item::new("D4", "Bolt", 3, 0.1)).unwrap();

    let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["A1", "B2", "C3", "D4"]);
}

#[test]
fn test_add_allows_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let mut store = store_with_items(&dir, sample_items());

    store.add_item(Item::new("A1", "Widget copy", 1, 1.0)).unwrap();
    assert_eq!(store.len(), 4);
    // Lookups act on the first match
    store.delete_item("A1").unwrap();
    assert_eq!(store.items()[0].id, "B2");
}

#[test]
fn test_list_items_sorted_by_price_is_non_destructive() {
    let dir = TempDir::new().unwrap();
    let store = store_with_items(&dir, sample_items());

    let by_price: Vec<&str> = store
        .list_items(Some(SortKey::Price))
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(by_price, vec!["B2", "A1", "C3"]);

    // Underlying collection keeps insertion order
    let unsorted: Vec<&str> = store
        .list_items(None)
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(unsorted, vec!["A1", "B2", "C3"]);
}

#[test]
fn test_list_items_sorted_by_quantity() {
    let dir = TempDir::new().unwrap();
    let store = store_with_items(&dir, sample_items());

    let by_quantity: Vec<&str> = store
        .list_items(Some(SortKey::Quantity))
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(by_quantity, vec!["A1", "C3", "B2"]);
}

#[test]
fn test_edit_updates_fields_and_persists() {
    let dir = TempDir::new().unwrap();
    let mut store = store_with_items(&dir, sample_items());

    store
        .edit_item(
            "A1",
            ItemUpdate {
                name: Some("Widget Mk2".to_string()),
                quantity: Some("20".to_string()),
                price: Some("6.5".to_string()),
            },
        )
        .unwrap();

    let item = &store.items()[0];
    assert_eq!(item.name, "Widget Mk2");
    assert_eq!(item.quantity, 20);
    assert_eq!(item.price, 6.5);

    // Survives a reload
    let reloaded = InventoryStore::open(dir.path().join("inventory_data.json")).unwrap();
    assert_eq!(reloaded.items()[0], *item);
}

#[test]
fn test_edit_empty_fields_leave_values_alone() {
    let dir = TempDir::new().unwrap();
    let mut store = store_with_items(&dir, sample_items());

    store
        .edit_item(
            "B2",
            ItemUpdate {
                name: Some("".to_string()),
                quantity: None,
                price: Some("  ".to_string()),
            },
        )
        .unwrap();

    let item = &store.items()[1];
    assert_eq!(item.name, "Gadget");
    assert_eq!(item.quantity, 100);
    assert_eq!(item.price, 2.5);
}

#[test]
fn test_edit_invalid_quantity_aborts_whole_edit() {
    let dir = TempDir::new().unwrap();
    let mut store = store_with_items(&dir, sample_items());
    let file = dir.path().join("inventory_data.json");
    let before = std::fs::read(&file).unwrap();

    let result = store.edit_item(
        "A1",
        ItemUpdate {
            name: Some("Widget2".to_string()),
            quantity: Some("abc".to_string()),
            price: Some("".to_string()),
        },
    );
    assert!(matches!(result, Err(InventoryError::InvalidQuantity(_))));

    // Nothing changed, not even the name computed before the bad quantity
    let item = &store.items()[0];
    assert_eq!(item.name, "Widget");
    assert_eq!(item.quantity, 10);
    assert_eq!(item.price, 5.0);
    assert_eq!(std::fs::read(&file).unwrap(), before);
}

#[test]
fn test_edit_invalid_price_aborts_whole_edit() {
    let dir = TempDir::new().unwrap();
    let mut store = store_with_items(&dir, sample_items());

    let result = store.edit_item(
        "A1",
        ItemUpdate {
            name: Some("Widget2".to_string()),
            quantity: Some("15".to_string()),
            price: Some("cheap".to_string()),
        },
    );
    assert!(matches!(result, Err(InventoryError::InvalidPrice(_))));

    let item = &store.items()[0];
    assert_eq!(item.name, "Widget");
    assert_eq!(item.quantity, 10);
    assert_eq!(item.price, 5.0);
}

#[test]
fn test_edit_rejects_negative_quantity() {
    let dir = TempDir::new().unwrap();
    let mut store = store_with_items(&dir, sample_items());

    let result = store.edit_item(
        "A1",
        ItemUpdate {
            quantity: Some("-3".to_string()),
            ..Default::default()
        },
    );
    assert!(matches!(result, Err(InventoryError::InvalidQuantity(_))));
}

#[test]
fn test_edit_unknown_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    let mut store = store_with_items(&dir, sample_items());

    let result = store.edit_item("ZZ", ItemUpdate::default());
    assert!(matches!(result, Err(InventoryError::NotFound(_))));
}

#[test]
fn test_delete_removes_and_persists() {
    let dir = TempDir::new().unwrap();
    let mut store = store_with_items(&dir, sample_items());

    let removed = store.delete_item("B2").unwrap();
    assert_eq!(removed.name, "Gadget");
    assert_eq!(store.len(), 2);

    let reloaded = InventoryStore::open(dir.path().join("inventory_data.json")).unwrap();
    assert_eq!(reloaded.len(), 2);
}

#[test]
fn test_delete_unknown_id_leaves_file_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut store = store_with_items(&dir, sample_items());
    let file = dir.path().join("inventory_data.json");
    let before = std::fs::read(&file).unwrap();

    let result = store.delete_item("ZZ");
    assert!(matches!(result, Err(InventoryError::NotFound(_))));
    assert_eq!(store.len(), 3);
    assert_eq!(std::fs::read(&file).unwrap(), before);
}

#[test]
fn test_low_stock_boundary() {
    let dir = TempDir::new().unwrap();
    let store = store_with_items(
        &dir,
        vec![
            Item::new("A", "At threshold", 50, 1.0),
            Item::new("B", "Below threshold", 49, 1.0),
        ],
    );

    let low: Vec<&str> = store
        .low_stock(LOW_STOCK_THRESHOLD)
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(low, vec!["B"]);
}

#[test]
fn test_low_stock_empty_result() {
    let dir = TempDir::new().unwrap();
    let store = store_with_items(&dir, vec![Item::new("A", "Plenty", 200, 1.0)]);
    assert!(store.low_stock(LOW_STOCK_THRESHOLD).is_empty());
}

#[test]
fn test_search_is_case_insensitive_on_id_and_name() {
    let dir = TempDir::new().unwrap();
    let store = store_with_items(
        &dir,
        vec![
            Item::new("WID-01", "Spare part", 5, 1.0),
            Item::new("X9", "Widget", 5, 1.0),
            Item::new("Y7", "Gadget", 5, 1.0),
        ],
    );

    let hits: Vec<&str> = store.search("wid").iter().map(|i| i.id.as_str()).collect();
    assert_eq!(hits, vec!["WID-01", "X9"]);
    assert!(store.search("bolt").is_empty());
}

#[test]
fn test_receipt_valuation() {
    let dir = TempDir::new().unwrap();
    let store = store_with_items(
        &dir,
        vec![
            Item::new("B1", "Bolt", 3, 2.5),
            Item::new("N1", "Nut", 10, 1.0),
        ],
    );

    let receipt = store.receipt();
    assert_eq!(receipt.lines.len(), 2);
    assert_eq!(receipt.lines[0].subtotal, 7.5);
    assert_eq!(receipt.lines[1].subtotal, 10.0);
    assert_eq!(receipt.total, 17.5);
}

#[test]
fn test_persist_uses_four_space_indent() {
    let dir = TempDir::new().unwrap();
    let store = store_with_items(&dir, vec![Item::new("A1", "Widget", 10, 5.0)]);
    store.persist().unwrap();

    let content = std::fs::read_to_string(dir.path().join("inventory_data.json")).unwrap();
    assert!(content.contains("    \"item_id\": \"A1\""));
}
