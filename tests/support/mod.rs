//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use rust_decimal::Decimal;
use item_repository::Item;

/// `Widget`, 9.99, 5 in stock.
pub fn widget() -> Item {
    Item::new("Widget", Decimal::new(999, 2), 5)
}

/// An item whose every field is derived from `n`, so a record that mixes
/// fields from two writers is detectable.
pub fn stamped(n: i32) -> Item {
    Item::new(format!("writer-{}", n), Decimal::new(i64::from(n) + 1, 0), n)
        .with_description(format!("written by {}", n))
}

/// True if every field of `item` came from the same `stamped` call.
pub fn is_consistent(item: &Item) -> bool {
    let n = item.stock;
    item.name == format!("writer-{}", n)
        && item.price == Decimal::new(i64::from(n) + 1, 0)
        && item.description.as_deref() == Some(format!("written by {}", n).as_str())
}
