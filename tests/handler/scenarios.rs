use std::sync::{Arc, Barrier};
use std::thread;

use rust_decimal::Decimal;

use item_repository::{InMemoryRepository, Item, ItemHandler, Outcome, RecordHandler, ITEM_LABEL};

use crate::support::widget;

fn handler() -> ItemHandler {
    RecordHandler::new(Arc::new(InMemoryRepository::new(ITEM_LABEL)))
}

#[test]
fn create_assigns_first_id_and_reads_back() {
    let handler = handler();

    let created = match handler.create(widget()) {
        Outcome::Success(item) => item,
        other => panic!("expected success, got {:?}", other),
    };

    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Widget");
    assert_eq!(created.price, Decimal::new(999, 2));
    assert_eq!(created.stock, 5);
    assert_eq!(handler.get(1), Outcome::Success(created));
}

#[test]
fn concurrent_creates_through_handlers() {
    let handler = handler();
    let barrier = Arc::new(Barrier::new(2));

    let handles: Vec<_> = ["A", "B"]
        .into_iter()
        .map(|name| {
            let handler = handler.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut item = widget();
                item.name = name.into();
                barrier.wait();
                handler.create(item).success().unwrap().id
            })
        })
        .collect();

    let mut ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn update_on_empty_store_is_not_found() {
    let handler = handler();
    let item = Item::new("X", Decimal::ONE, 0).with_id(2);

    assert_eq!(handler.update(2, item), Outcome::NotFound);
    assert!(handler.repo().is_empty().unwrap());
}

#[test]
fn route_and_body_id_mismatch_leaves_store_untouched() {
    let handler = handler();
    let created = handler.create(widget()).success().unwrap();

    let body = Item::new("X", Decimal::ONE, 0).with_id(2);
    assert!(matches!(handler.update(1, body), Outcome::BadRequest(_)));

    assert_eq!(handler.get(1), Outcome::Success(created));
}

#[test]
fn delete_then_get_then_delete_again() {
    let handler = handler();
    handler.create(widget());

    assert_eq!(handler.delete(1), Outcome::Success(()));
    assert_eq!(handler.get(1), Outcome::NotFound);
    assert_eq!(handler.delete(1), Outcome::NotFound);
}

#[test]
fn empty_name_fails_validation_without_consuming_an_id() {
    let handler = handler();
    let mut item = widget();
    item.name = String::new();

    match handler.create(item) {
        Outcome::ValidationFailed(errors) => {
            assert_eq!(errors.field("name").unwrap(), ["Name is required."]);
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
    assert!(handler.repo().is_empty().unwrap());
    assert_eq!(handler.create(widget()).success().unwrap().id, 1);
}

#[test]
fn update_replaces_rather_than_merges() {
    let handler = handler();
    let original = widget().with_description("first edition");
    handler.create(original);

    let replacement = Item::new("Widget II", Decimal::new(1250, 2), 0).with_id(1);
    assert_eq!(handler.update(1, replacement.clone()), Outcome::Success(()));

    let stored = handler.get(1).success().unwrap();
    assert_eq!(stored, replacement);
    assert_eq!(stored.description, None);
}

#[test]
fn deleted_ids_are_not_reused() {
    let handler = handler();
    handler.create(widget());
    handler.create(widget());
    handler.delete(2);

    assert_eq!(handler.create(widget()).success().unwrap().id, 3);
    let mut ids: Vec<u64> = handler.list().success().unwrap().iter().map(|i| i.id).collect();
    ids.sort();
    assert_eq!(ids, vec![1, 3]);
}
