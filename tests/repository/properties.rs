use std::collections::BTreeSet;

use proptest::prelude::*;

use item_repository::{InMemoryRepository, Item, Repository, ITEM_LABEL};

use crate::support::{stamped, widget};

#[derive(Debug, Clone)]
enum Op {
    Create,
    Update(usize, i32),
    Delete(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Create),
        1 => (0usize..32, 0i32..1_000).prop_map(|(i, n)| Op::Update(i, n)),
        2 => (0usize..32).prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn ids_increase_and_are_never_reused(ops in prop::collection::vec(op(), 1..80)) {
        let repo = InMemoryRepository::<Item>::new(ITEM_LABEL);
        let mut issued: Vec<u64> = Vec::new();
        let mut live = BTreeSet::new();

        for op in ops {
            match op {
                Op::Create => {
                    let id = repo.create(widget()).unwrap().id;
                    prop_assert_eq!(id, issued.len() as u64 + 1);
                    issued.push(id);
                    live.insert(id);
                }
                Op::Update(i, n) if !issued.is_empty() => {
                    let id = issued[i % issued.len()];
                    let replacement = stamped(n).with_id(id);
                    match repo.update(replacement.clone()) {
                        Ok(()) => {
                            prop_assert!(live.contains(&id));
                            prop_assert_eq!(repo.get(id).unwrap(), Some(replacement));
                        }
                        Err(err) => {
                            prop_assert!(err.is_not_found());
                            prop_assert!(!live.contains(&id));
                        }
                    }
                }
                Op::Delete(i) if !issued.is_empty() => {
                    let id = issued[i % issued.len()];
                    let existed = live.remove(&id);
                    match repo.delete(id) {
                        Ok(()) => {
                            prop_assert!(existed);
                        }
                        Err(err) => {
                            prop_assert!(err.is_not_found());
                            prop_assert!(!existed);
                        }
                    }
                    prop_assert_eq!(repo.get(id).unwrap(), None);
                }
                _ => {}
            }
        }

        let listed: BTreeSet<u64> = repo.list().unwrap().iter().map(|item| item.id).collect();
        prop_assert_eq!(listed, live);
    }

    #[test]
    fn create_preserves_every_field_but_id(
        name in "[a-zA-Z ]{1,100}",
        cents in 1i64..10_000_000,
        stock in any::<i32>(),
        description in proptest::option::of("[a-z]{0,20}"),
        caller_id in any::<u64>(),
    ) {
        let repo = InMemoryRepository::<Item>::new(ITEM_LABEL);
        let mut candidate = Item::new(name, rust_decimal::Decimal::new(cents, 2), stock)
            .with_id(caller_id);
        candidate.description = description;

        let created = repo.create(candidate.clone()).unwrap();

        prop_assert_eq!(created.id, 1);
        prop_assert_eq!(&created, &candidate.clone().with_id(1));
        prop_assert_eq!(repo.get(1).unwrap(), Some(candidate.with_id(1)));
    }

    #[test]
    fn listing_twice_returns_the_same_set(count in 0usize..40) {
        let repo = InMemoryRepository::<Item>::new(ITEM_LABEL);
        for n in 0..count {
            repo.create(stamped(n as i32)).unwrap();
        }

        let first: BTreeSet<u64> = repo.list().unwrap().iter().map(|item| item.id).collect();
        let second: BTreeSet<u64> = repo.list().unwrap().iter().map(|item| item.id).collect();
        prop_assert_eq!(first.len(), count);
        prop_assert_eq!(first, second);
    }
}
