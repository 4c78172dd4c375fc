//! Invariants of `TodoStore` under arbitrary operation sequences.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::DateTime;
use proptest::prelude::*;
use todo_core::{FixedClock, NewTodo, StoreError, TodoStatusUpdate, TodoStore};
use uuid::Uuid;

#[derive(Debug, Clone)]
enum Op {
    Create(String),
    Complete(usize),
    Activate(usize),
    SetStatus(usize, bool),
    Delete(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z ]{0,12}".prop_map(Op::Create),
        any::<usize>().prop_map(Op::Complete),
        any::<usize>().prop_map(Op::Activate),
        (any::<usize>(), any::<bool>()).prop_map(|(i, b)| Op::SetStatus(i, b)),
        any::<usize>().prop_map(Op::Delete),
    ]
}

fn store() -> TodoStore {
    let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    TodoStore::new(Arc::new(FixedClock(at)))
}

/// Pick an existing id by index, or nil when the store is empty.
fn pick(store: &TodoStore, index: usize) -> Uuid {
    let all = store.list_all();
    if all.is_empty() {
        Uuid::nil()
    } else {
        all[index % all.len()].id
    }
}

fn apply(store: &mut TodoStore, op: &Op) {
    let _ = match op {
        Op::Create(name) => store.create(NewTodo::named(name.clone())),
        Op::Complete(i) => {
            let id = pick(store, *i);
            store.mark_completed(id)
        }
        Op::Activate(i) => {
            let id = pick(store, *i);
            store.mark_active(id)
        }
        Op::SetStatus(i, b) => {
            let id = pick(store, *i);
            store.update_status(id, Some(TodoStatusUpdate { is_completed: *b }))
        }
        Op::Delete(i) => {
            let id = pick(store, *i);
            store.delete(id)
        }
    };
}

proptest! {
    #[test]
    fn completed_and_active_partition_all(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = store();
        for op in &ops {
            apply(&mut store, op);
        }

        let all: HashSet<Uuid> = store.list_all().iter().map(|t| t.id).collect();
        let completed: HashSet<Uuid> = store.list_completed().iter().map(|t| t.id).collect();
        let active: HashSet<Uuid> = store.list_active().iter().map(|t| t.id).collect();

        prop_assert!(completed.is_disjoint(&active));
        let union: HashSet<Uuid> = completed.union(&active).copied().collect();
        prop_assert_eq!(union, all);
    }

    #[test]
    fn created_ids_are_unique(names in prop::collection::vec("[a-z]{1,8}", 1..50)) {
        let mut store = store();
        let mut seen = HashSet::new();
        for name in names {
            let todo = store.create(NewTodo::named(name)).unwrap();
            prop_assert!(seen.insert(todo.id));
        }
        prop_assert_eq!(store.len(), seen.len());
    }

    #[test]
    fn blank_names_never_validate(name in "[ \t]{0,6}") {
        let mut store = store();
        let result = store.create(NewTodo::named(name));
        prop_assert!(matches!(result, Err(StoreError::ValidationFailed(_))));
        prop_assert_eq!(store.len(), 0);
    }

    #[test]
    fn completed_payload_never_validates(name in "[a-z]{1,8}") {
        let mut store = store();
        let result = store.create(NewTodo { is_completed: true, ..NewTodo::named(name) });
        prop_assert!(matches!(result, Err(StoreError::ValidationFailed(_))));
    }

    #[test]
    fn deleted_todos_are_gone(names in prop::collection::vec("[a-z]{1,8}", 1..10), pick_at in any::<usize>()) {
        let mut store = store();
        for name in names {
            store.create(NewTodo::named(name)).unwrap();
        }
        let id = pick(&store, pick_at);
        let before = store.len();
        store.delete(id).unwrap();
        prop_assert!(matches!(store.get(id), Err(StoreError::NotFound { .. })), "deleted todo should be NotFound");
        prop_assert_eq!(store.len(), before - 1);
    }
}
