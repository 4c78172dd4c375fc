//! Demo data loaded into an empty store at startup.

use tracing::{debug, info};
use uuid::Uuid;

use crate::clock::Clock;
use crate::store::TodoStore;
use crate::types::{Todo, User};

pub const JOHN_DOE: Uuid = Uuid::from_u128(0x0);
pub const JANE_SMITH: Uuid = Uuid::from_u128(0x1);

const USERS: &[(u128, &str, &str)] = &[
    (0x00, "John Doe", "john@example.com"),
    (0x01, "Jane Smith", "jane@example.com"),
    (0x02, "Alice Johnson", "alice@example.com"),
    (0x03, "Bob Wilson", "bob@example.com"),
    (0x04, "Eva Davis", "eva@example.com"),
    (0x05, "Michael Thompson", "michael@example.com"),
    (0x06, "Sophia White", "sophia@example.com"),
    (0x07, "William Anderson", "william@example.com"),
    (0x08, "Olivia Davis", "olivia@example.com"),
    (0x09, "James Wilson", "james@example.com"),
    (0x10, "Emily Taylor", "emily@example.com"),
];

const TODO_ID_BASE: u128 = 0x1000_0000_0000_0000_0000_0000_0000_0000;

const TODOS: &[(u128, &str, bool, Uuid)] = &[
    (0x0, "Buy groceries", false, JOHN_DOE),
    (0x1, "Finish project report", true, JANE_SMITH),
    (0x2, "Book doctor appointment", false, JANE_SMITH),
    (0x3, "Walk the dog", true, JOHN_DOE),
    (0x4, "Prepare for meeting", false, JOHN_DOE),
    (0x5, "Pick up kids from school", true, JANE_SMITH),
    (0x6, "Call the bank", false, JOHN_DOE),
    (0x7, "Study for the exam", true, JOHN_DOE),
    (0x8, "Clean the house", false, JANE_SMITH),
    (0x9, "Pay the bills", true, JANE_SMITH),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { users: usize, todos: usize },
    /// The store already held data; nothing was written.
    Skipped,
}

/// Populate `store` with the demo users and todos, stamped with
/// `clock.now()`. Does nothing if the store is not empty, so calling it
/// repeatedly is safe.
pub fn seed(store: &mut TodoStore, clock: &dyn Clock) -> SeedOutcome {
    if !store.has_no_records() {
        debug!(todos = store.len(), "store already populated, skipping seed");
        return SeedOutcome::Skipped;
    }

    let now = clock.now();

    for &(id, full_name, email) in USERS {
        store.insert_user(User {
            id: Uuid::from_u128(id),
            full_name: full_name.to_string(),
            email: email.to_string(),
        });
    }

    for &(offset, name, is_completed, user_id) in TODOS {
        store.insert_todo(Todo {
            id: Uuid::from_u128(TODO_ID_BASE + offset),
            name: name.to_string(),
            is_completed,
            created_at: now,
            updated_at: now,
            user_id: Some(user_id),
        });
    }

    info!(users = USERS.len(), todos = TODOS.len(), "seeded demo data");
    SeedOutcome::Seeded {
        users: USERS.len(),
        todos: TODOS.len(),
    }
}
