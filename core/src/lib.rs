//! Domain core for the todo service.
//!
//! # Overview
//! Holds the todo and user records, validates payloads, and seeds demo data.
//! Everything here is synchronous and free of I/O; the HTTP server and the
//! client crate both build on these types.
//!
//! # Design
//! - `TodoStore` is an explicit value constructed once and handed to its
//!   users; there is no global instance.
//! - Time comes from an injected `Clock` so seeding and timestamps are
//!   deterministic under test.
//! - Errors are a single `StoreError` enum; the HTTP layer maps variants to
//!   status codes.

pub mod clock;
pub mod error;
pub mod seed;
pub mod store;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::StoreError;
pub use seed::{seed, SeedOutcome};
pub use store::TodoStore;
pub use types::{NewTodo, ReplaceTodo, Todo, TodoDetails, TodoStatus, TodoStatusUpdate, User};
