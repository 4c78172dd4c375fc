//! HTTP surface for the todo store.
//!
//! # Design
//! The store is built once at startup and shared between handlers as
//! `Arc<RwLock<TodoStore>>`. The lock is the only coordination: each request
//! holds it for a single store call, so concurrent writes to the same todo
//! resolve as last-write-wins.

use std::sync::Arc;

use axum::Router;
use tokio::{net::TcpListener, sync::RwLock};
use todo_core::{seed, Clock, TodoStore};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod telemetry;

pub use config::{Environment, ServerConfig};
pub use error::{AppError, ErrorBody};

pub type Db = Arc<RwLock<TodoStore>>;

pub fn app(store: TodoStore) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    routes::router()
        .with_state(db)
        .layer(TraceLayer::new_for_http())
}

/// Build the store for `environment`, seeding demo data in development.
pub fn build_store(environment: Environment, clock: Arc<dyn Clock>) -> TodoStore {
    let mut store = TodoStore::new(clock.clone());
    if environment.seeds_demo_data() {
        seed(&mut store, clock.as_ref());
    }
    store
}

pub async fn run(listener: TcpListener, store: TodoStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}
