//! Synchronous API client for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - Payload and record types come from `todo-core`, the same types the
//!   server serializes.

pub mod client;
pub mod error;
pub mod http;

pub use client::{Created, TodoClient};
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
