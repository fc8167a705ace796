//! Item-catalog client core: the API wrapper and the view state machine.
//!
//! # Overview
//! Everything here is host-does-IO: the crate builds `HttpRequest` values,
//! parses `HttpResponse` values, and steps the UI state machine, without
//! ever touching the network or a screen. The embedding host executes HTTP
//! round-trips and renders `CatalogView`; both halves stay deterministic
//! and testable in isolation.
//!
//! # Design
//! - `CatalogClient` is stateless — it holds only `base_url`. Each CRUD
//!   operation is split into `build_*` (produces a request) and `parse_*`
//!   (consumes a response), so the I/O boundary is explicit.
//! - `CatalogView` owns the list, dialog, and notice state. User actions
//!   return `Command` values naming the network work to do; the host runs
//!   each command through the client and feeds the outcome back.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use client::{CatalogClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse, Method};
pub use types::{Item, ItemDraft};
pub use view::{CatalogView, Command, Dialog};
