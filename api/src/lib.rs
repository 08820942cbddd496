//! # Kasi Konnect API
//!
//! actix-web transport for the Kasi Konnect marketplace: JWT authentication
//! and role middleware, request DTOs, error mapping and the route table.
//! The binary in `main.rs` wires it to MySQL; tests wire it to the
//! in-memory store.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState, Repositories};
