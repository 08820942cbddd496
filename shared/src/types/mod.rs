//! Type definitions shared by the HTTP layer
//!
//! - `response` - health check responses

pub mod response;

pub use response::{HealthResponse, HealthStatus};
