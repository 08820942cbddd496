//! Transport-level handlers shared by every route.

pub mod error;

pub use error::{expose_internal_details, ApiError, ApiResult};
