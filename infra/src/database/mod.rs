//! MySQL persistence: connection pool, schema bootstrap and repository
//! implementations.

pub mod connection;
pub mod error;
pub mod mysql;
pub mod schema;

pub use connection::{DatabasePool, PoolStatistics};
pub use error::{is_unique_violation, map_sqlx_error};
