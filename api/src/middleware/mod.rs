pub mod auth;
pub mod cors;
pub mod role;

pub use auth::{AuthContext, JwtAuth};
pub use cors::create_cors;
pub use role::RequireRole;
