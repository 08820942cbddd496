//! Authorization: route-level role policy and resource-level ownership checks.
//!
//! Role checks answer "may this kind of user perform this operation at all";
//! ownership checks answer "may this user touch this particular record".

pub mod ownership;
pub mod policy;

pub use ownership::{ensure_first_submission, ensure_owner, Owned};
pub use policy::{AccessPolicy, Operation, Rule};
