//! MySQL implementations of the core repository traits.

pub mod funding;
pub mod job;
pub mod job_application;
pub mod profile;
pub mod user;

pub use funding::MySqlFundingRepository;
pub use job::MySqlJobRepository;
pub use job_application::MySqlJobApplicationRepository;
pub use profile::{MySqlBusinessRepository, MySqlFreelancerRepository};
pub use user::MySqlUserRepository;
