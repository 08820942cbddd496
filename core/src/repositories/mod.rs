//! Repository interfaces for persistence, plus an in-memory implementation
//! used by tests and local development.

pub mod funding;
pub mod job;
pub mod job_application;
pub mod memory;
pub mod profile;
pub mod user;

pub use funding::FundingRepository;
pub use job::JobRepository;
pub use job_application::JobApplicationRepository;
pub use memory::InMemoryStore;
pub use profile::{BusinessRepository, FreelancerRepository};
pub use user::UserRepository;
