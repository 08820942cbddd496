//! Request bodies and query strings accepted by the API.

pub mod auth;
pub mod funding;
pub mod job;
pub mod profile;

pub use auth::{LoginRequest, RegisterRequest, UpdateProfileRequest};
pub use funding::{FundingApplicationRequest, FundingQuery, ReviewFundingRequest};
pub use job::{ApplyToJobRequest, CreateJobRequest, JobQuery, UpdateJobRequest};
pub use profile::{BusinessProfileRequest, FreelancerProfileRequest};
