//! Domain entities representing core business objects.

pub mod business;
pub mod freelancer;
pub mod funding;
pub mod job;
pub mod job_application;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use business::{Business, BusinessListing, BusinessProfileInput};
pub use freelancer::{Freelancer, FreelancerListing, FreelancerProfileInput};
pub use funding::{
    FundingApplication, FundingListing, FundingReview, FundingStatus, NewFundingApplication,
};
pub use job::{Job, JobFilter, JobListing, JobStatus, JobType, JobUpdate, NewJob};
pub use job_application::{
    ApplicantView, ApplicationStatus, JobApplication, NewJobApplication, UserApplicationView,
};
pub use token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
pub use user::{Role, User};
