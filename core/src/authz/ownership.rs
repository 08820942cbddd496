//! Resource ownership guard shared by every owned resource kind.

use uuid::Uuid;

use crate::domain::entities::{Business, Freelancer, FundingApplication, Job, JobApplication};
use crate::errors::{DomainError, DomainResult};

/// A persisted record owned by exactly one user
pub trait Owned {
    /// Human-readable resource name used in error messages
    const RESOURCE: &'static str;

    fn owner_id(&self) -> Uuid;
}

/// Admits `actor` to a loaded resource.
///
/// Absence is reported before ownership so a missing record never reads as a
/// permission failure and vice versa.
pub fn ensure_owner<R: Owned>(resource: Option<R>, actor: Uuid) -> DomainResult<R> {
    let resource = resource.ok_or_else(|| DomainError::not_found(R::RESOURCE))?;

    if resource.owner_id() != actor {
        tracing::debug!(resource = R::RESOURCE, %actor, "ownership check denied");
        return Err(DomainError::forbidden(format!(
            "You do not own this {}",
            R::RESOURCE.to_lowercase()
        )));
    }

    Ok(resource)
}

/// Rejects a second submission keyed by (target, actor)
pub fn ensure_first_submission<R: Owned>(prior: Option<&R>) -> DomainResult<()> {
    match prior {
        Some(_) => Err(DomainError::conflict(format!(
            "{} already submitted",
            R::RESOURCE
        ))),
        None => Ok(()),
    }
}

impl Owned for Job {
    const RESOURCE: &'static str = "Job";

    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

impl Owned for JobApplication {
    const RESOURCE: &'static str = "Job application";

    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

impl Owned for FundingApplication {
    const RESOURCE: &'static str = "Funding application";

    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

impl Owned for Business {
    const RESOURCE: &'static str = "Business profile";

    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

impl Owned for Freelancer {
    const RESOURCE: &'static str = "Freelancer profile";

    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}
