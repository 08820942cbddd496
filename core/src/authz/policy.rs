//! Declarative operation → permitted roles table.

use std::fmt;

use crate::domain::entities::Role;
use crate::errors::AuthError;

/// Operations gated by role. Protected routes not listed here only require authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    VerifyUser,
    CreateBusinessProfile,
    CreateFreelancerProfile,
    CreateJob,
    ApplyForFunding,
    ListFundingApplications,
    ReviewFundingApplication,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One policy row
pub type Rule = (Operation, &'static [Role]);

const DEFAULT_RULES: &[Rule] = &[
    (Operation::VerifyUser, &[Role::MunicipalWorker]),
    (Operation::CreateBusinessProfile, &[Role::BusinessOwner]),
    (Operation::CreateFreelancerProfile, &[Role::Freelancer]),
    (Operation::CreateJob, &[Role::Client, Role::MunicipalWorker]),
    (Operation::ApplyForFunding, &[Role::BusinessOwner]),
    (Operation::ListFundingApplications, &[Role::MunicipalWorker]),
    (Operation::ReviewFundingApplication, &[Role::MunicipalWorker]),
];

/// Static role policy, shared read-only by every worker
#[derive(Debug, Clone, Copy)]
pub struct AccessPolicy {
    rules: &'static [Rule],
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES,
        }
    }
}

impl AccessPolicy {
    pub fn new(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    /// Roles allowed to perform `operation`; empty when the table has no entry,
    /// which denies everyone
    pub fn allowed_roles(&self, operation: Operation) -> &'static [Role] {
        self.rules
            .iter()
            .find(|(op, _)| *op == operation)
            .map(|(_, roles)| *roles)
            .unwrap_or(&[])
    }

    pub fn permits(&self, operation: Operation, role: Role) -> bool {
        self.allowed_roles(operation).contains(&role)
    }

    /// Fails with `InsufficientRole` naming the accepted roles
    pub fn check(&self, operation: Operation, role: Role) -> Result<(), AuthError> {
        if self.permits(operation, role) {
            return Ok(());
        }

        let required = self
            .allowed_roles(operation)
            .iter()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join(" or ");
        tracing::debug!(%operation, %role, "role check denied");
        Err(AuthError::InsufficientRole { required })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_creation_roles() {
        let policy = AccessPolicy::default();
        assert!(policy.permits(Operation::CreateJob, Role::Client));
        assert!(policy.permits(Operation::CreateJob, Role::MunicipalWorker));
        assert!(!policy.permits(Operation::CreateJob, Role::Freelancer));
        assert!(!policy.permits(Operation::CreateJob, Role::BusinessOwner));
    }

    #[test]
    fn test_municipal_only_operations() {
        let policy = AccessPolicy::default();
        for operation in [
            Operation::VerifyUser,
            Operation::ListFundingApplications,
            Operation::ReviewFundingApplication,
        ] {
            for role in Role::ALL {
                assert_eq!(
                    policy.permits(operation, role),
                    role == Role::MunicipalWorker,
                    "{operation} / {role}"
                );
            }
        }
    }

    #[test]
    fn test_profile_and_funding_roles() {
        let policy = AccessPolicy::default();
        assert_eq!(
            policy.allowed_roles(Operation::CreateBusinessProfile),
            &[Role::BusinessOwner]
        );
        assert_eq!(
            policy.allowed_roles(Operation::CreateFreelancerProfile),
            &[Role::Freelancer]
        );
        assert_eq!(
            policy.allowed_roles(Operation::ApplyForFunding),
            &[Role::BusinessOwner]
        );
    }

    #[test]
    fn test_denial_names_required_roles() {
        let err = AccessPolicy::default()
            .check(Operation::CreateJob, Role::Freelancer)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Access denied. Required role: client or municipal_worker"
        );
    }

    #[test]
    fn test_missing_rule_denies_everyone() {
        const ONLY_JOBS: &[Rule] = &[(Operation::CreateJob, &[Role::Client])];
        let policy = AccessPolicy::new(ONLY_JOBS);
        for role in Role::ALL {
            assert!(!policy.permits(Operation::VerifyUser, role));
        }
    }
}
