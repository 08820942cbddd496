//! In-memory implementation of every repository trait.
//!
//! All tables live behind one lock, so joins see a consistent snapshot and
//! uniqueness checks happen in the same critical section as the insert.
//! Email comparison ignores ASCII case, like the default MySQL collation.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{
    ApplicantView, Business, BusinessListing, Freelancer, FreelancerListing, FundingApplication,
    FundingListing, FundingStatus, Job, JobApplication, JobFilter, JobListing, User,
    UserApplicationView,
};
use crate::errors::{AuthError, DomainError};

use super::{
    BusinessRepository, FreelancerRepository, FundingRepository, JobApplicationRepository,
    JobRepository, UserRepository,
};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    jobs: HashMap<Uuid, Job>,
    applications: HashMap<Uuid, JobApplication>,
    funding: HashMap<Uuid, FundingApplication>,
    businesses: HashMap<Uuid, Business>,
    freelancers: HashMap<Uuid, Freelancer>,
}

impl Tables {
    fn job_listing(&self, job: &Job) -> Option<JobListing> {
        self.users.get(&job.user_id).map(|poster| JobListing {
            job: job.clone(),
            poster_name: poster.name.clone(),
            poster_role: poster.role,
        })
    }

    fn funding_listing(&self, application: &FundingApplication) -> Option<FundingListing> {
        self.users
            .get(&application.user_id)
            .map(|applicant| FundingListing {
                application: application.clone(),
                applicant_name: applicant.name.clone(),
                applicant_email: applicant.email.clone(),
            })
    }
}

/// Shared in-memory store; clones share the same tables
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn missing(resource: &str) -> DomainError {
    DomainError::not_found(resource)
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;
        if tables
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;
        match tables.users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(missing("User")),
        }
    }
}

#[async_trait]
impl JobRepository for InMemoryStore {
    async fn create(&self, job: Job) -> Result<Job, DomainError> {
        self.tables.write().await.jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DomainError> {
        Ok(self.tables.read().await.jobs.get(&id).cloned())
    }

    async fn find_listing(&self, id: Uuid) -> Result<Option<JobListing>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.jobs.get(&id).and_then(|job| tables.job_listing(job)))
    }

    async fn list(&self, filter: &JobFilter) -> Result<Vec<JobListing>, DomainError> {
        let tables = self.tables.read().await;
        let mut listings: Vec<JobListing> = tables
            .jobs
            .values()
            .filter(|job| filter.matches(job))
            .filter_map(|job| tables.job_listing(job))
            .collect();
        listings.sort_by_key(|l| Reverse(l.job.created_at));
        Ok(listings)
    }

    async fn update(&self, job: Job) -> Result<Job, DomainError> {
        let mut tables = self.tables.write().await;
        match tables.jobs.get_mut(&job.id) {
            Some(existing) => {
                *existing = job.clone();
                Ok(job)
            }
            None => Err(missing("Job")),
        }
    }
}

#[async_trait]
impl JobApplicationRepository for InMemoryStore {
    async fn find_by_job_and_user(
        &self,
        job_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<JobApplication>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .applications
            .values()
            .find(|a| a.job_id == job_id && a.user_id == user_id)
            .cloned())
    }

    async fn create(&self, application: JobApplication) -> Result<JobApplication, DomainError> {
        let mut tables = self.tables.write().await;
        if tables
            .applications
            .values()
            .any(|a| a.job_id == application.job_id && a.user_id == application.user_id)
        {
            return Err(DomainError::conflict("Job application already submitted"));
        }
        tables
            .applications
            .insert(application.id, application.clone());
        Ok(application)
    }

    async fn list_for_job(&self, job_id: Uuid) -> Result<Vec<ApplicantView>, DomainError> {
        let tables = self.tables.read().await;
        let mut views: Vec<ApplicantView> = tables
            .applications
            .values()
            .filter(|a| a.job_id == job_id)
            .filter_map(|a| {
                tables.users.get(&a.user_id).map(|applicant| ApplicantView {
                    application: a.clone(),
                    applicant_name: applicant.name.clone(),
                    applicant_email: applicant.email.clone(),
                    applicant_verified: applicant.verified,
                })
            })
            .collect();
        views.sort_by_key(|v| Reverse(v.application.created_at));
        Ok(views)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<UserApplicationView>, DomainError> {
        let tables = self.tables.read().await;
        let mut views: Vec<UserApplicationView> = tables
            .applications
            .values()
            .filter(|a| a.user_id == user_id)
            .filter_map(|a| {
                tables.jobs.get(&a.job_id).map(|job| UserApplicationView {
                    application: a.clone(),
                    job_title: job.title.clone(),
                    job_category: job.category.clone(),
                })
            })
            .collect();
        views.sort_by_key(|v| Reverse(v.application.created_at));
        Ok(views)
    }
}

#[async_trait]
impl FundingRepository for InMemoryStore {
    async fn create(
        &self,
        application: FundingApplication,
    ) -> Result<FundingApplication, DomainError> {
        self.tables
            .write()
            .await
            .funding
            .insert(application.id, application.clone());
        Ok(application)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FundingApplication>, DomainError> {
        Ok(self.tables.read().await.funding.get(&id).cloned())
    }

    async fn find_listing(&self, id: Uuid) -> Result<Option<FundingListing>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .funding
            .get(&id)
            .and_then(|application| tables.funding_listing(application)))
    }

    async fn list(
        &self,
        status: Option<FundingStatus>,
    ) -> Result<Vec<FundingListing>, DomainError> {
        let tables = self.tables.read().await;
        let mut listings: Vec<FundingListing> = tables
            .funding
            .values()
            .filter(|a| status.map_or(true, |s| a.status == s))
            .filter_map(|a| tables.funding_listing(a))
            .collect();
        listings.sort_by_key(|l| Reverse(l.application.created_at));
        Ok(listings)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<FundingApplication>, DomainError> {
        let tables = self.tables.read().await;
        let mut applications: Vec<FundingApplication> = tables
            .funding
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        applications.sort_by_key(|a| Reverse(a.created_at));
        Ok(applications)
    }

    async fn update(
        &self,
        application: FundingApplication,
    ) -> Result<FundingApplication, DomainError> {
        let mut tables = self.tables.write().await;
        match tables.funding.get_mut(&application.id) {
            Some(existing) => {
                *existing = application.clone();
                Ok(application)
            }
            None => Err(missing("Funding application")),
        }
    }
}

#[async_trait]
impl BusinessRepository for InMemoryStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Business>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .businesses
            .values()
            .find(|b| b.user_id == user_id)
            .cloned())
    }

    async fn create(&self, business: Business) -> Result<Business, DomainError> {
        let mut tables = self.tables.write().await;
        if tables
            .businesses
            .values()
            .any(|b| b.user_id == business.user_id)
        {
            return Err(DomainError::conflict("Business profile already exists"));
        }
        tables.businesses.insert(business.id, business.clone());
        Ok(business)
    }

    async fn update(&self, business: Business) -> Result<Business, DomainError> {
        let mut tables = self.tables.write().await;
        match tables.businesses.get_mut(&business.id) {
            Some(existing) => {
                *existing = business.clone();
                Ok(business)
            }
            None => Err(missing("Business profile")),
        }
    }

    async fn list(&self) -> Result<Vec<BusinessListing>, DomainError> {
        let tables = self.tables.read().await;
        let mut listings: Vec<BusinessListing> = tables
            .businesses
            .values()
            .filter_map(|b| {
                tables.users.get(&b.user_id).map(|owner| BusinessListing {
                    business: b.clone(),
                    owner_name: owner.name.clone(),
                    owner_verified: owner.verified,
                })
            })
            .collect();
        listings.sort_by_key(|l| Reverse(l.business.created_at));
        Ok(listings)
    }
}

#[async_trait]
impl FreelancerRepository for InMemoryStore {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Freelancer>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .freelancers
            .values()
            .find(|f| f.user_id == user_id)
            .cloned())
    }

    async fn create(&self, freelancer: Freelancer) -> Result<Freelancer, DomainError> {
        let mut tables = self.tables.write().await;
        if tables
            .freelancers
            .values()
            .any(|f| f.user_id == freelancer.user_id)
        {
            return Err(DomainError::conflict("Freelancer profile already exists"));
        }
        tables.freelancers.insert(freelancer.id, freelancer.clone());
        Ok(freelancer)
    }

    async fn update(&self, freelancer: Freelancer) -> Result<Freelancer, DomainError> {
        let mut tables = self.tables.write().await;
        match tables.freelancers.get_mut(&freelancer.id) {
            Some(existing) => {
                *existing = freelancer.clone();
                Ok(freelancer)
            }
            None => Err(missing("Freelancer profile")),
        }
    }

    async fn list(&self) -> Result<Vec<FreelancerListing>, DomainError> {
        let tables = self.tables.read().await;
        let mut listings: Vec<FreelancerListing> = tables
            .freelancers
            .values()
            .filter_map(|f| {
                tables.users.get(&f.user_id).map(|owner| FreelancerListing {
                    freelancer: f.clone(),
                    owner_name: owner.name.clone(),
                    owner_verified: owner.verified,
                })
            })
            .collect();
        listings.sort_by_key(|l| Reverse(l.freelancer.created_at));
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NewJob, NewJobApplication, Role};
    use crate::errors::ErrorKind;

    fn user(email: &str) -> User {
        User::new(email.to_string(), "Test".to_string(), Role::Client, "hash".to_string())
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts_ignoring_case() {
        let store = InMemoryStore::new();
        let users: &dyn UserRepository = &store;

        users.create(user("ayanda@example.co.za")).await.unwrap();
        let err = users.create(user("Ayanda@Example.co.za")).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert!(users
            .find_by_email("AYANDA@example.co.za")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_duplicate_application_conflicts_at_store_level() {
        let store = InMemoryStore::new();
        let applications: &dyn JobApplicationRepository = &store;
        let (job_id, applicant) = (Uuid::new_v4(), Uuid::new_v4());

        let first = JobApplication::new(job_id, applicant, NewJobApplication::default());
        applications.create(first.clone()).await.unwrap();
        let err = applications
            .create(JobApplication::new(job_id, applicant, NewJobApplication::default()))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(
            applications
                .find_by_job_and_user(job_id, applicant)
                .await
                .unwrap(),
            Some(first)
        );
    }

    #[tokio::test]
    async fn test_job_listing_joins_poster() {
        let store = InMemoryStore::new();
        let poster = UserRepository::create(&store, user("poster@example.co.za"))
            .await
            .unwrap();
        let job = Job::new(
            poster.id,
            NewJob {
                title: "Tile bathroom".to_string(),
                description: "Small room".to_string(),
                ..Default::default()
            },
        );
        JobRepository::create(&store, job.clone()).await.unwrap();

        let listing = JobRepository::find_listing(&store, job.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(listing.poster_name, "Test");
        assert_eq!(listing.poster_role, Role::Client);
        assert_eq!(JobRepository::list(&store, &JobFilter::default()).await.unwrap().len(), 1);
    }
}
