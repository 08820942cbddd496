use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::user::{Role, User};
use crate::domain::entities::{BusinessProfileInput, FreelancerProfileInput};
use crate::domain::value_objects::Principal;
use crate::errors::ErrorKind;
use crate::repositories::{InMemoryStore, UserRepository};
use crate::services::profile::ProfileService;

async fn principal(store: &InMemoryStore, role: Role) -> Principal {
    let user = UserRepository::create(
        store,
        User::new(
            format!("{}@example.co.za", Uuid::new_v4()),
            "Profile Owner".to_string(),
            role,
            "hash".to_string(),
        ),
    )
    .await
    .unwrap();
    Principal::new(user.id, user.email, user.role)
}

fn service(store: &InMemoryStore) -> ProfileService {
    ProfileService::new(Arc::new(store.clone()), Arc::new(store.clone()))
}

#[tokio::test]
async fn test_business_profile_is_created_then_updated_in_place() {
    let store = InMemoryStore::new();
    let owner = principal(&store, Role::BusinessOwner).await;
    let profiles = service(&store);

    let created = profiles
        .save_business(
            &owner,
            BusinessProfileInput {
                business_name: "Spaza One".to_string(),
                location: Some("Soweto".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(created.was_created());
    let created = created.into_inner();

    let updated = profiles
        .save_business(
            &owner,
            BusinessProfileInput {
                business_name: "Spaza Two".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!updated.was_created());
    let updated = updated.into_inner();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.business_name, "Spaza Two");
    assert_eq!(updated.location, None);

    let listings = profiles.list_businesses().await.unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].owner_name, "Profile Owner");
    assert!(!listings[0].owner_verified);
}

#[tokio::test]
async fn test_business_name_required() {
    let store = InMemoryStore::new();
    let owner = principal(&store, Role::BusinessOwner).await;

    let err = service(&store)
        .save_business(&owner, BusinessProfileInput::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_missing_profile_reads_as_none() {
    let store = InMemoryStore::new();
    let owner = principal(&store, Role::Freelancer).await;
    let profiles = service(&store);

    assert!(profiles.freelancer_for(&owner).await.unwrap().is_none());
    assert!(profiles.business_for(&owner).await.unwrap().is_none());
}

#[tokio::test]
async fn test_freelancer_profiles_are_per_user() {
    let store = InMemoryStore::new();
    let first = principal(&store, Role::Freelancer).await;
    let second = principal(&store, Role::Freelancer).await;
    let profiles = service(&store);

    for actor in [&first, &second] {
        profiles
            .save_freelancer(
                actor,
                FreelancerProfileInput {
                    title: Some("Electrician".to_string()),
                    experience_years: Some(4),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    assert_eq!(profiles.list_freelancers().await.unwrap().len(), 2);
    let mine = profiles.freelancer_for(&first).await.unwrap().unwrap();
    assert_eq!(mine.user_id, first.user_id);
}

#[tokio::test]
async fn test_negative_rates_rejected() {
    let store = InMemoryStore::new();
    let actor = principal(&store, Role::Freelancer).await;

    let err = service(&store)
        .save_freelancer(
            &actor,
            FreelancerProfileInput {
                hourly_rate: Some(-1.0),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}
