use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::user::{Role, User};
use crate::domain::entities::{FundingReview, FundingStatus, NewFundingApplication};
use crate::domain::value_objects::Principal;
use crate::errors::ErrorKind;
use crate::repositories::{InMemoryStore, UserRepository};
use crate::services::funding::FundingService;

async fn principal(store: &InMemoryStore, role: Role) -> Principal {
    let user = UserRepository::create(
        store,
        User::new(
            format!("{}@example.co.za", Uuid::new_v4()),
            "Funding Tester".to_string(),
            role,
            "hash".to_string(),
        ),
    )
    .await
    .unwrap();
    Principal::new(user.id, user.email, user.role)
}

fn submission() -> NewFundingApplication {
    NewFundingApplication {
        business_name: "Kasi Bakery".to_string(),
        amount: 50_000.0,
        purpose: "New oven".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_apply_starts_pending() {
    let store = InMemoryStore::new();
    let owner = principal(&store, Role::BusinessOwner).await;
    let funding = FundingService::new(Arc::new(store.clone()));

    let listing = funding.apply(&owner, submission()).await.unwrap();

    assert_eq!(listing.application.status, FundingStatus::Pending);
    assert_eq!(listing.application.user_id, owner.user_id);
    assert_eq!(listing.applicant_email, owner.email);
    assert_eq!(funding.my_applications(&owner).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_apply_validates_amount_and_fields() {
    let store = InMemoryStore::new();
    let owner = principal(&store, Role::BusinessOwner).await;
    let funding = FundingService::new(Arc::new(store.clone()));

    for amount in [0.0, -10.0, f64::NAN] {
        let err = funding
            .apply(
                &owner,
                NewFundingApplication {
                    amount,
                    ..submission()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    let err = funding
        .apply(
            &owner,
            NewFundingApplication {
                purpose: String::new(),
                ..submission()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_review_records_reviewer() {
    let store = InMemoryStore::new();
    let owner = principal(&store, Role::BusinessOwner).await;
    let worker = principal(&store, Role::MunicipalWorker).await;
    let funding = FundingService::new(Arc::new(store.clone()));
    let submitted = funding.apply(&owner, submission()).await.unwrap();

    let reviewed = funding
        .review(
            &worker,
            submitted.application.id,
            FundingReview {
                status: FundingStatus::Approved,
                notes: Some("Approved for Q3".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(reviewed.application.status, FundingStatus::Approved);
    assert_eq!(reviewed.application.reviewed_by, Some(worker.user_id));
    assert_eq!(
        reviewed.application.review_notes.as_deref(),
        Some("Approved for Q3")
    );

    let approved = funding.list(Some(FundingStatus::Approved)).await.unwrap();
    assert_eq!(approved.len(), 1);
    assert!(funding
        .list(Some(FundingStatus::Pending))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_review_rejects_pending_and_missing() {
    let store = InMemoryStore::new();
    let owner = principal(&store, Role::BusinessOwner).await;
    let worker = principal(&store, Role::MunicipalWorker).await;
    let funding = FundingService::new(Arc::new(store.clone()));
    let submitted = funding.apply(&owner, submission()).await.unwrap();

    let err = funding
        .review(
            &worker,
            submitted.application.id,
            FundingReview {
                status: FundingStatus::Pending,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = funding
        .review(
            &worker,
            Uuid::new_v4(),
            FundingReview {
                status: FundingStatus::Rejected,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
