//! Integration tests for /api/funding

mod common;

use actix_web::test;
use kk_api::create_app;
use kk_core::Role;
use serde_json::{json, Value};
use uuid::Uuid;

use common::bearer;

fn application() -> Value {
    json!({
        "business_name": "Mama Thandi's Kitchen",
        "amount": 25000.0,
        "purpose": "New industrial stove"
    })
}

#[actix_web::test]
async fn test_only_business_owners_apply() {
    let state = common::state();
    let app = test::init_service(create_app(state.clone(), &common::config())).await;
    let owner = common::register(&state, "owner@example.co.za", Role::BusinessOwner).await;
    let client = common::register(&state, "client@example.co.za", Role::Client).await;

    let req = test::TestRequest::post()
        .uri("/api/funding/apply")
        .insert_header(bearer(&client.token))
        .set_json(application())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::post()
        .uri("/api/funding/apply")
        .insert_header(bearer(&owner.token))
        .set_json(application())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Funding application submitted successfully");
    assert_eq!(body["application"]["status"], "pending");
    assert_eq!(body["application"]["user_id"], owner.user.id.to_string());

    let req = test::TestRequest::get()
        .uri("/api/funding/my-applications")
        .insert_header(bearer(&owner.token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["applications"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/funding/my-applications")
        .insert_header(bearer(&client.token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["applications"], json!([]));
}

#[actix_web::test]
async fn test_application_requires_fields() {
    let state = common::state();
    let app = test::init_service(create_app(state.clone(), &common::config())).await;
    let owner = common::register(&state, "owner@example.co.za", Role::BusinessOwner).await;

    for body in [
        json!({"business_name": "Spaza", "purpose": "Stock"}),
        json!({"business_name": "Spaza", "amount": -5.0, "purpose": "Stock"}),
        json!({"amount": 100.0, "purpose": "Stock"}),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/funding/apply")
            .insert_header(bearer(&owner.token))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "{body}");
    }
}

#[actix_web::test]
async fn test_review_flow() {
    let state = common::state();
    let app = test::init_service(create_app(state.clone(), &common::config())).await;
    let owner = common::register(&state, "owner@example.co.za", Role::BusinessOwner).await;
    let worker = common::register(&state, "official@example.gov.za", Role::MunicipalWorker).await;

    let req = test::TestRequest::post()
        .uri("/api/funding/apply")
        .insert_header(bearer(&owner.token))
        .set_json(application())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["application"]["id"].as_str().unwrap().to_string();

    // Applicants cannot review their own application
    let req = test::TestRequest::put()
        .uri(&format!("/api/funding/{id}/review"))
        .insert_header(bearer(&owner.token))
        .set_json(json!({"status": "approved"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    for status in ["pending", "granted"] {
        let req = test::TestRequest::put()
            .uri(&format!("/api/funding/{id}/review"))
            .insert_header(bearer(&worker.token))
            .set_json(json!({"status": status}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "{status}");
    }

    let req = test::TestRequest::put()
        .uri(&format!("/api/funding/{}/review", Uuid::new_v4()))
        .insert_header(bearer(&worker.token))
        .set_json(json!({"status": "approved"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::put()
        .uri(&format!("/api/funding/{id}/review"))
        .insert_header(bearer(&worker.token))
        .set_json(json!({"status": "approved", "review_notes": "Strong plan"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Funding application reviewed successfully");
    assert_eq!(body["application"]["status"], "approved");
    assert_eq!(body["application"]["review_notes"], "Strong plan");
    assert_eq!(body["application"]["reviewed_by"], worker.user.id.to_string());
    assert!(!body["application"]["reviewed_at"].is_null());
}

#[actix_web::test]
async fn test_listing_filters_by_status() {
    let state = common::state();
    let app = test::init_service(create_app(state.clone(), &common::config())).await;
    let owner = common::register(&state, "owner@example.co.za", Role::BusinessOwner).await;
    let worker = common::register(&state, "official@example.gov.za", Role::MunicipalWorker).await;

    let req = test::TestRequest::post()
        .uri("/api/funding/apply")
        .insert_header(bearer(&owner.token))
        .set_json(application())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::get()
        .uri("/api/funding/applications?status=pending")
        .insert_header(bearer(&worker.token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let applications = body["applications"].as_array().unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["applicant_name"], "Test business_owner");

    let req = test::TestRequest::get()
        .uri("/api/funding/applications?status=approved")
        .insert_header(bearer(&worker.token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["applications"], json!([]));

    let req = test::TestRequest::get()
        .uri("/api/funding/applications?status=bogus")
        .insert_header(bearer(&worker.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
