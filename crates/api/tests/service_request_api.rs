//! HTTP-level integration tests for service request CRUD, scoping, and the
//! review/delete gates.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_user, delete_auth, get_auth, patch_json_auth, post_json_auth,
    token_for, ROLE_ID_CLIENT, ROLE_ID_MANAGER, ROLE_ID_STAFF,
};
use sqlx::PgPool;
use taskbridge_core::roles::{ROLE_CLIENT, ROLE_MANAGER, ROLE_STAFF};

fn request_body(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "Need a marketing site refresh",
        "timeline": "4-6 weeks",
        "budget_cents": 250000
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn client_creates_pending_request(pool: PgPool) {
    let (client, _) = create_user(&pool, "client@example.com", ROLE_ID_CLIENT).await;
    let token = token_for(&client, ROLE_CLIENT);
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/service-requests",
        request_body("Site refresh"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["status"], "pending");
    assert_eq!(json["user_id"], client.id);
    assert_eq!(json["budget_cents"], 250000);

    // Creation is recorded in the owner's activity feed.
    let feed = body_json(get_auth(app, "/api/v1/activity", &token).await).await;
    assert_eq!(feed[0]["action"], "service_request_created");
    assert_eq!(feed[0]["entity_id"], json["id"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_empty_title(pool: PgPool) {
    let (client, _) = create_user(&pool, "client@example.com", ROLE_ID_CLIENT).await;
    let token = token_for(&client, ROLE_CLIENT);
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/service-requests",
        serde_json::json!({
            "title": "",
            "description": "x",
            "timeline": "asap"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_is_scoped_to_owner_except_managers(pool: PgPool) {
    let (alice, _) = create_user(&pool, "alice@example.com", ROLE_ID_CLIENT).await;
    let (bob, _) = create_user(&pool, "bob@example.com", ROLE_ID_CLIENT).await;
    let (manager, _) = create_user(&pool, "mgr@example.com", ROLE_ID_MANAGER).await;
    let alice_token = token_for(&alice, ROLE_CLIENT);
    let bob_token = token_for(&bob, ROLE_CLIENT);
    let manager_token = token_for(&manager, ROLE_MANAGER);
    let app = common::build_test_app(pool);

    post_json_auth(
        app.clone(),
        "/api/v1/service-requests",
        request_body("Alice's request"),
        &alice_token,
    )
    .await;

    let alice_list = body_json(get_auth(app.clone(), "/api/v1/service-requests", &alice_token).await).await;
    assert_eq!(alice_list.as_array().unwrap().len(), 1);

    let bob_list = body_json(get_auth(app.clone(), "/api/v1/service-requests", &bob_token).await).await;
    assert!(bob_list.as_array().unwrap().is_empty());

    let manager_list =
        body_json(get_auth(app, "/api/v1/service-requests", &manager_token).await).await;
    assert_eq!(manager_list.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn record_access_follows_ownership_and_role(pool: PgPool) {
    let (owner, _) = create_user(&pool, "owner@example.com", ROLE_ID_CLIENT).await;
    let (other, _) = create_user(&pool, "other@example.com", ROLE_ID_CLIENT).await;
    let (staff, _) = create_user(&pool, "staff@example.com", ROLE_ID_STAFF).await;
    let owner_token = token_for(&owner, ROLE_CLIENT);
    let other_token = token_for(&other, ROLE_CLIENT);
    let staff_token = token_for(&staff, ROLE_STAFF);
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/service-requests",
            request_body("Scoped"),
            &owner_token,
        )
        .await,
    )
    .await;
    let uri = format!("/api/v1/service-requests/{}", created["id"]);

    let response = get_auth(app.clone(), &uri, &owner_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app.clone(), &uri, &other_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(app, &uri, &staff_token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn review_is_manager_only(pool: PgPool) {
    let (client, _) = create_user(&pool, "client@example.com", ROLE_ID_CLIENT).await;
    let token = token_for(&client, ROLE_CLIENT);
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/service-requests",
            request_body("Mine"),
            &token,
        )
        .await,
    )
    .await;

    // Even the owner cannot self-approve.
    let response = patch_json_auth(
        app,
        &format!("/api/v1/service-requests/{}", created["id"]),
        serde_json::json!({ "status": "approved" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn review_rejects_unknown_status(pool: PgPool) {
    let (client, _) = create_user(&pool, "client@example.com", ROLE_ID_CLIENT).await;
    let (manager, _) = create_user(&pool, "mgr@example.com", ROLE_ID_MANAGER).await;
    let client_token = token_for(&client, ROLE_CLIENT);
    let manager_token = token_for(&manager, ROLE_MANAGER);
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/service-requests",
            request_body("Typo"),
            &client_token,
        )
        .await,
    )
    .await;

    let response = patch_json_auth(
        app,
        &format!("/api/v1/service-requests/{}", created["id"]),
        serde_json::json!({ "status": "APPROVED" }),
        &manager_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rejection_logs_status_change_without_project(pool: PgPool) {
    let (client, _) = create_user(&pool, "client@example.com", ROLE_ID_CLIENT).await;
    let (manager, _) = create_user(&pool, "mgr@example.com", ROLE_ID_MANAGER).await;
    let client_token = token_for(&client, ROLE_CLIENT);
    let manager_token = token_for(&manager, ROLE_MANAGER);
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/service-requests",
            request_body("Declined"),
            &client_token,
        )
        .await,
    )
    .await;

    let response = patch_json_auth(
        app.clone(),
        &format!("/api/v1/service-requests/{}", created["id"]),
        serde_json::json!({ "status": "rejected", "admin_notes": "Out of scope" }),
        &manager_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["request"]["status"], "rejected");
    assert_eq!(json["request"]["admin_notes"], "Out of scope");
    assert!(json["project"].is_null());

    let feed = body_json(get_auth(app, "/api/v1/activity", &client_token).await).await;
    assert_eq!(feed[0]["action"], "service_request_updated");
    assert_eq!(feed[0]["metadata"]["new_status"], "rejected");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn owner_deletes_pending_request(pool: PgPool) {
    let (client, _) = create_user(&pool, "client@example.com", ROLE_ID_CLIENT).await;
    let token = token_for(&client, ROLE_CLIENT);
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/service-requests",
            request_body("Changed my mind"),
            &token,
        )
        .await,
    )
    .await;
    let uri = format!("/api/v1/service-requests/{}", created["id"]);

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn approved_requests_cannot_be_deleted(pool: PgPool) {
    let (client, _) = create_user(&pool, "client@example.com", ROLE_ID_CLIENT).await;
    let (manager, _) = create_user(&pool, "mgr@example.com", ROLE_ID_MANAGER).await;
    let client_token = token_for(&client, ROLE_CLIENT);
    let manager_token = token_for(&manager, ROLE_MANAGER);
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/service-requests",
            request_body("Locked in"),
            &client_token,
        )
        .await,
    )
    .await;
    let uri = format!("/api/v1/service-requests/{}", created["id"]);

    patch_json_auth(
        app.clone(),
        &uri,
        serde_json::json!({ "status": "approved" }),
        &manager_token,
    )
    .await;

    // Neither the owner nor a manager may remove an approved request.
    let response = delete_auth(app.clone(), &uri, &client_token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = delete_auth(app, &uri, &manager_token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn staff_cannot_delete_requests(pool: PgPool) {
    let (client, _) = create_user(&pool, "client@example.com", ROLE_ID_CLIENT).await;
    let (staff, _) = create_user(&pool, "staff@example.com", ROLE_ID_STAFF).await;
    let client_token = token_for(&client, ROLE_CLIENT);
    let staff_token = token_for(&staff, ROLE_STAFF);
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/service-requests",
            request_body("Not yours"),
            &client_token,
        )
        .await,
    )
    .await;

    let response = delete_auth(
        app,
        &format!("/api/v1/service-requests/{}", created["id"]),
        &staff_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn approved_requests_cannot_change_status(pool: PgPool) {
    let (client, _) = create_user(&pool, "client@example.com", ROLE_ID_CLIENT).await;
    let (manager, _) = create_user(&pool, "mgr@example.com", ROLE_ID_MANAGER).await;
    let client_token = token_for(&client, ROLE_CLIENT);
    let manager_token = token_for(&manager, ROLE_MANAGER);
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/service-requests",
            request_body("Locked in"),
            &client_token,
        )
        .await,
    )
    .await;
    let uri = format!("/api/v1/service-requests/{}", created["id"]);

    let response = patch_json_auth(
        app.clone(),
        &uri,
        serde_json::json!({ "status": "approved" }),
        &manager_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Once a project exists for the request, the status cannot move back.
    let response = patch_json_auth(
        app.clone(),
        &uri,
        serde_json::json!({ "status": "pending" }),
        &manager_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Notes stay editable after approval.
    let response = patch_json_auth(
        app.clone(),
        &uri,
        serde_json::json!({ "admin_notes": "Kickoff scheduled" }),
        &manager_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["request"]["status"], "approved");
    assert_eq!(json["request"]["admin_notes"], "Kickoff scheduled");
    assert!(json["project"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rejected_requests_can_be_deleted(pool: PgPool) {
    let (client, _) = create_user(&pool, "client@example.com", ROLE_ID_CLIENT).await;
    let (manager, _) = create_user(&pool, "mgr@example.com", ROLE_ID_MANAGER).await;
    let client_token = token_for(&client, ROLE_CLIENT);
    let manager_token = token_for(&manager, ROLE_MANAGER);
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/service-requests",
            request_body("Declined then removed"),
            &client_token,
        )
        .await,
    )
    .await;
    let uri = format!("/api/v1/service-requests/{}", created["id"]);

    let response = patch_json_auth(
        app.clone(),
        &uri,
        serde_json::json!({ "status": "rejected" }),
        &manager_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete_auth(app.clone(), &uri, &client_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &uri, &client_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
