//! HTTP-level integration tests for projects: direct creation, scoping,
//! updates, the billing gate, and team assignment.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_user, get_auth, patch_json_auth, post_json_auth, put_json_auth,
    token_for, ROLE_ID_CLIENT, ROLE_ID_MANAGER, ROLE_ID_STAFF,
};
use sqlx::PgPool;
use taskbridge_core::roles::{ROLE_CLIENT, ROLE_MANAGER, ROLE_STAFF};

async fn create_project(app: axum::Router, token: &str, name: &str) -> serde_json::Value {
    let response = post_json_auth(
        app,
        "/api/v1/projects",
        serde_json::json!({ "name": name, "description": "A project" }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../db/migrations")]
async fn direct_creation_defaults_to_active_trial(pool: PgPool) {
    let (client, _) = create_user(&pool, "client@example.com", ROLE_ID_CLIENT).await;
    let token = token_for(&client, ROLE_CLIENT);
    let app = common::build_test_app(pool);

    let project = create_project(app.clone(), &token, "Side project").await;
    assert_eq!(project["status"], "active");
    assert_eq!(project["credit_balance_cents"], 30000);
    assert_eq!(project["user_id"], client.id);
    assert!(project["service_request_id"].is_null());

    let feed = body_json(get_auth(app, "/api/v1/activity", &token).await).await;
    assert_eq!(feed[0]["action"], "project_created");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn creation_requires_name_or_request_reference(pool: PgPool) {
    let (client, _) = create_user(&pool, "client@example.com", ROLE_ID_CLIENT).await;
    let token = token_for(&client, ROLE_CLIENT);
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/projects",
        serde_json::json!({ "description": "nameless" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn clients_cannot_set_starting_credit(pool: PgPool) {
    let (client, _) = create_user(&pool, "client@example.com", ROLE_ID_CLIENT).await;
    let token = token_for(&client, ROLE_CLIENT);
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/projects",
        serde_json::json!({ "name": "Gold mine", "credit_balance_cents": 99999999 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
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

    create_project(app.clone(), &alice_token, "Alice's").await;
    create_project(app.clone(), &bob_token, "Bob's").await;

    let alice_list = body_json(get_auth(app.clone(), "/api/v1/projects", &alice_token).await).await;
    assert_eq!(alice_list.as_array().unwrap().len(), 1);
    assert_eq!(alice_list[0]["name"], "Alice's");

    let manager_list = body_json(get_auth(app, "/api/v1/projects", &manager_token).await).await;
    assert_eq!(manager_list.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn owner_updates_fields_but_not_credit(pool: PgPool) {
    let (client, _) = create_user(&pool, "client@example.com", ROLE_ID_CLIENT).await;
    let (manager, _) = create_user(&pool, "mgr@example.com", ROLE_ID_MANAGER).await;
    let client_token = token_for(&client, ROLE_CLIENT);
    let manager_token = token_for(&manager, ROLE_MANAGER);
    let app = common::build_test_app(pool);

    let project = create_project(app.clone(), &client_token, "Rename me").await;
    let uri = format!("/api/v1/projects/{}", project["id"]);

    let response = patch_json_auth(
        app.clone(),
        &uri,
        serde_json::json!({ "name": "Renamed", "status": "on_hold" }),
        &client_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Renamed");
    assert_eq!(json["status"], "on_hold");

    // Credit adjustments stay manager-only even for the owner.
    let response = patch_json_auth(
        app.clone(),
        &uri,
        serde_json::json!({ "credit_balance_cents": 100 }),
        &client_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = patch_json_auth(
        app,
        &uri,
        serde_json::json!({ "credit_balance_cents": 45000 }),
        &manager_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["credit_balance_cents"], 45000);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_rejects_unknown_status(pool: PgPool) {
    let (client, _) = create_user(&pool, "client@example.com", ROLE_ID_CLIENT).await;
    let token = token_for(&client, ROLE_CLIENT);
    let app = common::build_test_app(pool);

    let project = create_project(app.clone(), &token, "Strict").await;

    let response = patch_json_auth(
        app,
        &format!("/api/v1/projects/{}", project["id"]),
        serde_json::json!({ "status": "archived" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
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

    let project = create_project(app.clone(), &owner_token, "Private").await;
    let uri = format!("/api/v1/projects/{}", project["id"]);

    assert_eq!(
        get_auth(app.clone(), &uri, &owner_token).await.status(),
        StatusCode::OK
    );
    assert_eq!(
        get_auth(app.clone(), &uri, &other_token).await.status(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        get_auth(app, &uri, &staff_token).await.status(),
        StatusCode::OK
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn managers_replace_the_project_team(pool: PgPool) {
    let (client, _) = create_user(&pool, "client@example.com", ROLE_ID_CLIENT).await;
    let (manager, _) = create_user(&pool, "mgr@example.com", ROLE_ID_MANAGER).await;
    let client_token = token_for(&client, ROLE_CLIENT);
    let manager_token = token_for(&manager, ROLE_MANAGER);
    let app = common::build_test_app(pool.clone());

    let project = create_project(app.clone(), &client_token, "Staffed").await;
    let uri = format!("/api/v1/projects/{}/team", project["id"]);

    // Team members 1 and 2 come from the directory seed data.
    let body = serde_json::json!({ "members": [
        { "team_member_id": 1, "role": "Lead", "hours_per_week": 20 },
        { "team_member_id": 2 }
    ]});
    let response = put_json_auth(app.clone(), &uri, body, &manager_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let team = body_json(response).await;
    assert_eq!(team.as_array().unwrap().len(), 2);
    assert!(team[0]["member_name"].is_string());

    // Replacement is total: sending one member drops the other.
    let body = serde_json::json!({ "members": [
        { "team_member_id": 2, "role": "Designer" }
    ]});
    let response = put_json_auth(app.clone(), &uri, body, &manager_token).await;
    let team = body_json(response).await;
    assert_eq!(team.as_array().unwrap().len(), 1);
    assert_eq!(team[0]["team_member_id"], 2);

    // The owner can read the roster but not change it.
    let response = get_auth(app.clone(), &uri, &client_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = serde_json::json!({ "members": [] });
    let response = put_json_auth(app, &uri, body, &client_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
