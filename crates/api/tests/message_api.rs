//! HTTP-level integration tests for messaging over REST.

mod common;

use axum::http::StatusCode;
use common::{assert_error, body_json, create_test_user, patch_json_auth, post_json_auth, token_for};
use sqlx::PgPool;
use stayhub_core::types::EntityId;

fn message_body(sender_id: EntityId, recipient_id: EntityId, content: &str) -> serde_json::Value {
    serde_json::json!({
        "sender_id": sender_id,
        "recipient_id": recipient_id,
        "property_id": null,
        "content": content
    })
}

// ---------------------------------------------------------------------------
// Sending
// ---------------------------------------------------------------------------

/// A message gets a server-assigned id and timestamp.
#[sqlx::test(migrations = "../db/migrations")]
async fn send_message_assigns_id_and_timestamp(pool: PgPool) {
    let alice = create_test_user(&pool, "alice@test.com", "secret1", "Alice").await;
    let bob = create_test_user(&pool, "bob@test.com", "secret1", "Bob").await;
    let token = token_for(&alice);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/messages",
        message_body(alice.id, bob.id, "Hi Bob"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["id"].is_string());
    assert!(json["timestamp"].is_string());
    assert_eq!(json["sender_id"], alice.id.to_string());
    assert_eq!(json["recipient_id"], bob.id.to_string());
    assert_eq!(json["content"], "Hi Bob");
}

/// The payload sender must match the authenticated caller.
#[sqlx::test(migrations = "../db/migrations")]
async fn spoofed_sender_is_forbidden(pool: PgPool) {
    let alice = create_test_user(&pool, "alice@test.com", "secret1", "Alice").await;
    let bob = create_test_user(&pool, "bob@test.com", "secret1", "Bob").await;
    let token = token_for(&alice);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/messages",
        message_body(bob.id, alice.id, "Pretending to be Bob"),
        &token,
    )
    .await;
    assert_error(response, StatusCode::FORBIDDEN, "UNAUTHORIZED_SENDER").await;
}

/// An unknown recipient is a 404 with its own code.
#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_recipient_is_404(pool: PgPool) {
    let alice = create_test_user(&pool, "alice@test.com", "secret1", "Alice").await;
    let token = token_for(&alice);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/messages",
        message_body(alice.id, uuid::Uuid::new_v4(), "Anyone there?"),
        &token,
    )
    .await;
    assert_error(response, StatusCode::NOT_FOUND, "RECIPIENT_NOT_FOUND").await;
}

/// Empty content fails schema validation.
#[sqlx::test(migrations = "../db/migrations")]
async fn empty_content_fails_validation(pool: PgPool) {
    let alice = create_test_user(&pool, "alice@test.com", "secret1", "Alice").await;
    let bob = create_test_user(&pool, "bob@test.com", "secret1", "Bob").await;
    let token = token_for(&alice);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/messages",
        message_body(alice.id, bob.id, ""),
        &token,
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

// ---------------------------------------------------------------------------
// Editing
// ---------------------------------------------------------------------------

/// The sender can replace the content; other columns are untouched.
#[sqlx::test(migrations = "../db/migrations")]
async fn sender_can_edit_content(pool: PgPool) {
    let alice = create_test_user(&pool, "alice@test.com", "secret1", "Alice").await;
    let bob = create_test_user(&pool, "bob@test.com", "secret1", "Bob").await;
    let token = token_for(&alice);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/messages",
        message_body(alice.id, bob.id, "Hi Bob"),
        &token,
    )
    .await;
    let message = body_json(response).await;
    let message_id = message["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/messages/{message_id}"),
        serde_json::json!({ "content": "Hi Bob (edited)" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["content"], "Hi Bob (edited)");
    assert_eq!(json["recipient_id"], bob.id.to_string());
}

/// Only the original sender may edit; the recipient cannot.
#[sqlx::test(migrations = "../db/migrations")]
async fn recipient_cannot_edit(pool: PgPool) {
    let alice = create_test_user(&pool, "alice@test.com", "secret1", "Alice").await;
    let bob = create_test_user(&pool, "bob@test.com", "secret1", "Bob").await;
    let alice_token = token_for(&alice);
    let bob_token = token_for(&bob);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/messages",
        message_body(alice.id, bob.id, "Hi Bob"),
        &alice_token,
    )
    .await;
    let message = body_json(response).await;
    let message_id = message["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/messages/{message_id}"),
        serde_json::json!({ "content": "hijacked" }),
        &bob_token,
    )
    .await;
    assert_error(response, StatusCode::FORBIDDEN, "UNAUTHORIZED_UPDATE").await;
}

/// Unknown message id returns 404; an empty mask is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn edit_edge_cases(pool: PgPool) {
    let alice = create_test_user(&pool, "alice@test.com", "secret1", "Alice").await;
    let bob = create_test_user(&pool, "bob@test.com", "secret1", "Bob").await;
    let token = token_for(&alice);

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/messages/{}", uuid::Uuid::new_v4()),
        serde_json::json!({ "content": "x" }),
        &token,
    )
    .await;
    assert_error(response, StatusCode::NOT_FOUND, "MESSAGE_NOT_FOUND").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/messages",
        message_body(alice.id, bob.id, "Hi Bob"),
        &token,
    )
    .await;
    let message = body_json(response).await;
    let message_id = message["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/messages/{message_id}"),
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "NO_UPDATE_FIELDS").await;
}
