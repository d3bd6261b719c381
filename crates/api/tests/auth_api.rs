//! HTTP-level integration tests for registration, login, and the auth gate.

mod common;

use axum::http::StatusCode;
use common::{
    assert_error, body_json, create_test_user, get_auth, post_json, test_config, token_for,
};
use sqlx::PgPool;
use stayhub_api::auth::jwt::generate_token;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Successful registration returns the public user, a token, and the
/// persisted token record fields. The stored credential never appears.
#[sqlx::test(migrations = "../db/migrations")]
async fn register_returns_user_and_token(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({
        "email": "guest@test.com",
        "password": "secret1",
        "name": "Guest"
    });
    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user"]["email"], "guest@test.com");
    assert_eq!(json["user"]["name"], "Guest");
    assert!(json["user"].get("password").is_none(), "credential must not leak");
    assert!(json["token"].is_string());
    assert!(json["token_id"].is_string());
    assert_eq!(json["is_valid"], true);

    // The token row is persisted.
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM auth_tokens")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

/// Email is normalized before the uniqueness check, so a casing variant of
/// an existing address is a duplicate.
#[sqlx::test(migrations = "../db/migrations")]
async fn register_duplicate_email_is_rejected(pool: PgPool) {
    create_test_user(&pool, "taken@test.com", "secret1", "First").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "  Taken@Test.com ",
        "password": "secret1",
        "name": "Second"
    });
    let response = post_json(app, "/api/auth/register", body).await;
    assert_error(response, StatusCode::BAD_REQUEST, "USER_ALREADY_EXISTS").await;
}

/// Malformed email and short password surface as one validation error with
/// field-level details.
#[sqlx::test(migrations = "../db/migrations")]
async fn register_invalid_payload_returns_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "not-an-email",
        "password": "x",
        "name": "A"
    });
    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error_code"], "VALIDATION_ERROR");
    assert!(json["details"]["email"].is_array());
    assert!(json["details"]["password"].is_array());
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Login with correct credentials returns a token usable on protected routes.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_issues_usable_token(pool: PgPool) {
    let user = create_test_user(&pool, "login@test.com", "secret1", "Login").await;
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "email": "login@test.com", "password": "secret1" });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let token = json["token"].as_str().unwrap().to_string();
    assert_eq!(json["user"]["id"], user.id.to_string());

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/users/{}", user.id), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Wrong password and unknown email produce the identical error, so the
/// response does not reveal whether the account exists.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_failures_are_indistinguishable(pool: PgPool) {
    create_test_user(&pool, "known@test.com", "secret1", "Known").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "email": "known@test.com", "password": "wrong" });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_CREDENTIALS").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "ghost@test.com", "password": "whatever" });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_CREDENTIALS").await;
}

/// A login payload missing either field is rejected before any lookup.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_missing_fields_are_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "email": "known@test.com" }),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "MISSING_REQUIRED_FIELDS").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "password": "secret1" }),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "MISSING_REQUIRED_FIELDS").await;
}

/// A body that is not valid JSON still gets the structured error shape,
/// not a plain-text rejection.
#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_body_gets_structured_error(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::post_raw(app, "/api/auth/login", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error_code"], "VALIDATION_ERROR");
    assert!(json["timestamp"].is_string());
}

// ---------------------------------------------------------------------------
// Auth gate
// ---------------------------------------------------------------------------

/// A protected route without a token returns 401 with the required-token code.
#[sqlx::test(migrations = "../db/migrations")]
async fn protected_route_requires_token(pool: PgPool) {
    let user = create_test_user(&pool, "gate@test.com", "secret1", "Gate").await;
    let app = common::build_test_app(pool);

    let response = common::get(app, &format!("/api/users/{}", user.id)).await;
    assert_error(response, StatusCode::UNAUTHORIZED, "AUTH_TOKEN_REQUIRED").await;
}

/// A token that fails signature verification returns 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn garbage_token_is_forbidden(pool: PgPool) {
    let user = create_test_user(&pool, "garbage@test.com", "secret1", "G").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, &format!("/api/users/{}", user.id), "not-a-jwt").await;
    assert_error(response, StatusCode::FORBIDDEN, "AUTH_TOKEN_INVALID").await;
}

/// A well-signed token whose subject no longer resolves to a user is as
/// invalid as a forged one, but surfaces as 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn token_for_unknown_user_is_unauthorized(pool: PgPool) {
    let user = create_test_user(&pool, "target@test.com", "secret1", "T").await;
    let app = common::build_test_app(pool);

    let config = test_config();
    let orphan_token =
        generate_token(uuid::Uuid::new_v4(), "ghost@test.com", &config.jwt).unwrap();

    let response = get_auth(app, &format!("/api/users/{}", user.id), &orphan_token).await;
    assert_error(response, StatusCode::UNAUTHORIZED, "AUTH_TOKEN_INVALID").await;
}

/// Looking up a nonexistent user with a valid token returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn user_lookup_miss_is_404(pool: PgPool) {
    let user = create_test_user(&pool, "looker@test.com", "secret1", "L").await;
    let token = token_for(&user);
    let app = common::build_test_app(pool);

    let response = get_auth(
        app,
        &format!("/api/users/{}", uuid::Uuid::new_v4()),
        &token,
    )
    .await;
    assert_error(response, StatusCode::NOT_FOUND, "USER_NOT_FOUND").await;
}
