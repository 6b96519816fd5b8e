//! Integration tests — build the router and drive it with oneshot
//! requests, asserting on statuses and JSON bodies.
//!
//! Auth and validation paths never touch the store, so most tests run on
//! a lazy pool with nothing listening behind it. The live-store round
//! trip at the bottom only runs when `DATABASE_URL` is set.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use givebox_api::{AppState, config::ApiConfig};
use givebox_core::session::SessionRegistry;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

/// Pool pointing at a port with nothing listening behind it; acquiring a
/// connection fails fast instead of hanging a test.
fn dead_pool() -> sqlx::PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy("postgres://127.0.0.1:9/givebox")
        .expect("lazy pool")
}

fn test_state(pool: sqlx::PgPool) -> AppState {
    AppState {
        pool,
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            admin_password: "secret".into(),
            allowed_origins: Vec::new(),
        },
        sessions: Arc::new(SessionRegistry::new()),
    }
}

fn app() -> Router {
    givebox_api::router(test_state(dead_pool()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_auth(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

fn post_empty_auth(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app.clone().oneshot(req).await.expect("request");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body).expect("parse JSON");
    (status, json)
}

/// Log in with the test password and return the issued token.
async fn login(app: &Router) -> String {
    let (status, json) = send(
        app,
        post_json("/api/admin/login", serde_json::json!({"password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["token"].as_str().expect("token is string").to_string()
}

#[tokio::test]
async fn status_probe_reports_live() {
    let app = app();
    let (status, json) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "live");
    assert!(
        !json["message"].as_str().expect("message is string").is_empty(),
        "message should be non-empty"
    );
}

#[tokio::test]
async fn login_with_correct_password_returns_token() {
    let app = app();
    let token = login(&app).await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let app = app();
    let (status, json) = send(
        &app,
        post_json("/api/admin/login", serde_json::json!({"password": "wrong"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Incorrect password");
}

#[tokio::test]
async fn admin_listing_without_header_is_unauthorized() {
    let app = app();
    let (status, json) = send(&app, get("/api/admin/donations")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Authorization token missing");
}

#[tokio::test]
async fn malformed_authorization_header_is_unauthorized() {
    let app = app();
    let req = Request::builder()
        .uri("/api/admin/donations")
        .header(header::AUTHORIZATION, "Token abc")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&app, req).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Authorization token missing");
}

#[tokio::test]
async fn unknown_bearer_token_is_forbidden() {
    let app = app();
    let (status, json) = send(&app, get_auth("/api/admin/donations", "not-a-real-token")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Invalid or expired token");
}

#[tokio::test]
async fn logout_revokes_the_session() {
    let app = app();
    let token = login(&app).await;

    let (status, json) = send(&app, post_empty_auth("/api/admin/logout", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Logged out successfully");

    // The same token is no longer accepted by the gate.
    let (status, json) = send(&app, get_auth("/api/admin/donations", &token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Invalid or expired token");
}

#[tokio::test]
async fn donation_with_missing_fields_is_rejected() {
    let app = app();

    // Validation fires before the store, so the dead pool is never hit.
    let (status, json) = send(
        &app,
        post_json("/api/donations", serde_json::json!({"firstName": "A"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Error saving donation");
}

#[tokio::test]
async fn admin_listing_with_unreachable_store_reports_store_failure() {
    let app = app();
    let token = login(&app).await;

    let (status, json) = send(&app, get_auth("/api/admin/donations", &token)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Error fetching records");
}

#[tokio::test]
async fn donation_round_trip_with_live_store() {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping live-store round trip");
        return;
    };

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to live store");
    givebox_api::migrate(&pool).await.expect("migrate");

    let app = givebox_api::router(test_state(pool));

    let (status, json) = send(
        &app,
        post_json(
            "/api/donations",
            serde_json::json!({
                "firstName": "A", "lastName": "B", "email": "a@b.com",
                "address": "X", "country": "Y", "amount": 10,
                "cardNumber": "4111", "cardExpiry": "12/30", "cardCvc": "123"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Donation received");

    // Insert records with out-of-order explicit timestamps; the listing
    // must still come back newest-first.
    for ts in [
        "2020-01-02T00:00:00Z",
        "2020-01-01T00:00:00Z",
        "2020-01-03T00:00:00Z",
    ] {
        let (status, _) = send(
            &app,
            post_json(
                "/api/donations",
                serde_json::json!({
                    "timestamp": ts,
                    "firstName": "Order", "lastName": "Check",
                    "email": "order@check.test", "address": "X", "country": "Y",
                    "amount": 1, "cardNumber": "4111", "cardExpiry": "12/30",
                    "cardCvc": "123"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let token = login(&app).await;
    let (status, json) = send(&app, get_auth("/api/admin/donations", &token)).await;
    assert_eq!(status, StatusCode::OK);

    let donations = json["donations"].as_array().expect("donations array");
    assert!(
        donations
            .iter()
            .any(|d| d["email"] == "a@b.com" && d["amount"] == 10.0),
        "submitted donation should appear in the listing"
    );

    // Whole listing is ordered by timestamp descending.
    let timestamps: Vec<chrono::DateTime<chrono::FixedOffset>> = donations
        .iter()
        .map(|d| {
            chrono::DateTime::parse_from_rfc3339(d["timestamp"].as_str().expect("timestamp"))
                .expect("rfc3339 timestamp")
        })
        .collect();
    assert!(
        timestamps.windows(2).all(|w| w[0] >= w[1]),
        "listing should be newest-first"
    );
}
