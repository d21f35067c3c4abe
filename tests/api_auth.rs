mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{assert_redirect, json, test_config, TestApp};

#[tokio::test]
async fn register_then_login_as_customer() {
    let mut app = TestApp::new().await;

    let resp = app.register("asha_k", "Asha@Example.com", "secret1").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User registered successfully!");

    // Email lookup ignores case
    let resp = app.login("asha@example.com", "secret1").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json(resp).await;
    assert_eq!(body, json!({ "success": true, "role": "customer" }));

    let resp = app.get("/home").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json(resp).await["name"], "Asha Kulkarni");
}

#[tokio::test]
async fn duplicate_username_or_email_is_rejected() {
    let mut app = TestApp::new().await;
    app.register("asha_k", "asha@example.com", "secret1").await;

    let resp = app.register("asha_k", "other@example.com", "secret1").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json(resp).await["message"],
        "Username or Email already exists"
    );

    let resp = app.register("someone", "ASHA@example.com", "secret1").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn field_checks_report_first_failure() {
    let mut app = TestApp::new().await;

    let resp = app
        .post_json("/api/register", json!({ "username": "asha_k" }))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json(resp).await["message"], "All fields are required");

    let resp = app.register("asha_k", "asha@example.com", "abc").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json(resp).await["message"], "Password too short");

    let resp = app.register("asha_k", "not-an-email", "secret1").await;
    assert_eq!(json(resp).await["message"], "Invalid email");
}

fn admin_signup() -> serde_json::Value {
    json!({
        "username": "boss",
        "full_name": "Big Boss",
        "email": "boss@example.com",
        "phone": "9876543210",
        "role": "admin",
        "password": "secret1",
    })
}

#[tokio::test]
async fn admin_can_sign_up() {
    let mut app = TestApp::new().await;
    let resp = app.post_json("/api/register", admin_signup()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json(resp).await["success"], true);

    let resp = app.login("boss@example.com", "secret1").await;
    assert_eq!(json(resp).await["role"], "admin");
    assert_eq!(app.get("/admin").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_signup_can_be_switched_off() {
    let mut config = test_config();
    config.auth.allow_admin_signup = false;
    let mut app = TestApp::with_config(config).await;

    let resp = app.post_json("/api/register", admin_signup()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json(resp).await["message"], "Invalid role");
}

#[tokio::test]
async fn bad_credentials_are_unauthorized() {
    let mut app = TestApp::new().await;
    app.register("asha_k", "asha@example.com", "secret1").await;

    let resp = app.login("asha@example.com", "wrong-pass").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json(resp).await["message"], "Invalid email or password");

    let resp = app.login("nobody@example.com", "secret1").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app.login("", "").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json(resp).await["message"], "Email and password required");
}

#[tokio::test]
async fn malformed_json_gets_envelope() {
    let mut app = TestApp::new().await;
    let resp = app.post_raw_json("/api/login", "{not json").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json(resp).await["success"], false);
}

#[tokio::test]
async fn logout_clears_session() {
    let mut app = TestApp::new().await;
    app.register("asha_k", "asha@example.com", "secret1").await;
    app.login("asha@example.com", "secret1").await;

    let resp = app.get("/profile").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json(resp).await["user"]["username"], "asha_k");

    let resp = app.get("/logout").await;
    assert_redirect(&resp, "/");

    let resp = app.get("/profile").await;
    assert_redirect(&resp, "/login");
}

#[tokio::test]
async fn protected_pages_redirect_anonymous_users() {
    let mut app = TestApp::new().await;
    for path in ["/home", "/profile", "/admin", "/my_bookings", "/my_orders"] {
        let resp = app.get(path).await;
        assert_redirect(&resp, "/login");
    }
    for path in ["/menu", "/booking_payment", "/food_payment"] {
        let resp = app.get(path).await;
        assert_redirect(&resp, "/booking");
    }
}
