#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt;

use swiftcafe::config::AppConfig;
use swiftcafe::domain::RepositoryProvider;
use swiftcafe::infrastructure::database::migrator::Migrator;
use swiftcafe::infrastructure::{init_database, DatabaseConfig};
use swiftcafe::{create_router, AppState, SeaOrmRepositoryProvider};

pub const SLOT: &str = "10:00 AM - 12:00 PM";

/// Minimum bcrypt cost keeps the suites fast.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.bcrypt_cost = 4;
    config
}

pub async fn test_db() -> DatabaseConnection {
    let db = init_database(&DatabaseConfig::in_memory())
        .await
        .expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub async fn test_repos() -> Arc<dyn RepositoryProvider> {
    Arc::new(SeaOrmRepositoryProvider::new(test_db().await))
}

pub fn form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// A router plus one browser's cookie jar.
pub struct TestApp {
    pub state: AppState,
    pub db: DatabaseConnection,
    router: Router,
    cookie: Option<String>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: AppConfig) -> Self {
        let db = test_db().await;
        let state = AppState::new(db.clone(), &config);
        let router = create_router(state.clone(), &config.session, None);
        Self {
            state,
            db,
            router,
            cookie: None,
        }
    }

    /// Same server, empty cookie jar.
    pub fn new_browser(&self) -> Self {
        Self {
            state: self.state.clone(),
            db: self.db.clone(),
            router: self.router.clone(),
            cookie: None,
        }
    }

    async fn send(&mut self, mut request: Request<Body>) -> Response<Body> {
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(header::COOKIE, cookie.parse().unwrap());
        }
        let response = self.router.clone().oneshot(request).await.unwrap();
        if let Some(set) = response.headers().get(header::SET_COOKIE) {
            let pair = set.to_str().unwrap().split(';').next().unwrap().to_string();
            self.cookie = Some(pair);
        }
        response
    }

    pub async fn get(&mut self, uri: &str) -> Response<Body> {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form(fields)))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&mut self, uri: &str, body: Value) -> Response<Body> {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_raw_json(&mut self, uri: &str, body: &str) -> Response<Body> {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn register(&mut self, username: &str, email: &str, password: &str) -> Response<Body> {
        self.post_json(
            "/api/register",
            serde_json::json!({
                "username": username,
                "full_name": "Asha Kulkarni",
                "email": email,
                "phone": "9876543210",
                "password": password,
            }),
        )
        .await
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Response<Body> {
        self.post_json(
            "/api/login",
            serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn book(&mut self, date: &str, slot: &str, table: &str) -> Response<Body> {
        self.post_form(
            "/booking",
            &[
                ("name", "Asha"),
                ("email", "asha@example.com"),
                ("phone", "9876543210"),
                ("date", date),
                ("time", slot),
                ("guests", "2"),
                ("category", "Birthday"),
                ("subcategory", "Family"),
                ("table_no", table),
            ],
        )
        .await
    }
}

pub async fn json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn assert_redirect(response: &Response<Body>, to: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], to);
}
