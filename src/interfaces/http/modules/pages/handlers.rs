//! Informational pages
//!
//! Pages render as JSON view models; templating is left to the client.

use axum::Json;
use serde::Serialize;
use tower_sessions::Session;

use crate::interfaces::http::session::{current_user, Customer, LoggedIn, SessionUser};

#[derive(Debug, Serialize)]
pub struct PageView {
    pub page: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}

impl PageView {
    fn anonymous(page: &'static str) -> Json<Self> {
        Json(Self { page, user: None })
    }
}

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub page: &'static str,
    pub name: String,
}

/// `GET /`
pub async fn landing(session: Session) -> Json<PageView> {
    Json(PageView {
        page: "index",
        user: current_user(&session).await,
    })
}

/// `GET /home`
pub async fn home(Customer(user): Customer) -> Json<HomeView> {
    Json(HomeView {
        page: "home",
        name: user.name,
    })
}

/// `GET /profile`
pub async fn profile(LoggedIn(user): LoggedIn) -> Json<PageView> {
    Json(PageView {
        page: "profile",
        user: Some(user),
    })
}

pub async fn about() -> Json<PageView> {
    PageView::anonymous("about")
}

pub async fn register_page() -> Json<PageView> {
    PageView::anonymous("register")
}

pub async fn login_page() -> Json<PageView> {
    PageView::anonymous("login")
}

pub async fn order_success() -> Json<PageView> {
    PageView::anonymous("order_success")
}
