//! Cookie session: who is logged in, and which booking is being ordered for
//!
//! Two typed payloads live in the `tower-sessions` store:
//!
//! - [`SessionUser`] under [`USER_KEY`], set on login.
//! - [`BookingContext`] under [`BOOKING_KEY`], set when a booking is created
//!   and overwritten by the next one.
//!
//! A session that cannot be read is treated as empty.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Redirect;
use serde::{Deserialize, Serialize};
use tower_sessions::cookie::time::Duration;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};
use tracing::warn;

use crate::config::SessionConfig;
use crate::domain::{User, UserRole};

pub const SESSION_COOKIE: &str = "swiftcafe.sid";
pub const USER_KEY: &str = "user";
pub const BOOKING_KEY: &str = "booking";

/// Identity of the logged-in account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
}

impl From<&User> for SessionUser {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            username: u.username.clone(),
            name: u.name.clone(),
            email: u.email.clone(),
            phone: u.phone.clone(),
            role: u.role,
        }
    }
}

/// The booking that cart and payment actions apply to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingContext {
    pub booking_id: i32,
    pub customer_name: String,
}

pub fn session_layer(cfg: &SessionConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_secure(cfg.secure_cookie)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(cfg.expiry_minutes)))
}

// ── Read / write helpers ────────────────────────────────────────

async fn read<T: serde::de::DeserializeOwned>(session: &Session, key: &str) -> Option<T> {
    match session.get::<T>(key).await {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "Unreadable session entry");
            None
        }
    }
}

pub async fn current_user(session: &Session) -> Option<SessionUser> {
    read(session, USER_KEY).await
}

pub async fn booking_context(session: &Session) -> Option<BookingContext> {
    read(session, BOOKING_KEY).await
}

/// Store the identity under a fresh session id.
pub async fn sign_in(session: &Session, user: SessionUser) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(USER_KEY, user).await
}

pub async fn set_booking(session: &Session, ctx: BookingContext) {
    if let Err(e) = session.insert(BOOKING_KEY, ctx).await {
        warn!(error = %e, "Failed to store booking context");
    }
}

/// Drop everything, including the booking context.
pub async fn sign_out(session: &Session) {
    if let Err(e) = session.flush().await {
        warn!(error = %e, "Failed to clear session");
    }
}

// ── Extractors ──────────────────────────────────────────────────

async fn session_of<S: Send + Sync>(parts: &mut Parts, state: &S) -> Option<Session> {
    Session::from_request_parts(parts, state).await.ok()
}

/// Any logged-in user; otherwise redirect to `/login`.
pub struct LoggedIn(pub SessionUser);

/// A logged-in customer; otherwise redirect to `/login`.
pub struct Customer(pub SessionUser);

/// A logged-in admin; otherwise redirect to `/login`.
pub struct Admin(pub SessionUser);

/// The booking held in the session; otherwise redirect to `/booking`.
pub struct ActiveBooking(pub BookingContext);

async fn user_with_role<S: Send + Sync>(
    parts: &mut Parts,
    state: &S,
    role: Option<UserRole>,
) -> Result<SessionUser, Redirect> {
    let session = session_of(parts, state)
        .await
        .ok_or_else(|| Redirect::to("/login"))?;
    match current_user(&session).await {
        Some(user) if role.map_or(true, |r| r == user.role) => Ok(user),
        _ => Err(Redirect::to("/login")),
    }
}

impl<S: Send + Sync> FromRequestParts<S> for LoggedIn {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        user_with_role(parts, state, None).await.map(Self)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Customer {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        user_with_role(parts, state, Some(UserRole::Customer))
            .await
            .map(Self)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Admin {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        user_with_role(parts, state, Some(UserRole::Admin))
            .await
            .map(Self)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for ActiveBooking {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(session) = session_of(parts, state).await else {
            return Err(Redirect::to("/booking"));
        };
        booking_context(&session)
            .await
            .map(Self)
            .ok_or_else(|| Redirect::to("/booking"))
    }
}
