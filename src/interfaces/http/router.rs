//! Application router with Swagger UI

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::modules::{
    admin, auth, booking, feedback, health, history, menu, metrics, pages, payment, request_id,
};
use super::session::session_layer;
use super::state::AppState;
use crate::config::SessionConfig;

/// OpenAPI documentation for the JSON endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
    ),
    components(schemas(
        ApiResponse,
        auth::dto::RegisterRequest,
        auth::dto::LoginRequest,
        health::HealthResponse,
        health::ComponentHealth,
    )),
    tags(
        (name = "Health", description = "Liveness and database status"),
        (name = "Authentication", description = "Registration and login"),
    ),
    info(
        title = "SwiftCafe",
        version = "0.1.0",
        description = "Table booking and food ordering"
    )
)]
pub struct ApiDoc;

/// Build the full router.
///
/// `/metrics` is mounted only when a Prometheus recorder is installed.
pub fn create_router(
    state: AppState,
    session: &SessionConfig,
    prometheus: Option<PrometheusHandle>,
) -> Router {
    // Pages and account endpoints
    let site = Router::new()
        .route("/", get(pages::landing))
        .route("/home", get(pages::home))
        .route("/about", get(pages::about))
        .route("/profile", get(pages::profile))
        .route("/register", get(pages::register_page))
        .route("/login", get(pages::login_page))
        .route("/logout", get(auth::logout))
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route(
            "/contact",
            get(feedback::contact_page).post(feedback::submit_contact),
        )
        .route(
            "/feedback",
            get(feedback::feedback_page).post(feedback::submit_feedback),
        );

    // Booking, cart and payment flow
    let ordering = Router::new()
        .route(
            "/booking",
            get(booking::booking_page).post(booking::submit_booking),
        )
        .route(
            "/booking_payment",
            get(payment::booking_payment).post(payment::confirm_booking_payment),
        )
        .route("/menu", get(menu::menu).post(menu::update_cart))
        .route(
            "/food_payment",
            get(payment::food_payment).post(payment::confirm_food_payment),
        )
        .route("/order_success", get(pages::order_success));

    let accounts = Router::new()
        .route("/admin", get(admin::dashboard))
        .route("/my_bookings", get(history::my_bookings))
        .route("/my_orders", get(history::my_orders));

    let mut router = Router::new()
        .merge(site)
        .merge(ordering)
        .merge(accounts)
        .route("/health", get(health::health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()));

    if let Some(handle) = prometheus {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics::prometheus_metrics))
                .with_state(metrics::MetricsState { handle }),
        );
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(session_layer(session))
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
