use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::application::{Dashboard, DashboardService};
use crate::interfaces::http::session::Admin;

/// `GET /admin`: dashboard figures; failing queries show as empty
pub async fn dashboard(
    State(dashboard): State<Arc<DashboardService>>,
    Admin(user): Admin,
) -> Json<Dashboard> {
    Json(dashboard.load(&user.name).await)
}
