//! HTTP request metrics
//!
//! - `swiftcafe_http_requests_total` counter: `method`, `route`, `status`
//! - `swiftcafe_http_request_duration_seconds` histogram: `method`, `route`
//!
//! Unmatched paths share one `route` label to keep cardinality bounded.

use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};

pub async fn http_metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();

    metrics::counter!(
        "swiftcafe_http_requests_total",
        "method" => method.clone(),
        "route" => route.clone(),
        "status" => status
    )
    .increment(1);
    metrics::histogram!(
        "swiftcafe_http_request_duration_seconds",
        "method" => method,
        "route" => route
    )
    .record(elapsed);

    response
}
