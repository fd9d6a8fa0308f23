//! Tracker API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.
//!
//! Middleware stack (outermost → innermost):
//! 1. Cache-Control: no-store → 2. Access logger

use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::simulation::RecoveryModel;

/// Build the tracker API router.
pub fn tracker_api_router(model: RecoveryModel) -> Router {
    build_router(ApiContext::new(model))
}

fn build_router(ctx: ApiContext) -> Router {
    // Layers are applied from bottom (innermost) to top (outermost).
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/form", get(endpoints::form::schema))
        .route("/tracker", post(endpoints::tracker::view))
        .route("/recommendation", post(endpoints::tracker::recommend))
        .route("/simulation", get(endpoints::simulation::trace))
        .route("/reports/csv", post(endpoints::reports::csv))
        .route("/reports/pdf", post(endpoints::reports::pdf))
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::access::log_access))
        // Responses carry patient data
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    Router::new().nest("/api", api)
}
