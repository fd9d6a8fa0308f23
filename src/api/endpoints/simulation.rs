//! Recovery simulation endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::types::ApiContext;
use crate::simulation::{simulate, SimulationTrace};

/// `GET /api/simulation` — model constants plus the full ICP/CBF/stress trace.
pub async fn trace(State(ctx): State<ApiContext>) -> Json<SimulationTrace> {
    Json(simulate(&ctx.model))
}
