//! Tracker endpoints.
//!
//! Two endpoints:
//! - `POST /api/tracker` — full view recomputed from the posted form
//! - `POST /api/recommendation` — recommendation banner only

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::intake::{SymptomForm, SymptomFormInput};
use crate::recommendation::{self, Recommendation};
use crate::table::build_symptom_table;
use crate::tracker::{build_view, TrackerView};

/// `POST /api/tracker` — table, recommendation, charts and download names.
pub async fn view(
    State(ctx): State<ApiContext>,
    ApiJson(input): ApiJson<SymptomFormInput>,
) -> Result<Json<TrackerView>, ApiError> {
    let form = SymptomForm::try_from(input)?;
    Ok(Json(build_view(&form, &ctx.model)))
}

#[derive(Serialize)]
pub struct RecommendationResponse {
    pub daily_averages: Vec<f64>,
    pub recommendation: Recommendation,
}

/// `POST /api/recommendation`
pub async fn recommend(
    ApiJson(input): ApiJson<SymptomFormInput>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let form = SymptomForm::try_from(input)?;
    let table = build_symptom_table(&form);
    let daily_averages = recommendation::daily_averages(&table);
    let recommendation = recommendation::recommend_from_averages(&daily_averages);
    Ok(Json(RecommendationResponse {
        daily_averages,
        recommendation,
    }))
}
