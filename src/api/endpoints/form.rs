//! Form schema endpoint.

use axum::Json;

use crate::intake::{form_schema, FormSchema};

/// `GET /api/form` — selector keys, prompts and level options.
pub async fn schema() -> Json<FormSchema> {
    Json(form_schema())
}
