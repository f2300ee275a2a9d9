use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use http::StatusCode;
use serde_json::{json, Value};

use crate::models::error::Error;
use crate::models::news::ActiveNews;
use crate::utils::state::AppState;

/// Return the single entry currently flagged for display.
///
/// The request body is ignored. An empty store is a 200 with an explicit
/// null payload, never an error.
pub async fn get_active_news(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, Error> {
    let active = state.store.active_entry().await?;

    Ok((StatusCode::OK, Json(active_news_body(active))))
}

/// The enveloped response shape: `{"getActiveNews": <entry-or-null>}`.
pub fn active_news_body(active: Option<ActiveNews>) -> Value {
    json!({ "getActiveNews": active })
}
