use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handlers::news::get_active_news;
use crate::utils::state::AppState;

pub fn news_routes() -> Router<Arc<AppState>> {
    Router::new().route("/news", post(get_active_news))
}
