use std::sync::Arc;

use crate::db::NewsStore;
use crate::utils::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NewsStore>,
    pub config: Config,
}
