use crate::config::Config;
use crate::store::ItemStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    pub config: Arc<Config>,
}
