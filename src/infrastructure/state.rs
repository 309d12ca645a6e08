use std::sync::Arc;

use crate::infrastructure::{config::Config, store::StudentStore};

/// Everything a handler or resolver may touch, passed explicitly per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn StudentStore>,
}

impl AppState {
    pub fn new(config: Arc<Config>, store: Arc<dyn StudentStore>) -> Self {
        Self { config, store }
    }
}
