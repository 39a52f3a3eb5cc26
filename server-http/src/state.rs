use carbon::CacheEngine;
use std::sync::Arc;

/// Server state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub engine: Arc<CacheEngine>,
}

impl AppState {
    pub fn new(engine: Arc<CacheEngine>) -> Self {
        Self { engine }
    }
}
