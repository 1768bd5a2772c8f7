use nl_core::NewsQueries;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn NewsQueries>,
}

impl AppState {
    pub fn new(queries: Arc<dyn NewsQueries>) -> Self {
        Self { queries }
    }
}
