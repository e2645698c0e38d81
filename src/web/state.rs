use std::sync::Arc;

use crate::catalog::Catalog;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(app_name: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            app_name: app_name.into(),
            catalog: Arc::new(catalog),
        }
    }
}
