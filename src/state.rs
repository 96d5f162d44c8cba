//! Shared application state
//!
//! Estado compartido que se pasa a través del router de Axum. Solo contiene
//! configuración inmutable: los generadores no comparten estado entre llamadas.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvironmentConfig>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
