use std::sync::Arc;

use ordem_db::repositories::TecnicoRepository;

use crate::config::ServerConfig;
use crate::services::TecnicoService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Technician use cases.
    pub tecnicos: TecnicoService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(repo: Arc<dyn TecnicoRepository>, config: ServerConfig) -> Self {
        Self {
            tecnicos: TecnicoService::new(repo),
            config: Arc::new(config),
        }
    }
}
