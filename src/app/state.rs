use std::sync::Arc;

use crate::app::config::Config;
use crate::services::{BackendClient, InterestBackend, QuoteService};

/// Read-only state shared by every request.
pub struct AppState {
    pub config: Config,
    pub quotes: QuoteService,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: Config) -> SharedState {
        let backend = Arc::new(BackendClient::new(&config));
        Self::with_backend(config, backend)
    }

    pub fn with_backend(config: Config, backend: Arc<dyn InterestBackend>) -> SharedState {
        Arc::new(Self {
            config,
            quotes: QuoteService::new(backend),
        })
    }
}
