use std::sync::Arc;

use tracing::{error, info};

use crate::models::quote::{
    compute_quote, parse_interest_rate, INTEREST_UNAVAILABLE, UNKNOWN_VERSION,
};
use crate::services::backend_client::InterestBackend;

/// Combines user amounts with the backend's interest rate.
#[derive(Clone)]
pub struct QuoteService {
    backend: Arc<dyn InterestBackend>,
}

impl QuoteService {
    pub fn new(backend: Arc<dyn InterestBackend>) -> Self {
        Self { backend }
    }

    /// Returns the text to display for `amount`. The backend is only called
    /// for positive amounts; its failures turn into [`INTEREST_UNAVAILABLE`].
    pub async fn quote_for(&self, amount: i64) -> String {
        if amount <= 0 {
            return String::new();
        }

        match self.backend.fetch_interest_rate().await {
            Ok(body) => {
                info!("Found interest rate {}", body);
                compute_quote(amount, parse_interest_rate(&body))
            }
            Err(e) => {
                error!("Interest error: {}", e);
                INTEREST_UNAVAILABLE.to_string()
            }
        }
    }

    pub async fn backend_version(&self) -> String {
        match self.backend.fetch_version().await {
            Ok(version) => version,
            Err(e) => {
                error!("Version error: {}", e);
                UNKNOWN_VERSION.to_string()
            }
        }
    }
}
