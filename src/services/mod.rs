pub mod backend_client;
pub mod quote_service;

pub use backend_client::{BackendClient, BackendError, InterestBackend};
pub use quote_service::QuoteService;
