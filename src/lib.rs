//! Interest quote frontends.
//!
//! Two small web frontends, `membership` and `orders`, that read an amount
//! from a form, ask the interest backend for its current rate and render a
//! one-line quote. Both are the same router parameterised by [`Variant`].

pub mod app;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

pub use app::config::Config;
pub use app::router::build_router;
pub use app::server::{run, serve};
pub use app::state::{AppState, SharedState};
pub use models::quote::{compute_quote, parse_amount, parse_interest_rate};
pub use models::Variant;
