pub mod config;
pub mod router;
pub mod server;
pub mod state;
pub mod telemetry;
