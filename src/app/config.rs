use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::models::Variant;

#[derive(Debug, Clone)]
pub struct Config {
    pub variant: Variant,
    pub bind_address: String,
    pub port: u16,
    pub app_version: String,
    pub backend_host: String,
    pub backend_port: u16,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env(variant: Variant) -> Self {
        Self::from_lookup(variant, |key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Empty values count as
    /// unset.
    pub fn from_lookup<F>(variant: Variant, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            variant,
            bind_address: var("BIND_ADDRESS", "0.0.0.0"),
            port: parse_port("PORT", &var("PORT", "8080"), 8080),
            app_version: var("APP_VERSION", "dev"),
            backend_host: var("BACKEND_HOST", "interest"),
            backend_port: parse_port("BACKEND_PORT", &var("BACKEND_PORT", "8080"), 8080),
            static_dir: PathBuf::from(var("STATIC_DIR", &variant.default_static_dir())),
        }
    }
}

fn parse_port(key: &str, value: &str, default: u16) -> u16 {
    value.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {value:?}: {e}, using default {default}");
        default
    })
}
