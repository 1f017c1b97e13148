use std::net::IpAddr;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use crate::app::config::Config;

pub const INTEREST_PATH: &str = "api/v1/interest";
pub const VERSION_PATH: &str = "version";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid backend url {0}")]
    InvalidUrl(String),

    #[error("could not access {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not access {url}: HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("could not read body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// The downstream service providing interest rates and its version.
#[async_trait]
pub trait InterestBackend: Send + Sync {
    async fn fetch_interest_rate(&self) -> Result<String, BackendError>;

    async fn fetch_version(&self) -> Result<String, BackendError>;
}

/// Plain HTTP client for the interest backend. No timeout, no retry.
pub struct BackendClient {
    client: Client,
    host: String,
    port: u16,
}

impl BackendClient {
    pub fn new(config: &Config) -> Self {
        Self::with_client(Client::new(), &config.backend_host, config.backend_port)
    }

    pub fn with_client(client: Client, host: &str, port: u16) -> Self {
        Self {
            client,
            host: host.to_string(),
            port,
        }
    }

    pub fn url_for(&self, path: &str) -> Result<Url, BackendError> {
        let invalid = || BackendError::InvalidUrl(format!("{}:{}/{}", self.host, self.port, path));

        let mut url = Url::parse("http://localhost/").map_err(|_| invalid())?;
        // IP literals go through set_ip_host so IPv6 gets bracketed
        match self.host.parse::<IpAddr>() {
            Ok(ip) => url.set_ip_host(ip).map_err(|_| invalid())?,
            Err(_) => url.set_host(Some(&self.host)).map_err(|_| invalid())?,
        }
        url.set_port(Some(self.port)).map_err(|_| invalid())?;

        url.join(path).map_err(|_| invalid())
    }

    async fn call(&self, path: &str) -> Result<String, BackendError> {
        let url = self.url_for(path)?;
        let url_text = url.to_string();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| {
                warn!("Could not access {}, got {}", url_text, source);
                BackendError::Transport {
                    url: url_text.clone(),
                    source,
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Non-OK HTTP status from {}: {}", url_text, status);
            return Err(BackendError::Status {
                url: url_text,
                status,
            });
        }

        info!("Response status of {}: {}", url_text, status);

        response.text().await.map_err(|source| BackendError::Body {
            url: url_text,
            source,
        })
    }
}

#[async_trait]
impl InterestBackend for BackendClient {
    async fn fetch_interest_rate(&self) -> Result<String, BackendError> {
        self.call(INTEREST_PATH).await
    }

    async fn fetch_version(&self) -> Result<String, BackendError> {
        self.call(VERSION_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        let backend = BackendClient::with_client(Client::new(), "interest", 8080);

        assert_eq!(
            backend.url_for(INTEREST_PATH).unwrap().as_str(),
            "http://interest:8080/api/v1/interest"
        );
        assert_eq!(
            backend.url_for(VERSION_PATH).unwrap().as_str(),
            "http://interest:8080/version"
        );
    }

    #[test]
    fn test_url_for_ip_hosts() {
        let v6 = BackendClient::with_client(Client::new(), "::1", 9090);
        let v4 = BackendClient::with_client(Client::new(), "10.0.0.7", 9090);

        assert_eq!(
            v6.url_for(INTEREST_PATH).unwrap().as_str(),
            "http://[::1]:9090/api/v1/interest"
        );
        assert_eq!(
            v4.url_for(VERSION_PATH).unwrap().as_str(),
            "http://10.0.0.7:9090/version"
        );
    }

    #[test]
    fn test_url_for_invalid_host() {
        let backend = BackendClient::with_client(Client::new(), "bad host", 8080);

        assert!(matches!(
            backend.url_for(VERSION_PATH),
            Err(BackendError::InvalidUrl(_))
        ));
    }
}
