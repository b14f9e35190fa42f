use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use super::StatusSource;
use super::error::StatusSourceError;
use super::types::RobotStatus;
use crate::config::DispatchConfig;

pub const DEFAULT_BASE_URL: &str = "https://svtrobotics.free.beeceptor.com";
pub const DEFAULT_ROBOTS_PATH: &str = "robots";

/// Fetches the robot roster from the fleet status service over HTTP.
pub struct HttpStatusSource {
    client: Client,
    url: String,
}

impl HttpStatusSource {
    pub fn from_config(config: &DispatchConfig) -> Result<Self, StatusSourceError> {
        Self::with_timeouts(
            &config.base_url,
            &config.robots_path,
            config.connect_timeout(),
            config.request_timeout(),
        )
    }

    #[cfg(test)]
    fn with_base_url(base_url: &str, robots_path: &str) -> Result<Self, StatusSourceError> {
        Self::with_timeouts(
            base_url,
            robots_path,
            Duration::from_secs(10),
            Duration::from_secs(30),
        )
    }

    pub fn with_timeouts(
        base_url: &str,
        robots_path: &str,
        connect_timeout: Duration,
        timeout: Duration,
    ) -> Result<Self, StatusSourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: join_url(base_url, robots_path),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl StatusSource for HttpStatusSource {
    async fn fetch_statuses(&self) -> Result<Vec<RobotStatus>, StatusSourceError> {
        tracing::debug!(url = %self.url, "fetching robot statuses");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(StatusSourceError::Status {
                status: status.as_u16(),
                message,
            });
        }

        // Decode separately so a bad body surfaces as Malformed, not as a transport error.
        let body = response.bytes().await?;
        let statuses: Vec<RobotStatus> = serde_json::from_slice(&body)?;
        tracing::debug!(count = statuses.len(), "robot statuses received");
        Ok(statuses)
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
