use std::time::Duration;

use reqwest::{Client, StatusCode, header::HeaderMap};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{config::SpotifyConfig, error::SpotifyError, spotify::TokenManager, warning};

/// Rate-limit-aware HTTP client for the Spotify Web API.
///
/// Attaches a bearer token from the [`TokenManager`] to every request. On
/// HTTP 429 it sleeps for the `Retry-After` hint plus one second and retries
/// the same request, up to the configured maximum; exhausting the budget
/// surfaces the 429 as [`SpotifyError::Upstream`]. Bulk catalog imports issue
/// dozens of sequential requests, which is exactly when the upstream
/// per-client rate limit bites.
pub struct SpotifyClient {
    http: Client,
    tokens: TokenManager,
    config: SpotifyConfig,
}

impl SpotifyClient {
    pub fn new(config: SpotifyConfig) -> Result<Self, SpotifyError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SpotifyError::Transport(format!("failed to build http client: {e}")))?;
        let tokens = TokenManager::new(http.clone(), config.clone());
        Ok(SpotifyClient {
            http,
            tokens,
            config,
        })
    }

    /// Issues an authenticated GET for `path` (relative to the API base URL)
    /// and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::Auth`] when token acquisition fails
    /// - [`SpotifyError::Timeout`] when the per-request timeout elapses
    /// - [`SpotifyError::Upstream`] for non-2xx responses, including a 429
    ///   once the retry budget is spent
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, SpotifyError> {
        let url = format!("{}{}", self.config.api_url, path);
        let mut attempt: u32 = 0;

        loop {
            let token = self.tokens.bearer().await?;
            let response = self
                .http
                .get(&url)
                .bearer_auth(&token)
                .send()
                .await
                .map_err(SpotifyError::from_reqwest)?;

            if response.status() == StatusCode::TOO_MANY_REQUESTS
                && attempt < self.config.max_retries
            {
                let hint = retry_after_secs(response.headers());
                attempt += 1;
                warning!(
                    "Rate limited on {}; retrying in {}s (attempt {}/{})",
                    path,
                    hint + 1,
                    attempt,
                    self.config.max_retries
                );
                sleep(Duration::from_secs(hint + 1)).await;
                continue;
            }

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                return Err(SpotifyError::Upstream { status, body });
            }

            return response.json::<T>().await.map_err(SpotifyError::from_reqwest);
        }
    }
}

/// Reads the `Retry-After` hint in seconds, defaulting to 1 when the header
/// is absent or malformed.
fn retry_after_secs(headers: &HeaderMap) -> u64 {
    headers
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}
