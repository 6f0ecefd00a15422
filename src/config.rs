//! Configuration management for the Spotify integration proxy.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file in the working directory. Required
//! values (the Spotify client credentials) panic at startup when missing;
//! everything else carries a default matching the public Spotify endpoints.

use std::{env, time::Duration};

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing files are ignored so that fully env-configured deployments work
/// without one.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Returns the address the API server binds to.
///
/// Reads `SERVER_ADDRESS`, defaulting to `0.0.0.0:3001`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3001".to_string())
}

/// Returns the Spotify API client ID.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, defaulting to `https://api.spotify.com/v1`.
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify token exchange URL for the client-credentials grant.
///
/// Reads `SPOTIFY_TOKEN_URL`, defaulting to
/// `https://accounts.spotify.com/api/token`.
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the per-request timeout in milliseconds.
///
/// Reads `SPOTIFY_TIMEOUT_MS`, defaulting to 12000. Unparseable values fall
/// back to the default.
pub fn request_timeout_ms() -> u64 {
    env::var("SPOTIFY_TIMEOUT_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(12_000)
}

/// Returns the maximum number of retries after HTTP 429 responses.
///
/// Reads `SPOTIFY_MAX_RETRIES`, defaulting to 3. Unparseable values fall
/// back to the default.
pub fn max_retries() -> u32 {
    env::var("SPOTIFY_MAX_RETRIES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3)
}

/// Everything the Spotify client needs to talk upstream. Built from the
/// environment at startup; tests construct it directly to point the client
/// at a local mock.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub api_url: String,
    pub token_url: String,
    pub timeout: Duration,
    pub max_retries: u32,
}

impl SpotifyConfig {
    /// # Panics
    ///
    /// Panics if `SPOTIFY_CLIENT_ID` or `SPOTIFY_CLIENT_SECRET` is not set.
    pub fn from_env() -> Self {
        SpotifyConfig {
            client_id: spotify_client_id(),
            client_secret: spotify_client_secret(),
            api_url: spotify_api_url(),
            token_url: spotify_token_url(),
            timeout: Duration::from_millis(request_timeout_ms()),
            max_retries: max_retries(),
        }
    }
}
