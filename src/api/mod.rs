//! # API Module
//!
//! HTTP route handlers for the Spotify integration proxy. This is the sole
//! translation point from the internal error taxonomy to transport status
//! codes and the `{code, message}` error body the portal's client expects.
//!
//! ## Endpoints
//!
//! - [`fetch`] - single track by URL/ID or by ISRC (with optional artist
//!   hint disambiguation)
//! - [`fetch_artist_tracks`] - an artist's top tracks
//! - [`import_catalog`] - an artist's full catalog
//! - [`health`] - liveness check with version information
//!
//! ## Error Codes
//!
//! `SPOTIFY_INVALID_INPUT` (400), `SPOTIFY_NOT_FOUND` (404),
//! `SPOTIFY_RATE_LIMIT` (429), `SPOTIFY_AUTH_ERROR` (503), and
//! `SPOTIFY_UPSTREAM_ERROR` (502) for everything else. Only the 502
//! catch-all embeds the upstream diagnostic text.

mod artist;
mod fetch;
mod health;

pub use artist::{fetch_artist_tracks, import_catalog};
pub use fetch::fetch;
pub use health::health;

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::SpotifyError;

/// A route-level failure, rendered as `{code, message}` with the matching
/// HTTP status.
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            code: "SPOTIFY_INVALID_INPUT",
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::NOT_FOUND,
            code: "SPOTIFY_NOT_FOUND",
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "code": self.code, "message": self.message }));
        (self.status, body).into_response()
    }
}

/// Request-body extractor that keeps every failure path inside the
/// `{code, message}` error shape. An absent body decodes as the default
/// (all-fields-omitted) request, so handlers answer it with their own
/// missing-input message rather than a bare framework rejection.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::invalid_input("Could not read request body."))?;
        if bytes.is_empty() {
            return Ok(ApiJson(T::default()));
        }
        let value = serde_json::from_slice(&bytes)
            .map_err(|_| ApiError::invalid_input("Invalid JSON body."))?;
        Ok(ApiJson(value))
    }
}

/// Maps an internal error to its transport response. The not-found and
/// invalid-input messages differ per route (track vs artist wording), so the
/// caller supplies them.
pub(crate) fn spotify_error_response(
    err: SpotifyError,
    not_found_msg: &str,
    invalid_msg: &str,
) -> ApiError {
    match err {
        SpotifyError::Upstream { status: 404, .. } => ApiError::not_found(not_found_msg),
        SpotifyError::Upstream { status: 400, .. } => ApiError::invalid_input(invalid_msg),
        SpotifyError::Upstream { status: 429, .. } => ApiError {
            status: StatusCode::TOO_MANY_REQUESTS,
            code: "SPOTIFY_RATE_LIMIT",
            message: "Rate limit exceeded. Please try again later.".to_string(),
        },
        SpotifyError::Auth(_) => ApiError {
            status: StatusCode::SERVICE_UNAVAILABLE,
            code: "SPOTIFY_AUTH_ERROR",
            message: "Could not authenticate with Spotify.".to_string(),
        },
        SpotifyError::InvalidInput(message) => ApiError::invalid_input(message),
        SpotifyError::Upstream { status, body } => ApiError {
            status: StatusCode::BAD_GATEWAY,
            code: "SPOTIFY_UPSTREAM_ERROR",
            message: format!(
                "An unexpected error occurred with the Spotify API (status {status}: {body})"
            ),
        },
        other => ApiError {
            status: StatusCode::BAD_GATEWAY,
            code: "SPOTIFY_UPSTREAM_ERROR",
            message: format!("An unexpected error occurred with the Spotify API ({other})"),
        },
    }
}
