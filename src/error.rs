use thiserror::Error;

/// Error taxonomy for the Spotify integration layer.
///
/// The fetcher and token manager never swallow errors; everything surfaces as
/// one of these kinds and the route layer is the sole place they are turned
/// into transport status codes. The enum is `Clone` because an in-flight token
/// refresh is shared between concurrent callers, all of which must observe
/// the identical failure.
#[derive(Debug, Clone, Error)]
pub enum SpotifyError {
    /// The client-credentials exchange failed. Not retried automatically.
    #[error("Spotify credential exchange failed: {0}")]
    Auth(String),

    /// A single request exceeded the configured per-request timeout.
    #[error("request to Spotify timed out")]
    Timeout,

    /// Non-success response from the Spotify Web API, with the upstream
    /// status preserved. A 429 lands here once the retry budget is spent.
    #[error("Spotify returned status {status}")]
    Upstream { status: u16, body: String },

    /// The connection failed before any HTTP status was produced.
    #[error("transport error talking to Spotify: {0}")]
    Transport(String),

    /// Malformed caller input, detected before any network call.
    #[error("{0}")]
    InvalidInput(String),
}

impl SpotifyError {
    pub(crate) fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SpotifyError::Timeout
        } else {
            SpotifyError::Transport(e.to_string())
        }
    }
}
