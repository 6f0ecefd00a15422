use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use futures::{
    FutureExt,
    future::{BoxFuture, Shared},
};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::{config::SpotifyConfig, error::SpotifyError, types::Token};

type RefreshFuture = Shared<BoxFuture<'static, Result<Token, SpotifyError>>>;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// Process-wide owner of the client-credentials bearer token.
///
/// The cached credential is replaced wholesale on refresh, never mutated.
/// When a refresh is already in flight, late callers attach to the same
/// shared future instead of issuing duplicate credential exchanges, so N
/// concurrent callers produce exactly one outbound request and all observe
/// the identical token (or the identical failure). The in-flight handle is
/// cleared on completion either way, so a later call can retry after a
/// failed exchange.
pub struct TokenManager {
    http: Client,
    config: SpotifyConfig,
    cache: Mutex<TokenCache>,
}

#[derive(Default)]
struct TokenCache {
    token: Option<Token>,
    refresh: Option<RefreshFuture>,
    // Incremented per refresh so a slow waiter from an old refresh cannot
    // clobber the state of a newer one.
    epoch: u64,
}

impl TokenManager {
    pub fn new(http: Client, config: SpotifyConfig) -> Self {
        TokenManager {
            http,
            config,
            cache: Mutex::new(TokenCache::default()),
        }
    }

    /// Returns a usable bearer token, refreshing it if the cached one is
    /// missing or within the safety margin of expiry.
    ///
    /// # Errors
    ///
    /// Returns [`SpotifyError::Auth`] when the credential exchange fails.
    pub async fn bearer(&self) -> Result<String, SpotifyError> {
        let (refresh, epoch) = {
            let mut cache = self.cache.lock().await;
            if let Some(token) = &cache.token {
                if !token.is_expired() {
                    return Ok(token.access_token.clone());
                }
            }
            match &cache.refresh {
                Some(pending) => (pending.clone(), cache.epoch),
                None => {
                    let pending = Self::exchange(self.http.clone(), self.config.clone())
                        .boxed()
                        .shared();
                    cache.epoch += 1;
                    cache.refresh = Some(pending.clone());
                    (pending, cache.epoch)
                }
            }
        };

        let result = refresh.await;

        let mut cache = self.cache.lock().await;
        if cache.epoch == epoch {
            cache.refresh = None;
            if let Ok(token) = &result {
                cache.token = Some(token.clone());
            }
        }
        Ok(result?.access_token)
    }

    /// Performs one client-credentials exchange against the token endpoint.
    ///
    /// Owned copies of the client and config keep the future `'static` so it
    /// can be shared between waiters. The per-request timeout configured on
    /// the HTTP client bounds the exchange.
    async fn exchange(http: Client, config: SpotifyConfig) -> Result<Token, SpotifyError> {
        let basic = STANDARD.encode(format!("{}:{}", config.client_id, config.client_secret));
        let response = http
            .post(&config.token_url)
            .header("Authorization", format!("Basic {basic}"))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| SpotifyError::Auth(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SpotifyError::Auth(format!(
                "token endpoint returned status {}",
                response.status().as_u16()
            )));
        }

        let json: TokenResponse = response
            .json()
            .await
            .map_err(|e| SpotifyError::Auth(e.to_string()))?;

        Ok(Token {
            access_token: json.access_token,
            expires_in: json.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }
}
