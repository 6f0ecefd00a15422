use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};

use crate::{Res, api, info, spotify::SpotifyClient};

/// Builds the proxy's router. The Spotify routes live under the same prefix
/// the portal's client uses.
pub fn router(client: Arc<SpotifyClient>) -> Router {
    let spotify = Router::new()
        .route("/fetch", post(api::fetch))
        .route("/fetch-artist-tracks", post(api::fetch_artist_tracks))
        .route("/import-catalog", post(api::import_catalog))
        .with_state(client);

    Router::new()
        .route("/health", get(api::health))
        .nest("/api/integrations/spotify", spotify)
}

pub async fn start_api_server(addr: &str, client: Arc<SpotifyClient>) -> Res<()> {
    let addr = SocketAddr::from_str(addr)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, router(client)).await?;
    Ok(())
}
