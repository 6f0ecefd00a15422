use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    api::{ApiError, ApiJson, spotify_error_response},
    spotify::{SpotifyClient, ident},
    types::{ArtistRequest, CanonicalTrack},
};

/// `POST /fetch-artist-tracks` — an artist's top tracks.
pub async fn fetch_artist_tracks(
    State(client): State<Arc<SpotifyClient>>,
    ApiJson(body): ApiJson<ArtistRequest>,
) -> Result<Json<Vec<CanonicalTrack>>, ApiError> {
    let artist_id = require_artist_id(&body)?;

    let tracks = client
        .fetch_artist_top_tracks(&artist_id)
        .await
        .map_err(|e| {
            spotify_error_response(
                e,
                "Artist not found for the given ID.",
                "Invalid Spotify Artist ID provided.",
            )
        })?;

    if tracks.is_empty() {
        return Err(ApiError::not_found(
            "No top tracks found for the given artist ID.",
        ));
    }
    Ok(Json(tracks))
}

/// `POST /import-catalog` — an artist's full catalog, assembled by the
/// multi-stage importer.
pub async fn import_catalog(
    State(client): State<Arc<SpotifyClient>>,
    ApiJson(body): ApiJson<ArtistRequest>,
) -> Result<Json<Vec<CanonicalTrack>>, ApiError> {
    let artist_id = require_artist_id(&body)?;

    let tracks = client.import_artist_catalog(&artist_id).await.map_err(|e| {
        spotify_error_response(
            e,
            "Artist not found for the given ID.",
            "Invalid Spotify Artist ID provided.",
        )
    })?;

    if tracks.is_empty() {
        return Err(ApiError::not_found(
            "No tracks found for the given artist ID.",
        ));
    }
    Ok(Json(tracks))
}

fn require_artist_id(body: &ArtistRequest) -> Result<String, ApiError> {
    let input = body
        .spotify_artist_url_or_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::invalid_input("Provide a Spotify Artist URL or ID."))?;
    Ok(ident::extract_artist_id(input))
}
