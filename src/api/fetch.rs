use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    api::{ApiError, ApiJson, spotify_error_response},
    spotify::{SpotifyClient, ident},
    types::{CanonicalTrack, FetchTrackRequest},
};

/// `POST /fetch` — resolves a single track from either a Spotify URL/ID or
/// an ISRC, whichever the caller provided. Empty or whitespace-only fields
/// count as absent, so a blank `spotifyUrlOrId` falls through to the ISRC.
pub async fn fetch(
    State(client): State<Arc<SpotifyClient>>,
    ApiJson(body): ApiJson<FetchTrackRequest>,
) -> Result<Json<CanonicalTrack>, ApiError> {
    let url_or_id = present(body.spotify_url_or_id.as_deref());
    let isrc = present(body.isrc.as_deref());

    if let Some(input) = url_or_id {
        let id = ident::extract_track_id(input);
        return client
            .fetch_track_by_id(&id)
            .await
            .map(Json)
            .map_err(|e| {
                spotify_error_response(
                    e,
                    "Track not found for the given ID.",
                    "Invalid Spotify ID provided.",
                )
            });
    }

    if let Some(isrc) = isrc {
        if !ident::is_isrc(isrc) {
            return Err(ApiError::invalid_input("Bad ISRC."));
        }
        let track = client
            .fetch_track_by_isrc(&isrc.to_uppercase(), body.artist_hint.as_deref())
            .await
            .map_err(|e| {
                spotify_error_response(
                    e,
                    "Track not found for the given ISRC.",
                    "Invalid Spotify ID provided.",
                )
            })?;
        return match track {
            Some(track) => Ok(Json(track)),
            None => Err(ApiError::not_found("Track not found for the given ISRC.")),
        };
    }

    Err(ApiError::invalid_input("Provide spotifyUrlOrId or isrc."))
}

fn present(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}
