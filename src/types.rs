use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Seconds subtracted from a credential's declared lifetime so a token is
/// never used right as it expires mid-request.
pub const TOKEN_SAFETY_MARGIN_SECS: u64 = 30;

/// A cached client-credentials bearer token. Replaced wholesale on refresh,
/// never mutated in place.
#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now.saturating_sub(self.obtained_at)
            >= self.expires_in.saturating_sub(TOKEN_SAFETY_MARGIN_SECS)
    }
}

/// The portal's normalized track record, independent of upstream response
/// shape. Every optional field degrades to null/empty when absent upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalTrack {
    pub title: Option<String>,
    pub artists: Vec<String>,
    pub duration_ms: Option<u64>,
    pub isrc: Option<String>,
    pub album: Option<String>,
    pub release_date: Option<String>,
    pub preview_url: Option<String>,
    pub spotify_track_id: Option<String>,
    pub spotify_url: Option<String>,
    pub cover_art_url: Option<String>,
}

// Raw Spotify Web API shapes. Everything nested is optional so the
// normalizer never fails on partial records.

#[derive(Debug, Clone, Deserialize)]
pub struct RawTrack {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<RawArtist>,
    pub duration_ms: Option<u64>,
    pub album: Option<RawAlbum>,
    pub external_ids: Option<ExternalIds>,
    pub external_urls: Option<ExternalUrls>,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawArtist {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAlbum {
    pub name: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalIds {
    pub isrc: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: Option<SearchTracks>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchTracks {
    #[serde(default)]
    pub items: Vec<RawTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    #[serde(default)]
    pub tracks: Vec<RawTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistAlbumsResponse {
    #[serde(default)]
    pub items: Vec<AlbumStub>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumStub {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumTracksResponse {
    #[serde(default)]
    pub items: Vec<TrackStub>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackStub {
    pub id: Option<String>,
}

/// The batch endpoint returns null in place of unresolvable IDs.
#[derive(Debug, Clone, Deserialize)]
pub struct SeveralTracksResponse {
    #[serde(default)]
    pub tracks: Vec<Option<RawTrack>>,
}

// Inbound request bodies for the proxy routes. `Default` lets an absent
// body decode as if every field were omitted.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchTrackRequest {
    pub spotify_url_or_id: Option<String>,
    pub isrc: Option<String>,
    pub artist_hint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRequest {
    pub spotify_artist_url_or_id: Option<String>,
}
