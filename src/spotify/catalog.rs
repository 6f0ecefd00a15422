use std::collections::HashSet;

use crate::{
    error::SpotifyError,
    spotify::{SpotifyClient, track},
    types::{
        AlbumTracksResponse, ArtistAlbumsResponse, CanonicalTrack, RawTrack, SearchResponse,
        SeveralTracksResponse, TopTracksResponse,
    },
};

/// Cap on the single page of releases fetched during an import. A scope
/// limit to bound worst-case latency, not a correctness requirement.
pub const ALBUM_PAGE_LIMIT: u32 = 50;

/// The upstream batch endpoint accepts at most this many track IDs.
pub const TRACK_BATCH_SIZE: usize = 50;

impl SpotifyClient {
    /// Fetches a single track by its Spotify ID and normalizes it.
    pub async fn fetch_track_by_id(&self, id: &str) -> Result<CanonicalTrack, SpotifyError> {
        let raw: RawTrack = self.get(&format!("/tracks/{id}")).await?;
        Ok(track::normalize(raw))
    }

    /// Searches for a track by ISRC, returning the best candidate.
    ///
    /// With an artist hint, candidates whose artist list contains a
    /// case-insensitive substring match sort first; the sort is stable so
    /// ties keep upstream order. Returns `Ok(None)` when the search comes
    /// back empty.
    pub async fn fetch_track_by_isrc(
        &self,
        isrc: &str,
        artist_hint: Option<&str>,
    ) -> Result<Option<CanonicalTrack>, SpotifyError> {
        let data: SearchResponse = self
            .get(&format!("/search?q=isrc:{isrc}&type=track&limit=5"))
            .await?;

        let mut items = data.tracks.map(|tracks| tracks.items).unwrap_or_default();
        if items.is_empty() {
            return Ok(None);
        }

        if let Some(hint) = artist_hint {
            let hint = hint.to_lowercase();
            items.sort_by_key(|candidate| if artist_matches(candidate, &hint) { 0 } else { 1 });
        }

        Ok(items.into_iter().next().map(track::normalize))
    }

    /// Fetches an artist's top tracks (US market, which the endpoint
    /// requires) and normalizes them.
    pub async fn fetch_artist_top_tracks(
        &self,
        artist_id: &str,
    ) -> Result<Vec<CanonicalTrack>, SpotifyError> {
        let data: TopTracksResponse = self
            .get(&format!("/artists/{artist_id}/top-tracks?market=US"))
            .await?;
        Ok(data.tracks.into_iter().map(track::normalize).collect())
    }

    /// Imports an artist's entire catalog: albums and singles, every track
    /// on each, deduplicated and fully resolved.
    ///
    /// Four stages, each a failure boundary that aborts the whole import
    /// rather than returning a silently incomplete catalog:
    ///
    /// 1. One bounded page of the artist's albums and singles.
    /// 2. Sequential per-album track listing, accumulating IDs into an
    ///    order-preserving deduplicating set (a track released as a single
    ///    and again on the parent album is imported once).
    /// 3. Batched full-track lookup over the deduplicated IDs.
    /// 4. Normalization, dropping the nulls the batch endpoint substitutes
    ///    for unresolvable IDs.
    ///
    /// Returns an empty list, not an error, when the artist has no albums.
    pub async fn import_artist_catalog(
        &self,
        artist_id: &str,
    ) -> Result<Vec<CanonicalTrack>, SpotifyError> {
        let albums: ArtistAlbumsResponse = self
            .get(&format!(
                "/artists/{artist_id}/albums?include_groups=album,single&limit={ALBUM_PAGE_LIMIT}"
            ))
            .await?;
        if albums.items.is_empty() {
            return Ok(Vec::new());
        }

        // Albums are listed one at a time to stay under the upstream rate
        // limit; a concurrent fan-out would need its own backoff budget.
        let mut seen = HashSet::new();
        let mut track_ids: Vec<String> = Vec::new();
        for album in &albums.items {
            let tracks: AlbumTracksResponse = self
                .get(&format!("/albums/{}/tracks?limit=50", album.id))
                .await?;
            for item in tracks.items {
                if let Some(id) = item.id {
                    if seen.insert(id.clone()) {
                        track_ids.push(id);
                    }
                }
            }
        }
        if track_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut catalog = Vec::with_capacity(track_ids.len());
        for chunk in track_ids.chunks(TRACK_BATCH_SIZE) {
            let batch: SeveralTracksResponse = self
                .get(&format!("/tracks?ids={}", chunk.join(",")))
                .await?;
            catalog.extend(batch.tracks.into_iter().flatten().map(track::normalize));
        }

        Ok(catalog)
    }
}

fn artist_matches(candidate: &RawTrack, hint: &str) -> bool {
    candidate.artists.iter().any(|artist| {
        artist
            .name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(hint))
    })
}
