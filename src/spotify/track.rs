use crate::types::{CanonicalTrack, RawTrack};

/// Flattens a raw Spotify track record into the portal's canonical shape.
///
/// Pure and infallible: absent upstream fields map to null/empty defaults.
/// Cover art is taken from the first image entry, which Spotify orders
/// highest-resolution first. When the upstream canonical URL is missing, a
/// share link is constructed from the track ID instead.
pub fn normalize(raw: RawTrack) -> CanonicalTrack {
    let RawTrack {
        id,
        name,
        artists,
        duration_ms,
        album,
        external_ids,
        external_urls,
        preview_url,
    } = raw;

    let artists = artists.into_iter().filter_map(|a| a.name).collect();

    let (album_name, release_date, cover_art_url) = match album {
        Some(album) => (
            album.name,
            album.release_date,
            album.images.into_iter().next().map(|image| image.url),
        ),
        None => (None, None, None),
    };

    let spotify_url = external_urls
        .and_then(|urls| urls.spotify)
        .or_else(|| {
            id.as_ref()
                .map(|id| format!("https://open.spotify.com/track/{id}"))
        });

    CanonicalTrack {
        title: name,
        artists,
        duration_ms,
        isrc: external_ids.and_then(|ids| ids.isrc),
        album: album_name,
        release_date,
        preview_url,
        spotify_track_id: id,
        spotify_url,
        cover_art_url,
    }
}
