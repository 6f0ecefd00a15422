use sapspot::spotify::track::normalize;
use sapspot::types::RawTrack;
use serde_json::json;

fn raw(value: serde_json::Value) -> RawTrack {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_normalize_full_record() {
    let track = normalize(raw(json!({
        "id": "6rqhFgbbKwnb9MLmUQDhG6",
        "name": "Breathe",
        "artists": [
            { "id": "a1", "name": "Pink Floyd" },
            { "id": "a2", "name": "Guest" }
        ],
        "duration_ms": 169_534,
        "album": {
            "name": "The Dark Side of the Moon",
            "release_date": "1973-03-01",
            "images": [
                { "url": "https://i.example/640.jpg", "width": 640, "height": 640 },
                { "url": "https://i.example/64.jpg", "width": 64, "height": 64 }
            ]
        },
        "external_ids": { "isrc": "GBN9Y1100080" },
        "external_urls": { "spotify": "https://open.spotify.com/track/6rqhFgbbKwnb9MLmUQDhG6" },
        "preview_url": "https://p.example/preview.mp3"
    })));

    assert_eq!(track.title.as_deref(), Some("Breathe"));
    assert_eq!(track.artists, vec!["Pink Floyd", "Guest"]);
    assert_eq!(track.duration_ms, Some(169_534));
    assert_eq!(track.isrc.as_deref(), Some("GBN9Y1100080"));
    assert_eq!(track.album.as_deref(), Some("The Dark Side of the Moon"));
    assert_eq!(track.release_date.as_deref(), Some("1973-03-01"));
    assert_eq!(track.preview_url.as_deref(), Some("https://p.example/preview.mp3"));
    assert_eq!(track.spotify_track_id.as_deref(), Some("6rqhFgbbKwnb9MLmUQDhG6"));
    assert_eq!(
        track.spotify_url.as_deref(),
        Some("https://open.spotify.com/track/6rqhFgbbKwnb9MLmUQDhG6")
    );
    // First image wins (Spotify orders highest resolution first)
    assert_eq!(track.cover_art_url.as_deref(), Some("https://i.example/640.jpg"));
}

#[test]
fn test_normalize_empty_record_degrades_to_defaults() {
    let track = normalize(raw(json!({})));

    assert_eq!(track.title, None);
    assert!(track.artists.is_empty());
    assert_eq!(track.duration_ms, None);
    assert_eq!(track.isrc, None);
    assert_eq!(track.album, None);
    assert_eq!(track.release_date, None);
    assert_eq!(track.preview_url, None);
    assert_eq!(track.spotify_track_id, None);
    // No ID to construct a share link from either
    assert_eq!(track.spotify_url, None);
    assert_eq!(track.cover_art_url, None);
}

#[test]
fn test_normalize_url_fallback_from_id() {
    let track = normalize(raw(json!({
        "id": "6rqhFgbbKwnb9MLmUQDhG6",
        "name": "Untitled"
    })));

    assert_eq!(
        track.spotify_url.as_deref(),
        Some("https://open.spotify.com/track/6rqhFgbbKwnb9MLmUQDhG6")
    );
}

#[test]
fn test_normalize_url_fallback_when_external_urls_empty() {
    // external_urls present but without a spotify entry still falls back
    let track = normalize(raw(json!({
        "id": "6rqhFgbbKwnb9MLmUQDhG6",
        "external_urls": {}
    })));

    assert_eq!(
        track.spotify_url.as_deref(),
        Some("https://open.spotify.com/track/6rqhFgbbKwnb9MLmUQDhG6")
    );
}

#[test]
fn test_normalize_skips_unnamed_artists() {
    let track = normalize(raw(json!({
        "artists": [
            { "id": "a1", "name": "Named" },
            { "id": "a2" }
        ]
    })));

    assert_eq!(track.artists, vec!["Named"]);
}

#[test]
fn test_normalize_album_without_images() {
    let track = normalize(raw(json!({
        "album": { "name": "Sparse", "release_date": "2020-01-01" }
    })));

    assert_eq!(track.album.as_deref(), Some("Sparse"));
    assert_eq!(track.cover_art_url, None);
}
