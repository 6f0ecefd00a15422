#![allow(dead_code)]

//! A local mock of the Spotify Web API, serving just enough of the surface
//! the proxy touches: the token endpoint, single/batch track lookup, ISRC
//! search, top tracks, album listing, and album track listing. Fixtures and
//! failure modes are controlled through shared state so each test can shape
//! the upstream behavior it needs.

use std::{
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};

use sapspot::config::SpotifyConfig;

pub struct MockState {
    /// Number of credential exchanges served.
    pub token_calls: AtomicUsize,
    /// When set, the token endpoint answers 500.
    pub fail_token: AtomicBool,
    /// `expires_in` reported by the token endpoint.
    pub token_lifetime: AtomicU64,
    /// Number of 429 responses to serve from /tracks/{id} before succeeding.
    pub rate_limited: AtomicUsize,
    /// `retry-after` header value sent with those 429s.
    pub retry_after: AtomicU64,
    /// Album fixtures per import: (album id, track ids on it).
    pub albums: Mutex<Vec<(String, Vec<String>)>>,
    /// Album id the track listing endpoint should 500 on.
    pub fail_album: Mutex<Option<String>>,
    /// Raw track fixtures returned by the top-tracks endpoint.
    pub top_tracks: Mutex<Vec<Value>>,
    /// Raw track fixtures returned by the search endpoint.
    pub search_items: Mutex<Vec<Value>>,
    /// Size of each batch lookup received, in request order.
    pub batch_sizes: Mutex<Vec<usize>>,
}

impl MockState {
    fn new() -> Self {
        MockState {
            token_calls: AtomicUsize::new(0),
            fail_token: AtomicBool::new(false),
            token_lifetime: AtomicU64::new(3600),
            rate_limited: AtomicUsize::new(0),
            retry_after: AtomicU64::new(0),
            albums: Mutex::new(Vec::new()),
            fail_album: Mutex::new(None),
            top_tracks: Mutex::new(Vec::new()),
            search_items: Mutex::new(Vec::new()),
            batch_sizes: Mutex::new(Vec::new()),
        }
    }

    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }
}

pub struct MockSpotify {
    pub addr: SocketAddr,
    pub state: Arc<MockState>,
}

impl MockSpotify {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::new());
        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/tracks", get(tracks_batch))
            .route("/v1/tracks/{id}", get(track))
            .route("/v1/search", get(search))
            .route("/v1/artists/{id}/top-tracks", get(top_tracks))
            .route("/v1/artists/{id}/albums", get(artist_albums))
            .route("/v1/albums/{id}/tracks", get(album_tracks))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockSpotify { addr, state }
    }

    /// A client config pointed at this mock, with the production defaults
    /// for everything that matters to behavior under test.
    pub fn config(&self) -> SpotifyConfig {
        SpotifyConfig {
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
            api_url: format!("http://{}/v1", self.addr),
            token_url: format!("http://{}/api/token", self.addr),
            timeout: Duration::from_secs(5),
            max_retries: 3,
        }
    }
}

/// A full raw track record as Spotify returns it, keyed off the ID.
pub fn track_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Track {id}"),
        "artists": [{ "id": "artist-1", "name": "Test Artist" }],
        "duration_ms": 180_000,
        "album": {
            "name": "Test Album",
            "release_date": "2024-01-01",
            "images": [
                { "url": format!("https://i.example/{id}/640.jpg"), "width": 640, "height": 640 },
                { "url": format!("https://i.example/{id}/64.jpg"), "width": 64, "height": 64 }
            ]
        },
        "external_ids": { "isrc": "USRC17607839" },
        "external_urls": { "spotify": format!("https://open.spotify.com/track/{id}") },
        "preview_url": null
    })
}

/// A raw track record with a specific artist name, for hint scoring tests.
pub fn track_json_with_artist(id: &str, artist: &str) -> Value {
    let mut track = track_json(id);
    track["artists"] = json!([{ "id": "artist-1", "name": artist }]);
    track
}

async fn token(State(state): State<Arc<MockState>>) -> Response {
    let n = state.token_calls.fetch_add(1, Ordering::SeqCst) + 1;
    if state.fail_token.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream auth down").into_response();
    }
    Json(json!({
        "access_token": format!("token-{n}"),
        "token_type": "Bearer",
        "expires_in": state.token_lifetime.load(Ordering::SeqCst)
    }))
    .into_response()
}

async fn track(State(state): State<Arc<MockState>>, Path(id): Path<String>) -> Response {
    if state.rate_limited.load(Ordering::SeqCst) > 0 {
        state.rate_limited.fetch_sub(1, Ordering::SeqCst);
        let retry_after = state.retry_after.load(Ordering::SeqCst).to_string();
        return (
            StatusCode::TOO_MANY_REQUESTS,
            [("retry-after", retry_after)],
            "slow down",
        )
            .into_response();
    }
    if id == "missing" {
        return (StatusCode::NOT_FOUND, "no such track").into_response();
    }
    Json(track_json(&id)).into_response()
}

#[derive(serde::Deserialize)]
struct BatchQuery {
    ids: String,
}

async fn tracks_batch(
    State(state): State<Arc<MockState>>,
    Query(query): Query<BatchQuery>,
) -> Response {
    let ids: Vec<&str> = query.ids.split(',').filter(|s| !s.is_empty()).collect();
    state.batch_sizes.lock().unwrap().push(ids.len());
    let tracks: Vec<Value> = ids
        .iter()
        .map(|id| {
            if id.starts_with("unresolvable") {
                Value::Null
            } else {
                track_json(id)
            }
        })
        .collect();
    Json(json!({ "tracks": tracks })).into_response()
}

async fn search(State(state): State<Arc<MockState>>) -> Response {
    let items = state.search_items.lock().unwrap().clone();
    Json(json!({ "tracks": { "items": items } })).into_response()
}

async fn top_tracks(State(state): State<Arc<MockState>>) -> Response {
    let tracks = state.top_tracks.lock().unwrap().clone();
    Json(json!({ "tracks": tracks })).into_response()
}

async fn artist_albums(State(state): State<Arc<MockState>>) -> Response {
    let items: Vec<Value> = state
        .albums
        .lock()
        .unwrap()
        .iter()
        .map(|(id, _)| json!({ "id": id }))
        .collect();
    Json(json!({ "items": items })).into_response()
}

async fn album_tracks(State(state): State<Arc<MockState>>, Path(id): Path<String>) -> Response {
    if state.fail_album.lock().unwrap().as_deref() == Some(id.as_str()) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "album listing broke").into_response();
    }
    let albums = state.albums.lock().unwrap();
    let items: Vec<Value> = albums
        .iter()
        .find(|(album_id, _)| *album_id == id)
        .map(|(_, tracks)| tracks.iter().map(|t| json!({ "id": t })).collect())
        .unwrap_or_default();
    Json(json!({ "items": items })).into_response()
}
