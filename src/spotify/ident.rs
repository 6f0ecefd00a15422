//! Identifier normalization for user-typed Spotify references.
//!
//! The portal's forms accept whatever users paste: share links, `spotify:`
//! URIs, or bare IDs. Anything that matches none of those patterns passes
//! through trimmed and unchanged; genuinely invalid input is left for the
//! upstream API to reject with its own 400/404. That permissive fallback is
//! deliberate, not a missing validation gate.

use once_cell::sync::Lazy;
use regex::Regex;

static TRACK_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"open\.spotify\.com/track/([A-Za-z0-9]{22})").unwrap());
static TRACK_URI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^spotify:track:([A-Za-z0-9]{22})$").unwrap());
static ARTIST_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"open\.spotify\.com/artist/([A-Za-z0-9]{22})").unwrap());
static ARTIST_URI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^spotify:artist:([A-Za-z0-9]{22})$").unwrap());

// 2 letters (country), 3 alphanumerics (registrant), 7 digits (designation).
static ISRC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)[A-Z]{2}[A-Z0-9]{3}[0-9]{7}$").unwrap());

/// Extracts a track ID from a share URL, a `spotify:track:` URI, or a raw ID.
///
/// Query parameters on share links are stripped by the capture itself; the
/// ID is always exactly 22 alphanumeric characters.
pub fn extract_track_id(input: &str) -> String {
    extract(input, &TRACK_URL_RE, &TRACK_URI_RE)
}

/// Extracts an artist ID from a share URL, a `spotify:artist:` URI, or a
/// raw ID.
pub fn extract_artist_id(input: &str) -> String {
    extract(input, &ARTIST_URL_RE, &ARTIST_URI_RE)
}

fn extract(input: &str, url_re: &Regex, uri_re: &Regex) -> String {
    let s = input.trim();
    if let Some(caps) = url_re.captures(s) {
        return caps[1].to_string();
    }
    if let Some(caps) = uri_re.captures(s) {
        return caps[1].to_string();
    }
    // Assume it's a raw ID.
    s.to_string()
}

/// Validates the strict ISRC format, case-insensitively.
pub fn is_isrc(input: &str) -> bool {
    ISRC_RE.is_match(input.trim())
}
