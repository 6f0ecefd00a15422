//! # Spotify Integration Module
//!
//! The engine behind the proxy routes: authentication, rate-limit-aware
//! fetching, identifier handling, track normalization, and catalog import
//! orchestration against the Spotify Web API.
//!
//! ## Architecture
//!
//! ```text
//! HTTP Route Layer (api)
//!          ↓
//! Catalog Operations (catalog)
//!          ↓
//! Rate-Limited Fetcher (client) ── Track Normalizer (track)
//!          ↓
//! Token Manager (auth)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Client-credentials token manager with a process-wide cache
//!   and single-flight refresh shared by concurrent callers.
//! - [`client`] - Bearer-authenticated GETs with a bounded per-request
//!   timeout and bounded retry on HTTP 429 rate limiting.
//! - [`ident`] - Extraction of track/artist IDs from share URLs, URIs, and
//!   raw IDs, plus strict ISRC validation.
//! - [`track`] - Pure mapping from raw upstream track records to the
//!   portal's canonical track shape.
//! - [`catalog`] - The fetch operations themselves: single track, ISRC
//!   search with disambiguation, artist top tracks, and the multi-stage
//!   full-catalog import.
//!
//! ## Rate Limiting
//!
//! Bulk catalog imports issue dozens of sequential requests, so the fetcher
//! respects `Retry-After` hints on 429 responses and retries within a
//! configurable budget. The import pipeline is deliberately sequential; a
//! concurrent fan-out would multiply rate-limit pressure without a
//! coordinating backoff budget.

pub mod auth;
pub mod catalog;
pub mod client;
pub mod ident;
pub mod track;

pub use auth::TokenManager;
pub use client::SpotifyClient;
