//! Spotify Integration Proxy Library
//!
//! This library implements the Spotify-facing half of the Sap Media publishing
//! portal: a thin HTTP proxy that turns raw Spotify Web API responses into the
//! portal's canonical track shape. It includes modules for token management,
//! rate-limit-aware fetching, identifier normalization, and catalog import
//! orchestration.
//!
//! # Modules
//!
//! - `api` - HTTP route handlers and error translation
//! - `config` - Configuration management and environment variables
//! - `error` - The internal error taxonomy
//! - `server` - HTTP server setup and routing
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use sapspot::{config, server, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> sapspot::Res<()> {
//!     config::load_env();
//!     let client = Arc::new(SpotifyClient::new(config::SpotifyConfig::from_env())?);
//!     server::start_api_server(&config::server_addr(), client).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for fallible startup and server plumbing.
///
/// The Spotify client itself uses the typed [`error::SpotifyError`]; this
/// boxed alias covers the places where heterogeneous errors meet (address
/// parsing, socket binding, serving).
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Server started");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Reserved for unrecoverable startup failures (bad configuration, bind
/// errors). Request-scoped failures flow through [`error::SpotifyError`]
/// instead.
///
/// # Example
///
/// ```
/// error!("Failed to parse server address: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Rate limited; retrying in {}s", delay);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
