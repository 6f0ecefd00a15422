use std::sync::Arc;

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use sapspot::{config, error, info, server, spotify::SpotifyClient, success};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Address and port to bind the API server to (overrides SERVER_ADDRESS)
    #[clap(long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() {
    config::load_env();

    let cli = Cli::parse();
    let address = cli.address.unwrap_or_else(config::server_addr);

    let spotify_config = config::SpotifyConfig::from_env();
    let client = match SpotifyClient::new(spotify_config) {
        Ok(client) => Arc::new(client),
        Err(e) => error!("Failed to build Spotify client: {}", e),
    };
    success!("Spotify client ready");
    if let Err(e) = server::start_api_server(&address, client).await {
        error!("Server terminated: {}", e);
    }
}
