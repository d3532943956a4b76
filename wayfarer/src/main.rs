#![recursion_limit = "512"]
mod config;
mod web;

use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env()?;
    info!(
        "wayfarer listening on {}, search service at {}",
        config.listen_addr, config.upstream_url
    );
    web::start(config).await
}
