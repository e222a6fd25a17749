pub mod api;
pub mod config;
pub mod db;
pub mod service;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("users_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!("Starting users API...");

    api::server::start_server(&config).await
}
