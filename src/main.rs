use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tracing::info;

use roster_balancer::config::Config;
use roster_balancer::service::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    match config.rng_seed {
        Some(seed) => info!("Shuffle generator seeded with {} (replayable splits)", seed),
        None => info!("Shuffle generator seeded from OS entropy"),
    }
    info!(
        "Default team count {}, max selection {} players",
        config.default_team_count, config.max_pool_size
    );

    let app = service::router(AppState::new(&config));
    let addr: SocketAddr = config.listen_addr.parse()?;
    info!("Team generator listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
