use clap::Parser;
use std::net::SocketAddr;

use crate::engine::partition::{MAX_TEAMS, MIN_TEAMS};

/// Balanced team generator service for pickup basketball clubs
#[derive(Parser, Debug, Clone)]
#[command(name = "roster-balancer", version, about)]
pub struct Config {
    /// API listen address
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: String,

    /// Team count used when a request does not name one (2 or 3)
    #[arg(long, env = "DEFAULT_TEAM_COUNT", default_value = "2")]
    pub default_team_count: i64,

    /// Seed for the shared shuffle generator; omit to seed from OS entropy.
    /// A fixed seed replays the same sequence of team splits after restart.
    #[arg(long, env = "RNG_SEED")]
    pub rng_seed: Option<u64>,

    /// Largest player selection accepted in one request
    #[arg(long, env = "MAX_POOL_SIZE", default_value = "200")]
    pub max_pool_size: usize,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!("listen_addr '{}' is not a valid socket address", self.listen_addr);
        }
        if !(MIN_TEAMS as i64..=MAX_TEAMS as i64).contains(&self.default_team_count) {
            anyhow::bail!(
                "default_team_count must be between {} and {}",
                MIN_TEAMS,
                MAX_TEAMS
            );
        }
        if self.max_pool_size == 0 {
            anyhow::bail!("max_pool_size must be positive");
        }
        Ok(())
    }
}
