use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::Config;
use crate::engine::club_stats::{club_win_stats, participation, percent, Participation};
use crate::engine::fixtures::{round_robin, standings, Standing};
use crate::engine::{generate_teams, PlayerRecord, SkillTable};
use crate::error::{validate_pool, RosterError};
use crate::roster::{Event, MatchRecord, Player, Team, TeamColor};

pub struct AppState {
    /// Shared shuffle source; locked for the length of one partition.
    rng: Mutex<StdRng>,
    pub default_team_count: i64,
    pub max_pool_size: usize,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        AppState {
            rng: Mutex::new(rng),
            default_team_count: config.default_team_count,
            max_pool_size: config.max_pool_size,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Build the Axum router for the team-generation API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/teams", post(generate_handler))
        .route("/api/stats", post(stats_handler))
        .route("/api/standings", post(standings_handler))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

async fn health_handler() -> &'static str {
    "ok"
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub players: Vec<Player>,
    #[serde(default)]
    pub history: Vec<Event>,
    /// Falls back to the configured default
    #[serde(default)]
    pub team_count: Option<i64>,
    #[serde(default)]
    pub colors: Vec<TeamColor>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub teams: Vec<Team>,
    /// Empty round-robin schedule for the new teams
    pub fixtures: Vec<MatchRecord>,
    /// Per-player records that drove the split
    pub records: SkillTable,
}

/// POST /api/teams
async fn generate_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, RosterError> {
    validate_pool(&req.players, state.max_pool_size)?;
    let team_count = req.team_count.unwrap_or(state.default_team_count);

    let (teams, records) = {
        // StdRng has no invariant a panicking holder could break
        let mut rng = state.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        generate_teams(&req.players, &req.history, team_count, &req.colors, &mut *rng)
    };
    let fixtures = round_robin(&teams);

    info!(
        "Teams generated: {} players, {} history events, {} fixtures",
        req.players.len(),
        req.history.len(),
        fixtures.len()
    );
    Ok(Json(GenerateResponse {
        teams,
        fixtures,
        records,
    }))
}

#[derive(Debug, Deserialize)]
pub struct StatsRequest {
    #[serde(default)]
    pub history: Vec<Event>,
}

#[derive(Debug, Serialize)]
pub struct MemberStatsRow {
    pub id: String,
    #[serde(flatten)]
    pub record: PlayerRecord,
    pub participation: Option<Participation>,
    /// e.g. "67%"
    pub win_rate_label: String,
    pub participation_label: String,
}

/// POST /api/stats
async fn stats_handler(Json(req): Json<StatsRequest>) -> Json<Vec<MemberStatsRow>> {
    let wins = club_win_stats(&req.history);
    let attendance = participation(&req.history);

    let rows: Vec<MemberStatsRow> = wins
        .into_iter()
        .map(|(id, record)| {
            let part = attendance.get(&id).copied();
            MemberStatsRow {
                win_rate_label: percent(record.win_rate),
                participation_label: percent(part.map(|p| p.participation_rate).unwrap_or(0.0)),
                participation: part,
                record,
                id,
            }
        })
        .collect();

    info!("Club stats computed for {} members", rows.len());
    Json(rows)
}

#[derive(Debug, Deserialize)]
pub struct StandingsRequest {
    pub event: Event,
}

/// POST /api/standings
async fn standings_handler(Json(req): Json<StandingsRequest>) -> Json<Vec<Standing>> {
    Json(standings(&req.event.teams, &req.event.matches))
}
