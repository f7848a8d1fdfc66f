use axum::http::StatusCode;
use std::collections::HashSet;
use thiserror::Error;

use crate::roster::Player;

/// Request problems the service rejects before the engine sees them. The
/// engine itself normalises everything else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Player id must not be empty (player '{name}')")]
    EmptyPlayerId { name: String },

    #[error("Duplicate player id in selection: {id}")]
    DuplicatePlayer { id: String },

    #[error("Selection too large: {size} players, limit is {max}")]
    PoolTooLarge { size: usize, max: usize },
}

impl RosterError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RosterError::EmptyPlayerId { .. } | RosterError::DuplicatePlayer { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            RosterError::PoolTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

/// Check a selection before it is handed to the engine, which assumes
/// unique ids.
pub fn validate_pool(players: &[Player], max_size: usize) -> Result<(), RosterError> {
    if players.len() > max_size {
        return Err(RosterError::PoolTooLarge {
            size: players.len(),
            max: max_size,
        });
    }
    let mut seen = HashSet::with_capacity(players.len());
    for p in players {
        if p.id.trim().is_empty() {
            return Err(RosterError::EmptyPlayerId { name: p.name.clone() });
        }
        if !seen.insert(p.id.as_str()) {
            return Err(RosterError::DuplicatePlayer { id: p.id.clone() });
        }
    }
    Ok(())
}
