//! Per-player skill estimates derived from recorded match results.
//!
//! Every decided match credits each member of both sides with one game plus
//! a win, loss or draw. The resulting win rate counts a draw as half a win:
//!
//!   win_rate = (wins + 0.5 · draws) / games
//!
//! A record only becomes a balancing signal once it is *eligible*, i.e. the
//! player has at least [`MIN_ELIGIBLE_GAMES`] decided games behind them.
//! Until then the player weighs in at the neutral [`NEUTRAL_WIN_RATE`].

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::roster::{Event, MatchOutcome, Player};

/// Games required before a win rate is trusted.
pub const MIN_ELIGIBLE_GAMES: u32 = 5;

/// Strength assumed for players without a trusted record.
pub const NEUTRAL_WIN_RATE: f64 = 0.5;

/// Running record of one player over the supplied history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerRecord {
    pub games: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub win_rate: f64,
    pub eligible: bool,
}

impl Default for PlayerRecord {
    fn default() -> Self {
        PlayerRecord {
            games: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            win_rate: NEUTRAL_WIN_RATE,
            eligible: false,
        }
    }
}

impl PlayerRecord {
    /// Contribution of this player to a team's aggregate strength.
    pub fn strength(&self) -> f64 {
        if self.eligible {
            self.win_rate
        } else {
            NEUTRAL_WIN_RATE
        }
    }

    fn credit(&mut self, side: SideResult) {
        self.games += 1;
        match side {
            SideResult::Won => self.wins += 1,
            SideResult::Lost => self.losses += 1,
            SideResult::Drew => self.draws += 1,
        }
    }

    /// Derive `win_rate` and `eligible` from the raw counts. `empty_rate` is
    /// used when no games were recorded.
    pub(crate) fn finalize(&mut self, empty_rate: f64) {
        self.win_rate = if self.games > 0 {
            (self.wins as f64 + 0.5 * self.draws as f64) / self.games as f64
        } else {
            empty_rate
        };
        self.eligible = self.games >= MIN_ELIGIBLE_GAMES;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SideResult {
    Won,
    Lost,
    Drew,
}

/// Which players a history fold keeps records for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    /// Only ids already present in the map (the current selection)
    Pool,
    /// Anyone who shows up on a historical team
    Everyone,
}

/// Fold every decided match of `events` into `records`.
pub(crate) fn tally_matches(events: &[Event], records: &mut HashMap<String, PlayerRecord>, scope: Scope) {
    for event in events {
        if event.matches.is_empty() {
            continue;
        }

        // team id -> member ids, built once per event
        let rosters: HashMap<&str, &[String]> = event
            .teams
            .iter()
            .map(|t| (t.id.as_str(), t.member_ids.as_slice()))
            .collect();

        for m in &event.matches {
            let Some(outcome) = m.result else {
                continue;
            };
            let side1 = rosters.get(m.team1_id.as_str()).copied().unwrap_or(&[]);
            let side2 = rosters.get(m.team2_id.as_str()).copied().unwrap_or(&[]);

            let (r1, r2) = match outcome {
                MatchOutcome::Team1Win => (SideResult::Won, SideResult::Lost),
                MatchOutcome::Team2Win => (SideResult::Lost, SideResult::Won),
                MatchOutcome::Draw => (SideResult::Drew, SideResult::Drew),
            };
            credit_side(records, scope, side1, r1);
            credit_side(records, scope, side2, r2);
        }
    }
}

fn credit_side(records: &mut HashMap<String, PlayerRecord>, scope: Scope, ids: &[String], result: SideResult) {
    for id in ids {
        match scope {
            Scope::Pool => {
                if let Some(rec) = records.get_mut(id) {
                    rec.credit(result);
                }
            }
            Scope::Everyone => records.entry(id.clone()).or_default().credit(result),
        }
    }
}

/// Skill records for the current selection, keyed by player id.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SkillTable {
    records: HashMap<String, PlayerRecord>,
}

impl SkillTable {
    pub fn get(&self, id: &str) -> Option<&PlayerRecord> {
        self.records.get(id)
    }

    /// Balancing weight for `id`; unknown players count as neutral.
    pub fn strength(&self, id: &str) -> f64 {
        self.records
            .get(id)
            .map(PlayerRecord::strength)
            .unwrap_or(NEUTRAL_WIN_RATE)
    }

    pub fn is_eligible(&self, id: &str) -> bool {
        self.records.get(id).is_some_and(|r| r.eligible)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlayerRecord)> {
        self.records.iter().map(|(id, r)| (id.as_str(), r))
    }
}

/// Build a record for every player in `pool` from `history`. Players that
/// appear in history but not in the pool are ignored.
pub fn estimate(pool: &[Player], history: &[Event]) -> SkillTable {
    let mut records: HashMap<String, PlayerRecord> = pool
        .iter()
        .map(|p| (p.id.clone(), PlayerRecord::default()))
        .collect();

    tally_matches(history, &mut records, Scope::Pool);

    for rec in records.values_mut() {
        rec.finalize(NEUTRAL_WIN_RATE);
    }

    let eligible = records.values().filter(|r| r.eligible).count();
    debug!(
        "Skill estimate: {} players, {} eligible, {} events",
        records.len(),
        eligible,
        history.len()
    );

    SkillTable { records }
}
