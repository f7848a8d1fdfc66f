use serde::Serialize;
use std::collections::HashMap;

use crate::roster::{HistoricalTeam, MatchOutcome, MatchRecord, Team};

/// Every pairing of `teams` in team order (A-B, A-C, B-C, ...), results unset.
pub fn round_robin(teams: &[Team]) -> Vec<MatchRecord> {
    let mut matches = Vec::new();
    for (i, home) in teams.iter().enumerate() {
        for away in &teams[i + 1..] {
            matches.push(MatchRecord {
                id: format!("{}-{}", home.id, away.id),
                team1_id: home.id.to_string(),
                team2_id: away.id.to_string(),
                result: None,
            });
        }
    }
    matches
}

/// Win/draw/loss line for one team of an event
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Standing {
    pub team_id: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl Standing {
    pub fn played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

/// Standings for `teams` from the decided `matches`, in team order. Matches
/// that reference a team outside `teams` are skipped.
pub fn standings(teams: &[HistoricalTeam], matches: &[MatchRecord]) -> Vec<Standing> {
    let mut table: Vec<Standing> = teams
        .iter()
        .map(|t| Standing {
            team_id: t.id.clone(),
            ..Default::default()
        })
        .collect();
    let index: HashMap<&str, usize> = teams.iter().enumerate().map(|(i, t)| (t.id.as_str(), i)).collect();

    for m in matches {
        let Some(result) = m.result else {
            continue;
        };
        let (Some(&t1), Some(&t2)) = (index.get(m.team1_id.as_str()), index.get(m.team2_id.as_str())) else {
            continue;
        };
        match result {
            MatchOutcome::Team1Win => {
                table[t1].wins += 1;
                table[t2].losses += 1;
            }
            MatchOutcome::Team2Win => {
                table[t2].wins += 1;
                table[t1].losses += 1;
            }
            MatchOutcome::Draw => {
                table[t1].draws += 1;
                table[t2].draws += 1;
            }
        }
    }
    table
}
