//! Club-wide statistics over the full history, independent of any selection.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::skill::{tally_matches, PlayerRecord, Scope};
use crate::roster::Event;

/// Win record of every member that ever appeared on a historical team.
/// Unlike the balancing estimate, a member without decided games reports a
/// win rate of 0.
pub fn club_win_stats(history: &[Event]) -> BTreeMap<String, PlayerRecord> {
    let mut records: HashMap<String, PlayerRecord> = HashMap::new();
    tally_matches(history, &mut records, Scope::Everyone);

    // members fielded only in events without decided matches
    for event in history {
        for team in &event.teams {
            for id in &team.member_ids {
                records.entry(id.clone()).or_default();
            }
        }
    }

    records
        .into_iter()
        .map(|(id, mut rec)| {
            rec.finalize(0.0);
            (id, rec)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Participation {
    pub events_total: u32,
    pub events_played: u32,
    /// events_played / events_total
    pub participation_rate: f64,
}

/// How often each member was fielded: an event counts once per member no
/// matter how many of its teams list them.
pub fn participation(history: &[Event]) -> BTreeMap<String, Participation> {
    let events_total = history.len() as u32;
    let mut played: BTreeMap<String, u32> = BTreeMap::new();

    for event in history {
        let fielded: BTreeSet<&str> = event
            .teams
            .iter()
            .flat_map(|t| t.member_ids.iter().map(String::as_str))
            .collect();
        for id in fielded {
            *played.entry(id.to_string()).or_default() += 1;
        }
    }

    played
        .into_iter()
        .map(|(id, events_played)| {
            let participation_rate = if events_total > 0 {
                events_played as f64 / events_total as f64
            } else {
                0.0
            };
            (
                id,
                Participation {
                    events_total,
                    events_played,
                    participation_rate,
                },
            )
        })
        .collect()
}

/// Whole-number percentage, e.g. `0.666 -> "67%"`.
pub fn percent(ratio: f64) -> String {
    if !ratio.is_finite() {
        return "0%".to_string();
    }
    format!("{}%", (ratio * 100.0).round() as i64)
}
