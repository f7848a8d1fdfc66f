//! Greedy, position-tiered team partitioner.
//!
//! Players are seeded tier by tier (centers, then forwards, then guards). Each
//! tier is shuffled, then stably re-ordered so that players with a trusted
//! record come first by descending win rate. Every single placement goes to
//! the smallest team; among equally sized teams the one with the lowest
//! aggregate strength wins, and remaining ties go to the lowest index.
//!
//! Seeding centers while all teams are still empty is what spreads them
//! evenly: with at least `N` centers every team receives one.

use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;
use tracing::{debug, warn};
use uuid::Uuid;

use super::skill::SkillTable;
use crate::roster::{Player, Position, Team, TeamColor};

pub const MIN_TEAMS: usize = 2;
pub const MAX_TEAMS: usize = 3;

/// Position grouping used to order placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Centers,
    Forwards,
    Guards,
}

impl Tier {
    /// Placement order: scarcest position first.
    pub const ORDER: [Tier; 3] = [Tier::Centers, Tier::Forwards, Tier::Guards];

    pub fn of(position: Position) -> Tier {
        match position {
            Position::Center => Tier::Centers,
            Position::SmallForward | Position::PowerForward => Tier::Forwards,
            Position::PointGuard | Position::ShootingGuard => Tier::Guards,
        }
    }
}

/// Normalise a requested team count into `[MIN_TEAMS, MAX_TEAMS]`.
pub fn clamp_team_count(requested: i64) -> usize {
    requested.clamp(MIN_TEAMS as i64, MAX_TEAMS as i64) as usize
}

/// Colours for `team_count` teams, taken positionally from `palette`. A
/// palette that is too short is replaced wholesale by
/// [`TeamColor::DEFAULT_PALETTE`].
pub fn resolve_palette(palette: &[TeamColor], team_count: usize) -> Vec<TeamColor> {
    if palette.len() >= team_count {
        palette[..team_count].to_vec()
    } else {
        warn!(
            "Palette has {} colour(s) for {} teams, falling back to default palette",
            palette.len(),
            team_count
        );
        TeamColor::DEFAULT_PALETTE[..team_count.min(TeamColor::DEFAULT_PALETTE.len())].to_vec()
    }
}

/// Current size and aggregate strength of one team under construction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TeamLoad {
    pub size: usize,
    pub strength: f64,
}

/// Index of the team the next player should join: smallest size first, then
/// lowest strength, then lowest index. Returns 0 for an empty slice.
pub fn pick_team(loads: &[TeamLoad]) -> usize {
    let Some(min_size) = loads.iter().map(|l| l.size).min() else {
        return 0;
    };

    let mut best: Option<usize> = None;
    for (idx, load) in loads.iter().enumerate() {
        if load.size != min_size {
            continue;
        }
        match best {
            None => best = Some(idx),
            Some(b) if load.strength < loads[b].strength => best = Some(idx),
            _ => {}
        }
    }
    best.unwrap_or(0)
}

/// Eligible players first, by descending win rate; ineligible players compare
/// equal so a stable sort keeps their shuffled order.
fn placement_order(a: &Player, b: &Player, skills: &SkillTable) -> Ordering {
    let ra = skills.get(&a.id).filter(|r| r.eligible);
    let rb = skills.get(&b.id).filter(|r| r.eligible);
    match (ra, rb) {
        (Some(ra), Some(rb)) => rb.win_rate.total_cmp(&ra.win_rate),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Rounded mean of the finite member heights, 0 when there are none.
pub fn average_height(members: &[Player]) -> u32 {
    let (sum, n) = members
        .iter()
        .map(|m| m.height)
        .filter(|h| h.is_finite())
        .fold((0.0f64, 0usize), |(sum, n), h| (sum + h, n + 1));
    if n == 0 {
        return 0;
    }
    let mean = sum / n as f64;
    // round half up
    (mean + 0.5).floor().max(0.0) as u32
}

/// Teams being filled, with their running loads.
struct Board<'a> {
    skills: &'a SkillTable,
    teams: Vec<Team>,
    loads: Vec<TeamLoad>,
}

impl<'a> Board<'a> {
    fn new<R: Rng + ?Sized>(colors: &[TeamColor], skills: &'a SkillTable, rng: &mut R) -> Self {
        let teams: Vec<Team> = colors
            .iter()
            .map(|&color| {
                let id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();
                Team::new(id, color)
            })
            .collect();
        let loads = vec![TeamLoad::default(); teams.len()];
        Board { skills, teams, loads }
    }

    fn distribute<R: Rng + ?Sized>(&mut self, tier: Tier, mut players: Vec<&Player>, rng: &mut R) {
        players.shuffle(rng);
        let skills = self.skills;
        players.sort_by(|a, b| placement_order(a, b, skills));

        debug!("Distributing {:?}: {} player(s)", tier, players.len());
        for player in players {
            let idx = pick_team(&self.loads);
            self.loads[idx].size += 1;
            self.loads[idx].strength += skills.strength(&player.id);
            self.teams[idx].members.push(player.clone());
        }
    }

    fn finish(mut self) -> Vec<Team> {
        for team in &mut self.teams {
            team.average_height = average_height(&team.members);
        }
        self.teams
    }
}

/// Split `pool` into `clamp_team_count(team_count)` teams balanced by position
/// and by the strengths in `skills`. Never fails: an empty pool yields empty
/// teams and a short palette falls back to the default colours.
pub fn partition<R: Rng + ?Sized>(
    pool: &[Player],
    skills: &SkillTable,
    team_count: i64,
    palette: &[TeamColor],
    rng: &mut R,
) -> Vec<Team> {
    let n = clamp_team_count(team_count);
    if n as i64 != team_count {
        debug!("Team count {} clamped to {}", team_count, n);
    }
    let colors = resolve_palette(palette, n);

    let mut board = Board::new(&colors, skills, rng);
    for tier in Tier::ORDER {
        let players: Vec<&Player> = pool.iter().filter(|p| Tier::of(p.position) == tier).collect();
        board.distribute(tier, players, rng);
    }
    board.finish()
}
