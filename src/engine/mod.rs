pub mod club_stats;
pub mod fixtures;
pub mod partition;
pub mod skill;

pub use partition::{clamp_team_count, partition};
pub use skill::{estimate, PlayerRecord, SkillTable};

use rand::Rng;
use tracing::info;

use crate::roster::{Event, Player, Team, TeamColor};

/// Estimate skills for `pool` from `history`, then split the pool into
/// balanced teams. Returns the teams together with the estimate that drove
/// them.
pub fn generate_teams<R: Rng + ?Sized>(
    pool: &[Player],
    history: &[Event],
    team_count: i64,
    palette: &[TeamColor],
    rng: &mut R,
) -> (Vec<Team>, SkillTable) {
    let skills = estimate(pool, history);
    let teams = partition(pool, &skills, team_count, palette, rng);

    let sizes: Vec<usize> = teams.iter().map(|t| t.members.len()).collect();
    info!(
        "Generated {} teams from {} players (sizes {:?})",
        teams.len(),
        pool.len(),
        sizes
    );
    (teams, skills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::skill::tests::{history_for, player};
    use crate::roster::{MatchOutcome, Position};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_teams_end_to_end() {
        let pool = vec![
            player("c1", Position::Center, 204.0),
            player("c2", Position::Center, 198.0),
            player("f1", Position::SmallForward, 193.0),
            player("f2", Position::PowerForward, 196.0),
            player("g1", Position::PointGuard, 176.0),
            player("g2", Position::ShootingGuard, 183.0),
        ];
        let history = history_for("c1", &[Some(MatchOutcome::Team1Win); 5]);
        let mut rng = StdRng::seed_from_u64(11);
        let (teams, skills) = generate_teams(&pool, &history, 2, &[TeamColor::Black, TeamColor::White], &mut rng);

        assert_eq!(teams.len(), 2);
        assert!(skills.is_eligible("c1"));
        assert!(!skills.is_eligible("c2"));
        assert_eq!(skills.len(), pool.len());
        assert!(teams.iter().all(|t| t.members.len() == 3));
        assert!(teams
            .iter()
            .all(|t| t.members.iter().filter(|m| m.position == Position::Center).count() == 1));
        // the trusted center is placed first onto the first team
        assert_eq!(teams[0].members[0].id, "c1");
    }
}
