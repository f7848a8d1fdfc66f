use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Court position of a club member, ordered from the backcourt to the post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    /// Older exports only knew "Guard"
    #[serde(rename = "PG", alias = "Guard")]
    PointGuard,
    #[serde(rename = "SG")]
    ShootingGuard,
    /// Older exports only knew "Forward"
    #[serde(rename = "SF", alias = "Forward")]
    SmallForward,
    #[serde(rename = "PF")]
    PowerForward,
    #[serde(rename = "C", alias = "Center")]
    Center,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::PointGuard,
        Position::ShootingGuard,
        Position::SmallForward,
        Position::PowerForward,
        Position::Center,
    ];

    /// Short wire token, e.g. "PG"
    pub fn code(&self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Position::PointGuard => "Point Guard",
            Position::ShootingGuard => "Shooting Guard",
            Position::SmallForward => "Small Forward",
            Position::PowerForward => "Power Forward",
            Position::Center => "Center",
        }
    }
}

/// Jersey colour of a generated team. The token itself drives colour-coding
/// downstream, so the set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamColor {
    White,
    Black,
    Red,
    Blue,
    Yellow,
    Green,
}

impl TeamColor {
    pub const ALL: [TeamColor; 6] = [
        TeamColor::White,
        TeamColor::Black,
        TeamColor::Red,
        TeamColor::Blue,
        TeamColor::Yellow,
        TeamColor::Green,
    ];

    /// Substituted whenever a caller's palette cannot cover the team count.
    pub const DEFAULT_PALETTE: [TeamColor; 3] = [TeamColor::White, TeamColor::Black, TeamColor::Red];

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamColor::White => "White",
            TeamColor::Black => "Black",
            TeamColor::Red => "Red",
            TeamColor::Blue => "Blue",
            TeamColor::Yellow => "Yellow",
            TeamColor::Green => "Green",
        }
    }

    /// Swatch used by the roster UI
    pub fn hex(&self) -> &'static str {
        match self {
            TeamColor::White => "#FFFFFF",
            TeamColor::Black => "#333333",
            TeamColor::Red => "#EF4444",
            TeamColor::Blue => "#3B82F6",
            TeamColor::Yellow => "#FBBF24",
            TeamColor::Green => "#10B981",
        }
    }
}

impl fmt::Display for TeamColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A club member selected for today's run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Jersey number
    #[serde(default)]
    pub number: u32,
    /// Height in centimetres
    pub height: f64,
    #[serde(default)]
    pub age: u32,
    pub position: Position,
}

/// Outcome of a recorded match between two teams of the same event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Team1Win,
    Team2Win,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    pub team1_id: String,
    pub team2_id: String,
    /// `None` until the organiser enters a result
    #[serde(default)]
    pub result: Option<MatchOutcome>,
}

/// Team as it was fielded at a past event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalTeam {
    pub id: String,
    pub name: String,
    pub color: TeamColor,
    pub member_ids: Vec<String>,
}

/// A past run: the teams that played and the matches between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub date: DateTime<Utc>,
    pub teams: Vec<HistoricalTeam>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}

impl Event {
    /// Record freshly generated teams as a new history entry with an empty
    /// round-robin schedule.
    pub fn from_teams(id: impl Into<String>, date: DateTime<Utc>, teams: &[Team]) -> Self {
        Event {
            id: id.into(),
            date,
            teams: teams.iter().map(HistoricalTeam::from).collect(),
            matches: crate::engine::fixtures::round_robin(teams),
        }
    }
}

/// Generated team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    /// "Team <Color>"
    pub name: String,
    pub color: TeamColor,
    pub members: Vec<Player>,
    /// Rounded mean member height, 0 for an empty team
    pub average_height: u32,
}

impl Team {
    pub fn new(id: Uuid, color: TeamColor) -> Self {
        Team {
            id,
            name: format!("Team {}", color),
            color,
            members: Vec::new(),
            average_height: 0,
        }
    }

    pub fn member_ids(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.id.as_str())
    }
}

impl From<&Team> for HistoricalTeam {
    fn from(team: &Team) -> Self {
        HistoricalTeam {
            id: team.id.to_string(),
            name: team.name.clone(),
            color: team.color,
            member_ids: team.member_ids().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_position_tokens() {
        let p: Position = serde_json::from_str("\"PF\"").unwrap();
        assert_eq!(p, Position::PowerForward);
        assert_eq!(serde_json::to_string(&Position::Center).unwrap(), "\"C\"");
        assert_eq!(Position::PowerForward.label(), "Power Forward");
        for pos in Position::ALL {
            let json = format!("\"{}\"", pos.code());
            assert_eq!(serde_json::from_str::<Position>(&json).unwrap(), pos);
        }
    }

    #[test]
    fn test_legacy_position_tokens() {
        assert_eq!(serde_json::from_str::<Position>("\"Guard\"").unwrap(), Position::PointGuard);
        assert_eq!(serde_json::from_str::<Position>("\"Forward\"").unwrap(), Position::SmallForward);
        assert_eq!(serde_json::from_str::<Position>("\"Center\"").unwrap(), Position::Center);
    }

    #[test]
    fn test_team_name_follows_color() {
        let team = Team::new(Uuid::nil(), TeamColor::Yellow);
        assert_eq!(team.name, "Team Yellow");
        assert_eq!(team.average_height, 0);
        assert!(team.members.is_empty());
    }

    #[test]
    fn test_unknown_color_rejected() {
        assert!(serde_json::from_str::<TeamColor>("\"Purple\"").is_err());
        assert_eq!(TeamColor::Blue.hex(), "#3B82F6");
    }

    #[test]
    fn test_event_without_matches_deserializes() {
        let json = r#"{
            "id": "e1",
            "date": "2024-03-02T10:00:00Z",
            "teams": [{"id": "t1", "name": "Team White", "color": "White", "member_ids": ["a"]}]
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.matches.is_empty());
        assert_eq!(event.teams[0].member_ids, vec!["a".to_string()]);
    }

    #[test]
    fn test_event_from_generated_teams() {
        let mut white = Team::new(Uuid::from_u128(1), TeamColor::White);
        white.members.push(Player {
            id: "p1".into(),
            name: "Park".into(),
            number: 23,
            height: 188.0,
            age: 31,
            position: Position::SmallForward,
        });
        let black = Team::new(Uuid::from_u128(2), TeamColor::Black);
        let date = Utc.with_ymd_and_hms(2024, 9, 7, 18, 30, 0).unwrap();

        let event = Event::from_teams("run-1", date, &[white.clone(), black]);
        assert_eq!(event.teams.len(), 2);
        assert_eq!(event.teams[0].id, white.id.to_string());
        assert_eq!(event.teams[0].member_ids, vec!["p1".to_string()]);
        assert_eq!(event.teams[1].name, "Team Black");
        assert_eq!(event.matches.len(), 1);
        assert!(event.matches[0].result.is_none());
    }

    #[test]
    fn test_match_result_optional() {
        let json = r#"{"id": "m", "team1_id": "a", "team2_id": "b"}"#;
        let m: MatchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(m.result, None);
    }
}
