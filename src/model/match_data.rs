use serde::{Deserialize, Serialize};

use super::result::default_formation;

/// A player in the match lineup.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PlayerInfo {
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub shirt_number: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SubstitutionEvent {
    pub player_in: String,
    pub player_out: String,
    pub minute: u32,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Goal,
    Assist,
    OwnGoal,
}

/// A scoring event credited to one of the club's players.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MatchEvent {
    pub player: String,
    pub kind: EventKind,
    #[serde(default)]
    pub minute: Option<u32>,
}

/// Everything known about a match before the survey is compiled.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MatchData {
    pub match_id: u64,
    pub home_team: String,
    pub away_team: String,
    pub competition: String,
    pub matchday: String,
    pub date: String,
    pub venue: String,
    #[serde(default = "default_formation")]
    pub formation: String,
    pub coach: String,
    #[serde(default)]
    pub starting_players: Vec<PlayerInfo>,
    #[serde(default)]
    pub substitutions: Vec<SubstitutionEvent>,
    #[serde(default)]
    pub events: Vec<MatchEvent>,
    #[serde(default = "default_true")]
    pub is_tottenham_home: bool,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
}

fn default_true() -> bool {
    true
}

impl MatchData {
    pub fn opponent(&self) -> &str {
        if self.is_tottenham_home {
            &self.away_team
        } else {
            &self.home_team
        }
    }

    /// Number of events of `kind` credited to `player`.
    pub fn event_count(&self, player: &str, kind: EventKind) -> u32 {
        self.events
            .iter()
            .filter(|e| e.kind == kind && e.player == player)
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_match_data() {
        let json = r#"{
            "match_id": 1,
            "home_team": "Newcastle United",
            "away_team": "Tottenham Hotspur",
            "competition": "Premier League",
            "matchday": "Week 3",
            "date": "2024-09-01",
            "venue": "St James' Park",
            "coach": "Postecoglou",
            "is_tottenham_home": false
        }"#;
        let data: MatchData = serde_json::from_str(json).unwrap();
        assert_eq!(data.formation, "4-3-3");
        assert_eq!(data.opponent(), "Newcastle United");
        assert!(data.starting_players.is_empty());
        assert!(data.events.is_empty());
        assert_eq!(data.home_score, None);
    }

    #[test]
    fn test_event_count_per_kind() {
        let json = r#"{
            "match_id": 1,
            "home_team": "Tottenham Hotspur",
            "away_team": "Everton",
            "competition": "Premier League",
            "matchday": "Week 2",
            "date": "2024-08-24",
            "venue": "Tottenham Hotspur Stadium",
            "coach": "Postecoglou",
            "events": [
                {"player": "Son", "kind": "goal", "minute": 25},
                {"player": "Son", "kind": "goal", "minute": 77},
                {"player": "Maddison", "kind": "assist"},
                {"player": "Romero", "kind": "own_goal"}
            ]
        }"#;
        let data: MatchData = serde_json::from_str(json).unwrap();
        assert!(data.is_tottenham_home);
        assert_eq!(data.opponent(), "Everton");
        assert_eq!(data.event_count("Son", EventKind::Goal), 2);
        assert_eq!(data.event_count("Son", EventKind::Assist), 0);
        assert_eq!(data.event_count("Maddison", EventKind::Assist), 1);
        assert_eq!(data.event_count("Romero", EventKind::OwnGoal), 1);
    }
}
