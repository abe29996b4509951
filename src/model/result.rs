use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Mean and population standard deviation of one entity's ratings.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct RatingStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl RatingStats {
    /// Placeholder for an entity nobody rated.
    pub fn unrated() -> Self {
        Self {
            mean: 0.0,
            std_dev: 0.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PlayerRating {
    pub name: String,
    pub position: String,
    /// Reference to the player's picture. Never loaded by this crate.
    #[serde(default)]
    pub image_path: Option<String>,
    pub rating: RatingStats,
    #[serde(default)]
    pub is_starter: bool,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub own_goals: u32,
    #[serde(default)]
    pub is_motm: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MatchMetadata {
    pub opponent: String,
    pub competition: String,
    pub matchday: String,
    /// ISO 8601 date, sortable as text.
    pub date: String,
    pub venue: String,
    pub home_score: u32,
    pub away_score: u32,
    pub is_tottenham_home: bool,
}

impl MatchMetadata {
    /// Goals for and against from the club's point of view.
    pub fn club_score(&self) -> (u32, u32) {
        if self.is_tottenham_home {
            (self.home_score, self.away_score)
        } else {
            (self.away_score, self.home_score)
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CoachRatings {
    pub name: String,
    pub starting_eleven: RatingStats,
    pub on_field_tactics: RatingStats,
    pub substitutions: RatingStats,
}

/// Compiled survey results for one match.
///
/// Treated as an immutable value: recomputing results produces a new
/// `CompiledResult` rather than patching an existing one.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CompiledResult {
    pub match_id: u64,
    #[serde(rename = "metadata")]
    pub match_metadata: MatchMetadata,
    #[serde(default = "default_formation")]
    pub formation: String,
    pub team_rating: RatingStats,
    pub opponent_rating: RatingStats,
    pub referee_rating: RatingStats,
    pub coach_ratings: CoachRatings,
    pub overall_rating: f64,
    #[serde(default)]
    pub starting_players: Vec<PlayerRating>,
    #[serde(default)]
    pub substitute_players: Vec<PlayerRating>,
    #[serde(default)]
    pub motm_winners: BTreeSet<String>,
    #[serde(default)]
    pub total_responses: u32,
}

pub(crate) fn default_formation() -> String {
    "4-3-3".to_string()
}

impl CompiledResult {
    /// Starters followed by substitutes, in lineup order.
    pub fn all_players(&self) -> impl Iterator<Item = &PlayerRating> {
        self.starting_players
            .iter()
            .chain(self.substitute_players.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_score_away() {
        let meta = MatchMetadata {
            opponent: "Newcastle".to_string(),
            competition: "Premier League".to_string(),
            matchday: "Week 3".to_string(),
            date: "2024-09-01".to_string(),
            venue: "St James' Park".to_string(),
            home_score: 2,
            away_score: 1,
            is_tottenham_home: false,
        };
        assert_eq!(meta.club_score(), (1, 2));
    }
}
