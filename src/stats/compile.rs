use serde_json::{Number, Value};
use std::collections::BTreeMap;

use super::aggregate::{mean_of_means, summarize};
use super::motm::resolve_motm;
use crate::model::{
    CoachRatings, CompiledResult, EventKind, MatchData, MatchMetadata, PlayerRating, RatingStats,
};

/// One survey submission keyed by question title.
pub type SurveyResponse = BTreeMap<String, Value>;

/// Question titles used by the survey form.
///
/// Titles follow the form layout: `"{entity} — {aspect}"`.
#[derive(Debug, Clone)]
pub struct SurveyKeys {
    pub team: String,
    pub opponent: String,
    pub referee: String,
    pub coach_starting_eleven: String,
    pub coach_tactics: String,
    pub coach_substitutions: String,
    pub motm: String,
}

impl SurveyKeys {
    pub fn for_match(club_name: &str, match_data: &MatchData) -> Self {
        let coach = coach_name(match_data);
        Self {
            team: format!("{} — Team Rating", club_name),
            opponent: format!("{} — Team Rating", match_data.opponent()),
            referee: "Referee Rating".to_string(),
            coach_starting_eleven: format!("{} — Starting Eleven Selection", coach),
            coach_tactics: format!("{} — On-Field Tactics", coach),
            coach_substitutions: format!("{} — Substitution Decisions", coach),
            motm: "Man of the Match".to_string(),
        }
    }

    pub fn player(name: &str) -> String {
        format!("{} — Rating", name)
    }
}

/// Result of compiling one match's responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Compilation {
    Compiled(Box<CompiledResult>),
    /// Nobody answered the survey; the caller should skip this match.
    ZeroResponses { match_id: u64 },
}

fn coach_name(match_data: &MatchData) -> &str {
    let coach = match_data.coach.trim();
    if coach.is_empty() {
        "Manager"
    } else {
        coach
    }
}

/// Pull usable 0-10 integer ratings for `key`, skipping blanks and junk.
pub fn extract_ratings(responses: &[SurveyResponse], key: &str) -> Vec<i64> {
    let mut values = Vec::new();
    for response in responses {
        let parsed = match response.get(key) {
            Some(Value::String(raw)) => raw.trim().parse::<i64>().ok(),
            Some(Value::Number(n)) => whole_number(n),
            _ => None,
        };
        match parsed {
            Some(v) if (0..=10).contains(&v) => values.push(v),
            Some(v) => log::warn!("Ignoring out-of-scale rating {} for '{}'", v, key),
            None => {}
        }
    }
    values
}

fn whole_number(n: &Number) -> Option<i64> {
    if let Some(v) = n.as_i64() {
        return Some(v);
    }
    n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)
}

fn stats_for(responses: &[SurveyResponse], key: &str) -> RatingStats {
    let values = extract_ratings(responses, key);
    match summarize(&values) {
        Ok(stats) => stats,
        Err(e) => {
            log::debug!("'{}' is unrated: {}", key, e);
            RatingStats::unrated()
        }
    }
}

fn motm_votes<'a>(responses: &'a [SurveyResponse], key: &str) -> Vec<&'a str> {
    responses
        .iter()
        .filter_map(|r| match r.get(key) {
            Some(Value::String(vote)) => Some(vote.as_str()),
            _ => None,
        })
        .collect()
}

/// Compile raw survey responses into a `CompiledResult`.
///
/// Entities nobody rated get `RatingStats::unrated()`. The overall rating is
/// the mean of every player's mean (starters and substitutes).
pub fn compile_responses(
    responses: &[SurveyResponse],
    match_data: &MatchData,
    club_name: &str,
) -> Compilation {
    if responses.is_empty() {
        log::warn!(
            "Match {} has no survey responses, skipping compilation",
            match_data.match_id
        );
        return Compilation::ZeroResponses {
            match_id: match_data.match_id,
        };
    }

    let keys = SurveyKeys::for_match(club_name, match_data);

    let coach_ratings = CoachRatings {
        name: coach_name(match_data).to_string(),
        starting_eleven: stats_for(responses, &keys.coach_starting_eleven),
        on_field_tactics: stats_for(responses, &keys.coach_tactics),
        substitutions: stats_for(responses, &keys.coach_substitutions),
    };

    let motm_winners = resolve_motm(motm_votes(responses, &keys.motm));

    let rate = |name: &str, position: &str| PlayerRating {
        name: name.to_string(),
        position: position.to_string(),
        image_path: None,
        rating: stats_for(responses, &SurveyKeys::player(name)),
        is_starter: false,
        goals: match_data.event_count(name, EventKind::Goal),
        assists: match_data.event_count(name, EventKind::Assist),
        own_goals: match_data.event_count(name, EventKind::OwnGoal),
        is_motm: motm_winners.contains(name),
    };

    let starting_players: Vec<PlayerRating> = match_data
        .starting_players
        .iter()
        .map(|p| PlayerRating {
            image_path: p.image_path.clone(),
            is_starter: true,
            ..rate(&p.name, &p.position)
        })
        .collect();

    let substitute_players: Vec<PlayerRating> = match_data
        .substitutions
        .iter()
        .map(|s| rate(&s.player_in, "SUB"))
        .collect();

    let overall_rating = match mean_of_means(starting_players.iter().chain(&substitute_players)) {
        Ok(overall) => overall,
        Err(_) => {
            log::warn!(
                "Match {} has no players, overall rating is 0",
                match_data.match_id
            );
            0.0
        }
    };

    if starting_players.len() != 11 {
        log::warn!(
            "Match {} lineup has {} starters, expected 11",
            match_data.match_id,
            starting_players.len()
        );
    }

    let match_metadata = MatchMetadata {
        opponent: match_data.opponent().to_string(),
        competition: match_data.competition.clone(),
        matchday: match_data.matchday.clone(),
        date: match_data.date.clone(),
        venue: match_data.venue.clone(),
        home_score: match_data.home_score.unwrap_or(0),
        away_score: match_data.away_score.unwrap_or(0),
        is_tottenham_home: match_data.is_tottenham_home,
    };

    Compilation::Compiled(Box::new(CompiledResult {
        match_id: match_data.match_id,
        match_metadata,
        formation: match_data.formation.clone(),
        team_rating: stats_for(responses, &keys.team),
        opponent_rating: stats_for(responses, &keys.opponent),
        referee_rating: stats_for(responses, &keys.referee),
        coach_ratings,
        overall_rating,
        starting_players,
        substitute_players,
        motm_winners,
        total_responses: responses.len() as u32,
    }))
}
