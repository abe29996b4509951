use serde_json::{Map, Value};

use super::result::CompiledResult;
use crate::error::EngineError;

const RESULT_KEYS: &[&str] = &[
    "match_id",
    "metadata",
    "team_rating",
    "opponent_rating",
    "referee_rating",
    "coach_ratings",
    "overall_rating",
];

const METADATA_KEYS: &[&str] = &[
    "opponent",
    "competition",
    "matchday",
    "date",
    "venue",
    "home_score",
    "away_score",
    "is_tottenham_home",
];

const STATS_KEYS: &[&str] = &["mean", "std_dev"];

const COACH_KEYS: &[&str] = &[
    "name",
    "starting_eleven",
    "on_field_tactics",
    "substitutions",
];

const PLAYER_KEYS: &[&str] = &["name", "position", "rating"];

/// Encode a compiled result as a nested key-value document.
pub fn encode(result: &CompiledResult) -> Result<Value, serde_json::Error> {
    serde_json::to_value(result)
}

/// Encode a compiled result as pretty-printed JSON text.
pub fn to_json(result: &CompiledResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// Decode a result document.
///
/// Every missing required key is collected before failing, so the error
/// names all of them rather than the first one serde trips over.
pub fn decode(document: &Value) -> Result<CompiledResult, EngineError> {
    let missing = missing_keys(document)?;
    if !missing.is_empty() {
        return Err(EngineError::MalformedResult {
            missing,
            detail: None,
        });
    }

    let mut result: CompiledResult =
        serde_json::from_value(document.clone()).map_err(|e| EngineError::MalformedResult {
            missing: Vec::new(),
            detail: Some(e.to_string()),
        })?;

    // List membership is authoritative for the starter flag.
    for player in &mut result.starting_players {
        player.is_starter = true;
    }
    for player in &mut result.substitute_players {
        player.is_starter = false;
    }

    Ok(result)
}

/// Parse JSON text and decode it.
pub fn from_json(text: &str) -> Result<CompiledResult, EngineError> {
    let document: Value = serde_json::from_str(text).map_err(|e| EngineError::MalformedResult {
        missing: Vec::new(),
        detail: Some(format!("invalid JSON: {}", e)),
    })?;
    decode(&document)
}

fn missing_keys(document: &Value) -> Result<Vec<String>, EngineError> {
    let root = document
        .as_object()
        .ok_or_else(|| EngineError::MalformedResult {
            missing: Vec::new(),
            detail: Some("expected a JSON object at the document root".to_string()),
        })?;

    let mut missing = Vec::new();
    require(root, RESULT_KEYS, "", &mut missing);

    if let Some(Value::Object(meta)) = root.get("metadata") {
        require(meta, METADATA_KEYS, "metadata.", &mut missing);
    }
    for key in ["team_rating", "opponent_rating", "referee_rating"] {
        if let Some(Value::Object(stats)) = root.get(key) {
            require(stats, STATS_KEYS, &format!("{}.", key), &mut missing);
        }
    }
    if let Some(Value::Object(coach)) = root.get("coach_ratings") {
        require(coach, COACH_KEYS, "coach_ratings.", &mut missing);
        for key in ["starting_eleven", "on_field_tactics", "substitutions"] {
            if let Some(Value::Object(stats)) = coach.get(key) {
                let prefix = format!("coach_ratings.{}.", key);
                require(stats, STATS_KEYS, &prefix, &mut missing);
            }
        }
    }
    for list in ["starting_players", "substitute_players"] {
        if let Some(Value::Array(players)) = root.get(list) {
            for (i, player) in players.iter().enumerate() {
                if let Value::Object(player) = player {
                    let prefix = format!("{}[{}].", list, i);
                    require(player, PLAYER_KEYS, &prefix, &mut missing);
                    if let Some(Value::Object(stats)) = player.get("rating") {
                        let rating_prefix = format!("{}rating.", prefix);
                        require(stats, STATS_KEYS, &rating_prefix, &mut missing);
                    }
                }
            }
        }
    }

    Ok(missing)
}

fn require(object: &Map<String, Value>, keys: &[&str], prefix: &str, missing: &mut Vec<String>) {
    for key in keys {
        if !object.contains_key(*key) {
            missing.push(format!("{}{}", prefix, key));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CoachRatings, MatchMetadata, PlayerRating, RatingStats};
    use serde_json::json;

    fn stats(mean: f64, std_dev: f64) -> RatingStats {
        RatingStats { mean, std_dev }
    }

    fn player(name: &str, position: &str, is_starter: bool) -> PlayerRating {
        PlayerRating {
            name: name.to_string(),
            position: position.to_string(),
            image_path: None,
            rating: stats(6.25, 1.0897247358851685),
            is_starter,
            goals: 0,
            assists: 0,
            own_goals: 0,
            is_motm: false,
        }
    }

    fn sample_result() -> CompiledResult {
        let mut scorer = player("Johnson", "RW", true);
        scorer.goals = 1;
        scorer.is_motm = true;
        scorer.image_path = Some("players/johnson.png".to_string());

        CompiledResult {
            match_id: 704279,
            match_metadata: MatchMetadata {
                opponent: "Newcastle".to_string(),
                competition: "Premier League".to_string(),
                matchday: "Week 3".to_string(),
                date: "2024-09-01".to_string(),
                venue: "St James' Park".to_string(),
                home_score: 2,
                away_score: 1,
                is_tottenham_home: false,
            },
            formation: "4-3-3".to_string(),
            team_rating: stats(5.1, 1.7),
            opponent_rating: stats(6.9, 1.2),
            referee_rating: stats(4.3, 2.2),
            coach_ratings: CoachRatings {
                name: "Postecoglou".to_string(),
                starting_eleven: stats(6.0, 1.5),
                on_field_tactics: stats(4.8, 2.0),
                substitutions: stats(4.1, 1.9),
            },
            overall_rating: 6.25,
            starting_players: vec![player("Vicario", "GK", true), scorer],
            substitute_players: vec![player("Werner", "SUB", false)],
            motm_winners: ["Johnson".to_string()].into_iter().collect(),
            total_responses: 309,
        }
    }

    #[test]
    fn test_roundtrip_preserves_every_field() {
        let result = sample_result();
        let decoded = decode(&encode(&result).unwrap()).unwrap();
        assert_eq!(decoded, result);
    }

    #[test]
    fn test_roundtrip_through_text() {
        let result = sample_result();
        let text = to_json(&result).unwrap();
        assert_eq!(from_json(&text).unwrap(), result);
    }

    #[test]
    fn test_roundtrip_empty_substitutes_and_winners() {
        let mut result = sample_result();
        result.substitute_players.clear();
        result.motm_winners.clear();
        let decoded = decode(&encode(&result).unwrap()).unwrap();
        assert_eq!(decoded, result);
        assert!(decoded.substitute_players.is_empty());
        assert!(decoded.motm_winners.is_empty());
    }

    #[test]
    fn test_encode_uses_document_field_names() {
        let doc = encode(&sample_result()).unwrap();
        assert!(doc.get("metadata").is_some());
        assert!(doc.get("match_metadata").is_none());
        assert_eq!(doc["metadata"]["is_tottenham_home"], json!(false));
        assert_eq!(doc["team_rating"]["std_dev"], json!(1.7));
        assert_eq!(doc["starting_players"][1]["name"], json!("Johnson"));
        assert_eq!(doc["motm_winners"], json!(["Johnson"]));
        assert_eq!(doc["total_responses"], json!(309));
    }

    #[test]
    fn test_winner_order_does_not_matter() {
        let mut doc = encode(&sample_result()).unwrap();
        doc["motm_winners"] = json!(["Son", "Johnson"]);
        let a = decode(&doc).unwrap();
        doc["motm_winners"] = json!(["Johnson", "Son"]);
        let b = decode(&doc).unwrap();
        assert_eq!(a.motm_winners, b.motm_winners);
    }

    #[test]
    fn test_decode_names_all_missing_keys() {
        let mut doc = encode(&sample_result()).unwrap();
        let root = doc.as_object_mut().unwrap();
        root.remove("match_id");
        root.remove("overall_rating");
        root["metadata"].as_object_mut().unwrap().remove("venue");
        root["starting_players"][0]
            .as_object_mut()
            .unwrap()
            .remove("rating");

        match decode(&doc) {
            Err(EngineError::MalformedResult { missing, .. }) => {
                assert_eq!(
                    missing,
                    vec![
                        "match_id".to_string(),
                        "overall_rating".to_string(),
                        "metadata.venue".to_string(),
                        "starting_players[0].rating".to_string(),
                    ]
                );
            }
            other => panic!("expected MalformedResult, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_nested_stats_keys() {
        let mut doc = encode(&sample_result()).unwrap();
        doc["coach_ratings"]["substitutions"]
            .as_object_mut()
            .unwrap()
            .remove("std_dev");
        let err = decode(&doc).unwrap_err();
        assert!(err
            .to_string()
            .contains("coach_ratings.substitutions.std_dev"));
    }

    #[test]
    fn test_decode_optional_keys_default() {
        let mut doc = encode(&sample_result()).unwrap();
        let root = doc.as_object_mut().unwrap();
        root.remove("substitute_players");
        root.remove("motm_winners");
        root.remove("total_responses");
        root.remove("formation");
        root["starting_players"][0]
            .as_object_mut()
            .unwrap()
            .remove("is_starter");

        let decoded = decode(&doc).unwrap();
        assert_eq!(decoded.formation, "4-3-3");
        assert_eq!(decoded.total_responses, 0);
        assert!(decoded.substitute_players.is_empty());
        assert!(decoded.starting_players[0].is_starter);
    }

    #[test]
    fn test_decode_wrong_type_is_malformed() {
        let mut doc = encode(&sample_result()).unwrap();
        doc["overall_rating"] = json!("high");
        let err = decode(&doc).unwrap_err();
        assert!(matches!(
            err,
            EngineError::MalformedResult { ref missing, detail: Some(_) } if missing.is_empty()
        ));
    }

    #[test]
    fn test_decode_non_object_root() {
        assert!(matches!(
            decode(&json!([1, 2, 3])),
            Err(EngineError::MalformedResult { .. })
        ));
        assert!(from_json("not json").is_err());
    }
}
