use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::archive::MatchSummary;
use crate::formation::FormationTable;
use crate::model::{CompiledResult, PlayerRating};

/// Format a scoreline from the club's point of view: "W 2-1", "L 1-2", "D 0-0"
pub fn format_scoreline(home_score: u32, away_score: u32, is_home: bool) -> String {
    let (ours, theirs) = if is_home {
        (home_score, away_score)
    } else {
        (away_score, home_score)
    };
    let outcome = match ours.cmp(&theirs) {
        std::cmp::Ordering::Greater => "W",
        std::cmp::Ordering::Less => "L",
        std::cmp::Ordering::Equal => "D",
    };
    format!("{} {}-{}", outcome, ours, theirs)
}

/// One-decimal rating, coloured by band when `use_colors` is set
pub fn format_rating(mean: f64, use_colors: bool) -> String {
    let text = format!("{:.1}", mean);
    if !use_colors {
        return text;
    }
    if mean >= 7.0 {
        text.green().to_string()
    } else if mean >= 5.0 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

/// Multi-line summary of a compiled result
pub fn format_compile_summary(result: &CompiledResult, use_colors: bool) -> String {
    let meta = &result.match_metadata;
    let venue_tag = if meta.is_tottenham_home { "H" } else { "A" };
    let scoreline = format_scoreline(meta.home_score, meta.away_score, meta.is_tottenham_home);
    let motm = if result.motm_winners.is_empty() {
        "-".to_string()
    } else {
        let names: Vec<&str> = result.motm_winners.iter().map(String::as_str).collect();
        names.join(", ")
    };

    let mut lines = Vec::new();
    let heading = format!(
        "{} ({}) {} | {} {}",
        meta.opponent, venue_tag, scoreline, meta.competition, meta.matchday
    );
    lines.push(if use_colors {
        heading.bold().to_string()
    } else {
        heading
    });
    lines.push(format!(
        "  Responses: {}  Overall: {}  MOTM: {}",
        result.total_responses,
        format_rating(result.overall_rating, use_colors),
        motm
    ));

    let mut ranked: Vec<&PlayerRating> = result.all_players().collect();
    ranked.sort_by(|a, b| b.rating.mean.total_cmp(&a.rating.mean));
    for player in ranked {
        let name = if use_colors && player.is_motm {
            player.name.yellow().to_string()
        } else {
            player.name.clone()
        };
        lines.push(format!(
            "  {:>4}  {:<4} {}",
            format_rating(player.rating.mean, use_colors),
            player.position,
            name
        ));
    }

    lines.join("\n")
}

/// One line per archived match
pub fn format_match_list(matches: &[MatchSummary], use_colors: bool) -> String {
    if matches.is_empty() {
        return "No matches found.".to_string();
    }

    matches
        .iter()
        .map(|m| {
            let scoreline = format_scoreline(m.home_score, m.away_score, m.is_tottenham_home);
            if use_colors {
                format!(
                    "{}  {:<7} {} | {} | {}",
                    m.date.dimmed(),
                    scoreline.bold(),
                    m.opponent.cyan(),
                    m.competition,
                    m.match_id
                )
            } else {
                format!(
                    "{}  {:<7} {} | {} | {}",
                    m.date, scoreline, m.opponent, m.competition, m.match_id
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formation table as "name: GK1 DF4 MF3 FW3"
pub fn format_formations(table: &FormationTable) -> String {
    table
        .names()
        .map(|name| {
            let rows = table
                .get(name)
                .unwrap_or_default()
                .iter()
                .map(|row| format!("{}{}", row.role, row.count))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{:<8} {}", name, rows)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::from_json;

    const NEWCASTLE: &str = include_str!("../../fixtures/newcastle_away.json");

    #[test]
    fn test_scoreline_from_club_view() {
        assert_eq!(format_scoreline(2, 1, false), "L 1-2");
        assert_eq!(format_scoreline(2, 1, true), "W 2-1");
        assert_eq!(format_scoreline(0, 0, true), "D 0-0");
    }

    #[test]
    fn test_rating_plain() {
        assert_eq!(format_rating(5.75, false), "5.8");
        assert_eq!(format_rating(0.0, false), "0.0");
    }

    #[test]
    fn test_compile_summary_plain() {
        let result = from_json(NEWCASTLE).unwrap();
        let summary = format_compile_summary(&result, false);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], "Newcastle (A) L 1-2 | Premier League Week 3");
        assert_eq!(lines[1], "  Responses: 309  Overall: 5.8  MOTM: Johnson");
        // Highest-rated player first
        assert!(lines[2].ends_with("Johnson"));
        assert_eq!(lines.len(), 2 + 14);
    }

    #[test]
    fn test_match_list() {
        assert_eq!(format_match_list(&[], false), "No matches found.");
        let result = from_json(NEWCASTLE).unwrap();
        let summary = MatchSummary::from_result(&result);
        assert_eq!(
            format_match_list(&[summary], false),
            "2024-09-01  L 1-2   Newcastle | Premier League | 704279"
        );
    }

    #[test]
    fn test_formations_listing() {
        let listing = format_formations(&FormationTable::standard());
        assert!(listing.lines().any(|l| l == "4-3-3    GK1 DF4 MF3 FW3"));
        assert_eq!(listing.lines().count(), 7);
    }
}
