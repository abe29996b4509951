use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::model::{from_json, CompiledResult};

/// One row of the archive listing.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MatchSummary {
    pub match_id: u64,
    pub opponent: String,
    pub competition: String,
    pub matchday: String,
    /// ISO 8601 (`YYYY-MM-DD`), so string order is date order.
    pub date: String,
    pub venue: String,
    pub home_score: u32,
    pub away_score: u32,
    pub is_tottenham_home: bool,
}

impl MatchSummary {
    pub fn from_result(result: &CompiledResult) -> Self {
        let meta = &result.match_metadata;
        if NaiveDate::parse_from_str(&meta.date, "%Y-%m-%d").is_err() {
            log::warn!(
                "Match {} has non-ISO date '{}', archive ordering may be wrong",
                result.match_id,
                meta.date
            );
        }
        Self {
            match_id: result.match_id,
            opponent: meta.opponent.clone(),
            competition: meta.competition.clone(),
            matchday: meta.matchday.clone(),
            date: meta.date.clone(),
            venue: meta.venue.clone(),
            home_score: meta.home_score,
            away_score: meta.away_score,
            is_tottenham_home: meta.is_tottenham_home,
        }
    }
}

/// A document left out of the listing, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    pub name: String,
    pub error: EngineError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArchiveListing {
    pub matches: Vec<MatchSummary>,
    pub skipped: Vec<SkippedEntry>,
}

/// Decode one stored result document into its listing row.
pub fn summarize_document(name: &str, text: &str) -> Result<MatchSummary, SkippedEntry> {
    match from_json(text) {
        Ok(result) => Ok(MatchSummary::from_result(&result)),
        Err(error) => {
            log::warn!("Skipping {}: {}", name, error);
            Err(SkippedEntry {
                name: name.to_string(),
                error,
            })
        }
    }
}

/// Decode `(name, document)` pairs into summaries.
///
/// A document that fails to decode is recorded in `skipped` and does not
/// affect the others.
pub fn summarize_documents<'a, I>(documents: I) -> ArchiveListing
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut listing = ArchiveListing::default();
    for (name, text) in documents {
        match summarize_document(name, text) {
            Ok(summary) => listing.matches.push(summary),
            Err(skipped) => listing.skipped.push(skipped),
        }
    }
    listing
}

/// Most recent first. Equal dates keep their input order.
pub fn sort_matches(mut matches: Vec<MatchSummary>) -> Vec<MatchSummary> {
    matches.sort_by(|a, b| b.date.cmp(&a.date));
    matches
}

/// Optional criteria for `filter_matches`. Date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchFilter {
    pub opponent: Option<String>,
    pub competition: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl MatchFilter {
    pub fn matches(&self, summary: &MatchSummary) -> bool {
        if let Some(ref opponent) = self.opponent {
            if summary.opponent != *opponent {
                return false;
            }
        }
        if let Some(ref competition) = self.competition {
            if summary.competition != *competition {
                return false;
            }
        }
        if let Some(ref from) = self.date_from {
            if summary.date.as_str() < from.as_str() {
                return false;
            }
        }
        if let Some(ref to) = self.date_to {
            if summary.date.as_str() > to.as_str() {
                return false;
            }
        }
        true
    }
}

pub fn filter_matches<'a>(
    matches: &'a [MatchSummary],
    filter: &MatchFilter,
) -> Vec<&'a MatchSummary> {
    matches.iter().filter(|m| filter.matches(m)).collect()
}
