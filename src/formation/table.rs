use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, Resolution};

/// Bumped whenever a built-in formation entry changes.
pub const FORMATION_TABLE_VERSION: u32 = 1;

/// Players that make up a full starting lineup.
pub const STARTERS: usize = 11;

/// Role label of the single row used for unknown formations.
pub const FLAT_ROW_ROLE: &str = "XI";

/// One tactical row, e.g. `{ role: "DF", count: 4 }`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FormationRow {
    pub role: String,
    pub count: usize,
}

impl FormationRow {
    pub fn new(role: &str, count: usize) -> Self {
        Self {
            role: role.to_string(),
            count,
        }
    }
}

/// Immutable mapping from formation name to rows, goalkeeper first.
///
/// Passed explicitly to whatever needs it so callers and tests can supply
/// their own table.
#[derive(Debug, Clone, PartialEq)]
pub struct FormationTable {
    version: u32,
    entries: BTreeMap<String, Vec<FormationRow>>,
}

/// Built-in formations with their outfield role labels, one label per
/// dash-separated count in the name.
const STANDARD: &[(&str, &[&str])] = &[
    ("4-3-3", &["DF", "MF", "FW"]),
    ("4-4-2", &["DF", "MF", "FW"]),
    ("3-5-2", &["DF", "MF", "FW"]),
    ("4-2-3-1", &["DF", "DM", "AM", "FW"]),
    ("3-4-3", &["DF", "MF", "FW"]),
    ("5-3-2", &["DF", "MF", "FW"]),
    ("4-1-4-1", &["DF", "DM", "MF", "FW"]),
];

fn standard_rows(name: &str, roles: &[&str]) -> Vec<FormationRow> {
    let counts = name.split('-').filter_map(|n| n.parse::<usize>().ok());
    let outfield = roles
        .iter()
        .zip(counts)
        .map(|(role, count)| FormationRow::new(role, count));
    std::iter::once(FormationRow::new("GK", 1))
        .chain(outfield)
        .collect()
}

impl Default for FormationTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl FormationTable {
    /// The built-in formations.
    pub fn standard() -> Self {
        let mut entries = BTreeMap::new();
        for (name, roles) in STANDARD {
            entries.insert(name.to_string(), standard_rows(name, roles));
        }
        Self {
            version: FORMATION_TABLE_VERSION,
            entries,
        }
    }

    /// Build a table from scratch. All entries are validated up front.
    pub fn new(entries: BTreeMap<String, Vec<FormationRow>>) -> Result<Self, Vec<String>> {
        let errors: Vec<String> = entries
            .iter()
            .flat_map(|(name, rows)| validate_rows(name, rows))
            .collect();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            version: FORMATION_TABLE_VERSION,
            entries,
        })
    }

    /// Copy of this table with extra (or replacement) entries.
    pub fn with_entries(
        &self,
        extra: &BTreeMap<String, Vec<FormationRow>>,
    ) -> Result<Self, Vec<String>> {
        let mut entries = self.entries.clone();
        entries.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self::new(entries)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn get(&self, formation: &str) -> Option<&[FormationRow]> {
        self.entries.get(formation.trim()).map(|r| r.as_slice())
    }

    /// Rows for `formation`, goalkeeper first.
    ///
    /// Unknown formations fall back to a single flat row of eleven.
    pub fn rows(&self, formation: &str) -> Resolution<Vec<FormationRow>> {
        match self.get(formation) {
            Some(rows) => Resolution::Resolved(rows.to_vec()),
            None => {
                log::warn!("Unknown formation '{}', using flat layout", formation);
                Resolution::Fallback {
                    value: vec![FormationRow::new(FLAT_ROW_ROLE, STARTERS)],
                    reason: EngineError::UnknownFormation {
                        formation: formation.to_string(),
                    },
                }
            }
        }
    }
}

/// Check one formation entry. Returns every problem found.
pub fn validate_rows(name: &str, rows: &[FormationRow]) -> Vec<String> {
    let mut errors = Vec::new();

    if rows.is_empty() {
        errors.push(format!("formations.{}: must have at least one row", name));
        return errors;
    }

    let first = &rows[0];
    if !first.role.eq_ignore_ascii_case("GK") || first.count != 1 {
        errors.push(format!(
            "formations.{}[0]: first row must be a single GK, got {} x{}",
            name, first.role, first.count
        ));
    }

    for (i, row) in rows.iter().enumerate() {
        if row.count == 0 {
            errors.push(format!(
                "formations.{}[{}].count: must be at least 1",
                name, i
            ));
        }
        if row.role.trim().is_empty() {
            errors.push(format!(
                "formations.{}[{}].role: must not be empty",
                name, i
            ));
        }
    }

    let total: usize = rows.iter().map(|r| r.count).sum();
    if total != STARTERS {
        errors.push(format!(
            "formations.{}: row counts sum to {}, expected {}",
            name, total, STARTERS
        ));
    }

    errors
}
