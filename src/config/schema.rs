use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::formation::FormationRow;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Full club name, as used in survey question titles.
    pub club_name: String,
    /// Short name printed on the scoreboard.
    pub club_label: String,
    /// One subdirectory per match id.
    pub data_dir: PathBuf,
    pub archive_dir: PathBuf,
    /// Glob of image files treated as resolvable, e.g. `images/**/*.png`.
    pub image_glob: Option<String>,
    /// Extra or replacement formation entries.
    pub formations: BTreeMap<String, Vec<FormationRow>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            club_name: "Tottenham Hotspur".to_string(),
            club_label: "TOTTENHAM".to_string(),
            data_dir: PathBuf::from("data/matches"),
            archive_dir: PathBuf::from("archive"),
            image_glob: None,
            formations: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Directory holding everything for one match.
    pub fn match_dir(&self, match_id: u64) -> PathBuf {
        self.data_dir.join(match_id.to_string())
    }
}
