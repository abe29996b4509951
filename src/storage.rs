use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::model::{from_json, CompiledResult, MatchData};
use crate::stats::SurveyResponse;

pub const MATCH_DATA_FILE: &str = "match_data.json";
pub const RESPONSES_FILE: &str = "responses.json";
pub const RESULTS_FILE: &str = "results.json";
pub const LAYOUT_FILE: &str = "layout.json";
pub const INFOGRAPHIC_FILE: &str = "infographic.png";

pub fn match_data_path(match_dir: &Path) -> PathBuf {
    match_dir.join(MATCH_DATA_FILE)
}

pub fn results_path(match_dir: &Path) -> PathBuf {
    match_dir.join(RESULTS_FILE)
}

/// Load the lineup and match facts for one match
pub fn load_match_data(path: &Path) -> Result<MatchData> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open match data at {}", path.display()))?;
    serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse match data at {}", path.display()))
}

/// Load exported survey responses: a JSON array of objects keyed by question title
pub fn load_responses(path: &Path) -> Result<Vec<SurveyResponse>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open responses at {}", path.display()))?;
    serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse responses at {}", path.display()))
}

/// Load and validate a compiled result document
pub fn load_result(path: &Path) -> Result<CompiledResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read results at {}", path.display()))?;
    let result = from_json(&content)
        .with_context(|| format!("Invalid results document at {}", path.display()))?;
    Ok(result)
}

/// Save a compiled result atomically
pub fn save_result(path: &Path, result: &CompiledResult) -> Result<()> {
    let document = crate::model::encode(result).context("Failed to encode results")?;
    write_json(path, &document)
}

/// Write any serialisable value as pretty JSON, atomically.
///
/// Creates the parent directory if it doesn't exist.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;

    file.commit()
        .with_context(|| format!("Failed to save {}", path.display()))?;

    Ok(())
}
