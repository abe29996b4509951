use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::index::{sort_matches, summarize_document, MatchSummary};
use crate::storage::{write_json, INFOGRAPHIC_FILE, RESULTS_FILE};

/// Outcome of one archive build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArchiveReport {
    pub indexed: Vec<MatchSummary>,
    /// Match directories left out, with the reason.
    pub skipped: Vec<(String, String)>,
}

/// Rebuild the archive under `out_dir` from per-match directories in `data_dir`.
///
/// Writes `data/matches.json` (most recent first) and copies each match's
/// `results.json` and, when present, `infographic.png` into `matches/<id>/`.
/// A match that cannot be read or decoded is skipped and reported.
pub fn build_archive(data_dir: &Path, out_dir: &Path) -> Result<ArchiveReport> {
    let matches_out = out_dir.join("matches");
    let index_path = out_dir.join("data").join("matches.json");
    fs::create_dir_all(&matches_out)
        .with_context(|| format!("Failed to create {}", matches_out.display()))?;

    let mut report = ArchiveReport::default();

    if !data_dir.is_dir() {
        log::warn!(
            "Data directory {} does not exist, writing empty index",
            data_dir.display()
        );
        write_json(&index_path, &report.indexed)?;
        return Ok(report);
    }

    let mut match_dirs: Vec<_> = fs::read_dir(data_dir)
        .with_context(|| format!("Failed to list {}", data_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    match_dirs.sort();

    for match_dir in match_dirs {
        let name = match_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let results_file = match_dir.join(RESULTS_FILE);
        let text = match fs::read_to_string(&results_file) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Skipping {}: cannot read {}: {}", name, RESULTS_FILE, e);
                report.skipped.push((name, e.to_string()));
                continue;
            }
        };

        let summary = match summarize_document(&name, &text) {
            Ok(summary) => summary,
            Err(skipped) => {
                report.skipped.push((skipped.name, skipped.error.to_string()));
                continue;
            }
        };

        let dest = matches_out.join(summary.match_id.to_string());
        fs::create_dir_all(&dest)
            .with_context(|| format!("Failed to create {}", dest.display()))?;
        fs::copy(&results_file, dest.join(RESULTS_FILE))
            .with_context(|| format!("Failed to copy {}", results_file.display()))?;

        let infographic = match_dir.join(INFOGRAPHIC_FILE);
        if infographic.is_file() {
            fs::copy(&infographic, dest.join(INFOGRAPHIC_FILE))
                .with_context(|| format!("Failed to copy {}", infographic.display()))?;
        }

        report.indexed.push(summary);
    }

    report.indexed = sort_matches(report.indexed);
    write_json(&index_path, &report.indexed)?;
    log::info!("Archive built: {} match(es) indexed", report.indexed.len());

    Ok(report)
}
