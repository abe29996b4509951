mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::card::AssetCatalog;
use crate::formation::{validate_rows, FormationTable};

/// Get the config directory path (~/.config/matchday-ratings/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("matchday-ratings"))
}

/// Get the default config file path (~/.config/matchday-ratings/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// With `path` set, the file must exist. Without it, the default location is
/// tried and a missing file yields `Config::default()`.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly named config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path
        }
        None => match get_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                log::debug!("No config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let shown = config_path.display();
    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", shown))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", shown))?;

    Ok(config)
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.club_name.trim().is_empty() {
        errors.push("club_name: must not be empty".to_string());
    }
    if config.club_label.trim().is_empty() {
        errors.push("club_label: must not be empty".to_string());
    }

    if let Some(ref pattern) = config.image_glob {
        if let Err(e) = glob::Pattern::new(pattern) {
            errors.push(format!("image_glob: invalid pattern '{}' - {}", pattern, e));
        }
    }

    for (name, rows) in &config.formations {
        errors.extend(validate_rows(name, rows));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Built-in formations plus any configured entries.
pub fn formation_table(config: &Config) -> Result<FormationTable> {
    FormationTable::standard()
        .with_entries(&config.formations)
        .map_err(|errors| anyhow::anyhow!("Invalid formations: {}", errors.join("; ")))
}

/// Asset catalogue from `image_glob`, empty when unset.
pub fn asset_catalog(config: &Config) -> Result<AssetCatalog> {
    match config.image_glob {
        Some(ref pattern) => AssetCatalog::scan(pattern),
        None => Ok(AssetCatalog::new()),
    }
}
