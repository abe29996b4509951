use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::error::{EngineError, Resolution};

/// Answers whether an image reference can be drawn.
///
/// Implementations must not block: anything slow (disk, network) happens
/// before the resolver is handed to the composer. A composer may be shared
/// across threads, so resolvers must be too.
pub trait AssetResolver: Send + Sync {
    fn is_resolvable(&self, path: &str) -> bool;
}

/// A set of asset paths already known to exist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetCatalog {
    paths: BTreeSet<String>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Catalogue every file matching a glob pattern, e.g. `"images/**/*.png"`.
    pub fn scan(pattern: &str) -> Result<Self> {
        let mut catalog = Self::new();
        let entries = glob::glob(pattern)
            .with_context(|| format!("Invalid asset pattern '{}'", pattern))?;
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => {
                    catalog.insert(path.to_string_lossy().into_owned());
                }
                Ok(_) => {}
                Err(e) => log::warn!("Skipping unreadable asset path: {}", e),
            }
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, path: String) {
        self.paths.insert(path);
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl AssetResolver for AssetCatalog {
    fn is_resolvable(&self, path: &str) -> bool {
        self.paths.contains(path)
    }
}

/// Resolver that knows no assets; every image becomes a placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetResolver for NoAssets {
    fn is_resolvable(&self, _path: &str) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// Generic player silhouette.
    Silhouette,
    /// Empty photo-of-the-match frame.
    Photo,
}

/// What an image slot should draw.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ImageRef {
    Asset { path: String },
    Placeholder { placeholder: Placeholder },
}

/// Resolve an optional image reference, substituting `placeholder` when the
/// path is absent or not resolvable. Never fails.
pub fn resolve_image(
    path: Option<&str>,
    resolver: &dyn AssetResolver,
    placeholder: Placeholder,
) -> Resolution<ImageRef> {
    let fallback = ImageRef::Placeholder { placeholder };
    match path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) if resolver.is_resolvable(path) => Resolution::Resolved(ImageRef::Asset {
            path: path.to_string(),
        }),
        Some(path) => {
            log::warn!("Image '{}' not available, using placeholder", path);
            Resolution::Fallback {
                value: fallback,
                reason: EngineError::MissingAsset {
                    path: path.to_string(),
                },
            }
        }
        None => {
            log::warn!("No image reference, using placeholder");
            Resolution::Fallback {
                value: fallback,
                reason: EngineError::MissingAsset {
                    path: String::new(),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::env;
    use std::fs;
    use std::sync::Once;

    thread_local! {
        static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    /// Records warnings per thread so parallel tests do not see each other.
    struct CaptureWarnings;

    impl log::Log for CaptureWarnings {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                CAPTURED.with(|c| c.borrow_mut().push(record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: CaptureWarnings = CaptureWarnings;
    static INSTALL: Once = Once::new();

    fn warnings_during(f: impl FnOnce()) -> Vec<String> {
        INSTALL.call_once(|| {
            let _ = log::set_logger(&CAPTURE);
            log::set_max_level(log::LevelFilter::Warn);
        });
        CAPTURED.with(|c| c.borrow_mut().clear());
        f();
        CAPTURED.with(|c| c.borrow_mut().drain(..).collect())
    }

    #[test]
    fn test_resolved_asset() {
        let catalog = AssetCatalog::from_paths(["players/son.png"]);
        let image = resolve_image(
            Some("players/son.png"),
            &catalog,
            Placeholder::Silhouette,
        );
        assert_eq!(
            image,
            Resolution::Resolved(ImageRef::Asset {
                path: "players/son.png".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_path_falls_back() {
        let catalog = AssetCatalog::from_paths(["players/son.png"]);
        let image = resolve_image(
            Some("/nonexistent/fake.png"),
            &catalog,
            Placeholder::Silhouette,
        );
        assert!(image.is_fallback());
        assert_eq!(
            image.value(),
            &ImageRef::Placeholder {
                placeholder: Placeholder::Silhouette
            }
        );
        assert_eq!(
            image.reason(),
            Some(&EngineError::MissingAsset {
                path: "/nonexistent/fake.png".to_string()
            })
        );
    }

    #[test]
    fn test_absent_path_falls_back() {
        for path in [None, Some(""), Some("   ")] {
            let image = resolve_image(path, &NoAssets, Placeholder::Photo);
            assert_eq!(
                image.into_value(),
                ImageRef::Placeholder {
                    placeholder: Placeholder::Photo
                }
            );
        }
    }

    #[test]
    fn test_every_placeholder_is_logged() {
        let catalog = AssetCatalog::from_paths(["players/son.png"]);
        let warnings = warnings_during(|| {
            resolve_image(None, &catalog, Placeholder::Silhouette);
            resolve_image(Some("  "), &catalog, Placeholder::Silhouette);
            resolve_image(Some("players/kane.png"), &catalog, Placeholder::Silhouette);
            resolve_image(Some("players/son.png"), &catalog, Placeholder::Silhouette);
        });
        assert_eq!(warnings.len(), 3);
        assert!(warnings[2].contains("players/kane.png"));
    }

    #[test]
    fn test_resolvers_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn AssetResolver>();
        assert_send_sync::<AssetCatalog>();
    }

    #[test]
    fn test_scan_catalogues_matching_files() {
        let dir = env::temp_dir().join("matchday_ratings_test_assets");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("son.png"), b"png").unwrap();
        fs::write(dir.join("nested").join("kane.png"), b"png").unwrap();
        fs::write(dir.join("notes.txt"), b"txt").unwrap();

        let pattern = format!("{}/**/*.png", dir.display());
        let catalog = AssetCatalog::scan(&pattern).unwrap();
        assert_eq!(catalog.len(), 2);
        let son = dir.join("son.png").to_string_lossy().into_owned();
        assert!(catalog.is_resolvable(&son));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_scan_rejects_bad_pattern() {
        assert!(AssetCatalog::scan("[").is_err());
    }
}
