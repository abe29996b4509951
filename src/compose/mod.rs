//! Infographic composition: one `CompiledResult` in, one display list out.

pub mod bench;
pub mod canvas;
pub mod cards;
pub mod display;
pub mod painter;
pub mod pitch;
pub mod sidebar;
pub mod theme;

pub use canvas::{Region, Regions, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use display::{Align, Content, DisplayList, DrawPrimitive, Element, PrimitiveKind, Style};
pub use theme::{Rgba, Theme};

use crate::card::AssetResolver;
use crate::error::EngineError;
use crate::formation::FormationTable;
use crate::model::CompiledResult;
use painter::Painter;

/// Per-render extras that are not part of the stored result.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeOptions {
    /// Club name as printed on the scoreboard.
    pub club_label: String,
    pub quote: Option<String>,
    /// Photo-of-the-match asset reference.
    pub photo: Option<String>,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            club_label: "TOTTENHAM".to_string(),
            quote: None,
            photo: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub display_list: DisplayList,
    /// Recoverable problems absorbed while composing, in emission order.
    pub warnings: Vec<EngineError>,
}

/// Builds display lists against an injected formation table and asset resolver.
pub struct Composer<'a> {
    table: &'a FormationTable,
    assets: &'a dyn AssetResolver,
    theme: Theme,
    regions: Regions,
}

impl<'a> Composer<'a> {
    pub fn new(table: &'a FormationTable, assets: &'a dyn AssetResolver) -> Self {
        Self {
            table,
            assets,
            theme: Theme::standard(),
            regions: Regions::standard(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    /// Compose the full graphic. Never fails: unknown formations and missing
    /// images degrade to fallbacks reported in `warnings`.
    pub fn compose(&self, result: &CompiledResult, options: &ComposeOptions) -> Composition {
        let mut painter = Painter::new(&self.theme, self.assets);

        sidebar::paint(&mut painter, result, options, self.regions.left);
        pitch::paint(&mut painter, result, self.table, self.regions.center);
        bench::paint(&mut painter, result, self.regions.right);

        let (display_list, warnings) = painter.finish();
        let match_id = result.match_id;
        for warning in &warnings {
            log::debug!("Composition fallback for match {}: {}", match_id, warning);
        }
        Composition {
            display_list,
            warnings,
        }
    }
}
