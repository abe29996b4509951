use serde::Serialize;

use super::canvas::{Region, CANVAS_HEIGHT, CANVAS_WIDTH};
use super::theme::Rgba;
use crate::card::{BadgeKind, ImageRef};
use crate::geometry::Rect;

/// Paint order. Lower layers are drawn first.
pub mod z {
    pub const BACKGROUND: u16 = 0;
    pub const PANEL: u16 = 10;
    pub const IMAGE: u16 = 20;
    pub const SHAPE: u16 = 30;
    pub const TEXT: u16 = 40;
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Rectangle,
    RoundedRectangle,
    Circle,
    Diamond,
    Text,
    Image,
    Icon,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Center,
}

/// Logical part of the graphic a primitive belongs to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Background { region: Region },
    MatchHeader,
    ScoreBlock,
    OverallBadge,
    CoachCard,
    Photo,
    Quote,
    ResponseCount,
    StarterCard { row: usize, column: usize },
    Referee,
    Legend,
    BenchHeader,
    SubstituteCard { index: usize },
    EmptyBench,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct Style {
    pub fill: Option<Rgba>,
    pub stroke: Option<Rgba>,
    pub font_size: Option<f64>,
    pub bold: bool,
    pub align: Option<Align>,
}

impl Style {
    pub fn fill(color: Rgba) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    pub fn text(color: Rgba, font_size: f64, bold: bool, align: Align) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            font_size: Some(font_size),
            bold,
            align: Some(align),
        }
    }

    pub fn centered(color: Rgba, font_size: f64, bold: bool) -> Self {
        Self::text(color, font_size, bold, Align::Center)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Content {
    None,
    Text(String),
    Image(ImageRef),
    Icon(BadgeKind),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DrawPrimitive {
    pub element: Element,
    pub kind: PrimitiveKind,
    pub bounds: Rect,
    pub style: Style,
    pub content: Content,
    pub z: u16,
}

impl DrawPrimitive {
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Ordered primitives for one canvas, sorted by `z` and stable within a layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DisplayList {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<DrawPrimitive>,
}

impl DisplayList {
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawPrimitive> {
        self.primitives.iter()
    }

    pub fn by_element<'a>(
        &'a self,
        predicate: impl Fn(&Element) -> bool + 'a,
    ) -> impl Iterator<Item = &'a DrawPrimitive> + 'a {
        self.primitives.iter().filter(move |p| predicate(&p.element))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Collects primitives in emission order, then layers them.
#[derive(Debug, Default)]
pub struct DisplayListBuilder {
    primitives: Vec<DrawPrimitive>,
}

impl DisplayListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, primitive: DrawPrimitive) {
        self.primitives.push(primitive);
    }

    pub fn finish(mut self) -> DisplayList {
        // sort_by_key is stable
        self.primitives.sort_by_key(|p| p.z);
        DisplayList {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            primitives: self.primitives,
        }
    }
}
