use super::display::{
    z, Content, DisplayList, DisplayListBuilder, DrawPrimitive, Element, PrimitiveKind, Style,
};
use super::theme::{Rgba, Theme};
use crate::card::{AssetResolver, BadgeKind, ImageRef};
use crate::error::{EngineError, Resolution};
use crate::geometry::{estimate_text_width, Point, Rect};

/// Drawing context shared by the region painters for one compose call.
pub struct Painter<'a> {
    pub theme: &'a Theme,
    pub assets: &'a dyn AssetResolver,
    builder: DisplayListBuilder,
    warnings: Vec<EngineError>,
}

impl<'a> Painter<'a> {
    pub fn new(theme: &'a Theme, assets: &'a dyn AssetResolver) -> Self {
        Self {
            theme,
            assets,
            builder: DisplayListBuilder::new(),
            warnings: Vec::new(),
        }
    }

    pub fn finish(self) -> (DisplayList, Vec<EngineError>) {
        (self.builder.finish(), self.warnings)
    }

    /// Record the reason of a fallback and hand back the value to draw.
    pub fn absorb<T>(&mut self, resolution: Resolution<T>) -> T {
        match resolution {
            Resolution::Resolved(value) => value,
            Resolution::Fallback { value, reason } => {
                self.warnings.push(reason);
                value
            }
        }
    }

    pub fn shape(
        &mut self,
        element: Element,
        kind: PrimitiveKind,
        bounds: Rect,
        fill: Rgba,
        z: u16,
    ) {
        self.builder.push(DrawPrimitive {
            element,
            kind,
            bounds,
            style: Style::fill(fill),
            content: Content::None,
            z,
        });
    }

    pub fn image(&mut self, element: Element, bounds: Rect, image: ImageRef) {
        self.builder.push(DrawPrimitive {
            element,
            kind: PrimitiveKind::Image,
            bounds,
            style: Style::default(),
            content: Content::Image(image),
            z: z::IMAGE,
        });
    }

    pub fn icon(&mut self, element: Element, bounds: Rect, icon: BadgeKind) {
        self.builder.push(DrawPrimitive {
            element,
            kind: PrimitiveKind::Icon,
            bounds,
            style: Style::default(),
            content: Content::Icon(icon),
            z: z::SHAPE,
        });
    }

    /// Text run inside precomputed bounds.
    pub fn text_in(&mut self, element: Element, bounds: Rect, text: &str, style: Style) {
        self.builder.push(DrawPrimitive {
            element,
            kind: PrimitiveKind::Text,
            bounds,
            style,
            content: Content::Text(text.to_string()),
            z: z::TEXT,
        });
    }

    /// Text centred on `top.x` with its top edge at `top.y`. Returns the bottom edge.
    pub fn text_centered(&mut self, element: Element, text: &str, top: Point, style: Style) -> f64 {
        let size = style.font_size.unwrap_or_default();
        let width = estimate_text_width(text, size);
        let bounds = Rect::new(top.x - width / 2.0, top.y, width, size);
        self.text_in(element, bounds, text, style);
        bounds.bottom()
    }

    /// Left-aligned text starting at `origin`. Returns the right edge.
    pub fn text_left(&mut self, element: Element, text: &str, origin: Point, style: Style) -> f64 {
        let size = style.font_size.unwrap_or_default();
        let width = estimate_text_width(text, size);
        let bounds = Rect::new(origin.x, origin.y, width, size);
        self.text_in(element, bounds, text, style);
        bounds.right()
    }
}
