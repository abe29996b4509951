use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned rectangle in canvas pixels, origin top-left.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centred on `center`.
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        const EPS: f64 = 1e-9;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.bottom() <= self.bottom() + EPS
    }

    /// Shrink by `dx` on the left and right and `dy` on top and bottom.
    pub fn inset(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.x + dx,
            self.y + dy,
            (self.width - 2.0 * dx).max(0.0),
            (self.height - 2.0 * dy).max(0.0),
        )
    }
}

/// Average glyph advance as a fraction of font size.
const GLYPH_ADVANCE: f64 = 0.55;

/// Deterministic width estimate for a single line of text.
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * GLYPH_ADVANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let r = Rect::centered(Point { x: 100.0, y: 50.0 }, 20.0, 10.0);
        assert_eq!(r, Rect::new(90.0, 45.0, 20.0, 10.0));
        assert_eq!(r.center(), Point { x: 100.0, y: 50.0 });
    }

    #[test]
    fn test_contains_and_inset() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = outer.inset(10.0, 5.0);
        assert_eq!(inner, Rect::new(10.0, 5.0, 80.0, 90.0));
        assert!(outer.contains_rect(&inner));
        assert!(!inner.contains_rect(&outer));
        assert_eq!(outer.inset(80.0, 0.0).width, 0.0);
    }

    #[test]
    fn test_text_width_counts_chars_not_bytes() {
        assert_eq!(estimate_text_width("", 12.0), 0.0);
        assert_eq!(
            estimate_text_width("ab", 10.0),
            estimate_text_width("é±", 10.0)
        );
        assert!((estimate_text_width("SON", 20.0) - 33.0).abs() < 1e-9);
    }
}
