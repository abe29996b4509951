use serde::Serialize;

use crate::geometry::Rect;

pub const CANVAS_WIDTH: f64 = 1920.0;
pub const CANVAS_HEIGHT: f64 = 1080.0;

pub const LEFT_SHARE: f64 = 0.22;
pub const CENTER_SHARE: f64 = 0.56;
pub const RIGHT_SHARE: f64 = 0.22;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Left,
    Center,
    Right,
}

/// The three full-height columns of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regions {
    pub left: Rect,
    pub center: Rect,
    pub right: Rect,
}

impl Regions {
    /// Fixed 1920x1080 split. Never depends on content.
    pub fn standard() -> Self {
        let left_w = CANVAS_WIDTH * LEFT_SHARE;
        let center_w = CANVAS_WIDTH * CENTER_SHARE;
        Self {
            left: Rect::new(0.0, 0.0, left_w, CANVAS_HEIGHT),
            center: Rect::new(left_w, 0.0, center_w, CANVAS_HEIGHT),
            right: Rect::new(
                left_w + center_w,
                0.0,
                CANVAS_WIDTH - left_w - center_w,
                CANVAS_HEIGHT,
            ),
        }
    }

    pub fn get(&self, region: Region) -> Rect {
        match region {
            Region::Left => self.left,
            Region::Center => self.center,
            Region::Right => self.right,
        }
    }
}
