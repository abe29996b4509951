//! Colour palette for the results graphic

use serde::{Serialize, Serializer};
use std::fmt;

use crate::card::PositionClass;

/// 8-bit RGBA colour, serialised as `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba(r, g, b, 255)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgba(r, g, b, a) = *self;
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Complete colour palette for the graphic
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Region backgrounds
    pub background: Rgba,
    pub sidebar: Rgba,
    pub pitch_overlay: Rgba,

    // Panels
    pub card_bg: Rgba,
    pub pill_bg: Rgba,

    // Text
    pub accent: Rgba,
    pub text: Rgba,
    pub muted: Rgba,
    pub ink: Rgba,

    // Position tags
    pub keeper: Rgba,
    pub defender: Rgba,
    pub midfielder: Rgba,
    pub forward: Rgba,
    pub neutral: Rgba,
}

impl Theme {
    /// Navy and yellow club palette
    pub fn standard() -> Self {
        Self {
            background: Rgba::rgb(15, 20, 50),
            sidebar: Rgba::rgb(18, 22, 48),
            pitch_overlay: Rgba(20, 40, 100, 160),
            card_bg: Rgba(30, 35, 60, 200),
            pill_bg: Rgba(20, 20, 20, 220),
            accent: Rgba::rgb(255, 210, 50),
            text: Rgba::rgb(255, 255, 255),
            muted: Rgba::rgb(180, 180, 180),
            ink: Rgba::rgb(0, 0, 0),
            keeper: Rgba::rgb(240, 150, 30),
            defender: Rgba::rgb(50, 120, 200),
            midfielder: Rgba::rgb(60, 170, 90),
            forward: Rgba::rgb(210, 60, 60),
            neutral: Rgba::rgb(110, 110, 120),
        }
    }

    /// Tag colour for a position class
    pub fn position_color(&self, class: PositionClass) -> Rgba {
        match class {
            PositionClass::Keeper => self.keeper,
            PositionClass::Defender => self.defender,
            PositionClass::Midfielder => self.midfielder,
            PositionClass::Forward => self.forward,
            PositionClass::Neutral => self.neutral,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}
