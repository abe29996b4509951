use super::builder::{BadgeKind, CardDescriptor};
use crate::geometry::{estimate_text_width, Point, Rect};

/// Outer width reserved for every card, independent of name length.
pub const CARD_WIDTH: f64 = 120.0;

pub const NAME_FONT: f64 = 11.0;
pub const RATING_FONT: f64 = 13.0;
pub const STD_DEV_FONT: f64 = 10.0;
pub const POSITION_FONT: f64 = 9.0;
pub const BADGE_COUNT_FONT: f64 = 10.0;

/// Badges with more events than this draw one icon and a "×N" count.
pub const MAX_REPEATED_ICONS: u32 = 3;

const IMAGE_LIFT: f64 = 20.0;
const NAME_GAP: f64 = 2.0;
const PILL_PAD_X: f64 = 8.0;
const PILL_PAD_Y: f64 = 2.0;
const RATING_OFFSET: f64 = 22.0;
const RATING_RADIUS: f64 = 14.0;
const BADGE_OFFSET: f64 = 32.0;
const BADGE_SIZE: f64 = 14.0;
const BADGE_GAP: f64 = 2.0;
const TAG_WIDTH: f64 = 28.0;
const TAG_HEIGHT: f64 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSize {
    /// Pitch card.
    Starter,
    /// Bench card, slightly smaller image.
    Bench,
}

impl CardSize {
    pub fn image_px(self) -> f64 {
        match self {
            CardSize::Starter => 70.0,
            CardSize::Bench => 60.0,
        }
    }
}

/// Distance from a card's top edge down to its anchor.
pub fn anchor_offset(size: CardSize) -> f64 {
    size.image_px() / 2.0 + IMAGE_LIFT
}

/// Full height of a card, badge strip included.
pub fn card_height(size: CardSize) -> f64 {
    size.image_px() + NAME_GAP + RATING_OFFSET + BADGE_OFFSET + BADGE_SIZE
}

/// Resolved geometry of one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub bounds: Rect,
    pub image: Rect,
    pub position_tag: Rect,
    pub name_pill: Rect,
    pub name_text: Rect,
    pub rating_circle: Rect,
    pub rating_text: Rect,
    pub std_dev_text: Option<Rect>,
    pub badges: Vec<(BadgeKind, Rect)>,
    /// "×N" text runs for collapsed badges.
    pub badge_counts: Vec<(String, Rect)>,
}

enum StripItem {
    Icon(BadgeKind),
    Count(String),
}

impl StripItem {
    fn width(&self) -> f64 {
        match self {
            StripItem::Icon(_) => BADGE_SIZE,
            StripItem::Count(text) => estimate_text_width(text, BADGE_COUNT_FONT),
        }
    }
}

fn badge_strip(card: &CardDescriptor) -> Vec<StripItem> {
    let mut items = Vec::new();
    for badge in &card.badges {
        if badge.count > MAX_REPEATED_ICONS {
            items.push(StripItem::Icon(badge.kind));
            items.push(StripItem::Count(format!("×{}", badge.count)));
        } else {
            items.extend((0..badge.count).map(|_| StripItem::Icon(badge.kind)));
        }
    }
    items
}

/// Lay a card out around `anchor`.
///
/// The image sits above the anchor with the nameplate, rating circle and
/// badge strip stacked below it. Image bounds depend only on `anchor` and
/// `size`, so a placeholder occupies exactly the space a real photo would.
pub fn layout_card(card: &CardDescriptor, anchor: Point, size: CardSize) -> CardLayout {
    let s = size.image_px();
    let cx = anchor.x;

    let image = Rect::new(cx - s / 2.0, anchor.y - s / 2.0 - IMAGE_LIFT, s, s);
    let position_tag = Rect::new(
        image.x - TAG_WIDTH / 2.0,
        image.y,
        TAG_WIDTH,
        TAG_HEIGHT,
    );

    let name_y = image.bottom() + NAME_GAP;
    let name_width = estimate_text_width(&card.display_name, NAME_FONT);
    let name_text = Rect::new(
        cx - name_width / 2.0,
        name_y + PILL_PAD_Y,
        name_width,
        NAME_FONT,
    );
    let name_pill = Rect::new(
        name_text.x - PILL_PAD_X,
        name_y,
        name_width + 2.0 * PILL_PAD_X,
        NAME_FONT + 2.0 * PILL_PAD_Y,
    );

    let rating_y = name_y + RATING_OFFSET;
    let rating_center = Point {
        x: cx,
        y: rating_y + RATING_RADIUS,
    };
    let rating_circle = Rect::centered(rating_center, 2.0 * RATING_RADIUS, 2.0 * RATING_RADIUS);
    let rating_text = Rect::centered(
        rating_center,
        estimate_text_width(&card.rating_text, RATING_FONT),
        RATING_FONT,
    );

    let std_dev_text = card.std_dev_text.as_deref().map(|text| {
        Rect::new(
            cx + RATING_RADIUS + 4.0,
            rating_y + 8.0,
            estimate_text_width(text, STD_DEV_FONT),
            STD_DEV_FONT,
        )
    });

    let badge_y = rating_y + BADGE_OFFSET;
    let items = badge_strip(card);
    let gaps = items.len().saturating_sub(1) as f64 * BADGE_GAP;
    let strip = items.iter().map(StripItem::width).sum::<f64>() + gaps;
    let mut badges = Vec::new();
    let mut badge_counts = Vec::new();
    let mut x = cx - strip / 2.0;
    for item in items {
        let width = item.width();
        match item {
            StripItem::Icon(kind) => {
                badges.push((kind, Rect::new(x, badge_y, BADGE_SIZE, BADGE_SIZE)));
            }
            StripItem::Count(text) => {
                let top = badge_y + (BADGE_SIZE - BADGE_COUNT_FONT) / 2.0;
                badge_counts.push((text, Rect::new(x, top, width, BADGE_COUNT_FONT)));
            }
        }
        x += width + BADGE_GAP;
    }

    let bounds = Rect::new(
        cx - CARD_WIDTH / 2.0,
        image.y,
        CARD_WIDTH,
        badge_y + BADGE_SIZE - image.y,
    );

    CardLayout {
        bounds,
        image,
        position_tag,
        name_pill,
        name_text,
        rating_circle,
        rating_text,
        std_dev_text,
        badges,
        badge_counts,
    }
}
