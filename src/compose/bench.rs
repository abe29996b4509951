use super::canvas::Region;
use super::cards::paint_card;
use super::display::{z, Element, PrimitiveKind, Style};
use super::painter::Painter;
use crate::card::{anchor_offset, card_height, CardSize};
use crate::geometry::{Point, Rect};
use crate::model::CompiledResult;

const LIST_TOP: f64 = 60.0;
const LIST_BOTTOM_MARGIN: f64 = 20.0;
const MAX_SPACING: f64 = 180.0;

/// Anchors for `count` bench cards inside `area`.
///
/// The first card's top sits at `LIST_TOP` and the last card's bottom never
/// passes the bottom margin; long benches overlap rather than overflow.
pub fn bench_anchors(area: Rect, count: usize) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let top = area.y + LIST_TOP;
    let last_top = area.bottom() - LIST_BOTTOM_MARGIN - card_height(CardSize::Bench);
    let spacing = if count > 1 {
        ((last_top - top) / (count - 1) as f64).clamp(0.0, MAX_SPACING)
    } else {
        0.0
    };
    let first = top + anchor_offset(CardSize::Bench);
    let cx = area.center().x;
    (0..count)
        .map(|i| Point {
            x: cx,
            y: first + i as f64 * spacing,
        })
        .collect()
}

/// Right column: substitute cards in appearance order, or an empty-state marker.
pub fn paint(painter: &mut Painter<'_>, result: &CompiledResult, area: Rect) {
    let theme = painter.theme;
    painter.shape(
        Element::Background {
            region: Region::Right,
        },
        PrimitiveKind::Rectangle,
        area,
        theme.sidebar,
        z::BACKGROUND,
    );

    let cx = area.center().x;
    let header = Style::centered(theme.accent, 14.0, true);
    let top = Point {
        x: cx,
        y: area.y + 16.0,
    };
    painter.text_centered(Element::BenchHeader, "SUBSTITUTES", top, header);

    if result.substitute_players.is_empty() {
        let note = Style::centered(theme.muted, 11.0, false);
        let top = Point {
            x: cx,
            y: area.y + 50.0,
        };
        painter.text_centered(Element::EmptyBench, "No substitutions", top, note);
        return;
    }

    let anchors = bench_anchors(area, result.substitute_players.len());
    for (index, (player, anchor)) in result.substitute_players.iter().zip(anchors).enumerate() {
        paint_card(
            painter,
            Element::SubstituteCard { index },
            player,
            anchor,
            CardSize::Bench,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column() -> Rect {
        Rect::new(1497.6, 0.0, 422.4, 1080.0)
    }

    #[test]
    fn test_spacing_capped() {
        let area = column();
        let anchors = bench_anchors(area, 3);
        let ys: Vec<f64> = anchors.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![110.0, 290.0, 470.0]);
        for anchor in &anchors {
            assert!((anchor.x - area.center().x).abs() < 1e-9);
        }
    }

    #[test]
    fn test_spacing_shrinks_for_long_bench() {
        let anchors = bench_anchors(column(), 12);
        assert_eq!(anchors.len(), 12);
        // (1080 - 20 - 130 - 60) / 11
        let expected = 870.0 / 11.0;
        assert!((anchors[1].y - anchors[0].y - expected).abs() < 1e-9);
    }

    #[test]
    fn test_cards_stay_inside_column() {
        let area = column();
        for count in 1..=20 {
            for anchor in bench_anchors(area, count) {
                let top = anchor.y - anchor_offset(CardSize::Bench);
                let bottom = top + card_height(CardSize::Bench);
                let floor = area.bottom() - LIST_BOTTOM_MARGIN;
                assert!(top >= area.y + LIST_TOP - 1e-9, "{} subs", count);
                assert!(bottom <= floor + 1e-9, "{} subs", count);
            }
        }
    }

    #[test]
    fn test_no_anchors_for_empty_bench() {
        assert!(bench_anchors(column(), 0).is_empty());
    }
}
