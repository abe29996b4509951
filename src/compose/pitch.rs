use super::canvas::Region;
use super::cards::paint_card;
use super::display::{z, Align, Element, PrimitiveKind, Style};
use super::painter::Painter;
use crate::card::{BadgeKind, CardSize};
use crate::formation::{place_starters, FormationTable};
use crate::geometry::{Point, Rect};
use crate::model::CompiledResult;

const GRID_TOP: f64 = 60.0;
const GRID_BOTTOM_MARGIN: f64 = 100.0;
const LEGEND_FONT: f64 = 10.0;

/// Centre column: backdrop, response count, starter grid, referee and legend.
pub fn paint(
    painter: &mut Painter<'_>,
    result: &CompiledResult,
    table: &FormationTable,
    area: Rect,
) {
    let theme = painter.theme;
    let backdrop = Element::Background {
        region: Region::Center,
    };
    for fill in [theme.background, theme.pitch_overlay] {
        painter.shape(
            backdrop,
            PrimitiveKind::Rectangle,
            area,
            fill,
            z::BACKGROUND,
        );
    }

    let cx = area.center().x;
    let header = format!("PLAYER RATINGS  •  {} RESPONSES", result.total_responses);
    let top = Point {
        x: cx,
        y: area.y + 12.0,
    };
    let style = Style::centered(theme.text, 14.0, true);
    painter.text_centered(Element::ResponseCount, &header, top, style);

    let rows = painter.absorb(table.rows(&result.formation));
    let grid = Rect::new(
        area.x,
        area.y + GRID_TOP,
        area.width,
        area.height - GRID_TOP - GRID_BOTTOM_MARGIN,
    );
    for slot in place_starters(&rows, result.starting_players.len(), grid) {
        let element = Element::StarterCard {
            row: slot.row,
            column: slot.column,
        };
        let player = &result.starting_players[slot.lineup_index];
        paint_card(painter, element, player, slot.center, CardSize::Starter);
    }

    let referee = format!("REFEREE: {:.1}", result.referee_rating.mean);
    let top = Point {
        x: cx,
        y: area.bottom() - 70.0,
    };
    let style = Style::centered(theme.text, 12.0, true);
    painter.text_centered(Element::Referee, &referee, top, style);

    let legend = Point {
        x: area.x + 30.0,
        y: area.bottom() - 40.0,
    };
    paint_legend(painter, legend);
}

fn paint_legend(painter: &mut Painter<'_>, origin: Point) {
    let theme = painter.theme;
    let element = Element::Legend;
    let swatch = LEGEND_FONT + 2.0;
    let mut x = origin.x;

    let rating = Rect::new(x, origin.y, swatch, swatch);
    painter.shape(
        element,
        PrimitiveKind::Circle,
        rating,
        theme.accent,
        z::SHAPE,
    );
    let label_at = |x: f64| Point { x, y: origin.y };
    let accent = Style::text(theme.accent, LEGEND_FONT, false, Align::Left);
    let at = label_at(rating.right() + 4.0);
    x = painter.text_left(element, "= Avg Rating", at, accent) + 20.0;

    for (kind, label) in [
        (BadgeKind::Goal, "= Goal"),
        (BadgeKind::Assist, "= Assist"),
        (BadgeKind::OwnGoal, "= Own Goal"),
        (BadgeKind::Motm, "= MOTM"),
    ] {
        let icon = Rect::new(x, origin.y, swatch, swatch);
        painter.icon(element, icon, kind);
        let style = Style::text(theme.text, LEGEND_FONT, false, Align::Left);
        let at = label_at(icon.right() + 4.0);
        x = painter.text_left(element, label, at, style) + 20.0;
    }

    let muted = Style::text(theme.muted, LEGEND_FONT, false, Align::Left);
    painter.text_left(element, "±n = Std Dev", label_at(x), muted);
}
