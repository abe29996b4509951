use super::display::{z, Align, Element, PrimitiveKind, Style};
use super::painter::Painter;
use crate::card::build_card;
use crate::card::layout::{
    layout_card, CardSize, BADGE_COUNT_FONT, NAME_FONT, POSITION_FONT, RATING_FONT, STD_DEV_FONT,
};
use crate::geometry::{estimate_text_width, Point, Rect};
use crate::model::PlayerRating;

/// Paint one player card at `anchor`. Returns the card's outer bounds.
pub fn paint_card(
    painter: &mut Painter<'_>,
    element: Element,
    player: &PlayerRating,
    anchor: Point,
    size: CardSize,
) -> Rect {
    let card = build_card(player, painter.assets);
    let layout = layout_card(&card, anchor, size);
    let theme = painter.theme;

    let image = painter.absorb(card.image.clone());
    painter.image(element, layout.image, image);

    if !card.position.is_empty() {
        painter.shape(
            element,
            PrimitiveKind::RoundedRectangle,
            layout.position_tag,
            theme.position_color(card.position_class),
            z::SHAPE,
        );
        let width = estimate_text_width(&card.position, POSITION_FONT);
        let tag = Rect::centered(layout.position_tag.center(), width, POSITION_FONT);
        painter.text_in(
            element,
            tag,
            &card.position,
            Style::text(theme.text, POSITION_FONT, true, Align::Center),
        );
    }

    painter.shape(
        element,
        PrimitiveKind::RoundedRectangle,
        layout.name_pill,
        theme.pill_bg,
        z::PANEL,
    );
    painter.text_in(
        element,
        layout.name_text,
        &card.display_name,
        Style::text(theme.text, NAME_FONT, true, Align::Center),
    );

    painter.shape(
        element,
        PrimitiveKind::Circle,
        layout.rating_circle,
        theme.accent,
        z::SHAPE,
    );
    painter.text_in(
        element,
        layout.rating_text,
        &card.rating_text,
        Style::text(theme.ink, RATING_FONT, true, Align::Center),
    );

    if let (Some(text), Some(bounds)) = (card.std_dev_text.as_deref(), layout.std_dev_text) {
        painter.text_in(
            element,
            bounds,
            text,
            Style::text(theme.muted, STD_DEV_FONT, false, Align::Left),
        );
    }

    for (kind, bounds) in &layout.badges {
        painter.icon(element, *bounds, *kind);
    }
    for (text, bounds) in &layout.badge_counts {
        let style = Style::text(theme.text, BADGE_COUNT_FONT, true, Align::Left);
        painter.text_in(element, *bounds, text, style);
    }

    layout.bounds
}
