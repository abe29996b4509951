use super::canvas::Region;
use super::display::{z, Element, PrimitiveKind, Style};
use super::painter::Painter;
use super::ComposeOptions;
use crate::card::{resolve_image, ImageRef, Placeholder};
use crate::geometry::{estimate_text_width, Point, Rect};
use crate::model::CompiledResult;

const MARGIN: f64 = 15.0;
const DIAMOND_RADIUS: f64 = 28.0;
const COACH_CARD_HEIGHT: f64 = 90.0;
const PHOTO_MAX_HEIGHT: f64 = 160.0;
const QUOTE_FONT: f64 = 12.0;
const QUOTE_MAX_LINES: usize = 4;

/// Left column: match header, score, overall badge, coach card, photo and quote.
pub fn paint(
    painter: &mut Painter<'_>,
    result: &CompiledResult,
    options: &ComposeOptions,
    area: Rect,
) {
    let theme = painter.theme;
    let meta = &result.match_metadata;
    let cx = area.center().x;
    let at = |y: f64| Point { x: cx, y };

    painter.shape(
        Element::Background {
            region: Region::Left,
        },
        PrimitiveKind::Rectangle,
        area,
        theme.background,
        z::BACKGROUND,
    );

    let header = Element::MatchHeader;
    let details = Style::centered(theme.muted, 12.0, false);
    let competition = meta.competition.to_uppercase();
    let title = Style::centered(theme.accent, 16.0, true);
    let mut y = area.y + 20.0;
    y = painter.text_centered(header, &competition, at(y), title) + 4.0;
    y = painter.text_centered(header, &meta.matchday, at(y), details) + 2.0;
    let place = format!("{}  •  {}", meta.venue, meta.date);
    y = painter.text_centered(header, &place, at(y), details) + 16.0;

    // Home side is always listed first
    let club = options.club_label.as_str();
    let opponent = meta.opponent.to_uppercase();
    let (left_team, right_team, left_rating, right_rating) = if meta.is_tottenham_home {
        (club, opponent.as_str(), result.team_rating, result.opponent_rating)
    } else {
        (opponent.as_str(), club, result.opponent_rating, result.team_rating)
    };
    let score = Element::ScoreBlock;
    let team = Style::centered(theme.text, 14.0, true);
    y = painter.text_centered(score, left_team, at(y), team) + 2.0;
    let line = format!("{}  -  {}", meta.home_score, meta.away_score);
    let big = Style::centered(theme.text, 36.0, true);
    y = painter.text_centered(score, &line, at(y), big) + 2.0;
    y = painter.text_centered(score, right_team, at(y), team) + 6.0;
    let ratings = format!("{:.1}  vs  {:.1}", left_rating.mean, right_rating.mean);
    y = painter.text_centered(score, &ratings, at(y), details) + 20.0;

    let badge = Element::OverallBadge;
    let center = at(y + 30.0);
    painter.shape(
        badge,
        PrimitiveKind::Diamond,
        Rect::centered(center, 2.0 * DIAMOND_RADIUS, 2.0 * DIAMOND_RADIUS),
        theme.accent,
        z::SHAPE,
    );
    let overall = format!("{:.1}", result.overall_rating);
    let value = Style::centered(theme.ink, 22.0, true);
    painter.text_centered(badge, &overall, at(center.y - 11.0), value);
    y = center.y + DIAMOND_RADIUS + 6.0;
    y = painter.text_centered(badge, "OVERALL", at(y), details) + 16.0;

    let inner_width = area.width - 2.0 * MARGIN;
    let coach_card = Rect::new(area.x + MARGIN, y, inner_width, COACH_CARD_HEIGHT);
    paint_coach_card(painter, result, coach_card);
    y += COACH_CARD_HEIGHT + 10.0;

    // The frame is always drawn so the quote never moves
    let frame = Rect::new(area.x + MARGIN, y, inner_width, PHOTO_MAX_HEIGHT);
    let photo = match options.photo.as_deref() {
        Some(path) => {
            let resolution = resolve_image(Some(path), painter.assets, Placeholder::Photo);
            painter.absorb(resolution)
        }
        None => ImageRef::Placeholder {
            placeholder: Placeholder::Photo,
        },
    };
    painter.image(Element::Photo, frame, photo);
    y = frame.bottom() + 8.0;

    let quote = options.quote.as_deref().filter(|q| !q.trim().is_empty());
    if let Some(quote) = quote {
        let element = Element::Quote;
        let heading = Style::centered(theme.accent, QUOTE_FONT, true);
        painter.text_centered(element, "\"QUOTE OF THE MATCH\"", at(y), heading);
        y += 18.0;
        let body = Style::centered(theme.text, QUOTE_FONT, false);
        let lines = wrap_text(quote, inner_width, QUOTE_FONT);
        for line in lines.iter().take(QUOTE_MAX_LINES) {
            y = painter.text_centered(element, line, at(y), body) + 2.0;
        }
    }
}

fn paint_coach_card(painter: &mut Painter<'_>, result: &CompiledResult, card: Rect) {
    let theme = painter.theme;
    let coach = &result.coach_ratings;
    let element = Element::CoachCard;
    let cx = card.center().x;

    painter.shape(
        element,
        PrimitiveKind::RoundedRectangle,
        card,
        theme.card_bg,
        z::PANEL,
    );
    let name = coach.name.to_uppercase();
    let top = Point {
        x: cx,
        y: card.y + 6.0,
    };
    painter.text_centered(element, &name, top, Style::centered(theme.text, 14.0, true));

    let row = Style::centered(theme.muted, 12.0, false);
    let mut row_y = card.y + 28.0;
    for (label, stats) in [
        ("XI Selection", coach.starting_eleven),
        ("Tactics", coach.on_field_tactics),
        ("Subs", coach.substitutions),
    ] {
        let text = format!("{}: {:.1}", label, stats.mean);
        let top = Point { x: cx, y: row_y };
        painter.text_centered(element, &text, top, row);
        row_y += 18.0;
    }
}

/// Greedy word wrap using the estimated text width. A word wider than
/// `max_width` is kept whole on its own line.
pub fn wrap_text(text: &str, max_width: f64, font_size: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if estimate_text_width(&candidate, font_size) > max_width && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
