use serde::Serialize;

use super::assets::{resolve_image, AssetResolver, ImageRef, Placeholder};
use crate::error::Resolution;
use crate::model::PlayerRating;

/// Colour class of the position badge.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PositionClass {
    Keeper,
    Defender,
    Midfielder,
    Forward,
    Neutral,
}

impl PositionClass {
    /// Map a short position code (GK, CB, AM, LW, ...) to its class.
    pub fn classify(position: &str) -> Self {
        match position.trim().to_ascii_uppercase().as_str() {
            "GK" | "G" => PositionClass::Keeper,
            "CB" | "LB" | "RB" | "LWB" | "RWB" | "SW" | "DF" | "D" => PositionClass::Defender,
            "DM" | "CDM" | "CM" | "AM" | "CAM" | "LM" | "RM" | "MF" | "M" => {
                PositionClass::Midfielder
            }
            "LW" | "RW" | "LF" | "RF" | "CF" | "ST" | "SS" | "FW" | "F" => PositionClass::Forward,
            _ => PositionClass::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    Goal,
    Assist,
    OwnGoal,
    Motm,
}

/// An event badge: `count` icons of `kind`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Badge {
    pub kind: BadgeKind,
    pub count: u32,
}

/// Everything needed to draw one player card, independent of placement.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDescriptor {
    pub name: String,
    /// Upper-cased name for the nameplate.
    pub display_name: String,
    pub position: String,
    pub position_class: PositionClass,
    pub rating_text: String,
    /// Only present when the spread is above zero.
    pub std_dev_text: Option<String>,
    pub badges: Vec<Badge>,
    pub image: Resolution<ImageRef>,
}

impl CardDescriptor {
    /// Total number of badge icons, one per goal/assist/own goal plus MOTM.
    pub fn badge_icons(&self) -> u32 {
        self.badges.iter().map(|b| b.count).sum()
    }
}

/// Badges in fixed order: goals, assists, own goals, MOTM.
pub fn badges_for(player: &PlayerRating) -> Vec<Badge> {
    [
        (BadgeKind::Goal, player.goals),
        (BadgeKind::Assist, player.assists),
        (BadgeKind::OwnGoal, player.own_goals),
        (BadgeKind::Motm, u32::from(player.is_motm)),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(kind, count)| Badge { kind, count })
    .collect()
}

pub fn build_card(player: &PlayerRating, assets: &dyn AssetResolver) -> CardDescriptor {
    // Gate on the text actually shown so tiny spreads never read "±0.0".
    let spread = format!("{:.1}", player.rating.std_dev);
    let has_spread = player.rating.std_dev > 0.0 && spread != "0.0";
    CardDescriptor {
        name: player.name.clone(),
        display_name: player.name.to_uppercase(),
        position: player.position.clone(),
        position_class: PositionClass::classify(&player.position),
        rating_text: format!("{:.1}", player.rating.mean),
        std_dev_text: has_spread.then(|| format!("±{}", spread)),
        badges: badges_for(player),
        image: resolve_image(
            player.image_path.as_deref(),
            assets,
            Placeholder::Silhouette,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::assets::{AssetCatalog, NoAssets};
    use crate::model::RatingStats;

    fn sample_player() -> PlayerRating {
        PlayerRating {
            name: "Son Heung-min".to_string(),
            position: "LW".to_string(),
            image_path: Some("players/son.png".to_string()),
            rating: RatingStats {
                mean: 7.26,
                std_dev: 1.04,
            },
            is_starter: true,
            goals: 2,
            assists: 1,
            own_goals: 0,
            is_motm: true,
        }
    }

    fn badge(kind: BadgeKind, count: u32) -> Badge {
        Badge { kind, count }
    }

    #[test]
    fn test_card_text_fields() {
        let card = build_card(&sample_player(), &NoAssets);
        assert_eq!(card.display_name, "SON HEUNG-MIN");
        assert_eq!(card.rating_text, "7.3");
        assert_eq!(card.std_dev_text.as_deref(), Some("±1.0"));
        assert_eq!(card.position_class, PositionClass::Forward);
    }

    #[test]
    fn test_std_dev_hidden_when_zero() {
        let mut player = sample_player();
        player.rating.std_dev = 0.0;
        assert_eq!(build_card(&player, &NoAssets).std_dev_text, None);
    }

    #[test]
    fn test_std_dev_hidden_when_it_rounds_to_zero() {
        let mut player = sample_player();
        player.rating.std_dev = 0.04;
        assert_eq!(build_card(&player, &NoAssets).std_dev_text, None);
        player.rating.std_dev = 0.06;
        let card = build_card(&player, &NoAssets);
        assert_eq!(card.std_dev_text.as_deref(), Some("±0.1"));
    }

    #[test]
    fn test_badges_repeat_per_event() {
        let card = build_card(&sample_player(), &NoAssets);
        assert_eq!(
            card.badges,
            vec![
                badge(BadgeKind::Goal, 2),
                badge(BadgeKind::Assist, 1),
                badge(BadgeKind::Motm, 1),
            ]
        );
        assert_eq!(card.badge_icons(), 4);
    }

    #[test]
    fn test_no_events_no_badges() {
        let mut player = sample_player();
        player.goals = 0;
        player.assists = 0;
        player.is_motm = false;
        assert!(build_card(&player, &NoAssets).badges.is_empty());

        player.own_goals = 1;
        assert_eq!(
            build_card(&player, &NoAssets).badges,
            vec![badge(BadgeKind::OwnGoal, 1)]
        );
    }

    #[test]
    fn test_image_resolution() {
        let catalog = AssetCatalog::from_paths(["players/son.png"]);
        assert!(!build_card(&sample_player(), &catalog).image.is_fallback());
        assert!(build_card(&sample_player(), &NoAssets).image.is_fallback());
    }

    #[test]
    fn test_position_classes() {
        assert_eq!(PositionClass::classify("GK"), PositionClass::Keeper);
        assert_eq!(PositionClass::classify("cb"), PositionClass::Defender);
        assert_eq!(PositionClass::classify("RB"), PositionClass::Defender);
        assert_eq!(PositionClass::classify("DM"), PositionClass::Midfielder);
        assert_eq!(PositionClass::classify(" AM "), PositionClass::Midfielder);
        assert_eq!(PositionClass::classify("ST"), PositionClass::Forward);
        assert_eq!(PositionClass::classify("SUB"), PositionClass::Neutral);
        assert_eq!(PositionClass::classify(""), PositionClass::Neutral);
    }
}
