pub mod assets;
pub mod builder;
pub mod layout;

pub use assets::{resolve_image, AssetCatalog, AssetResolver, ImageRef, NoAssets, Placeholder};
pub use builder::{badges_for, build_card, Badge, BadgeKind, CardDescriptor, PositionClass};
pub use layout::{anchor_offset, card_height, layout_card, CardLayout, CardSize, CARD_WIDTH};
