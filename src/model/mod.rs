pub mod codec;
pub mod match_data;
pub mod result;

pub use codec::{decode, encode, from_json, to_json};
pub use match_data::{EventKind, MatchData, MatchEvent, PlayerInfo, SubstitutionEvent};
pub use result::{CoachRatings, CompiledResult, MatchMetadata, PlayerRating, RatingStats};
