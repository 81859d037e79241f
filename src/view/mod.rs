pub mod grouping;
pub mod models;
pub mod render;

pub use grouping::{GroupedPlayer, TierGroup, TierLevel, group_by_tier_number, parse_tier_id};
pub use models::{GamemodeView, OverallView, PlayerProfile, TierMembers};
