pub mod gamemodes;
pub mod settings;
pub mod tiers;

pub use gamemodes::{GAMEMODE_ID_PREFIX, OVERALL_GAMEMODE_ID, get_gamemodes};
pub use settings::AppConfig;
pub use tiers::{REGIONS, TIER_TEMPLATES, UNRANKED_TIER_ID};
