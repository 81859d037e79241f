use crate::domain::{Region, TierTemplate};

/// Tier label marking a player as unranked in a gamemode
pub const UNRANKED_TIER_ID: &str = "-";

/// The ten rank levels shared by every non-overall gamemode, best first
pub const TIER_TEMPLATES: [TierTemplate; 10] = [
    TierTemplate::new("ht1", "HT1", "High Tier 1", 1, 60),
    TierTemplate::new("lt1", "LT1", "Low Tier 1", 2, 45),
    TierTemplate::new("ht2", "HT2", "High Tier 2", 3, 30),
    TierTemplate::new("lt2", "LT2", "Low Tier 2", 4, 20),
    TierTemplate::new("ht3", "HT3", "High Tier 3", 5, 15),
    TierTemplate::new("lt3", "LT3", "Low Tier 3", 6, 6),
    TierTemplate::new("ht4", "HT4", "High Tier 4", 7, 4),
    TierTemplate::new("lt4", "LT4", "Low Tier 4", 8, 3),
    TierTemplate::new("ht5", "HT5", "High Tier 5", 9, 2),
    TierTemplate::new("lt5", "LT5", "Low Tier 5", 10, 1),
];

pub const REGIONS: [Region; 5] = [Region::NA, Region::EU, Region::AS, Region::SA, Region::OCE];
