use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::Player;

/// High (`HT`) or low (`LT`) half of a tier number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TierLevel {
    #[serde(rename = "HT")]
    High,
    #[serde(rename = "LT")]
    Low,
}

impl TierLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TierLevel::High => "HT",
            TierLevel::Low => "LT",
        }
    }
}

/// Split a tier id such as `ht3` into its level and tier number (1-5)
pub fn parse_tier_id(tier_id: &str) -> Option<(TierLevel, u8)> {
    let (level, rest) = if let Some(rest) = tier_id.strip_prefix("ht") {
        (TierLevel::High, rest)
    } else if let Some(rest) = tier_id.strip_prefix("lt") {
        (TierLevel::Low, rest)
    } else {
        return None;
    };

    let number: u8 = rest.parse().ok()?;
    (1..=5).contains(&number).then_some((level, number))
}

#[derive(Debug, Clone, Copy)]
pub struct GroupedPlayer<'a> {
    pub player: &'a Player,
    pub level: TierLevel,
}

#[derive(Debug, Clone)]
pub struct TierGroup<'a> {
    pub tier_number: u8,
    pub players: Vec<GroupedPlayer<'a>>,
}

/// Group already-sorted players into tier columns for one gamemode
///
/// Columns come out ascending by tier number. Inside a column `HT` players
/// precede `LT` players; otherwise the incoming order is kept. Players
/// whose tier id is not an `HT`/`LT` 1-5 label are left out.
pub fn group_by_tier_number<'a>(players: &[&'a Player], gamemode_id: &str) -> Vec<TierGroup<'a>> {
    let mut groups: BTreeMap<u8, Vec<GroupedPlayer<'a>>> = BTreeMap::new();

    for &player in players {
        let Some(ranking) = player.ranked_in(gamemode_id) else {
            continue;
        };
        let Some((level, tier_number)) = parse_tier_id(&ranking.tier_id) else {
            continue;
        };
        groups
            .entry(tier_number)
            .or_default()
            .push(GroupedPlayer { player, level });
    }

    groups
        .into_iter()
        .map(|(tier_number, mut players)| {
            players.sort_by_key(|p| p.level);
            TierGroup {
                tier_number,
                players,
            }
        })
        .collect()
}
