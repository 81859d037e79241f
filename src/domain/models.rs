use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::config::UNRANKED_TIER_ID;

/// Player region
///
/// Codes outside the known set are kept verbatim in `Other`, so a single
/// unexpected region never invalidates the whole source document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    NA,
    EU,
    AS,
    SA,
    OCE,
    #[serde(untagged)]
    Other(String),
}

impl Region {
    pub fn as_str(&self) -> &str {
        match self {
            Region::NA => "NA",
            Region::EU => "EU",
            Region::AS => "AS",
            Region::SA => "SA",
            Region::OCE => "OCE",
            Region::Other(code) => code,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ranking category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gamemode {
    pub id: &'static str,
    pub name: &'static str,
    pub is_overall: bool,
}

impl Gamemode {
    pub fn new(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            is_overall: false,
        }
    }

    pub fn overall(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            is_overall: true,
        }
    }
}

/// One of the fixed rank levels shared by all gamemodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    /// 1 is the best tier
    pub order: u8,
    pub points: u32,
}

impl TierTemplate {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        full_name: &'static str,
        order: u8,
        points: u32,
    ) -> Self {
        Self {
            id,
            name,
            full_name,
            order,
            points,
        }
    }
}

/// A tier template bound to a concrete gamemode (`gm_sword_ht1`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub id: String,
    /// Template id shared across gamemodes (`ht1`)
    pub template_id: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    pub order: u8,
    pub points: u32,
    pub gamemode_id: &'static str,
}

impl Tier {
    pub fn derive(gamemode: &Gamemode, template: &TierTemplate) -> Self {
        Self {
            id: format!("{}_{}", gamemode.id, template.id),
            template_id: template.id,
            name: template.name,
            full_name: template.full_name,
            order: template.order,
            points: template.points,
            gamemode_id: gamemode.id,
        }
    }
}

/// A player's standing within one gamemode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ranking {
    /// Lower-cased tier label, or `-` when unranked
    pub tier_id: String,
    pub tier_name: String,
    pub points: u32,
}

impl Ranking {
    pub fn new(tier_id: impl Into<String>, tier_name: impl Into<String>, points: u32) -> Self {
        Self {
            tier_id: tier_id.into(),
            tier_name: tier_name.into(),
            points,
        }
    }

    pub fn unranked() -> Self {
        Self::new(UNRANKED_TIER_ID, UNRANKED_TIER_ID, 0)
    }

    pub fn from_template(template: &TierTemplate) -> Self {
        Self::new(template.id, template.name, template.points)
    }

    pub fn is_unranked(&self) -> bool {
        self.tier_id == UNRANKED_TIER_ID
    }
}

/// Ranked participant
///
/// Immutable once built: `overall_points` is derived from the rankings in
/// the constructor and there is no way to change either afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    id: String,
    display_name: String,
    region: Region,
    gamemode_rankings: BTreeMap<String, Ranking>,
    overall_points: u32,
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        region: Region,
        gamemode_rankings: BTreeMap<String, Ranking>,
    ) -> Self {
        let overall_points = gamemode_rankings.values().map(|r| r.points).sum();
        Self {
            id: id.into(),
            display_name: display_name.into(),
            region,
            gamemode_rankings,
            overall_points,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn gamemode_rankings(&self) -> &BTreeMap<String, Ranking> {
        &self.gamemode_rankings
    }

    pub fn ranking(&self, gamemode_id: &str) -> Option<&Ranking> {
        self.gamemode_rankings.get(gamemode_id)
    }

    /// Ranking for the gamemode, unless missing or unranked
    pub fn ranked_in(&self, gamemode_id: &str) -> Option<&Ranking> {
        self.ranking(gamemode_id).filter(|r| !r.is_unranked())
    }

    pub fn overall_points(&self) -> u32 {
        self.overall_points
    }
}

/// Raw player record as found in the source document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPlayerRecord {
    pub name: String,
    pub region: Region,
    /// Gamemode key (without `gm_`) to tier label
    pub tiers: BTreeMap<String, String>,
}
