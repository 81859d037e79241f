use super::models::{Gamemode, Tier, TierTemplate};
use super::tier_index::TierIndex;
use crate::config::{GAMEMODE_ID_PREFIX, TIER_TEMPLATES, get_gamemodes};

/// Reference data shared by every query: gamemodes, derived tiers and the
/// tier lookup table. Built once and never modified.
#[derive(Debug, Clone)]
pub struct Catalog {
    gamemodes: Vec<Gamemode>,
    templates: Vec<TierTemplate>,
    tiers: Vec<Tier>,
    tier_index: TierIndex,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(get_gamemodes(), &TIER_TEMPLATES)
    }
}

impl Catalog {
    pub fn new(gamemodes: Vec<Gamemode>, templates: &[TierTemplate]) -> Self {
        let tiers = derive_tiers(&gamemodes, templates);
        Self {
            gamemodes,
            templates: templates.to_vec(),
            tiers,
            tier_index: TierIndex::new(templates),
        }
    }

    pub fn gamemodes(&self) -> &[Gamemode] {
        &self.gamemodes
    }

    /// Every gamemode except the overall pseudo-category
    pub fn ranked_gamemodes(&self) -> impl Iterator<Item = &Gamemode> {
        self.gamemodes.iter().filter(|g| !g.is_overall)
    }

    /// Tier templates, best first
    pub fn templates(&self) -> &[TierTemplate] {
        &self.templates
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn tier_index(&self) -> &TierIndex {
        &self.tier_index
    }

    pub fn gamemode(&self, gamemode_id: &str) -> Option<&Gamemode> {
        self.gamemodes.iter().find(|g| g.id == gamemode_id)
    }

    pub fn is_overall(&self, gamemode_id: &str) -> bool {
        self.gamemode(gamemode_id).is_some_and(|g| g.is_overall)
    }

    /// Find a gamemode from user input: `gm_sword`, `sword` or `SWORD`
    pub fn resolve_gamemode(&self, input: &str) -> Option<&Gamemode> {
        let wanted = input.trim().to_lowercase();
        self.gamemodes.iter().find(|g| {
            g.id == wanted || g.id.strip_prefix(GAMEMODE_ID_PREFIX) == Some(wanted.as_str())
        })
    }

    pub fn tier(&self, tier_id: &str) -> Option<&Tier> {
        self.tiers.iter().find(|t| t.id == tier_id)
    }
}

fn derive_tiers(gamemodes: &[Gamemode], templates: &[TierTemplate]) -> Vec<Tier> {
    gamemodes
        .iter()
        .filter(|g| !g.is_overall)
        .flat_map(|g| templates.iter().map(move |t| Tier::derive(g, t)))
        .collect()
}
