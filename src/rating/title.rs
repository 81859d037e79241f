use serde::Serialize;
use std::fmt;

/// Prestige title derived from a player's overall points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RankTitle {
    CombatGrandmaster,
    CombatMaster,
    CombatAce,
    CombatSpecialist,
    CombatCadet,
    CombatNovice,
    Rookie,
}

// Evaluated top-down; the first threshold reached wins
const THRESHOLDS: [(u32, RankTitle); 7] = [
    (400, RankTitle::CombatGrandmaster),
    (250, RankTitle::CombatMaster),
    (100, RankTitle::CombatAce),
    (50, RankTitle::CombatSpecialist),
    (20, RankTitle::CombatCadet),
    (10, RankTitle::CombatNovice),
    (0, RankTitle::Rookie),
];

impl RankTitle {
    pub fn from_points(points: u32) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min_points, _)| points >= *min_points)
            .map(|(_, title)| *title)
            .unwrap_or(RankTitle::Rookie)
    }

    pub fn title(&self) -> &'static str {
        match self {
            RankTitle::CombatGrandmaster => "Combat Grandmaster",
            RankTitle::CombatMaster => "Combat Master",
            RankTitle::CombatAce => "Combat Ace",
            RankTitle::CombatSpecialist => "Combat Specialist",
            RankTitle::CombatCadet => "Combat Cadet",
            RankTitle::CombatNovice => "Combat Novice",
            RankTitle::Rookie => "Rookie",
        }
    }

    /// Stable style key for renderers
    pub fn slug(&self) -> &'static str {
        match self {
            RankTitle::CombatGrandmaster => "grandmaster",
            RankTitle::CombatMaster => "master",
            RankTitle::CombatAce => "ace",
            RankTitle::CombatSpecialist => "specialist",
            RankTitle::CombatCadet => "cadet",
            RankTitle::CombatNovice => "novice",
            RankTitle::Rookie => "rookie",
        }
    }
}

impl fmt::Display for RankTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Podium placement in the overall ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }
}
