use std::collections::HashMap;

use super::models::TierTemplate;
use crate::config::UNRANKED_TIER_ID;

/// Tier templates indexed by identifier
#[derive(Debug, Clone)]
pub struct TierIndex {
    templates: HashMap<&'static str, TierTemplate>,
}

impl TierIndex {
    pub fn new(templates: &[TierTemplate]) -> Self {
        Self {
            templates: templates.iter().map(|t| (t.id, *t)).collect(),
        }
    }

    pub fn get(&self, tier_id: &str) -> Option<&TierTemplate> {
        self.templates.get(tier_id)
    }

    /// Resolve a tier label from a player record, in any letter case
    pub fn resolve_label(&self, label: &str) -> Option<&TierTemplate> {
        if label == UNRANKED_TIER_ID {
            return None;
        }
        self.get(&label.to_lowercase())
    }

    /// Points awarded for a tier label; unranked and unknown labels score 0
    pub fn points_for_label(&self, label: &str) -> u32 {
        self.resolve_label(label).map(|t| t.points).unwrap_or(0)
    }

    pub fn order_of(&self, tier_id: &str) -> Option<u8> {
        self.get(tier_id).map(|t| t.order)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
