mod queries;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Catalog, Player};

/// How the player collection was populated
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DataOrigin {
    #[serde(rename_all = "camelCase")]
    Loaded {
        source: String,
        loaded_at: DateTime<Utc>,
    },
    #[serde(rename_all = "camelCase")]
    Fallback { generated_at: DateTime<Utc> },
}

impl DataOrigin {
    pub fn loaded(source: impl Into<String>) -> Self {
        DataOrigin::Loaded {
            source: source.into(),
            loaded_at: Utc::now(),
        }
    }

    pub fn fallback() -> Self {
        DataOrigin::Fallback {
            generated_at: Utc::now(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, DataOrigin::Fallback { .. })
    }
}

/// Reference catalog plus the player collection; read-only once built
#[derive(Debug, Clone)]
pub struct TierListStore {
    catalog: Catalog,
    players: Vec<Player>,
    origin: DataOrigin,
}

impl TierListStore {
    pub fn new(catalog: Catalog, players: Vec<Player>, origin: DataOrigin) -> Self {
        Self {
            catalog,
            players,
            origin,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    pub fn origin(&self) -> &DataOrigin {
        &self.origin
    }
}
