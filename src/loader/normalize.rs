use std::collections::BTreeMap;

use crate::config::gamemodes::gamemode_id_for_key;
use crate::domain::{Player, RawPlayerRecord, Ranking, TierIndex};

/// Identifier for the player at a 1-based position
pub fn player_id(position: usize) -> String {
    format!("player_{}", position)
}

/// Turn raw records into players, keeping input order
pub fn normalize(records: Vec<RawPlayerRecord>, index: &TierIndex) -> Vec<Player> {
    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| normalize_record(idx + 1, record, index))
        .collect()
}

fn normalize_record(position: usize, record: RawPlayerRecord, index: &TierIndex) -> Player {
    let rankings: BTreeMap<String, Ranking> = record
        .tiers
        .iter()
        .map(|(key, label)| (gamemode_id_for_key(key), build_ranking(label, index)))
        .collect();

    Player::new(player_id(position), record.name, record.region, rankings)
}

fn build_ranking(label: &str, index: &TierIndex) -> Ranking {
    Ranking::new(
        label.to_lowercase(),
        label.to_uppercase(),
        index.points_for_label(label),
    )
}
