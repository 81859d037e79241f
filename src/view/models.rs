use serde::Serialize;

use super::grouping::{TierLevel, group_by_tier_number};
use crate::domain::{Gamemode, Player, Region, Tier};
use crate::rating::{Medal, RankTitle};
use crate::store::TierListStore;

const NO_SEARCH_MATCH: &str = "No players found matching your search";
const NO_PLAYERS_RANKED: &str = "No players ranked yet";
const NO_PLAYERS_IN_GAMEMODE: &str = "No players in this gamemode yet";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallRow {
    pub rank: usize,
    pub player_id: String,
    pub name: String,
    pub region: Region,
    pub overall_points: u32,
    pub rank_title: RankTitle,
    pub title_style: &'static str,
    pub medal: Option<Medal>,
}

impl OverallRow {
    fn build(rank: usize, player: &Player) -> Self {
        let rank_title = RankTitle::from_points(player.overall_points());
        Self {
            rank,
            player_id: player.id().to_string(),
            name: player.display_name().to_string(),
            region: player.region().clone(),
            overall_points: player.overall_points(),
            rank_title,
            title_style: rank_title.slug(),
            medal: Medal::for_rank(rank),
        }
    }
}

/// Overall leaderboard table
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallView {
    pub rows: Vec<OverallRow>,
    pub empty_message: Option<&'static str>,
}

impl OverallView {
    /// Rows are numbered by position within the (possibly filtered) result
    pub fn build(store: &TierListStore, gamemode_id: &str, term: &str) -> Self {
        let rows: Vec<OverallRow> = store
            .search(gamemode_id, term)
            .into_iter()
            .enumerate()
            .map(|(idx, player)| OverallRow::build(idx + 1, player))
            .collect();

        let empty_message = rows.is_empty().then(|| {
            if has_term(term) {
                NO_SEARCH_MATCH
            } else {
                NO_PLAYERS_RANKED
            }
        });

        Self {
            rows,
            empty_message,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierColumnEntry {
    pub player_id: String,
    pub name: String,
    pub level: TierLevel,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierColumn {
    pub tier_number: u8,
    pub players: Vec<TierColumnEntry>,
}

/// One gamemode laid out as tier columns
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamemodeView {
    pub gamemode_id: &'static str,
    pub gamemode_name: &'static str,
    pub columns: Vec<TierColumn>,
    pub empty_message: Option<&'static str>,
}

impl GamemodeView {
    pub fn build(store: &TierListStore, gamemode: &Gamemode, term: &str) -> Self {
        let players = store.search(gamemode.id, term);

        let columns: Vec<TierColumn> = group_by_tier_number(&players, gamemode.id)
            .into_iter()
            .map(|group| TierColumn {
                tier_number: group.tier_number,
                players: group
                    .players
                    .into_iter()
                    .map(|p| TierColumnEntry {
                        player_id: p.player.id().to_string(),
                        name: p.player.display_name().to_string(),
                        level: p.level,
                    })
                    .collect(),
            })
            .collect();

        // Players whose tier has no tier number land in no column
        let empty_message = columns.is_empty().then(|| {
            if has_term(term) {
                NO_SEARCH_MATCH
            } else {
                NO_PLAYERS_IN_GAMEMODE
            }
        });

        Self {
            gamemode_id: gamemode.id,
            gamemode_name: gamemode.name,
            columns,
            empty_message,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierMember {
    pub player_id: String,
    pub name: String,
    pub region: Region,
}

/// Everyone holding a single tier of a gamemode
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierMembers {
    pub tier: Tier,
    pub players: Vec<TierMember>,
}

impl TierMembers {
    pub fn build(store: &TierListStore, tier: &Tier) -> Self {
        let players = store
            .by_tier(tier.gamemode_id, tier.template_id)
            .into_iter()
            .map(|p| TierMember {
                player_id: p.id().to_string(),
                name: p.display_name().to_string(),
                region: p.region().clone(),
            })
            .collect();

        Self {
            tier: tier.clone(),
            players,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileGamemode {
    pub gamemode_id: String,
    pub gamemode_name: String,
    pub tier_name: String,
    pub points: u32,
}

/// Detail card for a single player
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub player_id: String,
    pub name: String,
    pub rank_title: RankTitle,
    pub title_style: &'static str,
    pub rank: Option<usize>,
    pub overall_points: u32,
    pub region: Region,
    pub gamemodes: Vec<ProfileGamemode>,
}

impl PlayerProfile {
    /// Gamemodes are listed in catalog order; keys the catalog does not know
    /// follow, sorted by id
    pub fn build(store: &TierListStore, player: &Player) -> Self {
        let catalog = store.catalog();

        let known = catalog.gamemodes().iter().filter_map(|g| {
            player
                .ranking(g.id)
                .map(|r| profile_gamemode(g.id, g.name, &r.tier_name, r.points))
        });
        let unknown = player
            .gamemode_rankings()
            .iter()
            .filter(|(id, _)| catalog.gamemode(id).is_none())
            .map(|(id, r)| profile_gamemode(id, id, &r.tier_name, r.points));

        let rank_title = RankTitle::from_points(player.overall_points());
        Self {
            player_id: player.id().to_string(),
            name: player.display_name().to_string(),
            rank_title,
            title_style: rank_title.slug(),
            rank: store.overall_rank(player.id()),
            overall_points: player.overall_points(),
            region: player.region().clone(),
            gamemodes: known.chain(unknown).collect(),
        }
    }
}

fn profile_gamemode(id: &str, name: &str, tier_name: &str, points: u32) -> ProfileGamemode {
    ProfileGamemode {
        gamemode_id: id.to_string(),
        gamemode_name: name.to_string(),
        tier_name: tier_name.to_string(),
        points,
    }
}

fn has_term(term: &str) -> bool {
    !term.trim().is_empty()
}
