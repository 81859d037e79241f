use rand::Rng;
use std::collections::BTreeMap;

use super::normalize::player_id;
use crate::config::REGIONS;
use crate::domain::{Catalog, Player, Ranking, TierTemplate};

/// Generate `count` synthetic players for when no real data is available
///
/// Names are `Player_0001`, `Player_0002`, ...; region and the tier in each
/// ranked gamemode are drawn uniformly at random.
pub fn generate_fallback_players<R: Rng + ?Sized>(
    catalog: &Catalog,
    count: usize,
    rng: &mut R,
) -> Vec<Player> {
    (1..=count)
        .map(|position| generate_player(position, catalog, rng))
        .collect()
}

fn generate_player<R: Rng + ?Sized>(position: usize, catalog: &Catalog, rng: &mut R) -> Player {
    let region = REGIONS[rng.gen_range(0..REGIONS.len())].clone();

    let rankings: BTreeMap<String, Ranking> = catalog
        .ranked_gamemodes()
        .map(|g| (g.id.to_string(), Ranking::from_template(random_template(catalog, rng))))
        .collect();

    Player::new(
        player_id(position),
        format!("Player_{:04}", position),
        region,
        rankings,
    )
}

fn random_template<'a, R: Rng + ?Sized>(catalog: &'a Catalog, rng: &mut R) -> &'a TierTemplate {
    let templates = catalog.templates();
    &templates[rng.gen_range(0..templates.len())]
}
