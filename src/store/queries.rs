use crate::domain::{Gamemode, Player, Tier};

use super::TierListStore;

// Missing, unranked and unknown tiers sort after every template order
const UNRANKED_ORDER: u8 = u8::MAX;

impl TierListStore {
    pub fn list_gamemodes(&self) -> &[Gamemode] {
        self.catalog.gamemodes()
    }

    /// Tiers of a gamemode, best first
    pub fn tiers_for(&self, gamemode_id: &str) -> Vec<&Tier> {
        let mut tiers: Vec<&Tier> = self
            .catalog
            .tiers()
            .iter()
            .filter(|t| t.gamemode_id == gamemode_id)
            .collect();
        tiers.sort_by_key(|t| t.order);
        tiers
    }

    /// Every player, ordered for the given gamemode
    ///
    /// Overall: descending by overall points. Otherwise ascending by tier
    /// order, with players missing or unranked in the gamemode last. Ties keep
    /// collection order.
    pub fn ranked_by(&self, gamemode_id: &str) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players.iter().collect();
        self.sort_for(gamemode_id, &mut players);
        players
    }

    /// Players holding exactly `tier_id` (e.g. `ht2`) in the gamemode
    pub fn by_tier(&self, gamemode_id: &str, tier_id: &str) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.ranking(gamemode_id).is_some_and(|r| r.tier_id == tier_id))
            .collect()
    }

    /// Players whose name contains `term`, ordered for the gamemode
    ///
    /// A blank term matches everyone. Outside the overall view, players
    /// without a ranking in the gamemode are left out.
    pub fn search(&self, gamemode_id: &str, term: &str) -> Vec<&Player> {
        let term = normalize_term(term);
        let mut players: Vec<&Player> = self
            .players
            .iter()
            .filter(|p| matches_term(p, term.as_deref()))
            .collect();

        if !self.catalog.is_overall(gamemode_id) {
            players.retain(|p| p.ranked_in(gamemode_id).is_some());
        }
        self.sort_for(gamemode_id, &mut players);
        players
    }

    /// 1-based position of the player in the overall ranking
    pub fn overall_rank(&self, player_id: &str) -> Option<usize> {
        let mut players: Vec<&Player> = self.players.iter().collect();
        sort_by_overall_points(&mut players);
        players
            .iter()
            .position(|p| p.id() == player_id)
            .map(|idx| idx + 1)
    }

    fn sort_for(&self, gamemode_id: &str, players: &mut [&Player]) {
        if self.catalog.is_overall(gamemode_id) {
            sort_by_overall_points(players);
        } else {
            players.sort_by_key(|p| self.tier_order(p, gamemode_id));
        }
    }

    fn tier_order(&self, player: &Player, gamemode_id: &str) -> u8 {
        player
            .ranked_in(gamemode_id)
            .and_then(|r| self.catalog.tier_index().order_of(&r.tier_id))
            .unwrap_or(UNRANKED_ORDER)
    }
}

fn sort_by_overall_points(players: &mut [&Player]) {
    players.sort_by(|a, b| b.overall_points().cmp(&a.overall_points()));
}

fn normalize_term(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        None
    } else {
        Some(term.to_lowercase())
    }
}

fn matches_term(player: &Player, term: Option<&str>) -> bool {
    match term {
        Some(term) => player.display_name().to_lowercase().contains(term),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OVERALL_GAMEMODE_ID;
    use crate::domain::Catalog;
    use crate::loader::{normalize, parse_records};
    use crate::store::DataOrigin;

    fn store_from_json(json: &str) -> TierListStore {
        let catalog = Catalog::default();
        let players = normalize(parse_records(json).unwrap(), catalog.tier_index());
        TierListStore::new(catalog, players, DataOrigin::loaded("test"))
    }

    fn sample_store() -> TierListStore {
        store_from_json(
            r#"[
                {"name": "Alpha", "region": "NA", "tiers": {"sword": "LT2", "axe": "HT1"}},
                {"name": "bravo", "region": "EU", "tiers": {"sword": "HT1", "axe": "-"}},
                {"name": "Charlie", "region": "AS", "tiers": {"sword": "-", "axe": "LT1"}},
                {"name": "Delta", "region": "SA", "tiers": {"sword": "LT2", "axe": "HT5"}},
                {"name": "AlphaBeta", "region": "OCE", "tiers": {"axe": "HT2"}},
                {"name": "Echo", "region": "EU", "tiers": {"sword": "XX1", "axe": "LT4"}}
            ]"#,
        )
    }

    fn names(players: &[&Player]) -> Vec<String> {
        players.iter().map(|p| p.display_name().to_string()).collect()
    }

    #[test]
    fn test_list_gamemodes_in_catalog_order() {
        let store = sample_store();
        let gamemodes = store.list_gamemodes();

        assert_eq!(gamemodes.len(), 10);
        assert_eq!(gamemodes[0].id, OVERALL_GAMEMODE_ID);
        assert_eq!(gamemodes[1].id, "gm_sword");
    }

    #[test]
    fn test_tiers_for_ascending_order() {
        let store = sample_store();

        let tiers = store.tiers_for("gm_axe");

        assert_eq!(tiers.len(), 10);
        assert!(tiers.windows(2).all(|w| w[0].order < w[1].order));
        assert_eq!(tiers[0].id, "gm_axe_ht1");
        assert!(store.tiers_for(OVERALL_GAMEMODE_ID).is_empty());
    }

    #[test]
    fn test_ranked_by_overall_descending() {
        let store = sample_store();

        let ranked = store.ranked_by(OVERALL_GAMEMODE_ID);

        assert_eq!(ranked.len(), 6);
        assert!(ranked.windows(2).all(|w| w[0].overall_points() >= w[1].overall_points()));
        // Alpha 80, bravo 60, Charlie 45, AlphaBeta 30, Delta 22, Echo 3
        assert_eq!(
            names(&ranked),
            vec!["Alpha", "bravo", "Charlie", "AlphaBeta", "Delta", "Echo"]
        );
    }

    #[test]
    fn test_ranked_by_overall_ties_keep_collection_order() {
        let store = store_from_json(
            r#"[
                {"name": "First", "region": "NA", "tiers": {"sword": "HT2"}},
                {"name": "Second", "region": "NA", "tiers": {"axe": "HT2"}},
                {"name": "Top", "region": "NA", "tiers": {"axe": "HT1"}},
                {"name": "Third", "region": "NA", "tiers": {"mace": "HT2"}}
            ]"#,
        );

        let ranked = store.ranked_by(OVERALL_GAMEMODE_ID);

        assert_eq!(names(&ranked), vec!["Top", "First", "Second", "Third"]);
    }

    #[test]
    fn test_ranked_by_gamemode_ascending_with_unranked_last() {
        let store = sample_store();

        let ranked = store.ranked_by("gm_sword");

        // Charlie is unranked, AlphaBeta has no entry, Echo has an unknown tier
        assert_eq!(
            names(&ranked),
            vec!["bravo", "Alpha", "Delta", "Charlie", "AlphaBeta", "Echo"]
        );
    }

    #[test]
    fn test_ranked_by_gamemode_order_never_decreases() {
        let store = sample_store();
        let index = store.catalog().tier_index();

        let orders: Vec<u8> = store
            .ranked_by("gm_axe")
            .iter()
            .map(|p| {
                p.ranked_in("gm_axe")
                    .and_then(|r| index.order_of(&r.tier_id))
                    .unwrap_or(u8::MAX)
            })
            .collect();

        assert!(orders.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_by_tier_matches_exact_tier() {
        let store = sample_store();

        assert_eq!(names(&store.by_tier("gm_sword", "lt2")), vec!["Alpha", "Delta"]);
        assert_eq!(names(&store.by_tier("gm_sword", "ht1")), vec!["bravo"]);
        assert!(store.by_tier("gm_sword", "ht3").is_empty());
        assert_eq!(names(&store.by_tier("gm_sword", "-")), vec!["Charlie"]);
    }

    #[test]
    fn test_search_blank_term_in_gamemode_excludes_unranked() {
        let store = sample_store();

        let results = store.search("gm_sword", "   ");

        assert!(results.iter().all(|p| p.ranking("gm_sword").unwrap().tier_id != "-"));
        assert_eq!(names(&results), vec!["bravo", "Alpha", "Delta", "Echo"]);
    }

    #[test]
    fn test_search_overall_filters_case_insensitively() {
        let store = sample_store();

        let results = store.search(OVERALL_GAMEMODE_ID, "  ALPHA ");

        assert_eq!(names(&results), vec!["Alpha", "AlphaBeta"]);
        assert!(results.windows(2).all(|w| w[0].overall_points() >= w[1].overall_points()));
    }

    #[test]
    fn test_search_gamemode_filters_and_sorts() {
        let store = sample_store();

        let results = store.search("gm_axe", "a");

        // bravo is unranked in axe
        assert_eq!(names(&results), vec!["Alpha", "Charlie", "AlphaBeta", "Delta"]);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let store = sample_store();

        assert!(store.search(OVERALL_GAMEMODE_ID, "zulu").is_empty());
        assert!(store.search("gm_sword", "zulu").is_empty());
    }

    #[test]
    fn test_overall_rank() {
        let store = sample_store();

        assert_eq!(store.overall_rank("player_1"), Some(1));
        assert_eq!(store.overall_rank("player_6"), Some(6));
        assert_eq!(store.overall_rank("player_99"), None);
    }

    #[test]
    fn test_player_lookup() {
        let store = sample_store();

        assert_eq!(store.player("player_2").map(|p| p.display_name()), Some("bravo"));
        assert!(store.player("player_0").is_none());
    }
}
