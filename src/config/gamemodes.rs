use crate::domain::Gamemode;

/// Prefix joining a raw gamemode key (`sword`) to its identifier (`gm_sword`)
pub const GAMEMODE_ID_PREFIX: &str = "gm_";

/// Identifier of the pseudo-gamemode aggregating every other gamemode
pub const OVERALL_GAMEMODE_ID: &str = "gm_overall";

/// Get the fixed gamemode catalog, in display order
///
/// The overall pseudo-category comes first; every other entry receives the
/// full set of tier templates when the catalog is built.
pub fn get_gamemodes() -> Vec<Gamemode> {
    vec![
        Gamemode::overall(OVERALL_GAMEMODE_ID, "Overall"),
        Gamemode::new("gm_sword", "Sword"),
        Gamemode::new("gm_pot", "Pot"),
        Gamemode::new("gm_nethpot", "Neth OP"),
        Gamemode::new("gm_axe", "Axe"),
        Gamemode::new("gm_mace", "Mace"),
        Gamemode::new("gm_crystal", "Crystal"),
        Gamemode::new("gm_uhc", "UHC"),
        Gamemode::new("gm_smp", "SMP"),
        Gamemode::new("gm_diasmp", "Diamond SMP"),
    ]
}

/// Build the gamemode identifier for a key found in a player record
pub fn gamemode_id_for_key(key: &str) -> String {
    format!("{}{}", GAMEMODE_ID_PREFIX, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_single_overall_entry_first() {
        let gamemodes = get_gamemodes();

        assert_eq!(gamemodes.len(), 10);
        assert!(gamemodes[0].is_overall);
        assert_eq!(gamemodes[0].id, OVERALL_GAMEMODE_ID);
        assert_eq!(gamemodes.iter().filter(|g| g.is_overall).count(), 1);
    }

    #[test]
    fn test_catalog_ids_are_prefixed_and_unique() {
        let gamemodes = get_gamemodes();
        let ids: HashSet<_> = gamemodes.iter().map(|g| g.id).collect();

        assert_eq!(ids.len(), gamemodes.len());
        assert!(gamemodes.iter().all(|g| g.id.starts_with(GAMEMODE_ID_PREFIX)));
    }

    #[test]
    fn test_display_names_are_trimmed() {
        let gamemodes = get_gamemodes();

        assert!(gamemodes.iter().all(|g| g.name == g.name.trim()));
        assert!(gamemodes.iter().any(|g| g.id == "gm_pot" && g.name == "Pot"));
    }

    #[test]
    fn test_key_is_always_prefixed() {
        assert_eq!(gamemode_id_for_key("sword"), "gm_sword");
        assert_eq!(gamemode_id_for_key("gm_sword"), "gm_gm_sword");
    }
}
