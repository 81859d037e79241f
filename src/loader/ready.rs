use anyhow::{Context, Result};
use log::{info, warn};
use tokio::sync::oneshot;

use super::fallback::generate_fallback_players;
use super::normalize::normalize;
use super::source::{LoadOutcome, Loader, PlayerSource};
use crate::config::settings::{AppConfig, FallbackSettings};
use crate::domain::Catalog;
use crate::store::{DataOrigin, TierListStore};

/// Resolves once, when the background load has produced a store
pub struct StoreReady {
    receiver: oneshot::Receiver<TierListStore>,
}

impl StoreReady {
    pub async fn wait(self) -> Result<TierListStore> {
        self.receiver
            .await
            .context("Player loader stopped before the tier list was ready")
    }
}

/// Start loading in the background on the current tokio runtime
pub fn spawn_load(config: AppConfig) -> StoreReady {
    let (sender, receiver) = oneshot::channel();

    tokio::spawn(async move {
        let store = load_store(config).await;
        if sender.send(store).is_err() {
            warn!("Tier list was ready but nobody was waiting for it");
        }
    });

    StoreReady { receiver }
}

/// Load the player document once and build the store, falling back to
/// generated players when loading fails or yields nothing
pub async fn load_store(config: AppConfig) -> TierListStore {
    let loader = Loader::new(&config.source);
    let outcome = loader.load_source().await;

    let store = build_store(Catalog::default(), outcome, loader.source(), &config.fallback);
    log_ready(&store);
    store
}

pub fn build_store(
    catalog: Catalog,
    outcome: LoadOutcome,
    source: &PlayerSource,
    fallback: &FallbackSettings,
) -> TierListStore {
    match outcome {
        LoadOutcome::Loaded(records) if !records.is_empty() => {
            let players = normalize(records, catalog.tier_index());
            info!("Generated {} player records", players.len());
            TierListStore::new(catalog, players, DataOrigin::loaded(source.to_string()))
        }
        outcome => {
            if outcome.is_success() {
                warn!("No player data loaded from {}", source);
            }
            warn!("Using fallback dummy data instead");
            let players =
                generate_fallback_players(&catalog, fallback.player_count, &mut rand::thread_rng());
            warn!("Generated {} dummy players (fallback mode)", players.len());
            TierListStore::new(catalog, players, DataOrigin::fallback())
        }
    }
}

fn log_ready(store: &TierListStore) {
    info!("=== Tier List Ready ===");
    info!("  → Gamemodes: {} (including Overall)", store.catalog().gamemodes().len());
    info!("  → Tiers: {}", store.catalog().tiers().len());
    info!("  → Players: {}", store.players().len());
    if store.origin().is_fallback() {
        info!("  → Data: generated (fallback mode)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::FallbackSettings;
    use crate::domain::{RawPlayerRecord, Region};
    use crate::loader::parse_records;

    fn records() -> Vec<RawPlayerRecord> {
        parse_records(r#"[{"name": "Foo", "region": "EU", "tiers": {"sword": "HT1"}}]"#).unwrap()
    }

    fn file_source() -> PlayerSource {
        PlayerSource::parse("player.json")
    }

    #[test]
    fn test_build_store_uses_loaded_records() {
        let store = build_store(
            Catalog::default(),
            LoadOutcome::Loaded(records()),
            &file_source(),
            &FallbackSettings::default(),
        );

        assert_eq!(store.players().len(), 1);
        assert!(!store.origin().is_fallback());
    }

    #[test]
    fn test_build_store_falls_back_on_failure() {
        let store = build_store(
            Catalog::default(),
            LoadOutcome::Failed,
            &file_source(),
            &FallbackSettings { player_count: 25 },
        );

        assert_eq!(store.players().len(), 25);
        assert!(store.origin().is_fallback());
    }

    #[test]
    fn test_build_store_falls_back_on_empty_document() {
        let store = build_store(
            Catalog::default(),
            LoadOutcome::Loaded(Vec::new()),
            &file_source(),
            &FallbackSettings::default(),
        );

        assert_eq!(store.players().len(), 150);
        assert!(store.origin().is_fallback());
    }

    #[tokio::test]
    async fn test_spawn_load_resolves_with_fallback_for_missing_source() {
        let missing = std::env::temp_dir().join("central_tierlist_ready_missing.json");
        let config = AppConfig::new().with_source(missing.display().to_string());

        let store = spawn_load(config).wait().await.unwrap();

        assert_eq!(store.players().len(), 150);
        assert!(store.origin().is_fallback());
    }

    #[tokio::test]
    async fn test_load_store_reads_real_document() {
        let path = std::env::temp_dir().join("central_tierlist_ready_ok.json");
        std::fs::write(
            &path,
            r#"[{"name": "Foo", "region": "EU", "tiers": {"sword": "HT1", "pot": "-"}}]"#,
        )
        .unwrap();
        let config = AppConfig::new().with_source(path.display().to_string());

        let store = load_store(config).await;

        assert_eq!(store.players().len(), 1);
        assert_eq!(store.players()[0].overall_points(), 60);
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_load_store_keeps_document_with_unlisted_region() {
        let path = std::env::temp_dir().join("central_tierlist_ready_region.json");
        std::fs::write(
            &path,
            r#"[
                {"name": "Foo", "region": "EU", "tiers": {"sword": "HT1"}},
                {"name": "Bar", "region": "ME", "tiers": {"axe": "LT2"}}
            ]"#,
        )
        .unwrap();
        let config = AppConfig::new().with_source(path.display().to_string());

        let store = load_store(config).await;

        assert!(!store.origin().is_fallback());
        assert_eq!(store.players().len(), 2);
        assert_eq!(store.players()[0].region(), &Region::EU);
        assert_eq!(store.players()[1].region().as_str(), "ME");
        assert_eq!(store.players()[1].overall_points(), 20);
        std::fs::remove_file(path).unwrap();
    }
}
