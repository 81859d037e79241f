use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use serde::Serialize;

use crate::domain::{Gamemode, Tier};
use crate::store::{DataOrigin, TierListStore};
use crate::view::render;
use crate::view::{GamemodeView, OverallView, PlayerProfile, TierMembers};

const FALLBACK_NOTICE: &str = "Player data could not be loaded; showing generated players";

/// JSON output: the view plus where its players came from
#[derive(Serialize)]
struct JsonOutput<'a, T: Serialize> {
    origin: &'a DataOrigin,
    data: &'a T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Answers view requests against a loaded store
pub struct TierListService {
    store: TierListStore,
    format: OutputFormat,
}

impl TierListService {
    pub fn new(store: TierListStore, format: OutputFormat) -> Self {
        Self { store, format }
    }

    pub fn gamemodes(&self) -> Result<String> {
        let gamemodes = self.store.list_gamemodes();
        self.output(&gamemodes, || render::render_gamemodes(gamemodes))
    }

    pub fn tiers(&self, gamemode: &str) -> Result<String> {
        let gamemode = self.resolve_gamemode(gamemode)?;
        let tiers = self.store.tiers_for(gamemode.id);
        self.output(&tiers, || render::render_tiers(gamemode, &tiers))
    }

    pub fn rankings(&self, gamemode: &str, search: Option<&str>) -> Result<String> {
        let gamemode = self.resolve_gamemode(gamemode)?;
        let term = search.unwrap_or_default();
        debug!("Rendering {} with search term {:?}", gamemode.id, term);

        if gamemode.is_overall {
            let view = OverallView::build(&self.store, gamemode.id, term);
            self.output(&view, || render::render_overall(&view))
        } else {
            let view = GamemodeView::build(&self.store, gamemode, term);
            self.output(&view, || render::render_gamemode(&view))
        }
    }

    pub fn tier(&self, gamemode: &str, tier: &str) -> Result<String> {
        let gamemode = self.resolve_gamemode(gamemode)?;
        let tier = self.resolve_tier(gamemode, tier)?;
        let members = TierMembers::build(&self.store, tier);
        self.output(&members, || render::render_tier_members(&members))
    }

    pub fn player(&self, player_id: &str) -> Result<String> {
        let player = self
            .store
            .player(player_id)
            .with_context(|| format!("Unknown player: {}", player_id))?;
        let profile = PlayerProfile::build(&self.store, player);
        self.output(&profile, || render::render_profile(&profile))
    }

    fn resolve_gamemode(&self, input: &str) -> Result<&Gamemode> {
        self.store
            .catalog()
            .resolve_gamemode(input)
            .with_context(|| format!("Unknown gamemode: {}", input))
    }

    fn resolve_tier(&self, gamemode: &Gamemode, input: &str) -> Result<&Tier> {
        let template_id = input.trim().to_lowercase();
        self.store
            .tiers_for(gamemode.id)
            .into_iter()
            .find(|t| t.template_id == template_id)
            .with_context(|| format!("Unknown tier {} for gamemode {}", input, gamemode.id))
    }

    fn output<T: Serialize>(&self, data: &T, render_text: impl FnOnce() -> String) -> Result<String> {
        let origin = self.store.origin();
        match self.format {
            OutputFormat::Text => match origin {
                DataOrigin::Fallback { generated_at } => {
                    let notice = format!(
                        "{} (generated {})",
                        FALLBACK_NOTICE,
                        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
                    );
                    Ok(format!("{}\n{}", notice.as_str().dimmed(), render_text()))
                }
                DataOrigin::Loaded { .. } => Ok(render_text()),
            },
            OutputFormat::Json => serde_json::to_string_pretty(&JsonOutput { origin, data })
                .context("Failed to serialize output"),
        }
    }
}
