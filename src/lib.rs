pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod loader;
pub mod rating;
pub mod services;
pub mod store;
pub mod view;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::services::{OutputFormat, TierListService};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_gamemodes(source: &str, format: OutputFormat) -> Result<()> {
    let service = load_service(source, format)?;
    println!("{}", service.gamemodes()?);
    Ok(())
}

pub fn handle_tiers(source: &str, format: OutputFormat, gamemode: &str) -> Result<()> {
    let service = load_service(source, format)?;
    println!("{}", service.tiers(gamemode)?);
    Ok(())
}

pub fn handle_rankings(
    source: &str,
    format: OutputFormat,
    gamemode: &str,
    search: Option<&str>,
) -> Result<()> {
    let service = load_service(source, format)?;
    println!("{}", service.rankings(gamemode, search)?);
    Ok(())
}

pub fn handle_tier(source: &str, format: OutputFormat, gamemode: &str, tier: &str) -> Result<()> {
    let service = load_service(source, format)?;
    println!("{}", service.tier(gamemode, tier)?);
    Ok(())
}

pub fn handle_player(source: &str, format: OutputFormat, player_id: &str) -> Result<()> {
    let service = load_service(source, format)?;
    println!("{}", service.player(player_id)?);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn load_service(source: &str, format: OutputFormat) -> Result<TierListService> {
    let runtime = tokio::runtime::Runtime::new()?;
    let config = AppConfig::new().with_source(source);
    let store = runtime.block_on(async { loader::spawn_load(config).wait().await })?;
    Ok(TierListService::new(store, format))
}
