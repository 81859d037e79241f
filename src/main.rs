use anyhow::Result;

use central_tierlist::cli::{Cli, Command};
use central_tierlist::services::OutputFormat;
use central_tierlist::{
    handle_completions, handle_gamemodes, handle_player, handle_rankings, handle_tier,
    handle_tiers, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let source = cli.source.as_str();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match &cli.command {
        Command::Gamemodes => handle_gamemodes(source, format),
        Command::Tiers { gamemode } => handle_tiers(source, format, gamemode),
        Command::Rankings { gamemode, search } => {
            handle_rankings(source, format, gamemode, search.as_deref())
        }
        Command::Tier { gamemode, tier } => handle_tier(source, format, gamemode, tier),
        Command::Player { id } => handle_player(source, format, id),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
