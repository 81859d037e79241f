use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Central tier list viewer")]
pub struct Cli {
    /// Player data: a JSON file path or an http(s) URL
    #[arg(short, long, global = true, default_value = "player.json")]
    pub source: String,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// List gamemodes
    Gamemodes,
    /// List the tiers of a gamemode
    Tiers {
        /// Gamemode id or key (e.g. gm_sword or sword)
        gamemode: String,
    },
    /// Show the overall leaderboard or a gamemode's tier columns
    Rankings {
        /// Gamemode id or key (defaults to overall)
        #[arg(default_value = "overall")]
        gamemode: String,
        /// Only show players whose name contains this text
        #[arg(short = 'q', long)]
        search: Option<String>,
    },
    /// List the players holding one tier of a gamemode
    Tier {
        /// Gamemode id or key
        gamemode: String,
        /// Tier id (e.g. ht1)
        tier: String,
    },
    /// Show a player's details
    Player {
        /// Player id (e.g. player_1)
        id: String,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rankings_defaults_to_overall() {
        let cli = Cli::parse_from(["tierlist", "rankings"]);

        assert_eq!(cli.source, "player.json");
        assert!(!cli.json);
        assert_eq!(
            cli.command,
            Command::Rankings {
                gamemode: "overall".to_string(),
                search: None
            }
        );
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "tierlist", "rankings", "sword", "-q", "foo", "--json", "--source", "data.json",
        ]);

        assert!(cli.json);
        assert_eq!(cli.source, "data.json");
        assert_eq!(
            cli.command,
            Command::Rankings {
                gamemode: "sword".to_string(),
                search: Some("foo".to_string())
            }
        );
    }
}
