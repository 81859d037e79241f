use colored::{ColoredString, Colorize};

use super::grouping::TierLevel;
use super::models::{GamemodeView, OverallView, PlayerProfile, TierMembers};
use crate::domain::{Gamemode, Tier};
use crate::rating::{Medal, RankTitle};

const NAME_WIDTH: usize = 24;

pub fn render_gamemodes(gamemodes: &[Gamemode]) -> String {
    gamemodes
        .iter()
        .map(|g| {
            let line = format!("{:<12} {}", g.id, g.name);
            if g.is_overall { line.bold().to_string() } else { line }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_tiers(gamemode: &Gamemode, tiers: &[&Tier]) -> String {
    let mut lines = vec![format!("{} tiers", gamemode.name).bold().to_string()];
    lines.extend(tiers.iter().map(|t| {
        format!(
            "{:>2}. {:<4} {:<12} {:>3} pts  ({})",
            t.order, t.name, t.full_name, t.points, t.id
        )
    }));
    lines.join("\n")
}

pub fn render_overall(view: &OverallView) -> String {
    if let Some(message) = view.empty_message {
        return message.dimmed().to_string();
    }

    let header = format!(
        "{:>5}  {:<width$} {:<6} {:>6}",
        "Rank",
        "Player",
        "Region",
        "Total",
        width = NAME_WIDTH
    );
    let mut lines = vec![header.bold().to_string()];

    for row in &view.rows {
        let rank = medal_color(row.medal, format!("{:>5}", format!("#{}", row.rank)));
        lines.push(format!(
            "{}  {:<width$} {:<6} {:>6}",
            rank,
            row.name,
            row.region.as_str(),
            row.overall_points,
            width = NAME_WIDTH
        ));
        lines.push(format!(
            "       {} ({} pts)",
            title_color(row.rank_title),
            row.overall_points
        ));
    }
    lines.join("\n")
}

pub fn render_gamemode(view: &GamemodeView) -> String {
    let mut lines = vec![view.gamemode_name.bold().to_string()];

    if let Some(message) = view.empty_message {
        lines.push(message.dimmed().to_string());
        return lines.join("\n");
    }

    for column in &view.columns {
        lines.push(format!("TIER {}", column.tier_number).bold().to_string());
        for entry in &column.players {
            lines.push(format!("  {} {}", level_badge(entry.level), entry.name));
        }
    }
    lines.join("\n")
}

pub fn render_tier_members(members: &TierMembers) -> String {
    let mut lines = vec![
        format!("{} ({})", members.tier.full_name, members.tier.id)
            .bold()
            .to_string(),
    ];
    if members.players.is_empty() {
        lines.push("No players in this tier".dimmed().to_string());
    }
    lines.extend(
        members
            .players
            .iter()
            .map(|p| format!("  {:<width$} {}", p.name, p.region.as_str(), width = NAME_WIDTH)),
    );
    lines.join("\n")
}

pub fn render_profile(profile: &PlayerProfile) -> String {
    let rank = profile
        .rank
        .map(|r| format!("#{}", r))
        .unwrap_or_else(|| "-".to_string());

    let mut lines = vec![
        profile.name.bold().to_string(),
        title_color(profile.rank_title).to_string(),
        format!(
            "Rank {}  |  Points {}  |  Region {}",
            rank,
            profile.overall_points,
            profile.region.as_str()
        ),
    ];
    lines.extend(profile.gamemodes.iter().map(|g| {
        format!(
            "  {:<14} {:<4} {:>3} pts",
            g.gamemode_name, g.tier_name, g.points
        )
    }));
    lines.join("\n")
}

fn level_badge(level: TierLevel) -> ColoredString {
    match level {
        TierLevel::High => level.as_str().green().bold(),
        TierLevel::Low => level.as_str().cyan(),
    }
}

fn medal_color(medal: Option<Medal>, text: String) -> ColoredString {
    match medal {
        Some(Medal::Gold) => text.yellow().bold(),
        Some(Medal::Silver) => text.white().bold(),
        Some(Medal::Bronze) => text.truecolor(205, 127, 50).bold(),
        None => text.normal(),
    }
}

fn title_color(title: RankTitle) -> ColoredString {
    let text = title.title();
    match title {
        RankTitle::CombatGrandmaster => text.magenta().bold(),
        RankTitle::CombatMaster => text.red().bold(),
        RankTitle::CombatAce => text.yellow(),
        RankTitle::CombatSpecialist => text.blue(),
        RankTitle::CombatCadet => text.green(),
        RankTitle::CombatNovice => text.cyan(),
        RankTitle::Rookie => text.dimmed(),
    }
}
