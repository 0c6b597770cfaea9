//! Player registry: register, remove (with cascade) and list players.

use crate::logic::history::purge_history_for;
use crate::logic::standings::{rank_by, Metric};
use crate::models::{League, LeagueError, Level, MatchId, Player};

/// Register a new player with zero counters. Names are trimmed and must be
/// unique (exact, case-sensitive match against stored names).
pub fn register_player(
    league: &mut League,
    name: &str,
    level: Level,
) -> Result<Player, LeagueError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LeagueError::InvalidName);
    }
    if league.player_by_name(name).is_some() {
        return Err(LeagueError::DuplicateName(name.to_string()));
    }
    let player = Player::new(league.allocate_player_id(), name, level);
    league.players.push(player.clone());
    log::info!("Registered player {} ({:?})", player.name, player.level);
    Ok(player)
}

/// Remove a player by (trimmed) name and cascade: every match referencing
/// them, active or finalized, goes too, along with those matches' history
/// entries.
///
/// Other players keep the stats they earned in those matches.
pub fn remove_player(league: &mut League, name: &str) -> Result<Player, LeagueError> {
    let name = name.trim();
    let idx = league
        .players
        .iter()
        .position(|p| p.name == name)
        .ok_or_else(|| LeagueError::PlayerNotFound(name.to_string()))?;
    let player_id = league.players[idx].id;

    let doomed: Vec<MatchId> = league
        .matches
        .iter()
        .filter(|m| m.involves(player_id))
        .map(|m| m.id)
        .collect();
    let mut purged = 0;
    for &match_id in &doomed {
        purged += purge_history_for(league, match_id);
    }
    league.matches.retain(|m| !m.involves(player_id));
    log::debug!(
        "Cascade for {}: {} matches, {} history entries",
        name,
        doomed.len(),
        purged
    );

    let player = league.players.remove(idx);
    log::info!("Removed player {}", player.name);
    Ok(player)
}

/// Players in registration order, or ranked when a metric is given.
pub fn list_players(league: &League, sort: Option<Metric>) -> Vec<&Player> {
    match sort {
        Some(metric) => rank_by(&league.players, metric),
        None => league.players.iter().collect(),
    }
}
