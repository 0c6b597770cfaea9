//! Stat aggregation: the four-player update applied when a match is finalized.

use crate::models::{League, LeagueError, Pair, Player};
use serde::Serialize;

/// League-wide sums of the player counters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct StatsTotals {
    pub matches_played: u64,
    pub points_for: u64,
    pub points_against: u64,
}

/// Sum counters over all players.
///
/// While every finalize goes through [`apply_result`], `points_for == points_against`
/// and `matches_played` is four times the number of finalized matches (counting
/// matches later deleted, since deletion does not reverse stats).
pub fn totals(players: &[Player]) -> StatsTotals {
    players.iter().fold(StatsTotals::default(), |acc, p| StatsTotals {
        matches_played: acc.matches_played + u64::from(p.matches_played),
        points_for: acc.points_for + u64::from(p.points_for),
        points_against: acc.points_against + u64::from(p.points_against),
    })
}

/// Apply a finalized result to the winning and losing pairs.
///
/// All four players are resolved and their new counters computed before any
/// of them is written back, so either every player is updated or none is.
pub(crate) fn apply_result(
    league: &mut League,
    winners: Pair,
    losers: Pair,
    winning_score: u32,
    losing_score: u32,
) -> Result<(), LeagueError> {
    let winner_idx = resolve_pair(league, winners)?;
    let loser_idx = resolve_pair(league, losers)?;

    let mut updated = Vec::with_capacity(4);
    for i in winner_idx {
        let p = &league.players[i];
        let next = p
            .with_win(winning_score, losing_score)
            .ok_or_else(|| LeagueError::StatsOverflow(p.name.clone()))?;
        updated.push((i, next));
    }
    for i in loser_idx {
        let p = &league.players[i];
        let next = p
            .with_loss(losing_score, winning_score)
            .ok_or_else(|| LeagueError::StatsOverflow(p.name.clone()))?;
        updated.push((i, next));
    }

    for (i, next) in updated {
        league.players[i] = next;
    }
    Ok(())
}

fn resolve_pair(league: &League, pair: Pair) -> Result<[usize; 2], LeagueError> {
    let mut idx = [0; 2];
    for (slot, &id) in idx.iter_mut().zip(pair.iter()) {
        *slot = league
            .player_index(id)
            .ok_or_else(|| LeagueError::PlayerNotFound(format!("#{}", id)))?;
    }
    Ok(idx)
}
