//! Match lifecycle: create, edit, finalize and delete doubles matches.

use crate::logic::history::{purge_history_for, record_finalized};
use crate::logic::stats::apply_result;
use crate::models::{GameMatch, League, LeagueError, MatchId, MatchStatus, Pair, PlayerId, Score};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Players in a doubles match, and the registry size needed to create one.
pub const PLAYERS_PER_MATCH: usize = 4;

/// How the four selected players are split into two pairs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingMode {
    /// First two names vs last two, as given.
    #[default]
    Manual,
    /// Shuffle the four names, then split first two / last two.
    Random,
}

/// Create an active match between four distinct registered players.
///
/// The random source is only consulted for [`PairingMode::Random`].
pub fn create_match<S, R>(
    league: &mut League,
    players: &[S; 4],
    mode: PairingMode,
    rng: &mut R,
) -> Result<GameMatch, LeagueError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let ids = resolve_players(league, players)?;
    let (pair_a, pair_b) = split_pairs(ids, mode, rng);

    let m = GameMatch::new(league.allocate_match_id(), pair_a, pair_b);
    log::info!(
        "Created match #{}: {:?} vs {:?} ({:?} pairing)",
        m.id,
        pair_a,
        pair_b,
        mode
    );
    league.matches.push(m.clone());
    Ok(m)
}

/// Replace the players and pairing of an active match. Stats are not touched.
pub fn edit_match<S, R>(
    league: &mut League,
    match_id: MatchId,
    players: &[S; 4],
    mode: PairingMode,
    rng: &mut R,
) -> Result<GameMatch, LeagueError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    ensure_active(league, match_id)?;
    let ids = resolve_players(league, players)?;
    let (pair_a, pair_b) = split_pairs(ids, mode, rng);

    let m = league
        .get_match_mut(match_id)
        .ok_or(LeagueError::MatchNotFound(match_id))?;
    m.pair_a = pair_a;
    m.pair_b = pair_b;
    log::debug!("Edited match #{}: {:?} vs {:?}", match_id, pair_a, pair_b);
    Ok(m.clone())
}

/// Record the final score of an active match.
///
/// Exactly once per match: the status change, the four player stat updates and
/// the history entry happen together or not at all.
pub fn finalize_match(
    league: &mut League,
    match_id: MatchId,
    score_a: u32,
    score_b: u32,
) -> Result<GameMatch, LeagueError> {
    let m = ensure_active(league, match_id)?.clone();
    let score = Score {
        a: score_a,
        b: score_b,
    };
    let winner = score.winner().ok_or(LeagueError::TieScoreNotAllowed)?;
    let (winning_score, losing_score) = (score_a.max(score_b), score_a.min(score_b));

    apply_result(
        league,
        m.pair(winner),
        m.pair(winner.opponent()),
        winning_score,
        losing_score,
    )?;

    let finalized = {
        let stored = league
            .get_match_mut(match_id)
            .ok_or(LeagueError::MatchNotFound(match_id))?;
        stored.status = MatchStatus::Finalized;
        stored.score = Some(score);
        stored.winner = Some(winner);
        stored.clone()
    };
    let entry = record_finalized(league, &finalized, score, winner);
    log::info!(
        "Finalized match #{}: {} vs {} {} (winner {})",
        match_id,
        entry.pair_a,
        entry.pair_b,
        entry.result,
        entry.winner
    );
    Ok(finalized)
}

/// Remove a match in any state along with its history entries.
/// Stats already applied by a finalize stay as they are.
pub fn delete_match(league: &mut League, match_id: MatchId) -> Result<GameMatch, LeagueError> {
    let idx = league
        .matches
        .iter()
        .position(|m| m.id == match_id)
        .ok_or(LeagueError::MatchNotFound(match_id))?;
    let removed = league.matches.remove(idx);
    let purged = purge_history_for(league, match_id);
    log::info!("Deleted match #{} ({} history entries)", match_id, purged);
    Ok(removed)
}

/// Active matches in creation order.
pub fn list_active_matches(league: &League) -> Vec<&GameMatch> {
    league.matches.iter().filter(|m| m.is_active()).collect()
}

fn ensure_active(league: &League, match_id: MatchId) -> Result<&GameMatch, LeagueError> {
    let m = league
        .get_match(match_id)
        .ok_or(LeagueError::MatchNotFound(match_id))?;
    if !m.is_active() {
        return Err(LeagueError::MatchAlreadyFinalized(match_id));
    }
    Ok(m)
}

/// Validate the four names: enough players registered, no repeats, all registered.
/// Names are trimmed the same way registration trims them.
fn resolve_players<S: AsRef<str>>(
    league: &League,
    names: &[S; 4],
) -> Result<[PlayerId; 4], LeagueError> {
    let registered = league.players.len();
    if registered < PLAYERS_PER_MATCH {
        return Err(LeagueError::InsufficientPlayers { registered });
    }
    let names = names.each_ref().map(|n| n.as_ref().trim());
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Err(LeagueError::DuplicatePlayerInMatch(name.to_string()));
        }
    }

    let mut ids = [0; 4];
    for (slot, name) in ids.iter_mut().zip(names) {
        *slot = league
            .player_by_name(name)
            .ok_or_else(|| LeagueError::PlayerNotFound(name.to_string()))?
            .id;
    }
    Ok(ids)
}

fn split_pairs<R: Rng + ?Sized>(
    mut ids: [PlayerId; 4],
    mode: PairingMode,
    rng: &mut R,
) -> (Pair, Pair) {
    if mode == PairingMode::Random {
        ids.shuffle(rng);
    }
    ([ids[0], ids[1]], [ids[2], ids[3]])
}
