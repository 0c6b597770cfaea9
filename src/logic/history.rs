//! History ledger: append-only audit records of finalized matches.

use crate::models::{GameMatch, HistoryEntry, League, MatchId, Pair, Score, Side};
use chrono::Utc;

/// Display label of a pair, e.g. "Alice & Bob".
pub fn pair_label(league: &League, pair: Pair) -> String {
    format!("{} & {}", league.player_name(pair[0]), league.player_name(pair[1]))
}

/// Build and append the entry for a match that was just finalized.
/// Only called from `finalize_match`.
pub(crate) fn record_finalized(
    league: &mut League,
    m: &GameMatch,
    score: Score,
    winner: Side,
) -> HistoryEntry {
    let entry = HistoryEntry {
        id: league.allocate_history_id(),
        match_id: m.id,
        recorded_at: Utc::now(),
        pair_a: pair_label(league, m.pair_a),
        pair_b: pair_label(league, m.pair_b),
        result: format!("{}-{}", score.a, score.b),
        winner: pair_label(league, m.pair(winner)),
    };
    append(league, entry.clone());
    entry
}

fn append(league: &mut League, entry: HistoryEntry) {
    league.history.push(entry);
}

/// Most recent entries first, at most `limit` of them.
pub fn list_history(league: &League, limit: usize) -> Vec<&HistoryEntry> {
    league.history.iter().rev().take(limit).collect()
}

/// Delete every history entry. Players and matches are untouched.
/// Returns the number of entries removed.
pub fn purge_history(league: &mut League) -> usize {
    let removed = league.history.len();
    league.history.clear();
    log::info!("Purged {} history entries", removed);
    removed
}

/// Delete the entries of one match. Returns the number of entries removed.
pub fn purge_history_for(league: &mut League, match_id: MatchId) -> usize {
    let before = league.history.len();
    league.history.retain(|e| e.match_id != match_id);
    before - league.history.len()
}
