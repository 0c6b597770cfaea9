//! Padel league: library with models, business logic and the shared store.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    best_ratio, create_match, delete_match, edit_match, finalize_match, least_played,
    list_active_matches, list_history, list_players, pair_label, purge_history, purge_history_for,
    rank_by, register_player, remove_player, summary, top, totals, LeagueSummary, Metric,
    PairingMode, StatsTotals, PLAYERS_PER_MATCH,
};
pub use models::{
    GameMatch, HistoryEntry, HistoryEntryId, League, LeagueError, Level, MatchId, MatchStatus,
    Pair, Player, PlayerId, PlayerStats, Score, Side,
};
pub use store::LeagueStore;
