//! League business logic: registry, match lifecycle, stats, standings, history.

mod history;
mod lifecycle;
mod registry;
mod standings;
mod stats;

pub use history::{list_history, pair_label, purge_history, purge_history_for};
pub use lifecycle::{
    create_match, delete_match, edit_match, finalize_match, list_active_matches, PairingMode,
    PLAYERS_PER_MATCH,
};
pub use registry::{list_players, register_player, remove_player};
pub use standings::{best_ratio, least_played, rank_by, summary, top, LeagueSummary, Metric};
pub use stats::{totals, StatsTotals};
