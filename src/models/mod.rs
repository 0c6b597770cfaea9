//! Data structures for the league: players, matches, history, league state.

mod game;
mod history;
mod league;
mod player;

pub use game::{GameMatch, MatchId, MatchStatus, Pair, Score, Side};
pub use history::{HistoryEntry, HistoryEntryId};
pub use league::{League, LeagueError};
pub use player::{Level, Player, PlayerId, PlayerStats};
