//! League state (players, matches, history) and LeagueError.

use crate::models::game::{GameMatch, MatchId};
use crate::models::history::{HistoryEntry, HistoryEntryId};
use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Errors that can occur during league operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LeagueError {
    /// A player with this exact name is already registered.
    DuplicateName(String),
    /// Player name is empty after trimming.
    InvalidName,
    /// No registered player with this name.
    PlayerNotFound(String),
    /// Fewer than 4 players are registered.
    InsufficientPlayers { registered: usize },
    /// The four players of a match are not pairwise distinct.
    DuplicatePlayerInMatch(String),
    MatchNotFound(MatchId),
    /// Finalized matches cannot be edited or finalized again.
    MatchAlreadyFinalized(MatchId),
    /// Both pairs have the same score; ties are not representable.
    TieScoreNotAllowed,
    /// Applying the score would overflow this player's counters.
    StatsOverflow(String),
    /// The backing store cannot be accessed (poisoned lock).
    StorageUnavailable,
}

impl std::fmt::Display for LeagueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueError::DuplicateName(name) => {
                write!(f, "A player named '{}' already exists", name)
            }
            LeagueError::InvalidName => write!(f, "Player name must not be empty"),
            LeagueError::PlayerNotFound(name) => write!(f, "Player '{}' not found", name),
            LeagueError::InsufficientPlayers { registered } => write!(
                f,
                "Need at least 4 registered players to create a match (have {})",
                registered
            ),
            LeagueError::DuplicatePlayerInMatch(name) => {
                write!(f, "Player '{}' appears more than once in the match", name)
            }
            LeagueError::MatchNotFound(id) => write!(f, "Match #{} not found", id),
            LeagueError::MatchAlreadyFinalized(id) => {
                write!(f, "Match #{} is already finalized", id)
            }
            LeagueError::TieScoreNotAllowed => write!(f, "Tied scores are not allowed"),
            LeagueError::StatsOverflow(name) => {
                write!(f, "Score would overflow the stats of player '{}'", name)
            }
            LeagueError::StorageUnavailable => write!(f, "League storage is unavailable"),
        }
    }
}

impl std::error::Error for LeagueError {}

/// Full league state. Every command and query takes this explicitly.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct League {
    /// Registered players, in registration order.
    pub(crate) players: Vec<Player>,
    /// Matches in creation order, active and finalized.
    pub(crate) matches: Vec<GameMatch>,
    /// History entries in append order (oldest first).
    pub(crate) history: Vec<HistoryEntry>,
    next_player_id: PlayerId,
    next_match_id: MatchId,
    next_history_id: HistoryEntryId,
}

impl League {
    /// Create an empty league. Identifiers start at 1.
    pub fn new() -> Self {
        Self {
            next_player_id: 1,
            next_match_id: 1,
            next_history_id: 1,
            ..Self::default()
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn matches(&self) -> &[GameMatch] {
        &self.matches
    }

    /// History entries, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn get_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub(crate) fn get_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Position of a player in `players`, for index-based updates.
    pub(crate) fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Display name of a player; deleted players fall back to their id.
    pub fn player_name(&self, id: PlayerId) -> String {
        self.player(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("#{}", id))
    }

    pub(crate) fn allocate_player_id(&mut self) -> PlayerId {
        let id = self.next_player_id.max(1);
        self.next_player_id = id + 1;
        id
    }

    pub(crate) fn allocate_match_id(&mut self) -> MatchId {
        let id = self.next_match_id.max(1);
        self.next_match_id = id + 1;
        id
    }

    pub(crate) fn allocate_history_id(&mut self) -> HistoryEntryId {
        let id = self.next_history_id.max(1);
        self.next_history_id = id + 1;
        id
    }
}
