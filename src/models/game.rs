//! Match (game), Pair, Side and Score for 2v2 league matches.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a match: assigned at creation, never reused.
pub type MatchId = u32;

/// Two players grouped as one side of a match.
pub type Pair = [PlayerId; 2];

/// Which side of the match (pair A or pair B).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Lifecycle state of a match. Deleted matches are simply gone from storage.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Active,
    Finalized,
}

/// Final score of a match. Never a tie.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub a: u32,
    pub b: u32,
}

impl Score {
    /// Side with the higher score, `None` on a tie.
    pub fn winner(&self) -> Option<Side> {
        use std::cmp::Ordering::*;
        match self.a.cmp(&self.b) {
            Greater => Some(Side::A),
            Less => Some(Side::B),
            Equal => None,
        }
    }
}

/// A single doubles match between `pair_a` and `pair_b`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub created_at: DateTime<Utc>,
    pub pair_a: Pair,
    pub pair_b: Pair,
    pub status: MatchStatus,
    /// Present iff finalized.
    pub score: Option<Score>,
    /// Present iff finalized.
    pub winner: Option<Side>,
}

impl GameMatch {
    pub fn new(id: MatchId, pair_a: Pair, pair_b: Pair) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            pair_a,
            pair_b,
            status: MatchStatus::Active,
            score: None,
            winner: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == MatchStatus::Active
    }

    pub fn pair(&self, side: Side) -> Pair {
        match side {
            Side::A => self.pair_a,
            Side::B => self.pair_b,
        }
    }

    /// All four players, pair A first.
    pub fn player_ids(&self) -> [PlayerId; 4] {
        [self.pair_a[0], self.pair_a[1], self.pair_b[0], self.pair_b[1]]
    }

    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.player_ids().contains(&player_id)
    }
}
