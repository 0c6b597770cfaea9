//! Player, Level and PlayerStats data structures.

use serde::{Deserialize, Serialize};

/// Identifier for a player: assigned at registration, never reused.
pub type PlayerId = u32;

/// Skill tier chosen at registration. Opaque to the stats engine.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// Statistics view of a player (for API / display), including the derived diff.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub id: PlayerId,
    pub name: String,
    pub level: Level,
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub diff: i64,
}

impl PlayerStats {
    pub fn from_player(p: &Player) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            level: p.level,
            matches_played: p.matches_played,
            wins: p.wins,
            losses: p.losses,
            points_for: p.points_for,
            points_against: p.points_against,
            diff: p.diff(),
        }
    }
}

/// A registered league player. Counters only move through finalized matches.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub level: Level,
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub points_for: u32,
    pub points_against: u32,
}

impl Player {
    /// Create a new player. All counters start at zero.
    pub fn new(id: PlayerId, name: impl Into<String>, level: Level) -> Self {
        Self {
            id,
            name: name.into(),
            level,
            matches_played: 0,
            wins: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
        }
    }

    /// Points scored minus points conceded.
    pub fn diff(&self) -> i64 {
        i64::from(self.points_for) - i64::from(self.points_against)
    }

    /// Current stats as a separate struct (for API responses).
    pub fn stats(&self) -> PlayerStats {
        PlayerStats::from_player(self)
    }

    /// Copy of this player with a won match recorded: `scored` by this player's
    /// pair, `conceded` by the other. `None` if any counter would overflow.
    pub fn with_win(&self, scored: u32, conceded: u32) -> Option<Player> {
        let mut p = self.with_played(scored, conceded)?;
        p.wins = p.wins.checked_add(1)?;
        Some(p)
    }

    /// Copy of this player with a lost match recorded.
    pub fn with_loss(&self, scored: u32, conceded: u32) -> Option<Player> {
        let mut p = self.with_played(scored, conceded)?;
        p.losses = p.losses.checked_add(1)?;
        Some(p)
    }

    fn with_played(&self, scored: u32, conceded: u32) -> Option<Player> {
        Some(Player {
            matches_played: self.matches_played.checked_add(1)?,
            points_for: self.points_for.checked_add(scored)?,
            points_against: self.points_against.checked_add(conceded)?,
            ..self.clone()
        })
    }
}
