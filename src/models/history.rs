//! HistoryEntry: audit record of one finalized match.

use crate::models::game::MatchId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a history entry (insertion sequence).
pub type HistoryEntryId = u32;

/// Immutable record written once per finalize. `match_id` is a weak reference:
/// the match may be gone while the entry survives, and vice versa.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: HistoryEntryId,
    pub match_id: MatchId,
    pub recorded_at: DateTime<Utc>,
    /// e.g. "Alice & Bob"
    pub pair_a: String,
    pub pair_b: String,
    /// e.g. "21-15" (pair A score first)
    pub result: String,
    /// Label of the winning pair.
    pub winner: String,
}
