//! Standings: read-only rankings over the current player set.

use crate::logic::stats::totals;
use crate::models::Player;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sortable player metric.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    PointsFor,
    Wins,
    Diff,
    MatchesPlayed,
}

impl Metric {
    pub fn value(self, p: &Player) -> i64 {
        match self {
            Metric::PointsFor => i64::from(p.points_for),
            Metric::Wins => i64::from(p.wins),
            Metric::Diff => p.diff(),
            Metric::MatchesPlayed => i64::from(p.matches_played),
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "points_for" => Ok(Metric::PointsFor),
            "wins" => Ok(Metric::Wins),
            "diff" => Ok(Metric::Diff),
            "matches_played" => Ok(Metric::MatchesPlayed),
            other => Err(format!("unknown metric '{}'", other)),
        }
    }
}

/// All players, descending by `metric`, ties by ascending name.
pub fn rank_by(players: &[Player], metric: Metric) -> Vec<&Player> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by(|a, b| {
        metric
            .value(b)
            .cmp(&metric.value(a))
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked
}

/// First `k` of [`rank_by`]; shorter when there are fewer players.
pub fn top(players: &[Player], k: usize, metric: Metric) -> Vec<&Player> {
    let mut ranked = rank_by(players, metric);
    ranked.truncate(k);
    ranked
}

/// Player with the highest `points_for / matches_played`.
///
/// Players without matches only qualify when nobody has played; ties go to the
/// alphabetically first name. `None` when there are no players.
pub fn best_ratio(players: &[Player]) -> Option<&Player> {
    let played: Vec<&Player> = players.iter().filter(|p| p.matches_played > 0).collect();
    if played.is_empty() {
        return players.iter().min_by(|a, b| a.name.cmp(&b.name));
    }
    played
        .into_iter()
        .min_by(|a, b| compare_ratio(b, a).then_with(|| a.name.cmp(&b.name)))
}

// Cross-multiplied so equal ratios compare equal. Both players have matches.
fn compare_ratio(a: &Player, b: &Player) -> Ordering {
    let lhs = u64::from(a.points_for) * u64::from(b.matches_played);
    let rhs = u64::from(b.points_for) * u64::from(a.matches_played);
    lhs.cmp(&rhs)
}

/// The `k` players with the fewest matches, ties by name. Suggests who plays next.
pub fn least_played(players: &[Player], k: usize) -> Vec<&Player> {
    let mut ordered: Vec<&Player> = players.iter().collect();
    ordered.sort_by(|a, b| {
        a.matches_played
            .cmp(&b.matches_played)
            .then_with(|| a.name.cmp(&b.name))
    });
    ordered.truncate(k);
    ordered
}

/// League totals for the statistics view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeagueSummary {
    pub total_players: usize,
    /// Finalized matches still reflected in player stats.
    pub total_matches: u64,
    pub average_matches_played: f64,
}

pub fn summary(players: &[Player]) -> LeagueSummary {
    let t = totals(players);
    let average_matches_played = if players.is_empty() {
        0.0
    } else {
        t.matches_played as f64 / players.len() as f64
    };
    LeagueSummary {
        total_players: players.len(),
        total_matches: t.matches_played / 4,
        average_matches_played,
    }
}
