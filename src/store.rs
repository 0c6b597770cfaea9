//! Shared league store: one `RwLock` around the whole state.
//!
//! Commands run as transactions against a staged copy that replaces the live
//! state only on success, so no caller ever sees half of a command. Holding the
//! write lock for the whole command serializes finalize per match.

use crate::models::{League, LeagueError};
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct LeagueStore {
    league: RwLock<League>,
}

impl LeagueStore {
    pub fn new(league: League) -> Self {
        Self {
            league: RwLock::new(league),
        }
    }

    /// Run a read-only query against a consistent snapshot.
    pub fn read<T>(&self, query: impl FnOnce(&League) -> T) -> Result<T, LeagueError> {
        let g = self
            .league
            .read()
            .map_err(|_| LeagueError::StorageUnavailable)?;
        Ok(query(&g))
    }

    /// Run a command atomically. On `Err` the live state is left untouched.
    pub fn transact<T>(
        &self,
        command: impl FnOnce(&mut League) -> Result<T, LeagueError>,
    ) -> Result<T, LeagueError> {
        let mut g = self
            .league
            .write()
            .map_err(|_| LeagueError::StorageUnavailable)?;
        let mut staged = g.clone();
        let out = command(&mut staged)?;
        *g = staged;
        Ok(out)
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> Result<League, LeagueError> {
        self.read(League::clone)
    }
}
