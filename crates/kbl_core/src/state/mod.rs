//! Game State
//!
//! `GameState` bundles the read-only roster with the answer selector and is
//! passed explicitly to every handler. It is `Send + Sync`; share it behind an
//! `Arc` when the host serves requests from several threads.

use std::path::Path;
use std::sync::Arc;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::models::PlayerRecord;
use crate::resolver::NameResolver;
use crate::roster::RosterStore;
use crate::scoring::{score, DisplayRecord, PlayerInfo, ScoreResult};
use crate::selector::{AnswerSelector, Scope};

/// Static game settings reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub max_guesses: u32,
}

/// Runtime game state: roster + per-scope answers.
pub struct GameState {
    roster: Arc<RosterStore>,
    selector: AnswerSelector,
    max_guesses: u32,
}

impl GameState {
    pub fn new(roster: Arc<RosterStore>, config: &GameConfig) -> Self {
        Self {
            roster,
            selector: AnswerSelector::new(config.answer_mode, config.seed),
            max_guesses: config.max_guesses,
        }
    }

    /// Load the roster from `config.data_csv`.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Self::load(&config.data_csv, config)
    }

    pub fn load(csv_path: &Path, config: &GameConfig) -> Result<Self> {
        let roster = RosterStore::load_path(csv_path)?;
        info!(
            "Game ready: {} players, {} teams, mode {:?}",
            roster.len(),
            roster.roster_by_team().len(),
            config.answer_mode
        );
        Ok(Self::new(Arc::new(roster), config))
    }

    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    pub fn selector(&self) -> &AnswerSelector {
        &self.selector
    }

    // ========================
    // Round operations
    // ========================

    /// Resolve a guess, pick (or reuse) the scope's answer, and score it.
    ///
    /// `team_filter` selects the scope; `team_of_guess` disambiguates
    /// players sharing a name.
    pub fn resolve_and_score(
        &self,
        guess_name: &str,
        team_filter: Option<&str>,
        team_of_guess: Option<&str>,
    ) -> Result<ScoreResult> {
        let scope = Scope::from_filter(team_filter);

        let guess_idx = NameResolver::new(&self.roster)
            .resolve(guess_name, team_of_guess, &scope)
            .map_err(|_| GameError::NotRegistered {
                name: guess_name.trim().to_string(),
            })?;
        let guess = self.player_at(guess_idx);
        let answer = self.answer_for(&scope)?;

        let result = score(guess, answer);
        debug!(
            "Guess {:?} in scope {}: correct={} signals={:?}",
            guess.name, scope, result.is_correct, result.signals
        );
        Ok(result)
    }

    /// Current answer of the scope, formatted for display.
    pub fn get_answer_display(&self, team_filter: Option<&str>) -> Result<DisplayRecord> {
        let scope = Scope::from_filter(team_filter);
        self.answer_for(&scope).map(DisplayRecord::from)
    }

    /// Start a new round in every scope.
    pub fn reset_round(&self) {
        self.selector.reset_round();
    }

    // ========================
    // Player lookups
    // ========================

    /// Direct lookup by name, optionally pinned to a team.
    pub fn lookup_player(&self, name: &str, team: Option<&str>) -> Result<&PlayerRecord> {
        let idx = NameResolver::new(&self.roster).resolve(name, team, &Scope::All)?;
        Ok(self.player_at(idx))
    }

    /// Lookup plus derived age (current UTC year).
    pub fn player_info(&self, name: &str, team: Option<&str>) -> Result<PlayerInfo> {
        let record = self.lookup_player(name, team)?;
        Ok(PlayerInfo::new(record, chrono::Utc::now().year()))
    }

    pub fn player_names(&self) -> Vec<String> {
        self.roster.player_names()
    }

    pub fn team_roster(&self) -> &std::collections::BTreeMap<String, Vec<String>> {
        self.roster.roster_by_team()
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            max_guesses: self.max_guesses,
        }
    }

    fn answer_for(&self, scope: &Scope) -> Result<&PlayerRecord> {
        let idx = self
            .selector
            .get_answer(&self.roster, scope)
            .ok_or_else(|| GameError::EmptyPool {
                scope: scope.to_string(),
            })?;
        Ok(self.player_at(idx))
    }

    /// Indices only come from this roster's resolver or scope pools and the
    /// roster is never mutated after load, so they are always in bounds.
    fn player_at(&self, idx: usize) -> &PlayerRecord {
        &self.roster.players()[idx]
    }
}

#[cfg(test)]
mod tests;
