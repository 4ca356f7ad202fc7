//! Answer selector
//!
//! scope(리그 전체 또는 한 팀)마다 정답 인덱스를 하나씩 캐시한다.
//! 캐시는 처음 조회할 때 채워지고 `reset_round()` 전까지 바뀌지 않는다.

use crate::normalize::{canonical_team, is_all_scope};
use crate::roster::RosterStore;
use chrono::{NaiveDate, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Sentinel key of the league-wide scope.
pub const ALL_SCOPE_KEY: &str = "ALL";

/// Player subset an answer is drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    All,
    /// Canonical team name
    Team(String),
}

impl Scope {
    /// `""`, `ALL`, `전체`, `KBL`, ... → `All`; anything else is a team name.
    pub fn parse(raw: &str) -> Self {
        if is_all_scope(raw) {
            Scope::All
        } else {
            Scope::Team(canonical_team(raw))
        }
    }

    pub fn from_filter(filter: Option<&str>) -> Self {
        filter.map(Scope::parse).unwrap_or(Scope::All)
    }

    pub fn key(&self) -> &str {
        match self {
            Scope::All => ALL_SCOPE_KEY,
            Scope::Team(team) => team,
        }
    }

    /// Roster indices in this scope, roster order.
    pub fn pool(&self, roster: &RosterStore) -> Vec<usize> {
        roster
            .players()
            .iter()
            .enumerate()
            .filter(|(_, p)| match self {
                Scope::All => true,
                Scope::Team(team) => p.team_key == *team,
            })
            .map(|(idx, _)| idx)
            .collect()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How a fresh answer is drawn for a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMode {
    /// Uniform random draw per round
    #[default]
    Random,
    /// Same answer for everyone on a given UTC date
    Daily,
}

impl FromStr for AnswerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(AnswerMode::Random),
            "daily" => Ok(AnswerMode::Daily),
            other => Err(format!("Unknown answer mode: {other}")),
        }
    }
}

/// Scope-keyed answer cache.
///
/// Holds only indices into each scope's pool, never player copies. The check
/// and the insert happen under one lock, so two first accesses to the same
/// scope always agree.
pub struct AnswerSelector {
    mode: AnswerMode,
    cache: Mutex<HashMap<Scope, usize>>,
    rng: Mutex<ChaCha8Rng>,
    /// Daily-mode date override; today in UTC when unset
    date: Option<NaiveDate>,
}

impl AnswerSelector {
    /// `seed` makes random draws reproducible; `None` seeds from OS entropy.
    pub fn new(mode: AnswerMode, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            mode,
            cache: Mutex::new(HashMap::new()),
            rng: Mutex::new(rng),
            date: None,
        }
    }

    /// Pin the date daily answers are derived from.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn mode(&self) -> AnswerMode {
        self.mode
    }

    /// Current answer for `scope` as a roster index, drawing one if needed.
    ///
    /// `None` when the scope has no players.
    pub fn get_answer(&self, roster: &RosterStore, scope: &Scope) -> Option<usize> {
        let pool = scope.pool(roster);
        if pool.is_empty() {
            debug!("Empty answer pool for scope {}", scope);
            return None;
        }

        let mut cache = lock(&self.cache);
        let cached = *cache.entry(scope.clone()).or_insert_with(|| {
            let drawn = self.draw(scope, pool.len());
            info!("New answer for {}: {}/{}", scope, drawn, pool.len());
            drawn
        });
        // roster is immutable, but guard against a selector reused across rosters
        pool.get(cached).or_else(|| pool.first()).copied()
    }

    /// Cached pool index for `scope`, if drawn this round.
    pub fn cached_index(&self, scope: &Scope) -> Option<usize> {
        lock(&self.cache).get(scope).copied()
    }

    /// Forget every scope's answer; next access draws again.
    pub fn reset_round(&self) {
        let mut cache = lock(&self.cache);
        debug!("Round reset, clearing {} cached scope(s)", cache.len());
        cache.clear();
    }

    fn draw(&self, scope: &Scope, pool_len: usize) -> usize {
        match self.mode {
            AnswerMode::Random => lock(&self.rng).gen_range(0..pool_len),
            AnswerMode::Daily => {
                let date = self.answer_date().format("%Y-%m-%d").to_string();
                daily_index(&date, scope, pool_len)
            }
        }
    }

    fn answer_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl Default for AnswerSelector {
    fn default() -> Self {
        Self::new(AnswerMode::default(), None)
    }
}

/// SHA-256 of the date (plus team key for team scopes) as a big integer, mod `pool_len`.
pub fn daily_index(date: &str, scope: &Scope, pool_len: usize) -> usize {
    if pool_len == 0 {
        return 0;
    }
    let mut hasher = Sha256::new();
    hasher.update(date.as_bytes());
    if let Scope::Team(team) = scope {
        hasher.update(b":");
        hasher.update(team.as_bytes());
    }
    let digest = hasher.finalize();

    let modulus = pool_len as u128;
    let rem = digest
        .iter()
        .fold(0u128, |acc, &byte| (acc * 256 + byte as u128) % modulus);
    rem as usize
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
