//! Game configuration (env-driven)

use crate::selector::AnswerMode;
use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Canonical env var for the roster CSV path.
pub const PLAYERS_CSV_ENV: &str = "KBL_PLAYERS_CSV";

/// Legacy alias used by older deploy scripts.
pub const PLAYERS_CSV_ENV_ALIAS: &str = "PLAYERS_CSV_PATH";

pub const MAX_GUESSES_ENV: &str = "KBL_MAX_GUESSES";
pub const ANSWER_MODE_ENV: &str = "KBL_ANSWER_MODE";
pub const SEED_ENV: &str = "KBL_SEED";

/// Default relative path used when no env var is set.
pub const DEFAULT_PLAYERS_CSV_REL_PATH: &str = "data/kbl_players_2025.csv";

pub const DEFAULT_MAX_GUESSES: u32 = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub data_csv: PathBuf,
    pub max_guesses: u32,
    pub answer_mode: AnswerMode,
    /// Fixed RNG seed for reproducible rounds
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            data_csv: PathBuf::from(DEFAULT_PLAYERS_CSV_REL_PATH),
            max_guesses: DEFAULT_MAX_GUESSES,
            answer_mode: AnswerMode::Random,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `KBL_*` env vars. Invalid values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name: &str| env::var(name).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        let csv_path = [PLAYERS_CSV_ENV, PLAYERS_CSV_ENV_ALIAS]
            .into_iter()
            .find_map(&get);
        if let Some(path) = csv_path {
            config.data_csv = PathBuf::from(path);
        }

        if let Some(raw) = get(MAX_GUESSES_ENV) {
            match raw.parse::<u32>() {
                Ok(n) if n > 0 => config.max_guesses = n,
                _ => warn!("Ignoring invalid {}='{}'", MAX_GUESSES_ENV, raw),
            }
        }

        if let Some(raw) = get(ANSWER_MODE_ENV) {
            match raw.parse::<AnswerMode>() {
                Ok(mode) => config.answer_mode = mode,
                Err(e) => warn!("Ignoring {}: {}", ANSWER_MODE_ENV, e),
            }
        }

        if let Some(raw) = get(SEED_ENV) {
            match raw.parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => warn!("Ignoring invalid {}='{}'", SEED_ENV, raw),
            }
        }

        config
    }
}
