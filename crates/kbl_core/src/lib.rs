//! # kbl_core - KBL "guess the player" game engine
//!
//! 2025 KBL 로스터 CSV를 읽어 이름으로 선수를 찾고, scope(리그 전체 또는 팀)별
//! 정답을 뽑아 추측한 선수와 속성별로 비교한다.
//!
//! ## Features
//! - Tolerant CSV roster loading (BOM, missing columns, short rows)
//! - Name resolution with whitespace/case/Unicode normalization
//! - Per-scope answer cache, random or daily
//! - Green / yellow / black signals per attribute
//! - JSON API for host layers

#![allow(clippy::doc_lazy_continuation)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod resolver;
pub mod roster;
pub mod scoring;
pub mod selector;
pub mod state;

// Re-export main API functions
pub use api::{
    answer_json, guess_json, player_info_json, players_json, reset_round_json, status_json,
    teams_json, ApiError, ApiResponse,
};
pub use config::GameConfig;
pub use error::{GameError, Result};

// Roster and lookup
pub use models::{PlayerRecord, PlayerRow};
pub use resolver::NameResolver;
pub use roster::{ParseStats, RosterStore};

// Rounds and scoring
pub use scoring::{score, AttributeSignals, DisplayRecord, PlayerInfo, ScoreResult, Signal};
pub use selector::{AnswerMode, AnswerSelector, Scope};
pub use state::{GameState, GameStatus};

/// Crate version, reported by the CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
