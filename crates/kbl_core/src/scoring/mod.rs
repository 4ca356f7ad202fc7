//! Scoring engine
//!
//! 추측한 선수와 정답 선수를 속성별로 비교해 green / yellow / black 신호와
//! 표시용 문자열을 만든다.
//!
//! ## Rules
//! - team, position, player_type: green or black only
//! - number: yellow within 2, height: yellow within 3 (cm)
//! - draft: year + round; same round in another year is yellow
//! - same identity (normalized name + canonical team) → everything green

pub mod display;
pub mod position;
pub mod rules;
pub mod signal;


pub use display::{format_draft, format_height, format_number, DisplayRecord, PlayerInfo};
pub use position::{role_label, role_set, RoleCode, RoleSet};
pub use rules::{
    compare_draft, compare_fields, compare_height, compare_number, compare_player_type,
    compare_position, compare_team, HEIGHT_TOLERANCE, NUMBER_TOLERANCE,
};
pub use signal::{Attribute, AttributeSignals, Signal};

use crate::models::PlayerRecord;
use serde::{Deserialize, Serialize};

/// Result of one guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Guessed player's name as stored in the roster
    pub name: String,
    pub signals: AttributeSignals,
    /// Guessed player's display values
    pub values: DisplayRecord,
    /// Guess and answer are the same player
    pub is_correct: bool,
}

pub fn score(guess: &PlayerRecord, answer: &PlayerRecord) -> ScoreResult {
    ScoreResult {
        name: guess.name.clone(),
        signals: compare_fields(guess, answer),
        values: DisplayRecord::from(guess),
        is_correct: guess.same_identity(answer),
    }
}
