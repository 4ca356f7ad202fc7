//! Display strings shown next to each signal. Never used for scoring.

use crate::models::PlayerRecord;
use serde::{Deserialize, Serialize};

/// Parsed number, or the raw text when it does not parse.
pub fn format_number(player: &PlayerRecord) -> String {
    match player.number_value {
        Some(n) => n.to_string(),
        None => player.number.clone(),
    }
}

/// `"198cm"`, or the raw text when it does not parse.
pub fn format_height(player: &PlayerRecord) -> String {
    match player.height_value {
        Some(h) => format!("{h}cm"),
        None => player.height_cm.clone(),
    }
}

/// `[year] [type] [round]R [overall]`, empty parts omitted.
pub fn format_draft(player: &PlayerRecord) -> String {
    let round = player.draft_round.trim();
    let round = if round.is_empty() || round.ends_with(['R', 'r']) {
        round.to_string()
    } else {
        format!("{round}R")
    };

    let parts = [
        player.draft_year.trim(),
        player.draft_type.trim(),
        round.as_str(),
        player.draft_overall.trim(),
    ];
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable value per scored attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub name: String,
    pub team: String,
    pub number: String,
    pub position: String,
    pub height_cm: String,
    pub player_type: String,
    pub draft: String,
}

impl From<&PlayerRecord> for DisplayRecord {
    fn from(player: &PlayerRecord) -> Self {
        Self {
            name: player.name.clone(),
            team: player.team.clone(),
            number: format_number(player),
            position: player.position.clone(),
            height_cm: format_height(player),
            player_type: player.player_type.clone(),
            draft: format_draft(player),
        }
    }
}

/// Raw record plus derived age, for the player info lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerInfo {
    #[serde(flatten)]
    pub record: PlayerRecord,
    pub age: Option<i32>,
}

impl PlayerInfo {
    pub fn new(record: &PlayerRecord, current_year: i32) -> Self {
        Self {
            record: record.clone(),
            age: record.age_in(current_year),
        }
    }
}
