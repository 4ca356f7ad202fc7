use serde::{Deserialize, Serialize};
use std::fmt;

/// Tri-state match indicator for one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    /// Exact match
    Green,
    /// Close / partial match
    Yellow,
    /// No match, or data missing
    Black,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Green => "green",
            Signal::Yellow => "yellow",
            Signal::Black => "black",
        }
    }

    /// Terminal glyph used by the CLI.
    pub fn emoji(&self) -> &'static str {
        match self {
            Signal::Green => "🟩",
            Signal::Yellow => "🟨",
            Signal::Black => "⬛",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scored attributes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Team,
    Number,
    Position,
    HeightCm,
    PlayerType,
    Draft,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Team,
        Attribute::Number,
        Attribute::Position,
        Attribute::HeightCm,
        Attribute::PlayerType,
        Attribute::Draft,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Team => "팀",
            Attribute::Number => "등번호",
            Attribute::Position => "포지션",
            Attribute::HeightCm => "키",
            Attribute::PlayerType => "구분",
            Attribute::Draft => "드래프트",
        }
    }
}

/// One signal per scored attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSignals {
    pub team: Signal,
    pub number: Signal,
    pub position: Signal,
    pub height_cm: Signal,
    pub player_type: Signal,
    pub draft: Signal,
}

impl AttributeSignals {
    pub fn all(signal: Signal) -> Self {
        Self {
            team: signal,
            number: signal,
            position: signal,
            height_cm: signal,
            player_type: signal,
            draft: signal,
        }
    }

    pub fn get(&self, attribute: Attribute) -> Signal {
        match attribute {
            Attribute::Team => self.team,
            Attribute::Number => self.number,
            Attribute::Position => self.position,
            Attribute::HeightCm => self.height_cm,
            Attribute::PlayerType => self.player_type,
            Attribute::Draft => self.draft,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, Signal)> + '_ {
        Attribute::ALL.iter().map(move |&a| (a, self.get(a)))
    }

    pub fn all_green(&self) -> bool {
        self.iter().all(|(_, s)| s == Signal::Green)
    }
}
