use crate::normalize::{canonical_team, normalize_name, parse_int};
use serde::{Deserialize, Serialize};

/// Column names every roster source is expected to carry.
pub const PLAYER_COLUMNS: &[&str] = &[
    "name",
    "team",
    "number",
    "position",
    "height_cm",
    "birth_year",
    "player_type",
    "draft_year",
    "draft_type",
    "draft_round",
    "draft_overall",
];

/// One CSV row as it appears in the source. Missing columns deserialize to `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRow {
    pub name: String,
    pub team: String,
    pub number: String,
    pub position: String,
    pub height_cm: String,
    pub birth_year: String,
    /// Legacy column, only read when `birth_year` is blank
    pub age: String,
    pub player_type: String,
    pub draft_year: String,
    pub draft_type: String,
    pub draft_round: String,
    pub draft_overall: String,
}

/// Roster entry.
///
/// Raw text fields are kept as loaded (trimmed) for display; `number_value`
/// and `height_value` hold the parsed integers used for scoring. `name` alone
/// is not unique, the identity is `(name_key, team_key)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
    pub number: String,
    pub position: String,
    pub height_cm: String,
    pub birth_year: String,
    pub player_type: String,
    pub draft_year: String,
    pub draft_type: String,
    pub draft_round: String,
    pub draft_overall: String,

    #[serde(skip)]
    pub age: String,
    #[serde(skip)]
    pub number_value: Option<i32>,
    #[serde(skip)]
    pub height_value: Option<i32>,
    /// `normalize_name(name)`
    #[serde(skip)]
    pub name_key: String,
    /// `canonical_team(team)`
    #[serde(skip)]
    pub team_key: String,
}

impl From<PlayerRow> for PlayerRecord {
    fn from(row: PlayerRow) -> Self {
        let t = |s: String| s.trim().to_string();
        let name = t(row.name);
        let team = t(row.team);
        let number = t(row.number);
        let height_cm = t(row.height_cm);

        Self {
            name_key: normalize_name(&name),
            team_key: canonical_team(&team),
            number_value: parse_int(&number),
            height_value: parse_int(&height_cm),
            name,
            team,
            number,
            position: t(row.position),
            height_cm,
            birth_year: t(row.birth_year),
            age: t(row.age),
            player_type: t(row.player_type),
            draft_year: t(row.draft_year),
            draft_type: t(row.draft_type),
            draft_round: t(row.draft_round),
            draft_overall: t(row.draft_overall),
        }
    }
}

impl PlayerRecord {
    /// Same player: normalized name and canonical team both equal.
    pub fn same_identity(&self, other: &PlayerRecord) -> bool {
        !self.name_key.is_empty()
            && self.name_key == other.name_key
            && self.team_key == other.team_key
    }

    /// Roster label used in team listings, e.g. `허웅(5)`.
    pub fn roster_label(&self) -> String {
        format!("{}({})", self.name, self.number)
    }

    /// Age in `current_year`: from `birth_year`, else the legacy `age` column.
    pub fn age_in(&self, current_year: i32) -> Option<i32> {
        if !self.birth_year.is_empty() {
            if let Some(year) = parse_int(&self.birth_year) {
                return Some(current_year - year);
            }
        }
        if !self.age.is_empty() {
            return parse_int(&self.age);
        }
        None
    }
}

/// Fixture builders for tests.
#[cfg(test)]
impl PlayerRecord {
    pub(crate) fn new(name: &str, team: &str) -> Self {
        Self::from(PlayerRow {
            name: name.to_string(),
            team: team.to_string(),
            ..Default::default()
        })
    }

    pub(crate) fn with_number(self, number: &str) -> Self {
        self.rebuild(|row| row.number = number.to_string())
    }

    pub(crate) fn with_position(self, position: &str) -> Self {
        self.rebuild(|row| row.position = position.to_string())
    }

    pub(crate) fn with_height(self, height_cm: &str) -> Self {
        self.rebuild(|row| row.height_cm = height_cm.to_string())
    }

    pub(crate) fn with_player_type(self, player_type: &str) -> Self {
        self.rebuild(|row| row.player_type = player_type.to_string())
    }

    pub(crate) fn with_birth_year(self, birth_year: &str) -> Self {
        self.rebuild(|row| row.birth_year = birth_year.to_string())
    }

    pub(crate) fn with_draft(self, year: &str, kind: &str, round: &str, overall: &str) -> Self {
        self.rebuild(|row| {
            row.draft_year = year.to_string();
            row.draft_type = kind.to_string();
            row.draft_round = round.to_string();
            row.draft_overall = overall.to_string();
        })
    }

    fn rebuild(self, edit: impl FnOnce(&mut PlayerRow)) -> Self {
        let mut row = self.into_row();
        edit(&mut row);
        row.into()
    }

    pub(crate) fn into_row(self) -> PlayerRow {
        PlayerRow {
            name: self.name,
            team: self.team,
            number: self.number,
            position: self.position,
            height_cm: self.height_cm,
            birth_year: self.birth_year,
            age: self.age,
            player_type: self.player_type,
            draft_year: self.draft_year,
            draft_type: self.draft_type,
            draft_round: self.draft_round,
            draft_overall: self.draft_overall,
        }
    }
}
