use thiserror::Error;

/// User-facing rejection for a guess that does not resolve to a roster entry.
pub const NOT_REGISTERED_MESSAGE: &str = "등록되지 않은 선수입니다.";

#[derive(Error, Debug)]
pub enum GameError {
    #[error("등록되지 않은 선수입니다. ({name})")]
    NotRegistered { name: String },

    #[error("Player not found: {name}{}", team_suffix(.team))]
    NotFound { name: String, team: Option<String> },

    #[error("No players in scope: {scope}")]
    EmptyPool { scope: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl GameError {
    /// Stable error code used by the JSON boundary.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::NotRegistered { .. } => "NOT_REGISTERED",
            GameError::NotFound { .. } => "NOT_FOUND",
            GameError::EmptyPool { .. } => "EMPTY_POOL",
            GameError::Io(_) => "IO_ERROR",
            GameError::Csv(_) => "CSV_ERROR",
        }
    }

    /// Status a host HTTP layer should answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            GameError::NotRegistered { .. } => 400,
            GameError::NotFound { .. } => 404,
            GameError::EmptyPool { .. } => 404,
            GameError::Io(_) | GameError::Csv(_) => 500,
        }
    }

    /// Identity and scope failures are part of normal play; IO/CSV are not.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            GameError::NotRegistered { .. }
                | GameError::NotFound { .. }
                | GameError::EmptyPool { .. }
        )
    }
}

fn team_suffix(team: &Option<String>) -> String {
    match team {
        Some(t) => format!(" / {t}"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
