//! JSON API for game operations
//!
//! Request/response functions a host layer (HTTP, FFI, CLI) calls with a
//! shared `GameState`. Every function returns a serialized `ApiResponse`.

use crate::error::{GameError, NOT_REGISTERED_MESSAGE};
use crate::scoring::{AttributeSignals, DisplayRecord, PlayerInfo, ScoreResult};
use crate::state::{GameState, GameStatus};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{error, info, warn};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured API error with code and status hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub http_status: u16,
}

impl ApiError {
    pub fn new(code: &str, message: &str, http_status: u16) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            http_status,
        }
    }

    pub fn invalid_json(e: &serde_json::Error) -> Self {
        Self::new("INVALID_JSON", &format!("Invalid JSON format: {}", e), 400)
    }
}

impl From<&GameError> for ApiError {
    fn from(error: &GameError) -> Self {
        let message = match error {
            GameError::NotRegistered { .. } => NOT_REGISTERED_MESSAGE.to_string(),
            other => other.to_string(),
        };
        Self::new(error.code(), &message, error.http_status())
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Guess request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuessRequest {
    pub name: String,
    /// Scope filter: blank / "전체" / team name
    pub team_filter: Option<String>,
    /// Team of the guessed player, for duplicate names
    pub team: Option<String>,
}

/// Guess response, flat like the web client expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResponse {
    pub name: String,
    #[serde(flatten)]
    pub signals: AttributeSignals,
    pub values: DisplayRecord,
    pub is_correct: bool,
}

impl From<ScoreResult> for GuessResponse {
    fn from(result: ScoreResult) -> Self {
        Self {
            name: result.name,
            signals: result.signals,
            values: result.values,
            is_correct: result.is_correct,
        }
    }
}

/// Answer / reset request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeRequest {
    pub team_filter: Option<String>,
}

/// Player lookup request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerInfoRequest {
    pub name: String,
    pub team: Option<String>,
}

fn to_json<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| "{}".to_string())
}

fn error_json<T: Serialize>(error: ApiError) -> String {
    to_json::<T>(&ApiResponse::error(error))
}

fn parse_request<R: DeserializeOwned + Default>(request_json: &str) -> Result<R, ApiError> {
    if request_json.trim().is_empty() {
        return Ok(R::default());
    }
    serde_json::from_str(request_json).map_err(|e| {
        error!("Failed to parse request: {}", e);
        ApiError::invalid_json(&e)
    })
}

/// `{"name": "...", "team_filter": "...", "team": "..."}` → `GuessResponse`
pub fn guess_json(state: &GameState, request_json: &str) -> String {
    let request: GuessRequest = match parse_request(request_json) {
        Ok(req) => req,
        Err(error) => return error_json::<GuessResponse>(error),
    };

    match state.resolve_and_score(
        &request.name,
        request.team_filter.as_deref(),
        request.team.as_deref(),
    ) {
        Ok(result) => {
            info!("Guess {:?}: correct={}", result.name, result.is_correct);
            to_json(&ApiResponse::success(GuessResponse::from(result)))
        }
        Err(e) => {
            warn!("Guess rejected: {}", e);
            error_json::<GuessResponse>(ApiError::from(&e))
        }
    }
}

/// `{"team_filter": "..."}` → current answer `DisplayRecord`
pub fn answer_json(state: &GameState, request_json: &str) -> String {
    let request: ScopeRequest = match parse_request(request_json) {
        Ok(req) => req,
        Err(error) => return error_json::<DisplayRecord>(error),
    };

    match state.get_answer_display(request.team_filter.as_deref()) {
        Ok(display) => to_json(&ApiResponse::success(display)),
        Err(e) => {
            warn!("Answer unavailable: {}", e);
            error_json::<DisplayRecord>(ApiError::from(&e))
        }
    }
}

/// Clears every scope's answer (new round / page load).
pub fn reset_round_json(state: &GameState) -> String {
    state.reset_round();
    info!("Round reset");
    to_json(&ApiResponse::success(()))
}

/// `{"name": "...", "team": "..."}` → `PlayerInfo`
pub fn player_info_json(state: &GameState, request_json: &str) -> String {
    let request: PlayerInfoRequest = match parse_request(request_json) {
        Ok(req) => req,
        Err(error) => return error_json::<PlayerInfo>(error),
    };

    match state.player_info(&request.name, request.team.as_deref()) {
        Ok(info) => to_json(&ApiResponse::success(info)),
        Err(e) => error_json::<PlayerInfo>(ApiError::from(&e)),
    }
}

pub fn status_json(state: &GameState) -> String {
    to_json::<GameStatus>(&ApiResponse::success(state.status()))
}

/// All player names, roster order
pub fn players_json(state: &GameState) -> String {
    to_json(&ApiResponse::success(state.player_names()))
}

/// team → sorted `"name(number)"` list
pub fn teams_json(state: &GameState) -> String {
    to_json::<&BTreeMap<String, Vec<String>>>(&ApiResponse::success(state.team_roster()))
}
