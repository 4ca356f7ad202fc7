pub mod game_json;


pub use game_json::{
    answer_json, guess_json, player_info_json, players_json, reset_round_json, status_json,
    teams_json, ApiError, ApiResponse, GuessRequest, GuessResponse, PlayerInfoRequest,
    ScopeRequest, API_VERSION,
};
