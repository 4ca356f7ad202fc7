pub mod player;

pub use player::{PlayerRecord, PlayerRow, PLAYER_COLUMNS};
