//! Roster store: CSV loading and name indices

pub mod loader;
pub mod store;

pub use loader::{load_csv_path, load_csv_reader, ParseStats};
pub use store::RosterStore;
