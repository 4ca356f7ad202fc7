use super::loader::{load_csv_path, load_csv_reader, ParseStats};
use crate::error::Result;
use crate::models::PlayerRecord;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Immutable roster plus lookup indices.
///
/// Index lists keep insertion order, so the first entry is the deterministic
/// tie-break when several players share a key.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    players: Vec<PlayerRecord>,
    /// team → sorted `"name(number)"` labels
    roster_by_team: BTreeMap<String, Vec<String>>,
    by_exact_name: FxHashMap<String, Vec<usize>>,
    by_normalized_name: FxHashMap<String, Vec<usize>>,
    stats: ParseStats,
}

impl RosterStore {
    pub fn from_players(players: Vec<PlayerRecord>) -> Self {
        let stats = ParseStats {
            total_rows: players.len() as u32,
            parsed: players.len() as u32,
            ..Default::default()
        };
        Self::build(players, stats)
    }

    pub fn load_path(csv_path: &Path) -> Result<Self> {
        let (players, stats) = load_csv_path(csv_path)?;
        Ok(Self::build(players, stats))
    }

    pub fn load_reader<R: Read>(source: R) -> Result<Self> {
        let (players, stats) = load_csv_reader(source)?;
        Ok(Self::build(players, stats))
    }

    fn build(players: Vec<PlayerRecord>, stats: ParseStats) -> Self {
        let mut roster_by_team: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut by_exact_name: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        let mut by_normalized_name: FxHashMap<String, Vec<usize>> = FxHashMap::default();

        for (idx, player) in players.iter().enumerate() {
            roster_by_team
                .entry(player.team.clone())
                .or_default()
                .push(player.roster_label());
            by_exact_name
                .entry(player.name.clone())
                .or_default()
                .push(idx);
            by_normalized_name
                .entry(player.name_key.clone())
                .or_default()
                .push(idx);
        }
        for labels in roster_by_team.values_mut() {
            labels.sort();
        }

        Self {
            players,
            roster_by_team,
            by_exact_name,
            by_normalized_name,
            stats,
        }
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn get(&self, idx: usize) -> Option<&PlayerRecord> {
        self.players.get(idx)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn roster_by_team(&self) -> &BTreeMap<String, Vec<String>> {
        &self.roster_by_team
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Indices whose raw name equals `name` exactly.
    pub fn exact_name_matches(&self, name: &str) -> &[usize] {
        self.by_exact_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Indices whose `normalize_name` equals `name_key`.
    pub fn normalized_name_matches(&self, name_key: &str) -> &[usize] {
        self.by_normalized_name
            .get(name_key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All names in roster order (autocomplete list).
    pub fn player_names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    /// Distinct canonical team names, sorted.
    pub fn team_names(&self) -> Vec<String> {
        let mut teams: Vec<String> = self
            .players
            .iter()
            .map(|p| p.team_key.clone())
            .filter(|t| !t.is_empty())
            .collect();
        teams.sort();
        teams.dedup();
        teams
    }
}
