//! Roster CSV loader
//!
//! CSV (header row) → `Vec<PlayerRecord>`.
//! 헤더 이름으로 컬럼을 찾는다. 컬럼이 없으면 빈 문자열로 채우고, 모든 값은 trim 한다. 깨진 행은 건너뛰고 통계에 남긴다.

use crate::error::Result;
use crate::models::{PlayerRecord, PlayerRow, PLAYER_COLUMNS};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// CSV parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
    /// Expected columns absent from the header (filled with `""`)
    pub missing_columns: Vec<String>,
}

/// Parse roster CSV from a file path.
pub fn load_csv_path(csv_path: &Path) -> Result<(Vec<PlayerRecord>, ParseStats)> {
    info!("Loading roster CSV: {}", csv_path.display());
    let file = std::fs::File::open(csv_path)?;
    load_csv_reader(file)
}

/// Parse roster CSV from any reader.
///
/// Only an unreadable header is fatal; bad rows are counted in
/// [`ParseStats::failed`] and skipped.
pub fn load_csv_reader<R: Read>(source: R) -> Result<(Vec<PlayerRecord>, ParseStats)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers = strip_bom(reader.headers()?);

    let mut stats = ParseStats {
        missing_columns: PLAYER_COLUMNS
            .iter()
            .filter(|column| !headers.iter().any(|h| h == **column))
            .map(|column| column.to_string())
            .collect(),
        ..Default::default()
    };
    if !stats.missing_columns.is_empty() {
        debug!(
            "Roster CSV missing columns (defaulted to empty): {:?}",
            stats.missing_columns
        );
    }

    let columns = ColumnIndex::new(&headers);
    let mut players = Vec::new();
    for result in reader.records() {
        stats.total_rows += 1;
        match result {
            Ok(record) => {
                players.push(PlayerRecord::from(columns.row(&record)));
                stats.parsed += 1;
            }
            Err(e) => {
                stats.failed += 1;
                warn!("Line {} - CSV parse error: {}", stats.total_rows, e);
            }
        }
    }

    info!(
        "Parsed {} players (failed: {}, total rows: {})",
        stats.parsed, stats.failed, stats.total_rows
    );
    Ok((players, stats))
}

/// Header position of each known column. Absent columns and short rows read as `""`.
struct ColumnIndex {
    positions: Vec<(&'static str, Option<usize>)>,
}

impl ColumnIndex {
    fn new(headers: &StringRecord) -> Self {
        let positions = PLAYER_COLUMNS
            .iter()
            .chain(std::iter::once(&"age"))
            .map(|column| (*column, headers.iter().position(|h| h == *column)))
            .collect();
        Self { positions }
    }

    fn get<'r>(&self, record: &'r StringRecord, column: &str) -> &'r str {
        self.positions
            .iter()
            .find(|(name, _)| *name == column)
            .and_then(|(_, idx)| idx.and_then(|i| record.get(i)))
            .unwrap_or("")
    }

    fn row(&self, record: &StringRecord) -> PlayerRow {
        let field = |column: &str| self.get(record, column).to_string();
        PlayerRow {
            name: field("name"),
            team: field("team"),
            number: field("number"),
            position: field("position"),
            height_cm: field("height_cm"),
            birth_year: field("birth_year"),
            age: field("age"),
            player_type: field("player_type"),
            draft_year: field("draft_year"),
            draft_type: field("draft_type"),
            draft_round: field("draft_round"),
            draft_overall: field("draft_overall"),
        }
    }
}

fn strip_bom(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim())
        .collect()
}
