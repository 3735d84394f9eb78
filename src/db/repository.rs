use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use rusqlite::{Connection, OptionalExtension, params};

use crate::models::{Outcome, ScoreRecord};

const DATE_FMT: &str = "%Y-%m-%d";

/// Raw column values of one `wordle_scores` row.
type ScoreRow = (String, i64, Option<i64>, bool, String, String);

const SELECT_SCORES: &str = "SELECT sender_name, game_number, attempts, failed, date, created_at
                             FROM wordle_scores";

// ─── Score repo ──────────────────────────────────────────────────────────────

pub struct ScoreRepo;

impl ScoreRepo {
    pub fn insert(conn: &Connection, record: &ScoreRecord) -> Result<i64> {
        conn.execute(
            "INSERT INTO wordle_scores (sender_name, game_number, attempts, failed, date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.player,
                record.puzzle_number,
                record.outcome.attempts(),
                !record.outcome.is_win(),
                record.occurred_on.format(DATE_FMT).to_string(),
                record.recorded_at.to_rfc3339(),
            ],
        )
        .with_context(|| {
            format!(
                "Saving puzzle {} for {}",
                record.puzzle_number, record.player
            )
        })?;
        Ok(conn.last_insert_rowid())
    }

    /// Every stored record, in insertion order.
    pub fn all(conn: &Connection) -> Result<Vec<ScoreRecord>> {
        let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_SCORES))?;
        let rows = stmt.query_map([], read_row)?;
        let records = rows
            .map(|r| decode_row(r?))
            .collect::<Result<Vec<_>>>()?;
        debug!("Loaded {} results", records.len());
        Ok(records)
    }

    pub fn for_player(conn: &Connection, player: &str) -> Result<Vec<ScoreRecord>> {
        let mut stmt = conn.prepare(&format!(
            "{} WHERE sender_name = ?1 ORDER BY id",
            SELECT_SCORES
        ))?;
        let rows = stmt.query_map(params![player], read_row)?;
        let records = rows
            .map(|r| decode_row(r?))
            .collect::<Result<Vec<_>>>()?;
        Ok(records)
    }

    pub fn count(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM wordle_scores", [], |row| row.get(0))
            .map_err(anyhow::Error::from)
    }
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ScoreRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}

/// Turn stored columns back into a validated record. Malformed rows are an error, never coerced.
fn decode_row(row: ScoreRow) -> Result<ScoreRecord> {
    let (player, game_number, attempts, failed, date, created_at) = row;

    let outcome = Outcome::from_parts(attempts, failed)
        .with_context(|| format!("Bad score row for {} (puzzle {})", player, game_number))?;
    let puzzle_number = u32::try_from(game_number)
        .map_err(|_| anyhow!("Bad puzzle number {} for {}", game_number, player))?;
    let occurred_on = NaiveDate::parse_from_str(&date, DATE_FMT)
        .map_err(|e| anyhow!("Bad date '{}': {}", date, e))?;
    let recorded_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| anyhow!("Bad timestamp '{}': {}", created_at, e))?
        .with_timezone(&Utc);

    ScoreRecord::new(player, puzzle_number, outcome, occurred_on, recorded_at)
        .map_err(anyhow::Error::from)
}

// ─── App meta ────────────────────────────────────────────────────────────────

pub struct MetaRepo;

impl MetaRepo {
    pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
        conn.query_row(
            "SELECT value FROM app_meta WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(anyhow::Error::from)
    }

    pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO app_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }
}
