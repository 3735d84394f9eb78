pub mod parser;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info};
use rusqlite::Connection;
use std::io::BufRead;

use crate::db::repository::ScoreRepo;
use crate::models::ScoreRecord;

pub use parser::parse_message;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub recorded: u32,
    pub skipped: u32,
}

/// Parse one message from `player` and store it. `None` when the message holds no result.
///
/// `date` defaults to the UTC calendar date of `now`.
pub fn record_message(
    conn: &Connection,
    player: &str,
    message: &str,
    date: Option<NaiveDate>,
    now: DateTime<Utc>,
) -> Result<Option<ScoreRecord>> {
    let Some(parsed) = parse_message(message) else {
        debug!("No puzzle result in message from {}", player);
        return Ok(None);
    };

    let record = ScoreRecord::new(
        player.trim(),
        parsed.puzzle_number,
        parsed.outcome,
        date.unwrap_or_else(|| now.date_naive()),
        now,
    )?;
    ScoreRepo::insert(conn, &record)?;
    info!(
        "Recorded puzzle {} for {} ({:?})",
        record.puzzle_number,
        record.player,
        record.outcome.attempts()
    );
    Ok(Some(record))
}

/// Split an exported chat line `Name: message` into sender and text.
pub fn split_chat_line(line: &str) -> Option<(&str, &str)> {
    let (sender, text) = line.split_once(':')?;
    let sender = sender.trim();
    if sender.is_empty() {
        return None;
    }
    Some((sender, text.trim()))
}

/// Ingest every `Name: message` line from a reader.
pub fn ingest_lines<R: BufRead>(
    conn: &Connection,
    reader: R,
    date: Option<NaiveDate>,
    now: DateTime<Utc>,
) -> Result<IngestReport> {
    let mut report = IngestReport::default();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let recorded = match split_chat_line(&line) {
            Some((sender, text)) => record_message(conn, sender, text, date, now)?.is_some(),
            None => false,
        };
        if recorded {
            report.recorded += 1;
        } else {
            debug!("Skipped line: {}", line);
            report.skipped += 1;
        }
    }
    Ok(report)
}
