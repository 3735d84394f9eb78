use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Connection;

use crate::db::repository::{MetaRepo, ScoreRepo};
use crate::models::{Outcome, ScoreRecord};

pub const SEEDED_KEY: &str = "sample_seeded";

/// (player, puzzle, attempts, date). `None` attempts is a failed game.
const SAMPLE: &[(&str, u32, Option<u8>, &str)] = &[
    // Alice - excellent player
    ("Alice", 1490, Some(3), "2025-01-15"),
    ("Alice", 1491, Some(4), "2025-01-16"),
    ("Alice", 1492, Some(2), "2025-01-17"),
    ("Alice", 1493, Some(3), "2025-01-18"),
    ("Alice", 1494, Some(4), "2025-01-19"),
    ("Alice", 1495, Some(3), "2025-01-20"),
    // Bob - good player
    ("Bob", 1490, Some(4), "2025-01-15"),
    ("Bob", 1491, Some(5), "2025-01-16"),
    ("Bob", 1492, Some(3), "2025-01-17"),
    ("Bob", 1493, Some(4), "2025-01-18"),
    ("Bob", 1494, Some(6), "2025-01-19"),
    // Charlie - average player
    ("Charlie", 1493, Some(5), "2025-01-18"),
    ("Charlie", 1494, None, "2025-01-19"),
    ("Charlie", 1495, Some(6), "2025-01-20"),
    // Diana - new player
    ("Diana", 1495, Some(5), "2025-01-20"),
];

/// Insert the sample rows. Returns how many were written; 0 if already seeded and not forced.
pub fn seed_sample(conn: &Connection, now: DateTime<Utc>, force: bool) -> Result<usize> {
    if !force && MetaRepo::get(conn, SEEDED_KEY)?.as_deref() == Some("1") {
        return Ok(0);
    }

    let tx = conn.unchecked_transaction()?;
    for (player, puzzle, attempts, date) in SAMPLE {
        let outcome = match attempts {
            Some(n) => Outcome::solved(*n)?,
            None => Outcome::Failed,
        };
        let occurred_on = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("Sample date {}", date))?;
        let record = ScoreRecord::new(*player, *puzzle, outcome, occurred_on, now)?;
        ScoreRepo::insert(&tx, &record)?;
    }
    MetaRepo::set(&tx, SEEDED_KEY, "1")?;
    tx.commit()?;
    Ok(SAMPLE.len())
}
