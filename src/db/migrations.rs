use anyhow::Result;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch("
        CREATE TABLE IF NOT EXISTS wordle_scores (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            sender_name  TEXT NOT NULL CHECK(length(trim(sender_name)) > 0),
            game_number  INTEGER NOT NULL CHECK(game_number > 0),
            attempts     INTEGER CHECK(attempts IS NULL OR attempts BETWEEN 1 AND 6),
            failed       INTEGER NOT NULL DEFAULT 0 CHECK(failed IN (0, 1)),
            date         TEXT NOT NULL,
            created_at   TEXT NOT NULL,
            CHECK((failed = 1 AND attempts IS NULL) OR (failed = 0 AND attempts IS NOT NULL))
        );

        CREATE INDEX IF NOT EXISTS idx_wordle_scores_sender ON wordle_scores(sender_name);
        CREATE INDEX IF NOT EXISTS idx_wordle_scores_date ON wordle_scores(date);

        CREATE TABLE IF NOT EXISTS app_meta (
            key   TEXT PRIMARY KEY,
            value TEXT
        );
    ")?;
    Ok(())
}
