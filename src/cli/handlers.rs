use anyhow::{Context, Result, anyhow};
use chrono::{NaiveDate, Utc};
use log::info;
use rusqlite::Connection;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::config::AppConfig;
use crate::db::repository::ScoreRepo;
use crate::db::seed::seed_sample;
use crate::ingest::{ingest_lines, record_message};
use crate::models::PlayerStatistics;
use crate::stats::{Leaderboard, RollingWindow, Scope};
use crate::utils::format::{
    Performance, distribution_lines, format_average, format_ranking_score, format_rate,
    format_score, medal, truncate_name,
};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

const RECENT_GAMES: usize = 5;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| anyhow!("Bad date '{}' (expected YYYY-MM-DD): {}", s, e))
}

fn rolling_window(config: &AppConfig) -> RollingWindow {
    RollingWindow::new(config.activity.rolling_days)
}

/// Build the requested board from a fresh snapshot of the store.
pub fn load_leaderboard(conn: &Connection, config: &AppConfig, week: bool) -> Result<Leaderboard> {
    let records = ScoreRepo::all(conn)?;
    let now = Utc::now();
    Ok(if week {
        Leaderboard::weekly(&records, now)
    } else {
        Leaderboard::all_time(&records, now, rolling_window(config))
    })
}

// ─── Record ──────────────────────────────────────────────────────────────────

pub fn handle_record(
    conn: &Connection,
    player: &str,
    message: &[String],
    date: Option<&str>,
) -> Result<()> {
    let date = date.map(parse_date).transpose()?;
    let text = message.join(" ");

    match record_message(conn, player, &text, date, Utc::now())? {
        Some(record) => {
            let result = match record.outcome.attempts() {
                Some(n) => format!("{}/6", n),
                None => "X/6".to_string(),
            };
            println_colored!(
                GREEN,
                "  ✓ Wordle {} {} recorded for {}",
                record.puzzle_number,
                result,
                record.player
            );
        }
        None => {
            println_colored!(AMBER, "  No Wordle result found in that message");
        }
    }
    Ok(())
}

// ─── Ingest ──────────────────────────────────────────────────────────────────

pub fn handle_ingest(conn: &Connection, file: Option<&Path>, date: Option<&str>) -> Result<()> {
    let date = date.map(parse_date).transpose()?;
    let now = Utc::now();

    let report = match file {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("Opening {:?}", path))?;
            ingest_lines(conn, BufReader::new(f), date, now)?
        }
        None => ingest_lines(conn, io::stdin().lock(), date, now)?,
    };

    info!("Ingest finished: {:?}", report);
    println_colored!(
        GREEN,
        "  ✓ Recorded {} results  ·  skipped {} lines",
        report.recorded,
        report.skipped
    );
    Ok(())
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(conn: &Connection, config: &AppConfig, week: bool) -> Result<()> {
    let board = load_leaderboard(conn, config, week)?;
    print_leaderboard(&board, config);
    Ok(())
}

fn print_leaderboard(board: &Leaderboard, config: &AppConfig) {
    println!();
    println_colored!(GOLD, "  Wordle Leaderboard — {}", board.title());
    println!();

    if board.is_empty() {
        if week_scope(board) {
            println_colored!(DIM, "  No games this week yet. Send a Wordle score to get started.");
        } else {
            println_colored!(DIM, "  No games recorded yet! Send a Wordle score to get started.");
        }
        println!();
        return;
    }

    let s = &board.summary;
    println_colored!(BOLD, "  Overview");
    println!("  Players:       {}", s.total_players);
    println!(
        "  Games:         {} ({} ✓, {} ✗)",
        s.total_games, s.wins, s.losses
    );
    println!("  Average:       {}", format_average(s.overall_average));
    if s.best_ever.is_some() {
        println!("  Best ever:     {}", format_score(s.best_ever));
    }
    println!("  Success rate:  {}", format_rate(s.overall_win_rate));
    if let Some(recent) = &s.recent {
        println!(
            "  Recent:        {} games by {} players since {}",
            recent.games, recent.active_players, recent.since
        );
    }
    println!();

    println_colored!(BOLD, "  Rankings");
    for p in &board.players {
        let name = truncate_name(&p.player, config.display.name_width);
        println_colored!(GOLD, "  {:<4} {}", medal(p.rank), name);
        println!(
            "       {} games ({} ✓, {} ✗)  ·  avg {}  ·  {}  ·  best {}",
            p.total_games,
            p.wins,
            p.losses,
            format_average(p.average_attempts),
            format_rate(p.win_rate),
            format_score(p.best_score)
        );
        println_colored!(
            DIM,
            "       score {}  ·  streak {} (max {})",
            format_ranking_score(p.ranking_score),
            p.current_streak,
            p.max_streak
        );
    }
    println!();
    println_colored!(DIM, "  Ranking: win rate × wins ÷ average attempts");
    println!();
}

fn week_scope(board: &Leaderboard) -> bool {
    matches!(board.scope, Scope::Week { .. })
}

// ─── Personal stats ──────────────────────────────────────────────────────────

pub fn handle_me(conn: &Connection, config: &AppConfig, player: &str) -> Result<()> {
    let board = load_leaderboard(conn, config, false)?;
    let name = truncate_name(player, config.display.name_width);

    println!();
    println_colored!(GOLD, "  Personal Stats for {}", name);
    println!();

    let Some(stats) = board.find(player) else {
        println_colored!(DIM, "  No games recorded yet! Send a Wordle score to get started.");
        println!();
        return Ok(());
    };

    print_personal(stats, board.players.len(), config);

    let mut history = ScoreRepo::for_player(conn, player)?;
    history.sort_by(|a, b| {
        b.puzzle_number
            .cmp(&a.puzzle_number)
            .then(b.recorded_at.cmp(&a.recorded_at))
    });
    println_colored!(DIM, "  Recent games");
    for record in history.iter().take(RECENT_GAMES) {
        match record.outcome.attempts() {
            Some(n) => println_colored!(GREEN, "  #{:<6} {}/6  {}", record.puzzle_number, n, record.occurred_on),
            None => println_colored!(RED, "  #{:<6} X/6  {}", record.puzzle_number, record.occurred_on),
        }
    }
    println!();
    Ok(())
}

fn print_personal(stats: &PlayerStatistics, cohort: usize, config: &AppConfig) {
    println!("  Rank:           #{} of {}", stats.rank, cohort);
    println!(
        "  Games:          {} ({} ✓, {} ✗)",
        stats.total_games, stats.wins, stats.losses
    );
    println!("  Average:        {}", format_average(stats.average_attempts));
    println!(
        "  Best / worst:   {} / {}",
        format_score(stats.best_score),
        format_score(stats.worst_score)
    );
    println!("  Success rate:   {}", format_rate(stats.win_rate));
    println!(
        "  Streak:         {} current  |  {} best",
        stats.current_streak, stats.max_streak
    );
    println!(
        "  Ranking score:  {}",
        format_ranking_score(stats.ranking_score)
    );

    if config.display.show_distribution && stats.wins > 0 {
        println!();
        println_colored!(DIM, "  Guess distribution");
        for line in distribution_lines(stats, 12) {
            println!("  {}", line);
        }
    }

    println!();
    let verdict = Performance::assess(stats);
    let color = match verdict {
        Performance::Master | Performance::Excellent => GREEN,
        Performance::Solid | Performance::Improving => AMBER,
        Performance::Practicing => RED,
    };
    println_colored!(color, "  {}", verdict.message());
    println!();
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export(conn: &Connection, config: &AppConfig, week: bool) -> Result<()> {
    let board = load_leaderboard(conn, config, week)?;
    let json = serde_json::to_string_pretty(&board).context("Serializing leaderboard")?;
    println!("{}", json);
    Ok(())
}

// ─── Seed ────────────────────────────────────────────────────────────────────

pub fn handle_seed(conn: &Connection, force: bool) -> Result<()> {
    let inserted = seed_sample(conn, Utc::now(), force)?;
    if inserted == 0 {
        println!("Sample data already loaded. Use --force to insert it again.");
    } else {
        println_colored!(GREEN, "  ✓ Added {} sample Wordle scores", inserted);
        println_colored!(
            DIM,
            "  Players: Alice (6 games), Bob (5 games), Charlie (3 games), Diana (1 game)"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    #[test]
    fn dates_parse_strictly() {
        assert_eq!(
            parse_date(" 2025-01-20 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
        );
        assert!(parse_date("20/01/2025").is_err());
    }

    #[test]
    fn leaderboard_from_store() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        seed_sample(&conn, Utc::now(), false).unwrap();

        let board = load_leaderboard(&conn, &AppConfig::default(), false).unwrap();
        let names: Vec<&str> = board.players.iter().map(|p| p.player.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Charlie", "Diana"]);
        assert_eq!(board.summary.total_games, 15);
        assert!(board.summary.recent.is_some());
    }
}
