mod cli;
mod config;
mod db;
mod ingest;
mod models;
mod stats;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::migrations::run_migrations;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    let db_path = config.db_path()?;
    AppConfig::ensure_db_dir(&db_path)?;
    debug!("Using database at {:?}", db_path);
    let conn = Connection::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;

    // Enable WAL mode for better concurrent access
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // Run migrations on every startup
    run_migrations(&conn)?;
    debug!("{} results stored", db::repository::ScoreRepo::count(&conn)?);

    match cli.command {
        Some(Commands::Record {
            player,
            message,
            date,
        }) => {
            handlers::handle_record(&conn, &player, &message, date.as_deref())?;
        }
        Some(Commands::Ingest { file, date }) => {
            handlers::handle_ingest(&conn, file.as_deref(), date.as_deref())?;
        }
        Some(Commands::Stats { week }) => {
            handlers::handle_stats(&conn, &config, week)?;
        }
        Some(Commands::Me { player }) => {
            handlers::handle_me(&conn, &config, &player)?;
        }
        Some(Commands::Export { week }) => {
            handlers::handle_export(&conn, &config, week)?;
        }
        Some(Commands::Seed { force }) => {
            handlers::handle_seed(&conn, force)?;
        }

        // No subcommand → launch TUI
        None => {
            tui::app::run(conn, config)?;
        }
    }

    Ok(())
}
