use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wordboard", version, author, about = "A terminal leaderboard for daily Wordle results")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a shared result, e.g. `wordboard record Alice "Wordle 1,495 3/6"`
    Record {
        /// Player name
        player: String,
        /// The shared message text
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
        /// Date the game belongs to (YYYY-MM-DD); defaults to today (UTC)
        #[arg(long)]
        date: Option<String>,
    },
    /// Import an exported chat log with one `Name: message` per line
    Ingest {
        /// File to read; stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,
        /// Attribute every imported game to this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the leaderboard
    Stats {
        /// Rank only this calendar week (Sunday to Saturday, UTC)
        #[arg(long)]
        week: bool,
    },
    /// Show one player's detailed statistics
    Me {
        /// Player name
        player: String,
    },
    /// Print the leaderboard as JSON to stdout
    Export {
        /// Export this calendar week instead of all time
        #[arg(long)]
        week: bool,
    },
    /// Load a small sample data set
    Seed {
        /// Insert again even if the sample was already loaded
        #[arg(long)]
        force: bool,
    },
}
