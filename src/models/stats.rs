use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::score::MAX_ATTEMPTS;

/// Derived per-player numbers. `None` means "no data" (e.g. no wins yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatistics {
    pub player: String,
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: Option<f64>,
    /// Index 0 holds wins in 1 attempt, index 5 wins in 6.
    pub attempt_distribution: [u32; MAX_ATTEMPTS as usize],
    pub average_attempts: Option<f64>,
    pub best_score: Option<u8>,
    pub worst_score: Option<u8>,
    pub current_streak: u32,
    pub max_streak: u32,
    pub ranking_score: f64,
    pub rank: usize,
}

impl PlayerStatistics {
    pub fn empty(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            total_games: 0,
            wins: 0,
            losses: 0,
            win_rate: None,
            attempt_distribution: [0; MAX_ATTEMPTS as usize],
            average_attempts: None,
            best_score: None,
            worst_score: None,
            current_streak: 0,
            max_streak: 0,
            ranking_score: 0.0,
            rank: 0,
        }
    }

    /// Wins recorded with the given attempt count (1..=6).
    pub fn wins_in(&self, attempts: u8) -> u32 {
        match attempts {
            1..=MAX_ATTEMPTS => self.attempt_distribution[(attempts - 1) as usize],
            _ => 0,
        }
    }
}

/// Games logged inside the trailing activity window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub since: NaiveDate,
    pub games: u32,
    pub active_players: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalSummary {
    pub total_players: u32,
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub overall_win_rate: Option<f64>,
    pub overall_average: Option<f64>,
    pub best_ever: Option<u8>,
    pub worst_ever: Option<u8>,
    /// Only filled for the all-time view.
    pub recent: Option<RecentActivity>,
}
