pub mod aggregator;
pub mod ranking;
pub mod summary;
pub mod window;

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

use crate::models::{GlobalSummary, PlayerStatistics, ScoreRecord};

pub use ranking::leaderboard;
pub use window::{CalendarWeek, RollingWindow};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum Scope {
    AllTime,
    Week {
        week: CalendarWeek,
        label: String,
    },
}

/// A ranked view over one snapshot of records, recomputed on every call.
#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard {
    pub scope: Scope,
    pub players: Vec<PlayerStatistics>,
    pub summary: GlobalSummary,
}

impl Leaderboard {
    pub fn all_time(records: &[ScoreRecord], now: DateTime<Utc>, rolling: RollingWindow) -> Self {
        Self {
            scope: Scope::AllTime,
            players: leaderboard(records),
            summary: GlobalSummary::all_time(records, now, rolling),
        }
    }

    /// Calendar week containing `now`, ranked independently of the all-time board.
    pub fn weekly(records: &[ScoreRecord], now: DateTime<Utc>) -> Self {
        let week = CalendarWeek::containing(now);
        let in_week = week.select(records);
        debug!(
            "Week {} to {}: {} of {} records",
            week.start_instant(),
            week.end_instant(),
            in_week.len(),
            records.len()
        );
        Self {
            scope: Scope::Week {
                week,
                label: week.label(),
            },
            players: leaderboard(&in_week),
            summary: GlobalSummary::compute(&in_week),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn find(&self, player: &str) -> Option<&PlayerStatistics> {
        self.players.iter().find(|p| p.player == player)
    }

    pub fn title(&self) -> String {
        match &self.scope {
            Scope::AllTime => "All time".to_string(),
            Scope::Week { label, .. } => format!("This week ({})", label),
        }
    }
}
