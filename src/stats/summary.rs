use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::{GlobalSummary, RecentActivity, ScoreRecord};
use crate::stats::aggregator::percentage;
use crate::stats::window::RollingWindow;

impl GlobalSummary {
    /// Cross-player totals over any record set (all-time or windowed).
    /// Best/worst ever stay `None`; only the all-time view fills them.
    pub fn compute(records: &[ScoreRecord]) -> Self {
        let players: HashSet<&str> = records.iter().map(|r| r.player.as_str()).collect();
        let attempts: Vec<u8> = records.iter().filter_map(|r| r.outcome.attempts()).collect();

        let total_games = records.len() as u32;
        let wins = attempts.len() as u32;
        let overall_average = if attempts.is_empty() {
            None
        } else {
            let sum: u32 = attempts.iter().map(|&a| a as u32).sum();
            Some(sum as f64 / attempts.len() as f64)
        };

        Self {
            total_players: players.len() as u32,
            total_games,
            wins,
            losses: total_games - wins,
            overall_win_rate: percentage(wins, total_games),
            overall_average,
            best_ever: None,
            worst_ever: None,
            recent: None,
        }
    }

    /// All-time view: totals, best/worst ever, and activity over the trailing rolling window.
    pub fn all_time(records: &[ScoreRecord], now: DateTime<Utc>, rolling: RollingWindow) -> Self {
        let mut summary = Self::compute(records);
        let attempts = records.iter().filter_map(|r| r.outcome.attempts());
        summary.best_ever = attempts.clone().min();
        summary.worst_ever = attempts.max();
        summary.recent = Some(RecentActivity::compute(records, now, rolling));
        summary
    }
}

impl RecentActivity {
    pub fn compute(records: &[ScoreRecord], now: DateTime<Utc>, rolling: RollingWindow) -> Self {
        let recent = rolling.select(records, now);
        let players: HashSet<&str> = recent.iter().map(|r| r.player.as_str()).collect();
        Self {
            since: rolling.since(now),
            games: recent.len() as u32,
            active_players: players.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;
    use chrono::{NaiveDate, TimeZone};

    fn rec(player: &str, attempts: Option<u8>, date: (i32, u32, u32)) -> ScoreRecord {
        let outcome = attempts.map_or(Outcome::Failed, |n| Outcome::solved(n).unwrap());
        ScoreRecord::new(
            player,
            1490,
            outcome,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn empty_set() {
        let summary = GlobalSummary::compute(&[]);
        assert_eq!(summary.total_games, 0);
        assert_eq!(summary.total_players, 0);
        assert_eq!(summary.overall_win_rate, None);
        assert_eq!(summary.overall_average, None);
        assert_eq!(summary.best_ever, None);
        assert!(summary.recent.is_none());
    }

    #[test]
    fn totals_across_players() {
        let records = vec![
            rec("Alice", Some(2), (2025, 1, 15)),
            rec("Alice", None, (2025, 1, 16)),
            rec("Bob", Some(5), (2025, 1, 16)),
            rec("Bob", Some(5), (2025, 1, 17)),
        ];
        let summary = GlobalSummary::compute(&records);
        assert_eq!(summary.best_ever, None);
        assert_eq!(summary.worst_ever, None);

        let summary = GlobalSummary::all_time(&records, Utc::now(), RollingWindow::default());
        assert_eq!(summary.total_players, 2);
        assert_eq!(summary.total_games, 4);
        assert_eq!(summary.wins, 3);
        assert_eq!(summary.losses, 1);
        assert_eq!(summary.overall_win_rate, Some(75.0));
        assert_eq!(summary.overall_average, Some(4.0));
        assert_eq!(summary.best_ever, Some(2));
        assert_eq!(summary.worst_ever, Some(5));
    }

    #[test]
    fn all_time_includes_recent_activity() {
        let now = Utc.with_ymd_and_hms(2025, 1, 20, 10, 0, 0).unwrap();
        let records = vec![
            rec("Alice", Some(3), (2025, 1, 2)),
            rec("Alice", Some(3), (2025, 1, 14)),
            rec("Bob", Some(4), (2025, 1, 19)),
            rec("Bob", None, (2025, 1, 20)),
        ];
        let summary = GlobalSummary::all_time(&records, now, RollingWindow::default());
        let recent = summary.recent.unwrap();
        assert_eq!(recent.games, 3);
        assert_eq!(recent.active_players, 2);
        assert_eq!(recent.since, NaiveDate::from_ymd_opt(2025, 1, 13).unwrap());
    }
}
