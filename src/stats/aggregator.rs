use crate::models::{PlayerStatistics, ScoreRecord};
use crate::stats::ranking::ranking_score;

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percentage of `part` in `whole`, one decimal. `None` when `whole` is zero.
pub fn percentage(part: u32, whole: u32) -> Option<f64> {
    if whole == 0 {
        None
    } else {
        Some(round1(part as f64 * 100.0 / whole as f64))
    }
}

/// Split a snapshot into per-player cohorts, in order of each player's first appearance.
pub fn group_by_player(records: &[ScoreRecord]) -> Vec<(&str, Vec<&ScoreRecord>)> {
    let mut groups: Vec<(&str, Vec<&ScoreRecord>)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(name, _)| *name == record.player) {
            Some((_, rows)) => rows.push(record),
            None => groups.push((record.player.as_str(), vec![record])),
        }
    }
    groups
}

/// Fold every record of a single player into their statistics. `rank` is left at 0.
pub fn aggregate(player: &str, records: &[&ScoreRecord]) -> PlayerStatistics {
    let mut stats = PlayerStatistics::empty(player);
    if records.is_empty() {
        return stats;
    }

    let win_attempts: Vec<u8> = records
        .iter()
        .filter_map(|r| r.outcome.attempts())
        .collect();

    stats.total_games = records.len() as u32;
    stats.wins = win_attempts.len() as u32;
    stats.losses = stats.total_games - stats.wins;
    stats.win_rate = percentage(stats.wins, stats.total_games);

    for &a in &win_attempts {
        stats.attempt_distribution[(a - 1) as usize] += 1;
    }

    if !win_attempts.is_empty() {
        let sum: u32 = win_attempts.iter().map(|&a| a as u32).sum();
        stats.average_attempts = Some(sum as f64 / win_attempts.len() as f64);
        stats.best_score = win_attempts.iter().copied().min();
        stats.worst_score = win_attempts.iter().copied().max();
    }

    let ordered = chronological(records);
    stats.max_streak = longest_win_run(&ordered);
    stats.current_streak = trailing_win_run(&ordered);

    stats.ranking_score = ranking_score(&stats);
    stats
}

/// Puzzle number ascending, ingestion time breaking ties. `sort_by` is stable.
fn chronological<'a>(records: &[&'a ScoreRecord]) -> Vec<&'a ScoreRecord> {
    let mut ordered = records.to_vec();
    ordered.sort_by(|a, b| {
        a.puzzle_number
            .cmp(&b.puzzle_number)
            .then(a.recorded_at.cmp(&b.recorded_at))
    });
    ordered
}

fn longest_win_run(ordered: &[&ScoreRecord]) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    for record in ordered {
        if record.outcome.is_win() {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

fn trailing_win_run(ordered: &[&ScoreRecord]) -> u32 {
    ordered
        .iter()
        .rev()
        .take_while(|r| r.outcome.is_win())
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    fn record(player: &str, puzzle: u32, attempts: Option<u8>, minute: i64) -> ScoreRecord {
        let outcome = match attempts {
            Some(n) => Outcome::solved(n).unwrap(),
            None => Outcome::Failed,
        };
        let base = Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap();
        ScoreRecord::new(
            player,
            puzzle,
            outcome,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            base + Duration::minutes(minute),
        )
        .unwrap()
    }

    fn refs(records: &[ScoreRecord]) -> Vec<&ScoreRecord> {
        records.iter().collect()
    }

    #[test]
    fn worked_example() {
        let records = vec![
            record("Alice", 1490, Some(3), 0),
            record("Alice", 1491, Some(4), 1),
            record("Alice", 1492, None, 2),
            record("Alice", 1493, Some(2), 3),
        ];
        let stats = aggregate("Alice", &refs(&records));

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.wins, 3);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.win_rate, Some(75.0));
        assert_eq!(stats.average_attempts, Some(3.0));
        assert_eq!(stats.best_score, Some(2));
        assert_eq!(stats.worst_score, Some(4));
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.attempt_distribution, [0, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn no_records_means_no_data() {
        let stats = aggregate("Nobody", &[]);
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.win_rate, None);
        assert_eq!(stats.average_attempts, None);
        assert_eq!(stats.best_score, None);
        assert_eq!(stats.worst_score, None);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 0);
        assert_eq!(stats.ranking_score, 0.0);
    }

    #[test]
    fn all_losses() {
        let records = vec![record("Bob", 1, None, 0), record("Bob", 2, None, 1)];
        let stats = aggregate("Bob", &refs(&records));
        assert_eq!(stats.win_rate, Some(0.0));
        assert_eq!(stats.average_attempts, None);
        assert_eq!(stats.max_streak, 0);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.attempt_distribution.iter().sum::<u32>(), 0);
    }

    #[test]
    fn streaks_follow_puzzle_order_not_input_order() {
        // Shuffled input: chronologically W W L W W W
        let records = vec![
            record("Cara", 105, Some(2), 0),
            record("Cara", 102, None, 1),
            record("Cara", 100, Some(4), 2),
            record("Cara", 104, Some(3), 3),
            record("Cara", 101, Some(5), 4),
            record("Cara", 103, Some(6), 5),
        ];
        let stats = aggregate("Cara", &refs(&records));
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn same_puzzle_ordered_by_recorded_at() {
        // Both rows are puzzle 10; the later submission is the loss.
        let records = vec![record("Dee", 10, None, 5), record("Dee", 10, Some(3), 1)];
        let stats = aggregate("Dee", &refs(&records));
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 1);
    }

    #[test]
    fn invariants_hold_on_mixed_history() {
        let records = vec![
            record("Eve", 1, Some(1), 0),
            record("Eve", 2, Some(6), 1),
            record("Eve", 3, None, 2),
            record("Eve", 4, Some(6), 3),
            record("Eve", 5, None, 4),
        ];
        let stats = aggregate("Eve", &refs(&records));
        assert_eq!(stats.wins + stats.losses, stats.total_games);
        assert_eq!(stats.attempt_distribution.iter().sum::<u32>(), stats.wins);
        assert!(stats.max_streak >= stats.current_streak);
        assert_eq!(stats.wins_in(6), 2);
    }

    #[test]
    fn win_rate_rounds_to_one_decimal() {
        let records = vec![
            record("Fin", 1, Some(3), 0),
            record("Fin", 2, None, 1),
            record("Fin", 3, None, 2),
        ];
        let stats = aggregate("Fin", &refs(&records));
        assert_eq!(stats.win_rate, Some(33.3));
    }

    #[test]
    fn groups_keep_first_appearance_order() {
        let records = vec![
            record("Bob", 1, Some(3), 0),
            record("Alice", 1, Some(3), 1),
            record("Bob", 2, Some(3), 2),
        ];
        let groups = group_by_player(&records);
        let names: Vec<&str> = groups.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
        assert_eq!(groups[0].1.len(), 2);
    }
}
