use crate::models::{PlayerStatistics, ScoreRecord};
use crate::stats::aggregator::{aggregate, group_by_player};

/// `(win_rate / 100) * wins / average_attempts * 100`.
///
/// Rewards volume (wins) and efficiency (low average), scaled by win rate so a
/// player who rarely plays but always wins does not run away with it.
/// Zero whenever there is no win to average over.
pub fn ranking_score(stats: &PlayerStatistics) -> f64 {
    match (stats.win_rate, stats.average_attempts) {
        (Some(rate), Some(avg)) if stats.wins > 0 && avg > 0.0 => {
            (rate / 100.0) * stats.wins as f64 / avg * 100.0
        }
        _ => 0.0,
    }
}

/// Order by ranking score, highest first, and assign 1-based ranks.
///
/// Equal scores keep their incoming order.
pub fn rank_players(mut players: Vec<PlayerStatistics>) -> Vec<PlayerStatistics> {
    players.sort_by(|a, b| b.ranking_score.total_cmp(&a.ranking_score));
    for (i, p) in players.iter_mut().enumerate() {
        p.rank = i + 1;
    }
    players
}

/// Aggregate and rank every player present in `records`.
pub fn leaderboard(records: &[ScoreRecord]) -> Vec<PlayerStatistics> {
    let players = group_by_player(records)
        .into_iter()
        .map(|(name, rows)| aggregate(name, &rows))
        .collect();
    rank_players(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;
    use chrono::{NaiveDate, Utc};

    fn scored(player: &str, score: f64) -> PlayerStatistics {
        let mut p = PlayerStatistics::empty(player);
        p.ranking_score = score;
        p
    }

    fn rec(player: &str, puzzle: u32, attempts: Option<u8>) -> ScoreRecord {
        let outcome = attempts.map_or(Outcome::Failed, |n| Outcome::solved(n).unwrap());
        ScoreRecord::new(
            player,
            puzzle,
            outcome,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn higher_score_ranks_first() {
        let ranked = rank_players(vec![scored("A", 50.0), scored("B", 80.0)]);
        assert_eq!(ranked[0].player, "B");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].player, "A");
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank_players(vec![
            scored("first", 10.0),
            scored("top", 99.0),
            scored("second", 10.0),
            scored("third", 10.0),
        ]);
        let names: Vec<&str> = ranked.iter().map(|p| p.player.as_str()).collect();
        assert_eq!(names, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn score_formula() {
        // 3 wins / 4 games, avg 3.0 => 0.75 * 3 / 3 * 100 = 75
        let records = vec![
            rec("Alice", 1490, Some(3)),
            rec("Alice", 1491, Some(4)),
            rec("Alice", 1492, None),
            rec("Alice", 1493, Some(2)),
        ];
        let board = leaderboard(&records);
        assert!((board[0].ranking_score - 75.0).abs() < 1e-9);
    }

    #[test]
    fn zero_wins_scores_zero_and_wins_score_positive() {
        let records = vec![rec("Loser", 1, None), rec("Winner", 1, Some(6))];
        let board = leaderboard(&records);
        let loser = board.iter().find(|p| p.player == "Loser").unwrap();
        let winner = board.iter().find(|p| p.player == "Winner").unwrap();
        assert_eq!(loser.ranking_score, 0.0);
        assert!(winner.ranking_score > 0.0);
        assert_eq!(winner.rank, 1);
    }

    #[test]
    fn sample_data_ordering() {
        let mut records = Vec::new();
        for (i, a) in [3, 4, 2, 3, 4, 3].into_iter().enumerate() {
            records.push(rec("Alice", 1490 + i as u32, Some(a)));
        }
        for (i, a) in [4, 5, 3, 4, 6].into_iter().enumerate() {
            records.push(rec("Bob", 1490 + i as u32, Some(a)));
        }
        for (i, a) in [5, 4, 6].into_iter().enumerate() {
            records.push(rec("Charlie", 1493 + i as u32, Some(a)));
        }
        records.push(rec("Diana", 1495, Some(5)));

        let board = leaderboard(&records);
        let names: Vec<&str> = board.iter().map(|p| p.player.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Charlie", "Diana"]);
        assert_eq!(board.last().unwrap().rank, 4);
    }

    #[test]
    fn empty_snapshot_gives_empty_board() {
        assert!(leaderboard(&[]).is_empty());
    }
}
