use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::PlayerStatistics;

const ELLIPSIS: &str = "...";

/// Medal for the podium, "N." for everyone else.
pub fn medal(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("{}.", n),
    }
}

/// Cut a display name to `max_width` terminal columns, ending in "..." when cut.
pub fn truncate_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }
    let budget = max_width.saturating_sub(ELLIPSIS.len());
    let mut out = String::new();
    let mut used = 0;
    for c in name.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

/// Percentage with one decimal, or "N/A".
pub fn format_rate(rate: Option<f64>) -> String {
    rate.map(|r| format!("{:.1}%", r))
        .unwrap_or_else(|| "N/A".to_string())
}

/// Average attempts with two decimals, or "N/A".
pub fn format_average(avg: Option<f64>) -> String {
    avg.map(|a| format!("{:.2}", a))
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn format_score(score: Option<u8>) -> String {
    score
        .map(|s| s.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn format_ranking_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// One line per attempt count, bars scaled to the most common count.
pub fn distribution_lines(stats: &PlayerStatistics, width: usize) -> Vec<String> {
    let peak = stats.attempt_distribution.iter().copied().max().unwrap_or(0);
    stats
        .attempt_distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| format!("{} {} {}", i + 1, progress_bar(count, peak, width), count))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Performance {
    Master,
    Excellent,
    Solid,
    Improving,
    Practicing,
}

impl Performance {
    /// Tier from average attempts and win rate. No wins means no average, which never
    /// qualifies for the average-gated tiers.
    pub fn assess(stats: &PlayerStatistics) -> Self {
        let rate = stats.win_rate.unwrap_or(0.0);
        match stats.average_attempts {
            Some(avg) if avg <= 3.5 && rate >= 95.0 => Performance::Master,
            Some(avg) if avg <= 4.0 && rate >= 90.0 => Performance::Excellent,
            Some(avg) if avg <= 4.5 && rate >= 80.0 => Performance::Solid,
            _ if rate >= 70.0 => Performance::Improving,
            _ => Performance::Practicing,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Performance::Master => "🔥 Wordle Master! You're absolutely crushing it!",
            Performance::Excellent => "⭐ Excellent Player! Consistently great performance!",
            Performance::Solid => "👍 Solid Player! Good consistent results!",
            Performance::Improving => "📈 Getting Better! Keep up the good work!",
            Performance::Practicing => "💪 Keep Practicing! Every game makes you better!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medals() {
        assert_eq!(medal(1), "🥇");
        assert_eq!(medal(3), "🥉");
        assert_eq!(medal(4), "4.");
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate_name("Alice", 15), "Alice");
        assert_eq!(truncate_name("Bartholomew Featherstonehaugh", 15), "Bartholomew ...");
        assert_eq!(truncate_name("Bartholomew Featherstonehaugh", 15).width(), 15);
        // Wide characters count double.
        assert_eq!(truncate_name("山田太郎山田太郎", 9), "山田太...");
    }

    #[test]
    fn undefined_values_render_na() {
        assert_eq!(format_rate(None), "N/A");
        assert_eq!(format_rate(Some(75.0)), "75.0%");
        assert_eq!(format_average(Some(3.16666)), "3.17");
        assert_eq!(format_score(None), "N/A");
    }

    #[test]
    fn bars() {
        assert_eq!(progress_bar(0, 0, 4), "░░░░");
        assert_eq!(progress_bar(2, 4, 4), "██░░");
        assert_eq!(progress_bar(9, 4, 4), "████");
    }

    #[test]
    fn performance_tiers() {
        let mut s = PlayerStatistics::empty("x");
        assert_eq!(Performance::assess(&s), Performance::Practicing);

        s.win_rate = Some(100.0);
        s.average_attempts = Some(3.2);
        assert_eq!(Performance::assess(&s), Performance::Master);

        s.average_attempts = Some(4.0);
        s.win_rate = Some(92.0);
        assert_eq!(Performance::assess(&s), Performance::Excellent);

        s.average_attempts = Some(4.4);
        s.win_rate = Some(85.0);
        assert_eq!(Performance::assess(&s), Performance::Solid);

        s.average_attempts = Some(5.0);
        s.win_rate = Some(75.0);
        assert_eq!(Performance::assess(&s), Performance::Improving);

        s.average_attempts = None;
        s.win_rate = Some(0.0);
        assert_eq!(Performance::assess(&s), Performance::Practicing);
    }
}
