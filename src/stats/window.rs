use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ScoreRecord;

/// Sunday-to-Saturday calendar week, computed in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWeek {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CalendarWeek {
    /// The week containing `now`.
    pub fn containing(now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let offset = today.weekday().num_days_from_sunday() as i64;
        let start = today - Duration::days(offset);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    /// Sunday 00:00:00.000 UTC.
    pub fn start_instant(&self) -> DateTime<Utc> {
        self.start.and_time(NaiveTime::MIN).and_utc()
    }

    /// Saturday 23:59:59.999 UTC.
    pub fn end_instant(&self) -> DateTime<Utc> {
        (self.end + Duration::days(1)).and_time(NaiveTime::MIN).and_utc() - Duration::milliseconds(1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn select(&self, records: &[ScoreRecord]) -> Vec<ScoreRecord> {
        records
            .iter()
            .filter(|r| self.contains(r.occurred_on))
            .cloned()
            .collect()
    }

    /// e.g. "Jan 12 - Jan 18, 2025"
    pub fn label(&self) -> String {
        format!(
            "{} - {}, {}",
            self.start.format("%b %-d"),
            self.end.format("%b %-d"),
            self.end.year()
        )
    }
}

pub const DEFAULT_ROLLING_DAYS: u32 = 7;

/// Trailing window of `days` measured back from now; not aligned to any weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingWindow {
    pub days: u32,
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_ROLLING_DAYS,
        }
    }
}

impl RollingWindow {
    pub fn new(days: u32) -> Self {
        Self { days }
    }

    /// First calendar date included when evaluated at `now`. Saturates at `NaiveDate::MIN`.
    pub fn since(&self, now: DateTime<Utc>) -> NaiveDate {
        now.date_naive()
            .checked_sub_days(Days::new(u64::from(self.days)))
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn select<'a>(&self, records: &'a [ScoreRecord], now: DateTime<Utc>) -> Vec<&'a ScoreRecord> {
        let since = self.since(now);
        records.iter().filter(|r| r.occurred_on >= since).collect()
    }
}
