use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_ATTEMPTS: u8 = 6;

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("solved game is missing its attempt count")]
    MissingAttempts,

    #[error("attempt count {0} is outside 1..=6")]
    AttemptsOutOfRange(i64),

    #[error("failed game carries an attempt count ({0})")]
    UnexpectedAttempts(i64),

    #[error("player name is empty")]
    EmptyPlayer,

    #[error("puzzle number must be positive")]
    InvalidPuzzleNumber,
}

/// Number of guesses used on a solved puzzle. Always within 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Attempts(u8);

impl Attempts {
    pub fn new(value: u8) -> Result<Self, RecordError> {
        if (1..=MAX_ATTEMPTS).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RecordError::AttemptsOutOfRange(value as i64))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Attempts {
    type Error = RecordError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Attempts> for u8 {
    fn from(a: Attempts) -> u8 {
        a.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "outcome", content = "attempts")]
pub enum Outcome {
    Solved(Attempts),
    Failed,
}

impl Outcome {
    pub fn solved(attempts: u8) -> Result<Self, RecordError> {
        Ok(Outcome::Solved(Attempts::new(attempts)?))
    }

    /// Build an outcome from the storage representation (nullable attempts + failed flag).
    pub fn from_parts(attempts: Option<i64>, failed: bool) -> Result<Self, RecordError> {
        match (attempts, failed) {
            (None, true) => Ok(Outcome::Failed),
            (Some(n), true) => Err(RecordError::UnexpectedAttempts(n)),
            (None, false) => Err(RecordError::MissingAttempts),
            (Some(n), false) => {
                let n8 = u8::try_from(n).map_err(|_| RecordError::AttemptsOutOfRange(n))?;
                Outcome::solved(n8)
            }
        }
    }

    pub fn attempts(&self) -> Option<u8> {
        match self {
            Outcome::Solved(a) => Some(a.get()),
            Outcome::Failed => None,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub player: String,
    pub puzzle_number: u32,
    pub outcome: Outcome,
    pub occurred_on: NaiveDate,
    pub recorded_at: DateTime<Utc>,
}

impl ScoreRecord {
    pub fn new(
        player: impl Into<String>,
        puzzle_number: u32,
        outcome: Outcome,
        occurred_on: NaiveDate,
        recorded_at: DateTime<Utc>,
    ) -> Result<Self, RecordError> {
        let player = player.into();
        if player.trim().is_empty() {
            return Err(RecordError::EmptyPlayer);
        }
        if puzzle_number == 0 {
            return Err(RecordError::InvalidPuzzleNumber);
        }
        Ok(Self {
            player,
            puzzle_number,
            outcome,
            occurred_on,
            recorded_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_accepts_consistent_rows() {
        assert_eq!(Outcome::from_parts(None, true), Ok(Outcome::Failed));
        assert_eq!(Outcome::from_parts(Some(4), false).unwrap().attempts(), Some(4));
    }

    #[test]
    fn from_parts_rejects_malformed_rows() {
        assert_eq!(Outcome::from_parts(None, false), Err(RecordError::MissingAttempts));
        assert_eq!(
            Outcome::from_parts(Some(3), true),
            Err(RecordError::UnexpectedAttempts(3))
        );
        assert_eq!(
            Outcome::from_parts(Some(7), false),
            Err(RecordError::AttemptsOutOfRange(7))
        );
        assert_eq!(
            Outcome::from_parts(Some(0), false),
            Err(RecordError::AttemptsOutOfRange(0))
        );
        assert_eq!(
            Outcome::from_parts(Some(-2), false),
            Err(RecordError::AttemptsOutOfRange(-2))
        );
    }

    #[test]
    fn record_requires_player_and_puzzle() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let now = Utc::now();
        assert_eq!(
            ScoreRecord::new("  ", 1490, Outcome::Failed, date, now),
            Err(RecordError::EmptyPlayer)
        );
        assert_eq!(
            ScoreRecord::new("Alice", 0, Outcome::Failed, date, now),
            Err(RecordError::InvalidPuzzleNumber)
        );
    }

    #[test]
    fn attempts_deserialization_is_validated() {
        assert!(serde_json::from_str::<Attempts>("3").is_ok());
        assert!(serde_json::from_str::<Attempts>("9").is_err());
    }
}
