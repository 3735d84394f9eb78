pub mod score;
pub mod stats;

pub use score::{MAX_ATTEMPTS, Outcome, ScoreRecord};
pub use stats::{GlobalSummary, PlayerStatistics, RecentActivity};
