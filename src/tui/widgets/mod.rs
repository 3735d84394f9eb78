pub mod header;
pub mod leaderboard;
pub mod player;
pub mod statusbar;
pub mod summary;
