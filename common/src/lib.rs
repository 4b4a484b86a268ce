pub mod config;
pub mod games;
pub mod leaderboard;
pub mod logger;
