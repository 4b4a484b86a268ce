mod board;
mod file_format;
mod initials;
mod store;

pub use board::{Leaderboard, LeaderboardEntry};
pub use file_format::{LeaderboardFile, StoredEntry, LEGACY_INITIALS};
pub use initials::{normalize_initials, InitialsBuffer, InitialsError, INITIALS_LEN};
pub use store::LeaderboardStore;
