use serde::{Deserialize, Serialize};

use super::board::{Leaderboard, LeaderboardEntry};
use super::initials::normalize_initials;

pub const LEGACY_INITIALS: &str = "AAA";

/// On-disk shape: `{"scores": [{"score": 12, "initials": "ABC"}, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardFile {
    #[serde(default)]
    pub scores: Vec<StoredEntry>,
}

/// Older files stored bare scores without initials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredEntry {
    Entry(LeaderboardEntry),
    Legacy(i32),
}

impl StoredEntry {
    pub fn into_entry(self) -> LeaderboardEntry {
        match self {
            StoredEntry::Entry(entry) => {
                let initials = normalize_initials(&entry.initials)
                    .unwrap_or_else(|_| LEGACY_INITIALS.to_string());
                LeaderboardEntry::new(initials, entry.score)
            }
            StoredEntry::Legacy(score) => LeaderboardEntry::new(LEGACY_INITIALS, score),
        }
    }
}

impl LeaderboardFile {
    pub fn from_leaderboard(board: &Leaderboard) -> Self {
        Self {
            scores: board
                .entries()
                .iter()
                .cloned()
                .map(StoredEntry::Entry)
                .collect(),
        }
    }

    pub fn into_leaderboard(self, capacity: usize) -> Leaderboard {
        let entries = self.scores.into_iter().map(StoredEntry::into_entry).collect();
        Leaderboard::from_entries(entries, capacity)
    }
}
