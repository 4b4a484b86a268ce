use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub score: i32,
    pub initials: String,
}

impl LeaderboardEntry {
    pub fn new(initials: impl Into<String>, score: i32) -> Self {
        Self {
            score,
            initials: initials.into(),
        }
    }
}

/// Top scores, best first, never more than `capacity` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    capacity: usize,
}

impl Leaderboard {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Sorts best first (stable, so stored order breaks ties) and drops
    /// whatever does not fit.
    pub fn from_entries(mut entries: Vec<LeaderboardEntry>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn min_score(&self) -> Option<i32> {
        self.entries.last().map(|entry| entry.score)
    }

    /// A free slot takes any score. A full board needs a score strictly above
    /// its lowest entry.
    pub fn qualifies(&self, score: i32) -> bool {
        if !self.is_full() {
            return true;
        }
        self.min_score().is_none_or(|min| score > min)
    }

    /// Inserts below any existing equal scores. Returns the zero-based rank,
    /// or `None` when the score does not qualify.
    pub fn insert(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        if !self.qualifies(entry.score) {
            return None;
        }
        let rank = self
            .entries
            .iter()
            .position(|existing| existing.score < entry.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(rank, entry);
        self.entries.truncate(self.capacity);
        Some(rank)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_board() -> Leaderboard {
        let mut board = Leaderboard::new(5);
        for (initials, score) in [("AAA", 50), ("BBB", 40), ("CCC", 30), ("DDD", 20), ("EEE", 10)] {
            board.insert(LeaderboardEntry::new(initials, score));
        }
        board
    }

    #[test]
    fn test_entries_sorted_descending() {
        let mut board = Leaderboard::new(5);
        for score in [3, 9, 1, 7] {
            board.insert(LeaderboardEntry::new("ZZZ", score));
        }
        let scores: Vec<i32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![9, 7, 3, 1]);
    }

    #[test]
    fn test_low_score_on_full_board_leaves_it_unchanged() {
        let mut board = full_board();
        let before = board.clone();
        assert!(!board.qualifies(5));
        assert_eq!(board.insert(LeaderboardEntry::new("LOW", 5)), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_tie_with_minimum_does_not_qualify() {
        let board = full_board();
        assert!(!board.qualifies(10));
        assert!(board.qualifies(11));
    }

    #[test]
    fn test_qualifying_score_displaces_lowest() {
        let mut board = full_board();
        assert_eq!(board.insert(LeaderboardEntry::new("NEW", 35)), Some(2));
        assert_eq!(board.len(), 5);
        assert_eq!(board.min_score(), Some(20));
        assert_eq!(board.entries()[2].initials, "NEW");
    }

    #[test]
    fn test_newer_entry_ranks_below_equal_score() {
        let mut board = full_board();
        assert_eq!(board.insert(LeaderboardEntry::new("TIE", 40)), Some(2));
        assert_eq!(board.entries()[1].initials, "BBB");
    }

    #[test]
    fn test_negative_score_qualifies_while_slots_are_free() {
        // Any score takes a free slot, negative ones included.
        let mut board = Leaderboard::new(5);
        assert!(board.qualifies(-3));
        assert_eq!(board.insert(LeaderboardEntry::new("NEG", -3)), Some(0));
    }

    #[test]
    fn test_from_entries_sorts_and_truncates() {
        let entries = (0..8).map(|i| LeaderboardEntry::new("ABC", i)).collect();
        let board = Leaderboard::from_entries(entries, 5);
        assert_eq!(board.len(), 5);
        assert_eq!(board.entries()[0].score, 7);
        assert_eq!(board.min_score(), Some(3));
    }

    #[test]
    fn test_clear() {
        let mut board = full_board();
        board.clear();
        assert!(board.is_empty());
        assert!(board.qualifies(0));
    }
}
