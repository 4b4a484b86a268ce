use crate::leaderboard::LeaderboardEntry;
use super::food::FoodKind;
use super::types::{DeathReason, Direction, GameStatus, Point};

/// Player intents the state machine understands. Anything the front end
/// cannot map to one of these is dropped before it gets here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameInput {
    Turn(Direction),
    TogglePause,
    Restart,
    ResetLeaderboard,
    Letter(char),
    Backspace,
    Enter,
}

/// Notifications for renderers and sound cues.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    FoodEaten {
        kind: FoodKind,
        position: Point,
        bonus: bool,
        score: i32,
    },
    BonusFoodsSpawned {
        count: usize,
    },
    ObstaclePlaced {
        position: Point,
    },
    Collision {
        reason: DeathReason,
        position: Point,
    },
    GameOver {
        score: i32,
        qualifies: bool,
    },
    StatusChanged {
        from: GameStatus,
        to: GameStatus,
    },
    LeaderboardUpdated {
        rank: usize,
        entry: LeaderboardEntry,
    },
    LeaderboardReset,
    Restarted,
}

impl GameEvent {
    /// Whether the stored leaderboard must be rewritten after this event.
    pub fn changes_leaderboard(&self) -> bool {
        matches!(
            self,
            GameEvent::LeaderboardUpdated { .. } | GameEvent::LeaderboardReset
        )
    }
}
