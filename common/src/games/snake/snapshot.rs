use crate::leaderboard::LeaderboardEntry;
use super::food::Food;
use super::types::{DeathReason, Direction, GameStatus, Point};

/// Read-only view of one frame. The snake is listed head first.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub grid_width: i32,
    pub grid_height: i32,
    pub snake: Vec<Point>,
    pub direction: Direction,
    pub primary_food: Option<Food>,
    pub bonus_foods: Vec<Food>,
    pub obstacles: Vec<Point>,
    pub score: i32,
    pub speed: f64,
    pub foods_eaten: u32,
    pub tick: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub initials: String,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }

    pub fn foods(&self) -> impl Iterator<Item = &Food> {
        self.primary_food.iter().chain(self.bonus_foods.iter())
    }
}
