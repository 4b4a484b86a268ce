use std::collections::HashSet;

use crate::games::GameRng;
use super::grid::Grid;
use super::reachability::is_reachable;
use super::settings::GameSettings;
use super::types::Point;

#[derive(Clone, Debug)]
pub struct ObstacleSpawner {
    enabled: bool,
    every_n_foods: u32,
    max_obstacles: usize,
    spawn_attempts: u32,
}

/// What the obstacle spawner needs to know about the board.
pub struct Board<'a> {
    pub grid: &'a Grid,
    pub head: Point,
    pub snake: &'a HashSet<Point>,
    pub foods: &'a HashSet<Point>,
    pub primary_food: Option<Point>,
}

impl ObstacleSpawner {
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self {
            enabled: settings.features.progressive_obstacles,
            every_n_foods: settings.obstacles.every_n_foods.max(1),
            max_obstacles: settings.obstacles.max_obstacles as usize,
            spawn_attempts: settings.obstacles.spawn_attempts,
        }
    }

    pub fn should_spawn(&self, foods_eaten: u32, obstacle_count: usize) -> bool {
        self.enabled
            && foods_eaten > 0
            && foods_eaten % self.every_n_foods == 0
            && obstacle_count < self.max_obstacles
    }

    /// Draws up to `spawn_attempts` candidates and returns the first one that
    /// keeps the primary food reachable from the head. Nothing is committed;
    /// the caller inserts the returned cell.
    pub fn try_place(
        &self,
        board: &Board<'_>,
        obstacles: &HashSet<Point>,
        rng: &mut GameRng,
    ) -> Option<Point> {
        let free = |cell: &Point| {
            !board.snake.contains(cell) && !board.foods.contains(cell) && !obstacles.contains(cell)
        };

        for _ in 0..self.spawn_attempts {
            let candidate = board.grid.random_cell_where(free, rng)?;
            let Some(food) = board.primary_food else {
                return Some(candidate);
            };

            let mut blocked: HashSet<Point> = obstacles.clone();
            blocked.insert(candidate);
            blocked.extend(board.snake.iter().copied().filter(|cell| *cell != board.head));
            if is_reachable(board.grid, board.head, food, &blocked) {
                return Some(candidate);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::types::WallCollisionMode;

    fn spawner() -> ObstacleSpawner {
        ObstacleSpawner::from_settings(&GameSettings::new())
    }

    #[test]
    fn test_cadence_and_cap() {
        let spawner = spawner();
        assert!(!spawner.should_spawn(0, 0));
        assert!(!spawner.should_spawn(2, 0));
        assert!(spawner.should_spawn(3, 0));
        assert!(spawner.should_spawn(6, 39));
        assert!(!spawner.should_spawn(6, 40));
    }

    #[test]
    fn test_disabled_spawner_never_fires() {
        let mut settings = GameSettings::new();
        settings.features.progressive_obstacles = false;
        let spawner = ObstacleSpawner::from_settings(&settings);
        assert!(!spawner.should_spawn(3, 0));
    }

    #[test]
    fn test_placement_avoids_snake_and_food() {
        let grid = Grid::new(6, 6, WallCollisionMode::Death);
        let snake: HashSet<Point> = [Point::new(0, 0), Point::new(1, 0)].into_iter().collect();
        let foods: HashSet<Point> = [Point::new(5, 5)].into_iter().collect();
        let board = Board {
            grid: &grid,
            head: Point::new(0, 0),
            snake: &snake,
            foods: &foods,
            primary_food: Some(Point::new(5, 5)),
        };
        let mut rng = GameRng::new(21);
        let mut obstacles = HashSet::new();
        for _ in 0..10 {
            let cell = spawner().try_place(&board, &obstacles, &mut rng).unwrap();
            assert!(!snake.contains(&cell));
            assert!(!foods.contains(&cell));
            obstacles.insert(cell);
        }
    }

    #[test]
    fn test_placement_never_cuts_off_food() {
        // Food in the corner with a single open neighbour; that neighbour must
        // never be chosen.
        let grid = Grid::new(5, 5, WallCollisionMode::Death);
        let snake: HashSet<Point> = [Point::new(0, 0)].into_iter().collect();
        let foods: HashSet<Point> = [Point::new(4, 4)].into_iter().collect();
        let mut obstacles: HashSet<Point> = [Point::new(3, 4)].into_iter().collect();
        let board = Board {
            grid: &grid,
            head: Point::new(0, 0),
            snake: &snake,
            foods: &foods,
            primary_food: Some(Point::new(4, 4)),
        };
        let spawner = ObstacleSpawner {
            enabled: true,
            every_n_foods: 1,
            max_obstacles: 100,
            spawn_attempts: 200,
        };
        let mut rng = GameRng::new(4);
        for _ in 0..12 {
            let Some(cell) = spawner.try_place(&board, &obstacles, &mut rng) else {
                break;
            };
            assert_ne!(cell, Point::new(4, 3));
            obstacles.insert(cell);
            assert!(is_reachable(&grid, board.head, Point::new(4, 4), &obstacles));
        }
    }

    #[test]
    fn test_full_board_skips_placement() {
        let grid = Grid::new(5, 5, WallCollisionMode::Death);
        let snake: HashSet<Point> = grid.cells().collect();
        let foods = HashSet::new();
        let board = Board {
            grid: &grid,
            head: Point::new(0, 0),
            snake: &snake,
            foods: &foods,
            primary_food: None,
        };
        let mut rng = GameRng::new(8);
        assert_eq!(spawner().try_place(&board, &HashSet::new(), &mut rng), None);
    }
}
