use std::collections::{HashSet, VecDeque};

use super::grid::Grid;
use super::types::Point;

/// Every cell reachable from `start` through 4-connected cells not in
/// `blocked`. The start cell itself is always included.
pub fn reachable_cells(grid: &Grid, start: Point, blocked: &HashSet<Point>) -> HashSet<Point> {
    let mut visited = HashSet::with_capacity(grid.cell_count());
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        for next in grid.neighbors(cell) {
            if blocked.contains(&next) || !visited.insert(next) {
                continue;
            }
            queue.push_back(next);
        }
    }

    visited
}

/// Breadth-first search from `start` to `target`, stopping early once the
/// target is visited.
pub fn is_reachable(grid: &Grid, start: Point, target: Point, blocked: &HashSet<Point>) -> bool {
    if start == target {
        return true;
    }
    if blocked.contains(&target) || !grid.in_bounds(target) {
        return false;
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        for next in grid.neighbors(cell) {
            if next == target {
                return true;
            }
            if blocked.contains(&next) || !visited.insert(next) {
                continue;
            }
            queue.push_back(next);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::types::WallCollisionMode;

    fn wall_column(x: i32, height: i32) -> HashSet<Point> {
        (0..height).map(|y| Point::new(x, y)).collect()
    }

    #[test]
    fn test_open_grid_is_fully_reachable() {
        let grid = Grid::new(10, 10, WallCollisionMode::Death);
        let cells = reachable_cells(&grid, Point::new(0, 0), &HashSet::new());
        assert_eq!(cells.len(), 100);
        assert!(is_reachable(&grid, Point::new(0, 0), Point::new(9, 9), &HashSet::new()));
    }

    #[test]
    fn test_full_wall_splits_grid() {
        let grid = Grid::new(10, 10, WallCollisionMode::Death);
        let blocked = wall_column(5, 10);
        assert!(!is_reachable(&grid, Point::new(0, 0), Point::new(9, 0), &blocked));
        assert_eq!(reachable_cells(&grid, Point::new(0, 0), &blocked).len(), 50);
    }

    #[test]
    fn test_gap_in_wall_keeps_path() {
        let grid = Grid::new(10, 10, WallCollisionMode::Death);
        let mut blocked = wall_column(5, 10);
        blocked.remove(&Point::new(5, 7));
        assert!(is_reachable(&grid, Point::new(0, 0), Point::new(9, 0), &blocked));
    }

    #[test]
    fn test_wrap_around_goes_past_the_wall() {
        let grid = Grid::new(10, 10, WallCollisionMode::WrapAround);
        let blocked = wall_column(5, 10);
        assert!(is_reachable(&grid, Point::new(0, 0), Point::new(9, 0), &blocked));
    }

    #[test]
    fn test_blocked_target_is_unreachable() {
        let grid = Grid::new(10, 10, WallCollisionMode::Death);
        let blocked: HashSet<Point> = [Point::new(3, 3)].into_iter().collect();
        assert!(!is_reachable(&grid, Point::new(0, 0), Point::new(3, 3), &blocked));
    }
}
