use std::collections::HashSet;

use crate::games::GameRng;
use super::types::{Direction, Point, WallCollisionMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    wall_collision_mode: WallCollisionMode,
}

impl Grid {
    pub fn new(width: u32, height: u32, wall_collision_mode: WallCollisionMode) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
            wall_collision_mode,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    pub fn wall_collision_mode(&self) -> WallCollisionMode {
        self.wall_collision_mode
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    pub fn in_bounds(&self, cell: Point) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// The cell one step from `from`, or `None` when the step leaves a walled grid.
    pub fn step(&self, from: Point, direction: Direction) -> Option<Point> {
        let next = from.offset(direction);
        match self.wall_collision_mode {
            WallCollisionMode::Death => self.in_bounds(next).then_some(next),
            WallCollisionMode::WrapAround => Some(Point::new(
                next.x.rem_euclid(self.width),
                next.y.rem_euclid(self.height),
            )),
        }
    }

    pub fn neighbors(&self, cell: Point) -> impl Iterator<Item = Point> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.step(cell, direction))
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }

    /// Uniformly picks a cell not in `excluding`; `None` when the grid is full.
    pub fn random_empty_cell(&self, excluding: &HashSet<Point>, rng: &mut GameRng) -> Option<Point> {
        self.random_cell_where(|cell| !excluding.contains(cell), rng)
    }

    pub fn random_cell_where<F>(&self, accept: F, rng: &mut GameRng) -> Option<Point>
    where
        F: Fn(&Point) -> bool,
    {
        let candidates: Vec<Point> = self.cells().filter(|cell| accept(cell)).collect();
        rng.choose_index(candidates.len()).map(|index| candidates[index])
    }
}
