use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

const MAX_QUEUED_TURNS: usize = 2;

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
    direction: Direction,
    queued_turns: VecDeque<Direction>,
    min_len: usize,
}

impl Snake {
    pub fn new(start_pos: Point, direction: Direction, min_len: usize) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        body.push_back(start_pos);
        body_set.insert(start_pos);

        Self {
            body,
            body_set,
            direction,
            queued_turns: VecDeque::new(),
            min_len: min_len.max(1),
        }
    }

    /// Builds a snake from explicit cells, head first.
    pub fn from_cells(cells: &[Point], direction: Direction, min_len: usize) -> Option<Self> {
        let (&head, rest) = cells.split_first()?;
        let mut snake = Self::new(head, direction, min_len);
        for &cell in rest {
            snake.body.push_back(cell);
            snake.body_set.insert(cell);
        }
        Some(snake)
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn cells(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn occupied(&self) -> &HashSet<Point> {
        &self.body_set
    }

    pub fn contains(&self, cell: &Point) -> bool {
        self.body_set.contains(cell)
    }

    pub fn peek_next_head(&self, direction: Direction) -> Point {
        self.head().offset(direction)
    }

    /// Whether moving the head onto `next_head` hits the body. When the snake
    /// is not growing its tail moves away this tick, so the tail cell is free.
    pub fn would_collide(&self, next_head: Point, growing: bool) -> bool {
        if !self.body_set.contains(&next_head) {
            return false;
        }
        growing || next_head != self.tail()
    }

    pub fn advance(&mut self, direction: Direction, grow: bool) {
        let next_head = self.peek_next_head(direction);
        self.advance_to(next_head, grow);
    }

    /// Moves the head onto `next_head`, which the caller has already resolved
    /// against the grid (wrap-around lands here).
    pub fn advance_to(&mut self, next_head: Point, grow: bool) {
        if !grow
            && let Some(tail) = self.body.pop_back()
        {
            self.body_set.remove(&tail);
        }
        self.body.push_front(next_head);
        self.body_set.insert(next_head);
    }

    /// Removes up to `by` tail cells without going below the minimum length.
    /// Returns the number of cells removed.
    pub fn shrink(&mut self, by: usize) -> usize {
        let mut removed = 0;
        while removed < by && self.body.len() > self.min_len {
            if let Some(tail) = self.body.pop_back() {
                self.body_set.remove(&tail);
                removed += 1;
            }
        }
        removed
    }

    /// Queues a turn for a later tick. Repeats of the last queued heading and
    /// 180° reversals of it are dropped.
    pub fn queue_turn(&mut self, direction: Direction) -> bool {
        let last = self.queued_turns.back().copied().unwrap_or(self.direction);
        if direction == last || direction.is_opposite(&last) {
            return false;
        }
        if self.queued_turns.len() >= MAX_QUEUED_TURNS {
            return false;
        }
        self.queued_turns.push_back(direction);
        true
    }

    /// Consumes the next queued turn and returns the heading for this tick.
    pub fn take_next_direction(&mut self) -> Direction {
        while let Some(turn) = self.queued_turns.pop_front() {
            if !turn.is_opposite(&self.direction) {
                self.direction = turn;
                break;
            }
        }
        self.direction
    }

    pub fn clear_turns(&mut self) {
        self.queued_turns.clear();
    }
}
