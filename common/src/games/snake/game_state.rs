use std::collections::HashSet;

use crate::config::Validate;
use crate::games::GameRng;
use crate::leaderboard::{InitialsBuffer, Leaderboard, LeaderboardEntry};
use crate::log;
use super::events::{GameEvent, GameInput};
use super::food::{Food, FoodKind, FoodSpawner};
use super::grid::Grid;
use super::obstacles::{Board, ObstacleSpawner};
use super::reachability::reachable_cells;
use super::settings::GameSettings;
use super::snake::Snake;
use super::snapshot::GameSnapshot;
use super::types::{DeathReason, Direction, GameStatus, Point};

/// Which food the head landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EatenFood {
    Primary,
    Bonus(usize),
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    settings: GameSettings,
    grid: Grid,
    snake: Snake,
    primary_food: Option<Food>,
    bonus_foods: Vec<Food>,
    obstacles: HashSet<Point>,
    food_spawner: FoodSpawner,
    obstacle_spawner: ObstacleSpawner,
    score: i32,
    foods_eaten: u32,
    speed: f64,
    tick_count: u64,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    initials: InitialsBuffer,
    leaderboard: Leaderboard,
}

impl SnakeGameState {
    pub fn new(
        settings: GameSettings,
        leaderboard: Leaderboard,
        rng: &mut GameRng,
    ) -> Result<Self, String> {
        settings.validate()?;

        let grid = Grid::new(
            settings.grid.width,
            settings.grid.height,
            settings.grid.wall_collision_mode,
        );
        let min_len = settings.min_snake_len as usize;
        let mut state = Self {
            grid,
            snake: Snake::new(grid.center(), Direction::Right, min_len),
            primary_food: None,
            bonus_foods: Vec::new(),
            obstacles: HashSet::new(),
            food_spawner: FoodSpawner::from_settings(&settings),
            obstacle_spawner: ObstacleSpawner::from_settings(&settings),
            score: 0,
            foods_eaten: 0,
            speed: settings.speed.base,
            tick_count: 0,
            status: GameStatus::Running,
            death_reason: None,
            initials: InitialsBuffer::new(),
            leaderboard,
            settings,
        };
        state.reset(rng);
        Ok(state)
    }

    /// Starts a fresh game. The leaderboard is kept.
    pub fn reset(&mut self, rng: &mut GameRng) {
        let min_len = self.settings.min_snake_len as usize;
        self.snake = Snake::new(self.grid.center(), Direction::Right, min_len);
        self.primary_food = None;
        self.bonus_foods.clear();
        self.obstacles.clear();
        self.score = 0;
        self.foods_eaten = 0;
        self.speed = self.settings.speed.base;
        self.tick_count = 0;
        self.status = GameStatus::Running;
        self.death_reason = None;
        self.initials.clear();

        let mut events = Vec::new();
        self.spawn_primary_food(rng, &mut events);
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn primary_food(&self) -> Option<&Food> {
        self.primary_food.as_ref()
    }

    pub fn bonus_foods(&self) -> &[Food] {
        &self.bonus_foods
    }

    pub fn obstacles(&self) -> &HashSet<Point> {
        &self.obstacles
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn foods_eaten(&self) -> u32 {
        self.foods_eaten
    }

    /// Ticks per second.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    pub fn initials(&self) -> &str {
        self.initials.as_str()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut obstacles: Vec<Point> = self.obstacles.iter().copied().collect();
        obstacles.sort();
        GameSnapshot {
            grid_width: self.grid.width(),
            grid_height: self.grid.height(),
            snake: self.snake.cells().copied().collect(),
            direction: self.snake.direction(),
            primary_food: self.primary_food,
            bonus_foods: self.bonus_foods.clone(),
            obstacles,
            score: self.score,
            speed: self.speed,
            foods_eaten: self.foods_eaten,
            tick: self.tick_count,
            status: self.status,
            death_reason: self.death_reason,
            initials: self.initials.as_str().to_string(),
            leaderboard: self.leaderboard.entries().to_vec(),
        }
    }

    pub fn handle_input(&mut self, input: GameInput, rng: &mut GameRng) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match (input, self.status) {
            (GameInput::Turn(direction), GameStatus::Running) => {
                self.snake.queue_turn(direction);
            }
            (GameInput::TogglePause, GameStatus::Running) => {
                self.set_status(GameStatus::Paused, &mut events);
            }
            (GameInput::TogglePause, GameStatus::Paused) => {
                self.set_status(GameStatus::Running, &mut events);
            }
            (GameInput::Restart, GameStatus::GameOver) => {
                self.reset(rng);
                log!("Game restarted");
                events.push(GameEvent::Restarted);
                events.push(GameEvent::StatusChanged {
                    from: GameStatus::GameOver,
                    to: GameStatus::Running,
                });
            }
            (GameInput::ResetLeaderboard, GameStatus::Running) => {
                self.leaderboard.clear();
                log!("Leaderboard reset");
                events.push(GameEvent::LeaderboardReset);
            }
            (GameInput::Letter(c), GameStatus::AwaitingInitials) => {
                self.initials.push(c);
            }
            (GameInput::Backspace, GameStatus::AwaitingInitials) => {
                self.initials.pop();
            }
            (GameInput::Enter, GameStatus::AwaitingInitials) => {
                self.commit_initials(&mut events);
            }
            _ => {}
        }
        events
    }

    /// Advances the game by one step. Does nothing unless running.
    pub fn tick(&mut self, rng: &mut GameRng) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.status != GameStatus::Running {
            return events;
        }

        if self.primary_food.is_none() {
            self.spawn_primary_food(rng, &mut events);
        }

        let direction = self.snake.take_next_direction();
        let next_head = match self.calculate_next_head(direction) {
            Ok(next_head) => next_head,
            Err((reason, position)) => {
                self.end_game(reason, position, &mut events);
                return events;
            }
        };

        let eaten = self.food_at(next_head);
        let grows = eaten
            .and_then(|eaten| self.food(eaten))
            .is_some_and(|food| food.kind.grows());
        if self.snake.would_collide(next_head, grows) {
            self.end_game(DeathReason::SelfCollision, next_head, &mut events);
            return events;
        }

        self.snake.advance_to(next_head, grows);
        if let Some(eaten) = eaten {
            self.consume_food(eaten, rng, &mut events);
        }

        self.tick_count += 1;
        self.drift_moving_foods(rng);
        events
    }

    fn calculate_next_head(&self, direction: Direction) -> Result<Point, (DeathReason, Point)> {
        let head = self.snake.head();
        let Some(next_head) = self.grid.step(head, direction) else {
            return Err((DeathReason::WallCollision, head.offset(direction)));
        };
        if self.obstacles.contains(&next_head) {
            return Err((DeathReason::ObstacleCollision, next_head));
        }
        Ok(next_head)
    }

    fn food_at(&self, cell: Point) -> Option<EatenFood> {
        if self.primary_food.is_some_and(|food| food.position == cell) {
            return Some(EatenFood::Primary);
        }
        self.bonus_foods
            .iter()
            .position(|food| food.position == cell)
            .map(EatenFood::Bonus)
    }

    fn food(&self, eaten: EatenFood) -> Option<Food> {
        match eaten {
            EatenFood::Primary => self.primary_food,
            EatenFood::Bonus(index) => self.bonus_foods.get(index).copied(),
        }
    }

    fn consume_food(&mut self, eaten: EatenFood, rng: &mut GameRng, events: &mut Vec<GameEvent>) {
        let food = match eaten {
            EatenFood::Primary => self.primary_food.take(),
            EatenFood::Bonus(index) if index < self.bonus_foods.len() => {
                Some(self.bonus_foods.remove(index))
            }
            EatenFood::Bonus(_) => None,
        };
        let Some(food) = food else {
            return;
        };

        self.score += food.kind.score_delta();
        log!(
            "Ate {:?} food at ({}, {}). Score: {}",
            food.kind,
            food.position.x,
            food.position.y,
            self.score
        );
        events.push(GameEvent::FoodEaten {
            kind: food.kind,
            position: food.position,
            bonus: eaten != EatenFood::Primary,
            score: self.score,
        });

        if food.kind == FoodKind::Rotten {
            self.snake.shrink(1);
            let companions = if eaten == EatenFood::Primary {
                self.spawn_primary_food(rng, events)
            } else {
                0
            };
            self.spawn_bonus_foods(companions, rng, events);
            return;
        }

        self.foods_eaten += 1;
        if self.settings.features.speed_scales_with_eats {
            self.speed = self.settings.speed.speed_for(self.foods_eaten);
        }
        if eaten == EatenFood::Primary {
            self.spawn_primary_food(rng, events);
        }
        self.try_spawn_obstacle(rng, events);
    }

    fn food_cells(&self) -> HashSet<Point> {
        self.primary_food
            .iter()
            .chain(self.bonus_foods.iter())
            .map(|food| food.position)
            .collect()
    }

    fn occupied_cells(&self) -> HashSet<Point> {
        let mut occupied = self.food_cells();
        occupied.extend(self.snake.occupied().iter().copied());
        occupied.extend(self.obstacles.iter().copied());
        occupied
    }

    /// Returns how many companion foods came with it.
    fn spawn_primary_food(&mut self, rng: &mut GameRng, events: &mut Vec<GameEvent>) -> usize {
        let head = self.snake.head();
        let mut blocked = self.obstacles.clone();
        blocked.extend(self.snake.cells().copied().filter(|cell| *cell != head));
        let reachable = reachable_cells(&self.grid, head, &blocked);
        let occupied = self.occupied_cells();

        let Some(food) = self
            .food_spawner
            .spawn_primary(&self.grid, &occupied, &reachable, rng)
        else {
            log!("No free cell for food, retrying next tick");
            return 0;
        };
        self.primary_food = Some(food);

        if food.kind == FoodKind::Rotten && self.food_spawner.rotten_spawns_companion() {
            let occupied = self.occupied_cells();
            if let Some(companion) =
                self.food_spawner
                    .spawn_bonus(&self.grid, &occupied, FoodKind::Normal, rng)
            {
                log!(
                    "Spawned companion food at ({}, {})",
                    companion.position.x,
                    companion.position.y
                );
                self.bonus_foods.push(companion);
                events.push(GameEvent::BonusFoodsSpawned { count: 1 });
                return 1;
            }
        }
        0
    }

    /// Companions spawned in the same step count toward `max_bonus_foods`.
    fn spawn_bonus_foods(
        &mut self,
        companions: usize,
        rng: &mut GameRng,
        events: &mut Vec<GameEvent>,
    ) {
        let quota = (self.settings.food.max_bonus_foods as usize).saturating_sub(companions);
        let mut count = 0;
        for kind in self.food_spawner.bonus_kinds(rng).into_iter().take(quota) {
            let occupied = self.occupied_cells();
            let Some(food) = self.food_spawner.spawn_bonus(&self.grid, &occupied, kind, rng) else {
                break;
            };
            self.bonus_foods.push(food);
            count += 1;
        }
        if count > 0 {
            log!("Spawned {} bonus food(s)", count);
            events.push(GameEvent::BonusFoodsSpawned { count });
        }
    }

    fn try_spawn_obstacle(&mut self, rng: &mut GameRng, events: &mut Vec<GameEvent>) {
        if !self
            .obstacle_spawner
            .should_spawn(self.foods_eaten, self.obstacles.len())
        {
            return;
        }

        let foods = self.food_cells();
        let board = Board {
            grid: &self.grid,
            head: self.snake.head(),
            snake: self.snake.occupied(),
            foods: &foods,
            primary_food: self.primary_food.map(|food| food.position),
        };
        match self.obstacle_spawner.try_place(&board, &self.obstacles, rng) {
            Some(position) => {
                self.obstacles.insert(position);
                log!("Obstacle placed at ({}, {})", position.x, position.y);
                events.push(GameEvent::ObstaclePlaced { position });
            }
            None => log!("No safe obstacle cell found, skipping"),
        }
    }

    fn drift_moving_foods(&mut self, rng: &mut GameRng) {
        if !self.settings.features.moving_food {
            return;
        }
        let every = u64::from(self.settings.food.move_every_n_ticks.max(1));
        if self.tick_count % every != 0 {
            return;
        }

        let mut blocked = self.occupied_cells();
        let foods = self
            .primary_food
            .iter_mut()
            .chain(self.bonus_foods.iter_mut())
            .filter(|food| food.moving);
        for food in foods {
            blocked.remove(&food.position);
            if let Some(position) = self.food_spawner.drift(food, &self.grid, &blocked, rng) {
                food.position = position;
            }
            blocked.insert(food.position);
        }
    }

    fn end_game(&mut self, reason: DeathReason, position: Point, events: &mut Vec<GameEvent>) {
        self.death_reason = Some(reason);
        self.snake.clear_turns();
        log!(
            "Collision ({:?}) at ({}, {}). Final score: {}",
            reason,
            position.x,
            position.y,
            self.score
        );
        events.push(GameEvent::Collision { reason, position });

        let qualifies =
            self.settings.features.leaderboard && self.leaderboard.qualifies(self.score);
        let next = if qualifies {
            GameStatus::AwaitingInitials
        } else {
            GameStatus::GameOver
        };
        self.set_status(next, events);
        events.push(GameEvent::GameOver {
            score: self.score,
            qualifies,
        });
    }

    fn commit_initials(&mut self, events: &mut Vec<GameEvent>) {
        let Ok(initials) = self.initials.commit() else {
            return;
        };
        let entry = LeaderboardEntry::new(initials, self.score);
        if let Some(rank) = self.leaderboard.insert(entry.clone()) {
            log!("{} entered the leaderboard at #{}", entry.initials, rank + 1);
            events.push(GameEvent::LeaderboardUpdated { rank, entry });
        }
        self.set_status(GameStatus::GameOver, events);
    }

    fn set_status(&mut self, to: GameStatus, events: &mut Vec<GameEvent>) {
        let from = self.status;
        if from == to {
            return;
        }
        self.status = to;
        log!("Status {:?} -> {:?}", from, to);
        events.push(GameEvent::StatusChanged { from, to });
    }
}

#[cfg(test)]
impl SnakeGameState {
    /// Replaces the board with an explicit layout.
    fn with_layout(
        settings: GameSettings,
        snake_cells: &[Point],
        direction: Direction,
        primary_food: Option<Food>,
        obstacles: &[Point],
    ) -> Self {
        let mut rng = GameRng::new(0);
        let capacity = settings.leaderboard_size as usize;
        let min_len = settings.min_snake_len as usize;
        let mut state = Self::new(settings, Leaderboard::new(capacity), &mut rng).unwrap();
        state.snake = Snake::from_cells(snake_cells, direction, min_len).unwrap();
        state.primary_food = primary_food;
        state.bonus_foods.clear();
        state.obstacles = obstacles.iter().copied().collect();
        state
    }
}
