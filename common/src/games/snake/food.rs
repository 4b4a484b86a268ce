use std::collections::HashSet;

use crate::games::GameRng;
use super::grid::Grid;
use super::settings::GameSettings;
use super::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FoodKind {
    Normal,
    Golden,
    Rotten,
}

impl FoodKind {
    pub fn score_delta(&self) -> i32 {
        match self {
            FoodKind::Normal => 1,
            FoodKind::Golden => 3,
            FoodKind::Rotten => -1,
        }
    }

    pub fn grows(&self) -> bool {
        !matches!(self, FoodKind::Rotten)
    }

    /// Whether eating it advances speed and obstacle cadence.
    pub fn counts_as_eaten(&self) -> bool {
        self.grows()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: Point,
    pub kind: FoodKind,
    pub moving: bool,
}

impl Food {
    pub fn new(position: Point, kind: FoodKind, moving: bool) -> Self {
        Self {
            position,
            kind,
            moving,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FoodSpawner {
    special_enabled: bool,
    moving_enabled: bool,
    special_chance: f64,
    rotten_ratio: f64,
    moving_chance: f64,
    max_bonus_foods: u32,
    rotten_spawns_companion: bool,
}

impl FoodSpawner {
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self {
            special_enabled: settings.features.special_food,
            moving_enabled: settings.features.moving_food,
            special_chance: settings.food.special_spawn_chance,
            rotten_ratio: settings.food.rotten_ratio_within_special,
            moving_chance: settings.food.moving_chance,
            max_bonus_foods: settings.food.max_bonus_foods,
            rotten_spawns_companion: settings.food.rotten_spawns_companion,
        }
    }

    pub fn pick_kind(&self, rng: &mut GameRng) -> FoodKind {
        if !self.special_enabled || !rng.random_bool(self.special_chance) {
            return FoodKind::Normal;
        }
        if rng.random_bool(self.rotten_ratio) {
            FoodKind::Rotten
        } else {
            FoodKind::Golden
        }
    }

    pub fn pick_moving(&self, rng: &mut GameRng) -> bool {
        self.moving_enabled && rng.random_bool(self.moving_chance)
    }

    pub fn rotten_spawns_companion(&self) -> bool {
        self.rotten_spawns_companion
    }

    /// Places the primary food. Cells in `reachable` are preferred so the
    /// snake can always get to it; any free cell is the fallback.
    pub fn spawn_primary(
        &self,
        grid: &Grid,
        occupied: &HashSet<Point>,
        reachable: &HashSet<Point>,
        rng: &mut GameRng,
    ) -> Option<Food> {
        let position = grid
            .random_cell_where(|cell| reachable.contains(cell) && !occupied.contains(cell), rng)
            .or_else(|| grid.random_empty_cell(occupied, rng))?;
        let kind = self.pick_kind(rng);
        let moving = self.pick_moving(rng);
        Some(Food::new(position, kind, moving))
    }

    pub fn spawn_bonus(
        &self,
        grid: &Grid,
        occupied: &HashSet<Point>,
        kind: FoodKind,
        rng: &mut GameRng,
    ) -> Option<Food> {
        let position = grid.random_empty_cell(occupied, rng)?;
        let moving = self.pick_moving(rng);
        Some(Food::new(position, kind, moving))
    }

    /// Kinds of the bonus foods released by eating a rotten one: one or two,
    /// the first golden.
    pub fn bonus_kinds(&self, rng: &mut GameRng) -> Vec<FoodKind> {
        let count = rng.random_range(1..=self.max_bonus_foods.max(1)) as usize;
        (0..count)
            .map(|index| {
                if index == 0 {
                    FoodKind::Golden
                } else {
                    FoodKind::Normal
                }
            })
            .collect()
    }

    /// One random step for a moving food into a free neighbouring cell.
    pub fn drift(
        &self,
        food: &Food,
        grid: &Grid,
        blocked: &HashSet<Point>,
        rng: &mut GameRng,
    ) -> Option<Point> {
        let options: Vec<Point> = grid
            .neighbors(food.position)
            .filter(|cell| !blocked.contains(cell))
            .collect();
        rng.choose_index(options.len()).map(|index| options[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::types::WallCollisionMode;

    fn spawner_with(special_chance: f64, rotten_ratio: f64, moving_chance: f64) -> FoodSpawner {
        let mut settings = GameSettings::new();
        settings.food.special_spawn_chance = special_chance;
        settings.food.rotten_ratio_within_special = rotten_ratio;
        settings.food.moving_chance = moving_chance;
        FoodSpawner::from_settings(&settings)
    }

    #[test]
    fn test_food_kind_effects() {
        assert_eq!(FoodKind::Normal.score_delta(), 1);
        assert_eq!(FoodKind::Golden.score_delta(), 3);
        assert_eq!(FoodKind::Rotten.score_delta(), -1);
        assert!(FoodKind::Golden.grows());
        assert!(!FoodKind::Rotten.grows());
        assert!(!FoodKind::Rotten.counts_as_eaten());
    }

    #[test]
    fn test_pick_kind_extremes() {
        let mut rng = GameRng::new(1);
        let normal_only = spawner_with(0.0, 0.5, 0.0);
        let rotten_only = spawner_with(1.0, 1.0, 0.0);
        let golden_only = spawner_with(1.0, 0.0, 0.0);
        for _ in 0..20 {
            assert_eq!(normal_only.pick_kind(&mut rng), FoodKind::Normal);
            assert_eq!(rotten_only.pick_kind(&mut rng), FoodKind::Rotten);
            assert_eq!(golden_only.pick_kind(&mut rng), FoodKind::Golden);
        }
    }

    #[test]
    fn test_disabled_features_force_plain_food() {
        let mut settings = GameSettings::new();
        settings.features.special_food = false;
        settings.features.moving_food = false;
        settings.food.special_spawn_chance = 1.0;
        settings.food.moving_chance = 1.0;
        let spawner = FoodSpawner::from_settings(&settings);
        let mut rng = GameRng::new(3);
        assert_eq!(spawner.pick_kind(&mut rng), FoodKind::Normal);
        assert!(!spawner.pick_moving(&mut rng));
    }

    #[test]
    fn test_spawn_primary_prefers_reachable_cells() {
        let grid = Grid::new(10, 10, WallCollisionMode::Death);
        let spawner = spawner_with(0.0, 0.0, 0.0);
        let reachable: HashSet<Point> = (0..3).map(|x| Point::new(x, 0)).collect();
        let occupied: HashSet<Point> = [Point::new(0, 0)].into_iter().collect();
        let mut rng = GameRng::new(11);
        for _ in 0..20 {
            let food = spawner.spawn_primary(&grid, &occupied, &reachable, &mut rng).unwrap();
            assert!(reachable.contains(&food.position));
            assert_ne!(food.position, Point::new(0, 0));
        }
    }

    #[test]
    fn test_spawn_fails_on_full_grid() {
        let grid = Grid::new(5, 5, WallCollisionMode::Death);
        let spawner = spawner_with(0.0, 0.0, 0.0);
        let occupied: HashSet<Point> = grid.cells().collect();
        let mut rng = GameRng::new(5);
        assert!(spawner.spawn_primary(&grid, &occupied, &HashSet::new(), &mut rng).is_none());
        assert!(spawner.spawn_bonus(&grid, &occupied, FoodKind::Normal, &mut rng).is_none());
    }

    #[test]
    fn test_bonus_kinds_count() {
        let spawner = spawner_with(0.0, 0.0, 0.0);
        let mut rng = GameRng::new(9);
        for _ in 0..50 {
            let kinds = spawner.bonus_kinds(&mut rng);
            assert!((1..=2).contains(&kinds.len()));
            assert_eq!(kinds[0], FoodKind::Golden);
        }
    }

    #[test]
    fn test_drift_moves_one_step_to_free_cell() {
        let grid = Grid::new(10, 10, WallCollisionMode::Death);
        let spawner = spawner_with(0.0, 0.0, 1.0);
        let food = Food::new(Point::new(0, 0), FoodKind::Normal, true);
        let blocked: HashSet<Point> = [Point::new(1, 0)].into_iter().collect();
        let mut rng = GameRng::new(2);
        assert_eq!(spawner.drift(&food, &grid, &blocked, &mut rng), Some(Point::new(0, 1)));
    }

    #[test]
    fn test_drift_without_room_stays_put() {
        let grid = Grid::new(10, 10, WallCollisionMode::Death);
        let spawner = spawner_with(0.0, 0.0, 1.0);
        let food = Food::new(Point::new(0, 0), FoodKind::Normal, true);
        let blocked: HashSet<Point> = [Point::new(1, 0), Point::new(0, 1)].into_iter().collect();
        let mut rng = GameRng::new(2);
        assert_eq!(spawner.drift(&food, &grid, &blocked, &mut rng), None);
    }
}
