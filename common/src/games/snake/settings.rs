use serde::{Deserialize, Serialize};

use crate::config::{check_positive, check_probability, Validate};
use super::types::WallCollisionMode;

/// Everything the game state machine needs to know up front. Built once,
/// never mutated during a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub grid: GridSettings,
    pub features: FeatureToggles,
    pub food: FoodSettings,
    pub obstacles: ObstacleSettings,
    pub speed: SpeedSettings,
    pub min_snake_len: u32,
    pub leaderboard_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub width: u32,
    pub height: u32,
    pub wall_collision_mode: WallCollisionMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureToggles {
    pub moving_food: bool,
    pub special_food: bool,
    pub progressive_obstacles: bool,
    pub speed_scales_with_eats: bool,
    pub leaderboard: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodSettings {
    pub move_every_n_ticks: u32,
    pub special_spawn_chance: f64,
    pub rotten_ratio_within_special: f64,
    pub moving_chance: f64,
    pub max_bonus_foods: u32,
    pub rotten_spawns_companion: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleSettings {
    pub every_n_foods: u32,
    pub max_obstacles: u32,
    pub spawn_attempts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedSettings {
    pub base: f64,
    pub step_per_food: f64,
    pub max: f64,
    pub late_game_threshold: u32,
    pub late_game_step_per_food: f64,
}

impl SpeedSettings {
    /// Ticks per second after `foods_eaten` foods.
    pub fn speed_for(&self, foods_eaten: u32) -> f64 {
        let late_foods = foods_eaten.saturating_sub(self.late_game_threshold);
        let speed = self.base
            + self.step_per_food * foods_eaten as f64
            + self.late_game_step_per_food * late_foods as f64;
        speed.min(self.max)
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            width: 30,
            height: 30,
            wall_collision_mode: WallCollisionMode::Death,
        }
    }
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            moving_food: true,
            special_food: true,
            progressive_obstacles: true,
            speed_scales_with_eats: true,
            leaderboard: true,
        }
    }
}

impl Default for FoodSettings {
    fn default() -> Self {
        Self {
            move_every_n_ticks: 6,
            special_spawn_chance: 0.22,
            rotten_ratio_within_special: 0.35,
            moving_chance: 0.3,
            max_bonus_foods: 2,
            rotten_spawns_companion: true,
        }
    }
}

impl Default for ObstacleSettings {
    fn default() -> Self {
        Self {
            every_n_foods: 3,
            max_obstacles: 40,
            spawn_attempts: 50,
        }
    }
}

impl Default for SpeedSettings {
    fn default() -> Self {
        Self {
            base: 4.0,
            step_per_food: 0.3,
            max: 15.0,
            late_game_threshold: 10,
            late_game_step_per_food: 0.0,
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid: GridSettings::default(),
            features: FeatureToggles::default(),
            food: FoodSettings::default(),
            obstacles: ObstacleSettings::default(),
            speed: SpeedSettings::default(),
            min_snake_len: 1,
            leaderboard_size: 5,
        }
    }
}

impl GameSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain snake: no special or moving food, no obstacles, constant speed.
    pub fn classic() -> Self {
        Self {
            features: FeatureToggles {
                moving_food: false,
                special_food: false,
                progressive_obstacles: false,
                speed_scales_with_eats: false,
                leaderboard: true,
            },
            ..Self::default()
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        self.grid.validate()?;
        self.food.validate()?;
        self.obstacles.validate()?;
        self.speed.validate()?;
        check_positive("min_snake_len", self.min_snake_len)?;
        check_positive("leaderboard_size", self.leaderboard_size)?;
        let cells = self.grid.width * self.grid.height;
        if self.min_snake_len >= cells {
            return Err("min_snake_len must be smaller than the grid".to_string());
        }
        Ok(())
    }
}

impl Validate for GridSettings {
    fn validate(&self) -> Result<(), String> {
        if self.width < 5 || self.height < 5 {
            return Err("grid dimensions must be at least 5x5".to_string());
        }
        if self.width > 100 || self.height > 100 {
            return Err("grid dimensions must not exceed 100x100".to_string());
        }
        Ok(())
    }
}

impl Validate for FoodSettings {
    fn validate(&self) -> Result<(), String> {
        check_positive("food.move_every_n_ticks", self.move_every_n_ticks)?;
        check_probability("food.special_spawn_chance", self.special_spawn_chance)?;
        check_probability(
            "food.rotten_ratio_within_special",
            self.rotten_ratio_within_special,
        )?;
        check_probability("food.moving_chance", self.moving_chance)?;
        check_positive("food.max_bonus_foods", self.max_bonus_foods)?;
        Ok(())
    }
}

impl Validate for ObstacleSettings {
    fn validate(&self) -> Result<(), String> {
        check_positive("obstacles.every_n_foods", self.every_n_foods)?;
        check_positive("obstacles.spawn_attempts", self.spawn_attempts)?;
        Ok(())
    }
}

impl Validate for SpeedSettings {
    fn validate(&self) -> Result<(), String> {
        if !(self.base > 0.0) {
            return Err("speed.base must be greater than 0".to_string());
        }
        if self.max < self.base {
            return Err("speed.max must not be lower than speed.base".to_string());
        }
        if self.step_per_food < 0.0 || self.late_game_step_per_food < 0.0 {
            return Err("speed steps must not be negative".to_string());
        }
        Ok(())
    }
}
