mod events;
mod food;
mod game_state;
mod grid;
mod obstacles;
mod reachability;
mod settings;
mod snake;
mod snapshot;
mod types;

pub use events::{GameEvent, GameInput};
pub use food::{Food, FoodKind, FoodSpawner};
pub use game_state::SnakeGameState;
pub use grid::Grid;
pub use obstacles::{Board, ObstacleSpawner};
pub use reachability::{is_reachable, reachable_cells};
pub use settings::{
    FeatureToggles, FoodSettings, GameSettings, GridSettings, ObstacleSettings, SpeedSettings,
};
pub use snake::Snake;
pub use snapshot::GameSnapshot;
pub use types::{DeathReason, Direction, GameStatus, Point, WallCollisionMode};
