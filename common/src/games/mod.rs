mod game_rng;

pub mod snake;

pub use game_rng::GameRng;
