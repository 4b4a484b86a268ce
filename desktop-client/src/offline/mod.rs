mod snake_runner;
mod sound;

pub use snake_runner::SnakeRunner;
