mod app;
pub mod colors;
mod game;
mod input;

pub use app::SnakeApp;
