mod app;
mod board;
mod colors;
mod input;

pub use app::SnakeApp;
