pub mod config;
pub mod highscore;
pub mod input;
pub mod logger;
pub mod session_rng;
pub mod snake;

pub use highscore::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
pub use session_rng::SessionRng;
