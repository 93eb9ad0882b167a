mod difficulty;
mod food;
mod game_state;
mod modes;
mod secret_code;
mod session;
mod settings;
mod snake;
mod steering;
mod types;

pub use difficulty::tick_interval;
pub use food::spawn_food;
pub use game_state::{SnakeGameState, TickOutcome};
pub use modes::{BoundaryPolicy, Mode, ModeFlags};
pub use secret_code::{SecretCodeDetector, DEFAULT_IDLE_WINDOW, PORTAL_CODE, SECRET_CODE_CAPACITY};
pub use session::{SessionPhase, SessionSnapshot, SnakeSession};
pub use settings::{GameSettings, SnakeSessionSettings};
pub use snake::Snake;
pub use steering::Steering;
pub use types::{DeathReason, Direction, FieldSize, Point, Velocity};
