use std::time::{Duration, Instant};

use crate::highscore::HighScoreStore;
use crate::log;
use crate::session_rng::SessionRng;
use super::difficulty::tick_interval;
use super::food::spawn_food;
use super::game_state::{SnakeGameState, TickOutcome};
use super::modes::{Mode, ModeFlags};
use super::secret_code::SecretCodeDetector;
use super::settings::SnakeSessionSettings;
use super::steering::Steering;
use super::types::{DeathReason, Direction, Velocity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Countdown { remaining: u32 },
    Running,
    Paused,
    GameOver { reason: DeathReason },
}

impl SessionPhase {
    /// Phases in which a run exists and accepts steering.
    pub fn is_live(&self) -> bool {
        matches!(
            self,
            SessionPhase::Countdown { .. } | SessionPhase::Running | SessionPhase::Paused
        )
    }
}

/// Everything the presentation layer needs to paint one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub state: SnakeGameState,
    pub velocity: Velocity,
    pub modes: ModeFlags,
    pub highscore: u32,
    pub new_highscore: bool,
    pub started: bool,
}

impl SessionSnapshot {
    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Best score including the run in progress.
    pub fn displayed_highscore(&self) -> u32 {
        self.highscore.max(self.state.score)
    }
}

/// Single-player session driven by the caller's clock. `update` is meant to
/// be called once per rendered frame; it advances the countdown or performs
/// at most one logic tick when its deadline has passed.
pub struct SnakeSession<TStore: HighScoreStore> {
    settings: SnakeSessionSettings,
    state: SnakeGameState,
    steering: Steering,
    modes: ModeFlags,
    secret_code: SecretCodeDetector,
    phase: SessionPhase,
    deadline: Option<Instant>,
    highscore: u32,
    new_highscore: bool,
    started: bool,
    store: TStore,
    rng: SessionRng,
}

impl<TStore: HighScoreStore> SnakeSession<TStore> {
    pub fn new(settings: SnakeSessionSettings, store: TStore, rng: SessionRng) -> Self {
        let highscore = store.get().unwrap_or_else(|e| {
            log!("Failed to read highscore, starting from 0: {}", e);
            0
        });

        Self {
            state: SnakeGameState::new(settings.field_size, settings.start, settings.trail_buffer),
            steering: Steering::default(),
            modes: ModeFlags::default(),
            secret_code: SecretCodeDetector::portal(settings.secret_code_idle),
            phase: SessionPhase::Idle,
            deadline: None,
            highscore,
            new_highscore: false,
            started: false,
            store,
            rng,
            settings,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn modes(&self) -> ModeFlags {
        self.modes
    }

    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    pub fn settings(&self) -> &SnakeSessionSettings {
        &self.settings
    }

    pub fn current_tick_interval(&self) -> Duration {
        tick_interval(self.state.score, self.settings.min_speed, self.settings.max_speed)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            state: self.state.clone(),
            velocity: self.steering.velocity(),
            modes: self.modes,
            highscore: self.highscore,
            new_highscore: self.new_highscore,
            started: self.started,
        }
    }

    /// Starts a run from `Idle` or restarts after `GameOver`.
    pub fn start(&mut self, now: Instant) -> bool {
        if !matches!(self.phase, SessionPhase::Idle | SessionPhase::GameOver { .. }) {
            return false;
        }

        let fresh = SnakeGameState::new(
            self.settings.field_size,
            self.settings.start,
            self.settings.trail_buffer,
        );
        let food = spawn_food(&fresh.field_size, &fresh.occupied_cells(), &mut self.rng);
        self.state = fresh.with_food(food);
        self.steering = Steering::new(self.settings.start_direction.velocity());
        self.new_highscore = false;
        self.started = true;

        log!(
            "Starting run (seed {}), food at {}",
            self.rng.seed(),
            food.map(|f| f.to_string()).unwrap_or_else(|| "nowhere".to_string())
        );

        if self.settings.countdown_from == 0 {
            self.enter_running(now);
        } else {
            self.phase = SessionPhase::Countdown { remaining: self.settings.countdown_from };
            self.deadline = Some(now + self.settings.countdown_step);
        }
        true
    }

    pub fn toggle_pause(&mut self, now: Instant) -> bool {
        match self.phase {
            SessionPhase::Running => {
                self.phase = SessionPhase::Paused;
                self.deadline = None;
                log!("Paused at score {}", self.state.score);
                true
            }
            SessionPhase::Paused => {
                self.enter_running(now);
                log!("Resumed");
                true
            }
            _ => false,
        }
    }

    pub fn toggle_mode(&mut self, mode: Mode) -> bool {
        let enabled = self.modes.toggle(mode);
        log!(
            "Easter egg \"{}\" is {}",
            mode,
            if enabled { "enabled!" } else { "disabled!" }
        );
        enabled
    }

    /// Feeds a directional intent to the secret code matcher and, during a
    /// live run, to the steering. Returns whether the steering accepted it.
    pub fn request_direction(&mut self, direction: Direction, now: Instant) -> bool {
        if self.secret_code.push(direction, now) {
            log!("Secret code entered");
            self.toggle_mode(Mode::Portal);
        }

        if !self.phase.is_live() {
            return false;
        }
        self.steering.request(direction)
    }

    /// Advances time-driven state. Returns the outcome when a logic tick ran.
    pub fn update(&mut self, now: Instant) -> Option<TickOutcome> {
        self.secret_code.expire(now);

        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }

        match self.phase {
            SessionPhase::Countdown { remaining } => {
                if remaining <= 1 {
                    self.phase = SessionPhase::Running;
                    self.deadline = Some(next_deadline(deadline, self.current_tick_interval(), now));
                } else {
                    self.phase = SessionPhase::Countdown { remaining: remaining - 1 };
                    self.deadline = Some(next_deadline(deadline, self.settings.countdown_step, now));
                }
                None
            }
            SessionPhase::Running => {
                let outcome = self.tick();
                if !outcome.is_lost() {
                    self.deadline = Some(next_deadline(deadline, self.current_tick_interval(), now));
                }
                Some(outcome)
            }
            SessionPhase::Idle | SessionPhase::Paused | SessionPhase::GameOver { .. } => {
                self.deadline = None;
                None
            }
        }
    }

    fn enter_running(&mut self, now: Instant) {
        self.phase = SessionPhase::Running;
        self.deadline = Some(now + self.current_tick_interval());
    }

    fn tick(&mut self) -> TickOutcome {
        let (next, outcome) = self.state.advance(self.steering.velocity(), &self.modes);

        match outcome {
            TickOutcome::Lost(reason) => {
                self.game_over(reason);
                return outcome;
            }
            TickOutcome::Ate => {
                let food = spawn_food(&next.field_size, &next.occupied_cells(), &mut self.rng);
                self.state = next.with_food(food);
                log!(
                    "Ate food at {}. Score: {}",
                    self.state.snake.head,
                    self.state.score
                );
            }
            TickOutcome::Moved | TickOutcome::Stationary => {
                self.state = next;
            }
        }

        self.steering.commit_tick();
        outcome
    }

    fn game_over(&mut self, reason: DeathReason) {
        self.steering.freeze();
        self.phase = SessionPhase::GameOver { reason };
        self.deadline = None;

        let score = self.state.score;
        log!("Game over: snake {} with score {}", reason, score);

        if score > self.highscore {
            self.highscore = score;
            self.new_highscore = true;
            log!("New highscore: {}", score);
            if let Err(e) = self.store.set(score) {
                log!("Failed to save highscore: {}", e);
            }
        }
    }

    #[cfg(test)]
    fn place_food(&mut self, food: super::types::Point) {
        self.state.food = Some(food);
    }
}

/// Keeps a fixed cadence, but restarts it from `now` after a stall instead of
/// firing a burst of catch-up ticks.
fn next_deadline(previous: Instant, period: Duration, now: Instant) -> Instant {
    let next = previous + period;
    if next <= now { now + period } else { next }
}
