use super::types::{Direction, Velocity};

/// Tracks the velocity the next tick will use and the one the last tick used.
/// Reversal is judged against the last tick, so two quick presses cannot fold
/// the snake back onto itself between ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Steering {
    velocity: Velocity,
    previous_velocity: Velocity,
}

impl Steering {
    pub fn new(initial: Velocity) -> Self {
        Self {
            velocity: initial,
            previous_velocity: initial,
        }
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn previous_velocity(&self) -> Velocity {
        self.previous_velocity
    }

    /// Adopts `direction` for the next tick unless it reverses the last one.
    /// Later accepted requests overwrite earlier ones; nothing is queued.
    pub fn request(&mut self, direction: Direction) -> bool {
        let requested = direction.velocity();
        if requested == self.previous_velocity.reversed() {
            return false;
        }
        self.velocity = requested;
        true
    }

    pub fn commit_tick(&mut self) {
        self.previous_velocity = self.velocity;
    }

    pub fn freeze(&mut self) {
        self.velocity = Velocity::STILL;
        self.previous_velocity = Velocity::STILL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversal_is_ignored() {
        let mut steering = Steering::new(Velocity::RIGHT);
        assert!(!steering.request(Direction::Left));
        assert_eq!(steering.velocity(), Velocity::RIGHT);
    }

    #[test]
    fn test_reversal_checked_against_previous_tick_not_pending_request() {
        let mut steering = Steering::new(Velocity::RIGHT);
        assert!(steering.request(Direction::Up));
        // Still moving right as far as the last tick is concerned.
        assert!(!steering.request(Direction::Left));
        assert_eq!(steering.velocity(), Velocity::UP);

        steering.commit_tick();
        assert!(steering.request(Direction::Left));
        assert_eq!(steering.velocity(), Velocity::LEFT);
    }

    #[test]
    fn test_last_valid_request_wins() {
        let mut steering = Steering::new(Velocity::UP);
        assert!(steering.request(Direction::Left));
        assert!(steering.request(Direction::Right));
        assert_eq!(steering.velocity(), Velocity::RIGHT);
    }

    #[test]
    fn test_freeze_stops_and_accepts_any_direction() {
        let mut steering = Steering::new(Velocity::UP);
        steering.freeze();
        assert!(steering.velocity().is_still());
        assert!(steering.request(Direction::Down));
    }
}
