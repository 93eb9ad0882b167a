use std::collections::HashSet;

use super::modes::{BoundaryPolicy, ModeFlags};
use super::snake::Snake;
use super::types::{DeathReason, FieldSize, Point, Velocity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    /// No velocity yet, nothing moved.
    Stationary,
    Lost(DeathReason),
}

impl TickOutcome {
    pub fn is_lost(&self) -> bool {
        matches!(self, TickOutcome::Lost(_))
    }
}

/// Immutable board snapshot. `advance` produces the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeGameState {
    pub field_size: FieldSize,
    pub snake: Snake,
    pub food: Option<Point>,
    pub score: u32,
    pub trail_buffer: u32,
}

impl SnakeGameState {
    pub fn new(field_size: FieldSize, start: Point, trail_buffer: u32) -> Self {
        Self {
            field_size,
            snake: Snake::new(start),
            food: None,
            score: 0,
            trail_buffer,
        }
    }

    pub fn with_food(mut self, food: Option<Point>) -> Self {
        self.food = food;
        self
    }

    pub fn max_trail_len(&self) -> usize {
        (self.score + self.trail_buffer) as usize
    }

    pub fn occupied_cells(&self) -> HashSet<Point> {
        self.snake.cells().collect()
    }

    /// Moves the snake one cell.
    ///
    /// The boundary policy is applied first and the wrapped position is what
    /// the self and food checks see. Self collision is tested against the
    /// trail as it was before this tick, so the segment that is about to be
    /// trimmed still counts. On `Ate` the food is consumed and the caller
    /// places a new one. On `Lost` the returned state equals `self`.
    pub fn advance(&self, velocity: Velocity, modes: &ModeFlags) -> (SnakeGameState, TickOutcome) {
        if velocity.is_still() {
            return (self.clone(), TickOutcome::Stationary);
        }

        let mut next_head = self.snake.head.offset(velocity);

        if !self.field_size.contains(next_head) {
            match modes.boundary_policy() {
                BoundaryPolicy::Wrap => next_head = self.field_size.wrap(next_head),
                BoundaryPolicy::Lethal => {
                    return (self.clone(), TickOutcome::Lost(DeathReason::WallCollision));
                }
            }
        }

        if self.snake.trail_contains(next_head) {
            return (self.clone(), TickOutcome::Lost(DeathReason::SelfCollision));
        }

        let mut next = self.clone();
        let ate = self.food == Some(next_head);
        if ate {
            next.score += 1;
            next.food = None;
        }

        next.snake.trail.push_back(self.snake.head);
        let max_trail_len = next.max_trail_len();
        while next.snake.trail.len() > max_trail_len {
            next.snake.trail.pop_front();
        }
        next.snake.head = next_head;

        let outcome = if ate { TickOutcome::Ate } else { TickOutcome::Moved };
        (next, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: FieldSize = FieldSize::new(25, 19);

    fn state_at(head: Point) -> SnakeGameState {
        SnakeGameState::new(FIELD, head, 2)
    }

    fn wrap_modes() -> ModeFlags {
        ModeFlags { wrap: true, portal: false }
    }

    #[test]
    fn test_walks_to_food_and_scores() {
        let mut state = state_at(Point::new(12, 9)).with_food(Some(Point::new(12, 5)));
        let modes = ModeFlags::default();

        let mut outcomes = Vec::new();
        for _ in 0..4 {
            let (next, outcome) = state.advance(Velocity::UP, &modes);
            state = next;
            outcomes.push(outcome);
        }

        assert_eq!(outcomes, vec![TickOutcome::Moved, TickOutcome::Moved, TickOutcome::Moved, TickOutcome::Ate]);
        assert_eq!(state.snake.head, Point::new(12, 5));
        assert_eq!(state.score, 1);
        assert_eq!(state.food, None);
        assert_eq!(state.snake.trail.len(), 3);
        assert!(!state.snake.trail_contains(state.snake.head));
    }

    #[test]
    fn test_wall_is_lethal_without_wrap() {
        let modes = ModeFlags::default();
        let cases = [
            (Point::new(0, 5), Velocity::LEFT),
            (Point::new(24, 5), Velocity::RIGHT),
            (Point::new(5, 0), Velocity::UP),
            (Point::new(5, 18), Velocity::DOWN),
        ];
        for (head, velocity) in cases {
            let state = state_at(head);
            let (next, outcome) = state.advance(velocity, &modes);
            assert_eq!(outcome, TickOutcome::Lost(DeathReason::WallCollision));
            assert_eq!(next, state);
        }
    }

    #[test]
    fn test_wrap_mode_crosses_to_opposite_edge() {
        let modes = wrap_modes();
        let cases = [
            (Point::new(0, 5), Velocity::LEFT, Point::new(24, 5)),
            (Point::new(24, 5), Velocity::RIGHT, Point::new(0, 5)),
            (Point::new(5, 0), Velocity::UP, Point::new(5, 18)),
            (Point::new(5, 18), Velocity::DOWN, Point::new(5, 0)),
        ];
        for (head, velocity, expected) in cases {
            let (next, outcome) = state_at(head).advance(velocity, &modes);
            assert_eq!(outcome, TickOutcome::Moved);
            assert_eq!(next.snake.head, expected);
        }
    }

    #[test]
    fn test_portal_mode_also_wraps() {
        let modes = ModeFlags { wrap: false, portal: true };
        let (next, outcome) = state_at(Point::new(0, 3)).advance(Velocity::LEFT, &modes);
        assert_eq!(outcome, TickOutcome::Moved);
        assert_eq!(next.snake.head, Point::new(24, 3));
    }

    #[test]
    fn test_wrapped_position_is_used_for_food_check() {
        let state = state_at(Point::new(24, 7)).with_food(Some(Point::new(0, 7)));
        let (next, outcome) = state.advance(Velocity::RIGHT, &wrap_modes());
        assert_eq!(outcome, TickOutcome::Ate);
        assert_eq!(next.score, 1);
    }

    #[test]
    fn test_wrapped_position_is_used_for_self_check() {
        let mut state = state_at(Point::new(24, 7));
        state.snake = Snake::with_trail(Point::new(24, 7), [Point::new(0, 7), Point::new(23, 7)]);
        let (_, outcome) = state.advance(Velocity::RIGHT, &wrap_modes());
        assert_eq!(outcome, TickOutcome::Lost(DeathReason::SelfCollision));
    }

    #[test]
    fn test_self_collision_checks_untrimmed_trail() {
        // Square loop: moving down lands on the oldest segment, which this
        // tick would otherwise trim away.
        let mut state = state_at(Point::new(5, 5));
        state.snake = Snake::with_trail(
            Point::new(5, 5),
            [Point::new(5, 6), Point::new(4, 6), Point::new(4, 5)],
        );
        state.score = 1;
        assert_eq!(state.snake.trail.len(), state.max_trail_len());

        let (next, outcome) = state.advance(Velocity::DOWN, &ModeFlags::default());
        assert_eq!(outcome, TickOutcome::Lost(DeathReason::SelfCollision));
        assert_eq!(next, state);
    }

    #[test]
    fn test_reversing_into_trail_loses_on_that_tick() {
        let mut state = state_at(Point::new(10, 10));
        let modes = ModeFlags::default();
        for _ in 0..3 {
            state = state.advance(Velocity::RIGHT, &modes).0;
        }
        assert_eq!(state.snake.trail.back(), Some(&Point::new(12, 10)));
        let (_, outcome) = state.advance(Velocity::LEFT, &modes);
        assert_eq!(outcome, TickOutcome::Lost(DeathReason::SelfCollision));
    }

    #[test]
    fn test_trail_length_grows_by_one_up_to_score_plus_buffer() {
        let mut state = state_at(Point::new(0, 0));
        let modes = wrap_modes();
        let mut previous_len = state.snake.trail.len();
        for step in 0..40 {
            if step % 7 == 3 {
                let ahead = state.field_size.wrap(state.snake.head.offset(Velocity::RIGHT));
                state = state.with_food(Some(ahead));
            }
            let (next, outcome) = state.advance(Velocity::RIGHT, &modes);
            assert!(!outcome.is_lost());
            let expected = (previous_len + 1).min(next.score as usize + 2);
            assert_eq!(next.snake.trail.len(), expected);
            previous_len = next.snake.trail.len();
            state = next;
        }
    }

    #[test]
    fn test_still_velocity_does_nothing() {
        let state = state_at(Point::new(3, 3));
        let (next, outcome) = state.advance(Velocity::STILL, &ModeFlags::default());
        assert_eq!(outcome, TickOutcome::Stationary);
        assert_eq!(next, state);
    }

    #[test]
    fn test_occupied_cells_include_head_and_trail() {
        let mut state = state_at(Point::new(3, 3));
        state.snake = Snake::with_trail(Point::new(3, 3), [Point::new(1, 3), Point::new(2, 3)]);
        let occupied = state.occupied_cells();
        assert_eq!(occupied.len(), 3);
        assert!(occupied.contains(&Point::new(3, 3)));
        assert!(occupied.contains(&Point::new(1, 3)));
    }
}
