//! UI-independent half of the input mapper: key names and pointer gestures to
//! game intents. The desktop client feeds it egui key names and pointer
//! positions.

use crate::log;
use crate::snake::{Direction, Mode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputIntent {
    Turn(Direction),
    TogglePause,
    ToggleMode(Mode),
    Start,
}

/// Maps a key name (as egui spells it) to an intent. Arrow keys and WASD
/// steer, space pauses, `E` toggles wrap mode, enter starts.
pub fn key_intent(key_name: &str) -> Option<InputIntent> {
    let intent = match key_name {
        "Up" | "W" => InputIntent::Turn(Direction::Up),
        "Down" | "S" => InputIntent::Turn(Direction::Down),
        "Left" | "A" => InputIntent::Turn(Direction::Left),
        "Right" | "D" => InputIntent::Turn(Direction::Right),
        "Space" => InputIntent::TogglePause,
        "E" => InputIntent::ToggleMode(Mode::Wrap),
        "Enter" => InputIntent::Start,
        _ => return None,
    };
    Some(intent)
}

/// Direction of a swipe by its dominant axis. Ties count as vertical.
pub fn swipe_direction(delta_x: f32, delta_y: f32) -> Direction {
    if delta_x.abs() > delta_y.abs() {
        if delta_x > 0.0 { Direction::Right } else { Direction::Left }
    } else if delta_y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Pairs pointer-down and pointer-up events into swipes.
#[derive(Debug, Default)]
pub struct GestureTracker {
    origin: Option<(f32, f32)>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.origin = Some((x, y));
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> Option<Direction> {
        let Some((start_x, start_y)) = self.origin.take() else {
            log!("Pointer released without a matching press, ignoring");
            return None;
        };
        Some(swipe_direction(x - start_x, y - start_y))
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_and_wasd_steer() {
        assert_eq!(key_intent("Up"), Some(InputIntent::Turn(Direction::Up)));
        assert_eq!(key_intent("W"), Some(InputIntent::Turn(Direction::Up)));
        assert_eq!(key_intent("A"), Some(InputIntent::Turn(Direction::Left)));
        assert_eq!(key_intent("Down"), Some(InputIntent::Turn(Direction::Down)));
        assert_eq!(key_intent("D"), Some(InputIntent::Turn(Direction::Right)));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(key_intent("Space"), Some(InputIntent::TogglePause));
        assert_eq!(key_intent("E"), Some(InputIntent::ToggleMode(Mode::Wrap)));
        assert_eq!(key_intent("Enter"), Some(InputIntent::Start));
        assert_eq!(key_intent("Q"), None);
    }

    #[test]
    fn test_swipe_uses_dominant_axis() {
        assert_eq!(swipe_direction(40.0, 10.0), Direction::Right);
        assert_eq!(swipe_direction(-40.0, 39.0), Direction::Left);
        assert_eq!(swipe_direction(5.0, 30.0), Direction::Down);
        assert_eq!(swipe_direction(5.0, -30.0), Direction::Up);
        assert_eq!(swipe_direction(10.0, 10.0), Direction::Down);
    }

    #[test]
    fn test_gesture_pairs_press_and_release() {
        let mut tracker = GestureTracker::new();
        tracker.pointer_down(100.0, 100.0);
        assert!(tracker.is_active());
        assert_eq!(tracker.pointer_up(20.0, 110.0), Some(Direction::Left));
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.pointer_up(10.0, 10.0), None);
    }
}
