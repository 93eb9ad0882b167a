use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Validate;
use super::types::{Direction, FieldSize, Point};

const MIN_FIELD_CELLS: u32 = 5;

/// Gameplay section of the YAML config.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameSettings {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub cell_size: u32,
    pub start_x: i32,
    pub start_y: i32,
    pub min_speed: u32,
    pub max_speed: u32,
    pub countdown_from: u32,
    pub countdown_step_ms: u32,
    pub secret_code_idle_ms: u32,
    pub trail_buffer: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            canvas_width: 500,
            canvas_height: 380,
            cell_size: 20,
            start_x: 12,
            start_y: 9,
            min_speed: 5,
            max_speed: 10,
            countdown_from: 3,
            countdown_step_ms: 800,
            secret_code_idle_ms: 1000,
            trail_buffer: 2,
        }
    }
}

impl GameSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::from_canvas(self.canvas_width, self.canvas_height, self.cell_size)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("cell_size must be greater than 0".to_string());
        }
        if self.canvas_width / self.cell_size < MIN_FIELD_CELLS
            || self.canvas_height / self.cell_size < MIN_FIELD_CELLS
        {
            return Err(format!(
                "canvas must fit at least {}x{} cells",
                MIN_FIELD_CELLS, MIN_FIELD_CELLS
            ));
        }
        if !self.field_size().contains(Point::new(self.start_x, self.start_y)) {
            return Err("start position must be inside the field".to_string());
        }
        if self.min_speed == 0 {
            return Err("min_speed must be greater than 0".to_string());
        }
        if self.max_speed < self.min_speed {
            return Err("max_speed must not be less than min_speed".to_string());
        }
        if self.countdown_step_ms == 0 {
            return Err("countdown_step_ms must be greater than 0".to_string());
        }
        if self.secret_code_idle_ms == 0 {
            return Err("secret_code_idle_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeSessionSettings {
    pub field_size: FieldSize,
    pub start: Point,
    pub start_direction: Direction,
    pub min_speed: u32,
    pub max_speed: u32,
    pub countdown_from: u32,
    pub countdown_step: Duration,
    pub secret_code_idle: Duration,
    pub trail_buffer: u32,
}

impl From<&GameSettings> for SnakeSessionSettings {
    fn from(settings: &GameSettings) -> Self {
        Self {
            field_size: settings.field_size(),
            start: Point::new(settings.start_x, settings.start_y),
            start_direction: Direction::Up,
            min_speed: settings.min_speed.max(1),
            max_speed: settings.max_speed.max(settings.min_speed.max(1)),
            countdown_from: settings.countdown_from,
            countdown_step: Duration::from_millis(settings.countdown_step_ms as u64),
            secret_code_idle: Duration::from_millis(settings.secret_code_idle_ms as u64),
            trail_buffer: settings.trail_buffer,
        }
    }
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self::from(&GameSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.field_size(), FieldSize::new(25, 19));
    }

    #[test]
    fn test_session_settings_from_defaults() {
        let settings = SnakeSessionSettings::default();
        assert_eq!(settings.start, Point::new(12, 9));
        assert_eq!(settings.start_direction, Direction::Up);
        assert_eq!(settings.countdown_step, Duration::from_millis(800));
        assert_eq!(settings.secret_code_idle, Duration::from_millis(1000));
    }

    #[test]
    fn test_rejects_start_outside_field() {
        let settings = GameSettings { start_x: 25, ..GameSettings::default() };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_speed_range() {
        let settings = GameSettings { min_speed: 8, max_speed: 4, ..GameSettings::default() };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_tiny_canvas() {
        let settings = GameSettings { canvas_width: 60, ..GameSettings::default() };
        assert!(settings.validate().is_err());
        let settings = GameSettings { cell_size: 0, ..GameSettings::default() };
        assert!(settings.validate().is_err());
    }
}
