use std::time::{Duration, Instant};

use ringbuffer::{AllocRingBuffer, RingBuffer};

use super::types::Direction;

pub const SECRET_CODE_CAPACITY: usize = 8;
pub const PORTAL_CODE: [Direction; 4] = [Direction::Up, Direction::Up, Direction::Down, Direction::Down];
pub const DEFAULT_IDLE_WINDOW: Duration = Duration::from_millis(1000);

/// Streak matcher over the most recent directional inputs.
///
/// The buffer restarts whenever the previous input is older than the idle
/// window, so the code has to be entered as one uninterrupted streak starting
/// from the first input after a pause.
pub struct SecretCodeDetector {
    buffer: AllocRingBuffer<Direction>,
    code: Vec<Direction>,
    idle_window: Duration,
    last_input_at: Option<Instant>,
}

impl SecretCodeDetector {
    pub fn new(code: &[Direction], idle_window: Duration) -> Self {
        Self {
            buffer: AllocRingBuffer::new(SECRET_CODE_CAPACITY),
            code: code.to_vec(),
            idle_window,
            last_input_at: None,
        }
    }

    pub fn portal(idle_window: Duration) -> Self {
        Self::new(&PORTAL_CODE, idle_window)
    }

    /// Records an input and reports whether the code was just completed.
    /// A completed code clears the buffer.
    pub fn push(&mut self, direction: Direction, now: Instant) -> bool {
        self.expire(now);

        self.buffer.enqueue(direction);
        self.last_input_at = Some(now);

        if self.is_match() {
            self.clear();
            return true;
        }
        false
    }

    /// Clears the buffer once the idle window has passed since the last input.
    pub fn expire(&mut self, now: Instant) {
        if let Some(last) = self.last_input_at
            && now.saturating_duration_since(last) > self.idle_window
        {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.last_input_at = None;
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn joined(&self) -> String {
        self.buffer
            .iter()
            .map(|d| d.token())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn is_match(&self) -> bool {
        !self.code.is_empty()
            && self.buffer.len() >= self.code.len()
            && self.buffer.iter().zip(self.code.iter()).all(|(a, b)| a == b)
    }
}
