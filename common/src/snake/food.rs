use std::collections::HashSet;

use crate::log;
use crate::session_rng::SessionRng;
use super::types::{FieldSize, Point};

const MAX_REJECTION_ATTEMPTS: usize = 100;

/// Picks a uniformly random free cell. Tries plain rejection sampling first
/// and falls back to sampling the free-cell complement, so a crowded board
/// still terminates. Returns `None` only when every cell is occupied.
pub fn spawn_food(
    field_size: &FieldSize,
    occupied: &HashSet<Point>,
    rng: &mut SessionRng,
) -> Option<Point> {
    if field_size.cell_count() == 0 {
        return None;
    }

    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let x = rng.random_range(0..field_size.width);
        let y = rng.random_range(0..field_size.height);
        let pos = Point::new(x, y);

        if !occupied.contains(&pos) {
            return Some(pos);
        }
    }

    let free: Vec<Point> = field_size
        .cells()
        .filter(|cell| !occupied.contains(cell))
        .collect();

    if free.is_empty() {
        log!("No free cell left for food on a {}x{} board", field_size.width, field_size.height);
        return None;
    }

    Some(free[rng.random_range(0..free.len())])
}
