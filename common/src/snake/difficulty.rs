use std::time::Duration;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Tick interval for the current score, in moves per second terms:
/// `min_speed` until the score passes it, then one extra move per second per
/// point, capped at `max_speed`.
pub fn tick_interval(score: u32, min_speed: u32, max_speed: u32) -> Duration {
    let speed = if score > max_speed {
        max_speed
    } else if score > min_speed {
        score
    } else {
        min_speed
    };
    Duration::from_nanos(NANOS_PER_SECOND / speed.max(1) as u64)
}
