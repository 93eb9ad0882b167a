use std::collections::VecDeque;

use super::types::Point;

/// Head plus the history of previous heads, oldest first. The trail never
/// holds the current head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    pub head: Point,
    pub trail: VecDeque<Point>,
}

impl Snake {
    pub fn new(head: Point) -> Self {
        Self {
            head,
            trail: VecDeque::new(),
        }
    }

    pub fn with_trail(head: Point, trail: impl IntoIterator<Item = Point>) -> Self {
        Self {
            head,
            trail: trail.into_iter().collect(),
        }
    }

    pub fn trail_contains(&self, point: Point) -> bool {
        self.trail.contains(&point)
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.head == point || self.trail_contains(point)
    }

    /// Head first, then the trail from newest to oldest.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.head).chain(self.trail.iter().rev().copied())
    }

    pub fn segment_count(&self) -> usize {
        self.trail.len() + 1
    }
}
