use std::fmt;

/// A grid cell. Signed so that a proposed head one step past the edge can be
/// represented before the boundary policy resolves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, velocity: Velocity) -> Self {
        Self::new(self.x + velocity.dx, self.y + velocity.dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn velocity(self) -> Velocity {
        match self {
            Direction::Up => Velocity::UP,
            Direction::Down => Velocity::DOWN,
            Direction::Left => Velocity::LEFT,
            Direction::Right => Velocity::RIGHT,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    pub fn token(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Per-tick displacement. During play exactly one axis is non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub const STILL: Velocity = Velocity { dx: 0, dy: 0 };
    pub const UP: Velocity = Velocity { dx: 0, dy: -1 };
    pub const DOWN: Velocity = Velocity { dx: 0, dy: 1 };
    pub const LEFT: Velocity = Velocity { dx: -1, dy: 0 };
    pub const RIGHT: Velocity = Velocity { dx: 1, dy: 0 };

    pub fn is_still(&self) -> bool {
        *self == Self::STILL
    }

    pub fn reversed(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.velocity() == *self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

impl fmt::Display for DeathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeathReason::WallCollision => write!(f, "hit the wall"),
            DeathReason::SelfCollision => write!(f, "bit itself"),
        }
    }
}

/// Playing field in cells. Valid cells are `[0, width) x [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: i32,
    pub height: i32,
}

impl FieldSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Logical grid of a drawing surface split into square cells.
    pub fn from_canvas(canvas_width: u32, canvas_height: u32, cell_size: u32) -> Self {
        Self::new(
            (canvas_width / cell_size) as i32,
            (canvas_height / cell_size) as i32,
        )
    }

    pub fn max_x(&self) -> i32 {
        self.width - 1
    }

    pub fn max_y(&self) -> i32 {
        self.height - 1
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
    }

    /// Projects an out-of-bounds coordinate to the opposite edge of its axis.
    /// In-bounds axes are left untouched.
    pub fn wrap(&self, point: Point) -> Point {
        Point::new(
            wrap_axis(point.x, self.max_x()),
            wrap_axis(point.y, self.max_y()),
        )
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }
}

fn wrap_axis(value: i32, max: i32) -> i32 {
    if value < 0 {
        max
    } else if value > max {
        0
    } else {
        value
    }
}
