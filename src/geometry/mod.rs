use num_traits::Float;

use std::fmt;


/// Cell coordinate on the grid
/// Equality and hashing use the exact (x, y) pair, so a Coord doubles as the
/// key for frontier and closed-set lookups
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Apply a neighbor offset
    /// Returns None if either component would go negative or overflow.
    /// Upper grid bounds are the grid's concern, see `CostGrid::contains`
    pub fn checked_add(self, offset: Offset) -> Option<Coord> {
        Some(Coord {
            x: self.x.checked_add_signed(offset.dx)?,
            y: self.y.checked_add_signed(offset.dy)?,
        })
    }

    /// Offset that leads from self to other, if they are 8-neighbors
    pub fn offset_to(self, other: Coord) -> Option<Offset> {
        let dx = other.x as isize - self.x as isize;
        let dy = other.y as isize - self.y as isize;
        NEIGHBOR_OFFSETS.iter().copied().find(|o| o.dx == dx && o.dy == dy)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}


/// Single step on the 8-connected grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offset {
    pub dx: isize,
    pub dy: isize,
}

impl Offset {
    const fn new(dx: isize, dy: isize) -> Self {
        Self { dx, dy }
    }

    pub fn is_diagonal(&self) -> bool {
        self.dx != 0 && self.dy != 0
    }

    /// Base cost of taking this step, added on top of the entered cell's cost
    /// 1 for orthogonal moves, sqrt(2) for diagonal moves
    pub fn step_base(&self) -> f64 {
        if self.is_diagonal() {
            std::f64::consts::SQRT_2
        } else {
            1.0
        }
    }
}

/// The 8 neighbor offsets, orthogonal first then diagonal
pub static NEIGHBOR_OFFSETS: [Offset; 8] = [
    Offset::new(0, -1),
    Offset::new(0, 1),
    Offset::new(-1, 0),
    Offset::new(1, 0),
    Offset::new(-1, -1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(1, 1),
];


/// Octile (diagonal) distance
/// Exact shortest distance on an open 8-connected grid with unit orthogonal
/// and sqrt(2) diagonal steps
pub fn octile_distance<T>(dx: T, dy: T) -> T
where
    T: Float,
    {
    let two = T::one() + T::one();
    let (dx, dy) = (dx.abs(), dy.abs());
    (dx + dy) + (two.sqrt() - two) * dx.min(dy)
}

/// Heuristic estimate of the remaining cost between two cells
/// Admissible and consistent as long as every entered cell costs >= 0,
/// since the step base alone already covers the octile distance
pub fn heuristic(p: Coord, q: Coord) -> f64 {
    let dx = p.x.abs_diff(q.x) as f64;
    let dy = p.y.abs_diff(q.y) as f64;
    octile_distance(dx, dy)
}
