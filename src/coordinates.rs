use std::convert::From;

/// An `(x, y)` position on the maze lattice.
///
/// The same type addresses cells (`0..width`, `0..height`) and the grid-line
/// intersections between them (`0..=width`, `0..=height`). `y` grows downwards.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: usize,
    pub y: usize,
}

impl Cartesian2DCoordinate {
    pub fn new(x: usize, y: usize) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    /// The coordinate one step away in the given direction.
    /// Returns None if that would leave the positive quadrant.
    pub fn offset(self, direction: CompassPrimary) -> Option<Cartesian2DCoordinate> {
        let Cartesian2DCoordinate { x, y } = self;
        match direction {
            CompassPrimary::North => y.checked_sub(1).map(|y| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::South => Some(Cartesian2DCoordinate::new(x, y + 1)),
            CompassPrimary::West => x.checked_sub(1).map(|x| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::East => Some(Cartesian2DCoordinate::new(x + 1, y)),
        }
    }

    #[inline]
    pub fn row_major_index(self, row_length: usize) -> usize {
        self.y * row_length + self.x
    }

    #[inline]
    pub fn from_row_major_index(index: usize, row_length: usize) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(index % row_length, index / row_length)
    }
}

impl From<(usize, usize)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (usize, usize)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

/// North is up (towards `y = 0`), West is left (towards `x = 0`).
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    South,
    West,
    East,
}

/// Up, down, left, right: the order neighbours are probed in.
pub const COMPASS_PRIMARY_DIRECTIONS: [CompassPrimary; 4] = [
    CompassPrimary::North,
    CompassPrimary::South,
    CompassPrimary::West,
    CompassPrimary::East,
];
