use crate::coordinates::{Cartesian2DCoordinate, CompassPrimary};
use crate::utils::FnvHashSet;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A unit wall segment on the grid lines.
///
/// A horizontal wall at `(x, y)` joins the lattice points `(x, y)` and `(x + 1, y)`,
/// a vertical wall at `(x, y)` joins `(x, y)` and `(x, y + 1)`. Viewed from the cells,
/// the horizontal wall at `(x, y)` is the top side of cell `(x, y)` and the vertical
/// wall at `(x, y)` is its left side.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Wall {
    pub x: usize,
    pub y: usize,
    pub orientation: Orientation,
}

pub type WallSet = FnvHashSet<Wall>;

impl Wall {
    pub fn new(x: usize, y: usize, orientation: Orientation) -> Wall {
        Wall { x, y, orientation }
    }

    #[inline]
    pub fn horizontal(x: usize, y: usize) -> Wall {
        Wall::new(x, y, Orientation::Horizontal)
    }

    #[inline]
    pub fn vertical(x: usize, y: usize) -> Wall {
        Wall::new(x, y, Orientation::Vertical)
    }

    /// The two lattice points the wall joins, start first.
    pub fn endpoints(&self) -> (Cartesian2DCoordinate, Cartesian2DCoordinate) {
        let start = Cartesian2DCoordinate::new(self.x, self.y);
        let end = match self.orientation {
            Orientation::Horizontal => Cartesian2DCoordinate::new(self.x + 1, self.y),
            Orientation::Vertical => Cartesian2DCoordinate::new(self.x, self.y + 1),
        };
        (start, end)
    }

    /// The wall drawn from a lattice point to its neighbour in `direction`.
    ///
    /// None if the neighbour would have a negative coordinate.
    pub fn from_point(point: Cartesian2DCoordinate, direction: CompassPrimary) -> Option<Wall> {
        let Cartesian2DCoordinate { x, y } = point;
        match direction {
            CompassPrimary::North => y.checked_sub(1).map(|y| Wall::vertical(x, y)),
            CompassPrimary::South => Some(Wall::vertical(x, y)),
            CompassPrimary::West => x.checked_sub(1).map(|x| Wall::horizontal(x, y)),
            CompassPrimary::East => Some(Wall::horizontal(x, y)),
        }
    }

    /// The side of a cell facing `direction`, i.e. the wall between the cell and
    /// its neighbour in that direction.
    pub fn from_cell_side(cell: Cartesian2DCoordinate, direction: CompassPrimary) -> Wall {
        let Cartesian2DCoordinate { x, y } = cell;
        match direction {
            CompassPrimary::North => Wall::horizontal(x, y),
            CompassPrimary::South => Wall::horizontal(x, y + 1),
            CompassPrimary::West => Wall::vertical(x, y),
            CompassPrimary::East => Wall::vertical(x + 1, y),
        }
    }
}
