use rand::Rng;
use smallvec::SmallVec;

use crate::coordinates::{Cartesian2DCoordinate, CompassPrimary, COMPASS_PRIMARY_DIRECTIONS};

pub type DirectionSmallVec = SmallVec<[CompassPrimary; 4]>;

/// Working state of one cell while carving a maze.
#[derive(Debug, Clone)]
pub struct Cell {
    visited: bool,
    unexplored: DirectionSmallVec,
}

impl Cell {
    /// A new unvisited cell that may move in every direction staying inside a
    /// `width` x `height` grid.
    pub fn new(coordinate: Cartesian2DCoordinate, width: usize, height: usize) -> Cell {
        let Cartesian2DCoordinate { x, y } = coordinate;
        let unexplored = COMPASS_PRIMARY_DIRECTIONS.iter()
            .cloned()
            .filter(|dir| match *dir {
                CompassPrimary::North => y > 0,
                CompassPrimary::South => y + 1 < height,
                CompassPrimary::West => x > 0,
                CompassPrimary::East => x + 1 < width,
            })
            .collect();

        Cell {
            visited: false,
            unexplored,
        }
    }

    #[inline]
    pub fn has_available_moves(&self) -> bool {
        !self.unexplored.is_empty()
    }

    /// Pick one of the unexplored directions uniformly at random and mark it explored.
    pub fn take_random_direction<R: Rng>(&mut self, rng: &mut R) -> Option<CompassPrimary> {
        if self.unexplored.is_empty() {
            None
        } else {
            let index = rng.gen_range(0..self.unexplored.len());
            Some(self.unexplored.remove(index))
        }
    }
}

/// All cells of a grid in a flat row major buffer.
#[derive(Debug, Clone)]
pub struct CellArena {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl CellArena {
    pub fn new(width: usize, height: usize) -> CellArena {
        let cells = (0..width * height)
            .map(|i| Cell::new(Cartesian2DCoordinate::from_row_major_index(i, width), width, height))
            .collect();
        CellArena {
            cells,
            width,
            height,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if coord.x < self.width && coord.y < self.height {
            Some(coord.row_major_index(self.width))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, coord: Cartesian2DCoordinate) -> Option<&mut Cell> {
        match self.index(coord) {
            Some(i) => Some(&mut self.cells[i]),
            None => None,
        }
    }

    /// Mark a cell visited. Returns true if it was not visited before, None if there is no such cell.
    pub fn visit(&mut self, coord: Cartesian2DCoordinate) -> Option<bool> {
        self.get_mut(coord).map(|cell| {
            let first_visit = !cell.visited;
            cell.visited = true;
            first_visit
        })
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }
}
