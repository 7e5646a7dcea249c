use itertools::iproduct;
use std::fmt;

use crate::coordinates::{Cartesian2DCoordinate, CompassPrimary};
use crate::errors::*;
use crate::renderers::{render, TextRenderer};
use crate::units::{Height, WallLength, Width};
use crate::utils::fnv_hashset;
use crate::walls::{Orientation, Wall, WallSet};

/// A `width` x `height` grid of cells and the set of unit walls drawn on its grid lines.
///
/// The dimensions are fixed at construction. Walls can only be placed on the grid lines
/// inside the grid's bounds, lattice points range over `0..=width` x `0..=height`.
#[derive(Clone)]
pub struct Grid {
    width: Width,
    height: Height,
    walls: WallSet,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Grid :: width: {:?}, height: {:?}, walls: {:?}",
               self.width,
               self.height,
               self.walls.len())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render(self, TextRenderer::new()))
    }
}

impl Grid {
    /// Fails for a zero dimension, or for dimensions so large the lattice points cannot be
    /// counted in a `usize`.
    pub fn new(width: Width, height: Height) -> Result<Grid> {
        let (Width(w), Height(h)) = (width, height);
        let points = w.checked_add(1)
            .and_then(|columns| h.checked_add(1).and_then(|rows| columns.checked_mul(rows)));
        if w == 0 || h == 0 || points.is_none() {
            return Err(ErrorKind::Configuration(w, h).into());
        }

        // The wall set grows with the walls actually drawn.
        let grid = Grid {
            width,
            height,
            walls: fnv_hashset(0),
        };
        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    /// `new` guarantees the cell and point counts fit in a `usize`.
    #[inline]
    pub fn cells_count(&self) -> usize {
        self.width.0 * self.height.0
    }

    #[inline]
    pub fn points_count(&self) -> usize {
        (self.width.0 + 1) * (self.height.0 + 1)
    }

    /// Read only view of the current walls.
    #[inline]
    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    /// Add a unit wall. Returns true if the wall was not already present.
    pub fn add_wall(&mut self, x: usize, y: usize, orientation: Orientation) -> Result<bool> {
        self.insert_wall(Wall::new(x, y, orientation))
    }

    /// Add `length` consecutive unit walls starting at `(x, y)`, extending rightwards for
    /// horizontal runs and downwards for vertical runs.
    ///
    /// The whole run is bounds checked before anything is inserted, so on error the wall set is
    /// unchanged. Returns true if any unit wall of the run was not already present.
    pub fn add_wall_run(&mut self,
                        x: usize,
                        y: usize,
                        length: WallLength,
                        orientation: Orientation)
                        -> Result<bool> {
        self.check_run(x, y, length.0, orientation)?;

        let mut added = false;
        for i in 0..length.0 {
            let wall = match orientation {
                Orientation::Horizontal => Wall::horizontal(x + i, y),
                Orientation::Vertical => Wall::vertical(x, y + i),
            };
            added |= self.walls.insert(wall);
        }
        Ok(added)
    }

    /// Remove a unit wall. Removing an absent wall is a no-op.
    /// Returns true if a wall was removed.
    pub fn remove_wall(&mut self, x: usize, y: usize, orientation: Orientation) -> bool {
        self.walls.remove(&Wall::new(x, y, orientation))
    }

    pub fn contains_wall(&self, x: usize, y: usize, orientation: Orientation) -> bool {
        self.walls.contains(&Wall::new(x, y, orientation))
    }

    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }

    /// Does the wall lie on the grid lines within the grid's bounds.
    pub fn is_valid_wall(&self, wall: &Wall) -> bool {
        self.run_in_bounds(wall.x, wall.y, 1, wall.orientation)
    }

    /// Walls in the set that separate two cells, i.e. not on the outer border.
    pub fn interior_walls_count(&self) -> usize {
        let (Width(w), Height(h)) = (self.width, self.height);
        self.walls
            .iter()
            .filter(|wall| match wall.orientation {
                Orientation::Horizontal => wall.y > 0 && wall.y < h,
                Orientation::Vertical => wall.x > 0 && wall.x < w,
            })
            .count()
    }

    /// Cell coordinates in row major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = Cartesian2DCoordinate> {
        iproduct!(0..self.height.0, 0..self.width.0).map(|(y, x)| Cartesian2DCoordinate::new(x, y))
    }

    /// Lattice point coordinates in row major order.
    pub fn iter_points(&self) -> impl Iterator<Item = Cartesian2DCoordinate> {
        iproduct!(0..=self.height.0, 0..=self.width.0)
            .map(|(y, x)| Cartesian2DCoordinate::new(x, y))
    }

    #[inline]
    pub fn is_valid_cell(&self, coord: Cartesian2DCoordinate) -> bool {
        coord.x < self.width.0 && coord.y < self.height.0
    }

    #[inline]
    pub fn is_valid_point(&self, coord: Cartesian2DCoordinate) -> bool {
        coord.x <= self.width.0 && coord.y <= self.height.0
    }

    /// Is the lattice point on the outer rectangle of the grid.
    #[inline]
    pub fn is_border_point(&self, coord: Cartesian2DCoordinate) -> bool {
        self.is_valid_point(coord) &&
        (coord.x == 0 || coord.y == 0 || coord.x == self.width.0 || coord.y == self.height.0)
    }

    /// The adjacent cell in `direction`, if it lies in the grid.
    pub fn neighbour_cell(&self,
                          coord: Cartesian2DCoordinate,
                          direction: CompassPrimary)
                          -> Option<Cartesian2DCoordinate> {
        coord.offset(direction).filter(|&neighbour| self.is_valid_cell(neighbour))
    }

    /// The adjacent lattice point in `direction`, if it lies in the grid.
    pub fn neighbour_point(&self,
                           coord: Cartesian2DCoordinate,
                           direction: CompassPrimary)
                           -> Option<Cartesian2DCoordinate> {
        coord.offset(direction).filter(|&neighbour| self.is_valid_point(neighbour))
    }

    pub(crate) fn insert_wall(&mut self, wall: Wall) -> Result<bool> {
        self.check_run(wall.x, wall.y, 1, wall.orientation)?;
        Ok(self.walls.insert(wall))
    }

    pub(crate) fn take_wall(&mut self, wall: &Wall) -> bool {
        self.walls.remove(wall)
    }

    fn check_run(&self, x: usize, y: usize, length: usize, orientation: Orientation) -> Result<()> {
        if self.run_in_bounds(x, y, length, orientation) {
            Ok(())
        } else {
            Err(ErrorKind::BoundaryViolation(x, y, length, orientation, self.width.0, self.height.0)
                .into())
        }
    }

    fn run_in_bounds(&self, x: usize, y: usize, length: usize, orientation: Orientation) -> bool {
        let (Width(w), Height(h)) = (self.width, self.height);
        match orientation {
            Orientation::Horizontal => x.checked_add(length).map_or(false, |end| end <= w) && y <= h,
            Orientation::Vertical => x <= w && y.checked_add(length).map_or(false, |end| end <= h),
        }
    }
}

/// Number of unit boundaries shared by two adjacent cells, saturating at `usize::MAX`.
pub fn interior_boundaries_count(width: Width, height: Height) -> usize {
    let (Width(w), Height(h)) = (width, height);
    w.saturating_sub(1)
        .saturating_mul(h)
        .saturating_add(w.saturating_mul(h.saturating_sub(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::{iproduct, Itertools};

    fn grid(w: usize, h: usize) -> Grid {
        Grid::new(Width(w), Height(h)).expect("valid grid dimensions")
    }

    fn is_boundary_violation<T>(result: Result<T>) -> bool {
        match result {
            Err(Error(ErrorKind::BoundaryViolation(..), _)) => true,
            _ => false,
        }
    }

    #[test]
    fn zero_dimensions_are_a_configuration_error() {
        for &(w, h) in &[(0, 0), (0, 5), (5, 0)] {
            match Grid::new(Width(w), Height(h)) {
                Err(Error(ErrorKind::Configuration(ew, eh), _)) => assert_eq!((ew, eh), (w, h)),
                other => panic!("expected configuration error, got {:?}", other),
            }
        }
        assert!(Grid::new(Width(1), Height(1)).is_ok());
    }

    #[test]
    fn oversized_dimensions_are_a_configuration_error() {
        let half_bits = 1 << (usize::BITS / 2);
        let too_big = [(usize::MAX, 2), (2, usize::MAX), (usize::MAX / 2, 1), (half_bits, half_bits)];
        for &(w, h) in &too_big {
            match Grid::new(Width(w), Height(h)) {
                Err(Error(ErrorKind::Configuration(ew, eh), _)) => assert_eq!((ew, eh), (w, h)),
                other => panic!("expected configuration error, got {:?}", other),
            }
        }
    }

    #[test]
    fn large_grids_start_without_walls() {
        // (w + 1) * (h + 1) == usize::MAX - 1
        let mut g = grid(usize::MAX / 2 - 1, 1);
        assert!(g.walls().is_empty());
        assert_eq!(g.points_count(), usize::MAX - 1);
        assert_eq!(interior_boundaries_count(g.width(), g.height()), usize::MAX / 2 - 2);

        let far = usize::MAX / 2 - 2;
        assert!(g.add_wall(far, 1, Orientation::Horizontal).unwrap());
        assert!(is_boundary_violation(g.add_wall(far + 1, 1, Orientation::Horizontal)));
        assert_eq!(g.walls().len(), 1);

        let g = grid(1 << 15, 1 << 15);
        assert_eq!(g.cells_count(), 1 << 30);
        assert!(g.walls().is_empty());
    }

    #[test]
    fn add_wall_bounds() {
        for &(w, h) in &[(1, 1), (2, 3), (4, 2)] {
            let mut g = grid(w, h);
            for (x, y) in iproduct!(0..w + 3, 0..h + 3) {
                let horizontal_ok = x + 1 <= w && y <= h;
                let vertical_ok = x <= w && y + 1 <= h;

                let horizontal = g.add_wall(x, y, Orientation::Horizontal);
                assert_eq!(horizontal.is_ok(), horizontal_ok, "horizontal ({}, {}) in {}x{}", x, y, w, h);
                if !horizontal_ok {
                    assert!(is_boundary_violation(horizontal));
                }

                let vertical = g.add_wall(x, y, Orientation::Vertical);
                assert_eq!(vertical.is_ok(), vertical_ok, "vertical ({}, {}) in {}x{}", x, y, w, h);
                if !vertical_ok {
                    assert!(is_boundary_violation(vertical));
                }
            }
            // every unit segment of the lattice
            assert_eq!(g.walls().len(), w * (h + 1) + (w + 1) * h);
        }
    }

    #[test]
    fn huge_coordinates_do_not_overflow() {
        let mut g = grid(3, 3);
        assert!(is_boundary_violation(g.add_wall(usize::MAX, 0, Orientation::Horizontal)));
        assert!(is_boundary_violation(g.add_wall(0, usize::MAX, Orientation::Vertical)));
        assert!(is_boundary_violation(g.add_wall_run(1, 0, WallLength(usize::MAX), Orientation::Horizontal)));
        assert!(g.walls().is_empty());
    }

    #[test]
    fn repeated_insert_is_a_no_op() {
        let mut g = grid(3, 3);
        assert_eq!(g.add_wall(1, 1, Orientation::Vertical).unwrap(), true);
        assert_eq!(g.add_wall(1, 1, Orientation::Vertical).unwrap(), false);
        assert_eq!(g.add_wall(1, 1, Orientation::Horizontal).unwrap(), true);
        assert_eq!(g.walls().len(), 2);
    }

    #[test]
    fn wall_runs() {
        let mut g = grid(4, 4);
        assert!(g.add_wall_run(0, 2, WallLength(3), Orientation::Horizontal).unwrap());
        assert_eq!(g.walls().iter().cloned().sorted().collect::<Vec<_>>(),
                   vec![Wall::horizontal(0, 2), Wall::horizontal(1, 2), Wall::horizontal(2, 2)]);

        // Overlapping run adds only the new unit wall
        assert!(g.add_wall_run(2, 2, WallLength(2), Orientation::Horizontal).unwrap());
        assert_eq!(g.walls().len(), 4);
        assert!(!g.add_wall_run(0, 2, WallLength(4), Orientation::Horizontal).unwrap());

        assert!(g.add_wall_run(4, 0, WallLength(4), Orientation::Vertical).unwrap());
        assert_eq!(g.walls().len(), 8);
        assert!(g.contains_wall(4, 3, Orientation::Vertical));
    }

    #[test]
    fn wall_runs_are_all_or_nothing() {
        let mut g = grid(4, 4);
        g.add_wall(0, 0, Orientation::Horizontal).unwrap();
        let before = g.walls().clone();

        // None of these runs fit entirely
        assert!(is_boundary_violation(g.add_wall_run(2, 1, WallLength(3), Orientation::Horizontal)));
        assert!(is_boundary_violation(g.add_wall_run(1, 2, WallLength(3), Orientation::Vertical)));
        assert!(is_boundary_violation(g.add_wall_run(5, 0, WallLength(1), Orientation::Vertical)));
        assert_eq!(g.walls(), &before);
    }

    #[test]
    fn zero_length_run() {
        let mut g = grid(2, 2);
        assert_eq!(g.add_wall_run(2, 2, WallLength(0), Orientation::Horizontal).unwrap(), false);
        assert!(g.walls().is_empty());
        assert!(is_boundary_violation(g.add_wall_run(3, 0, WallLength(0), Orientation::Horizontal)));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut g = grid(2, 2);
        g.add_wall(1, 0, Orientation::Vertical).unwrap();
        assert!(g.remove_wall(1, 0, Orientation::Vertical));
        assert!(!g.remove_wall(1, 0, Orientation::Vertical));
        assert!(!g.remove_wall(7, 7, Orientation::Horizontal));
        assert!(g.walls().is_empty());
    }

    #[test]
    fn walls_view_is_stable() {
        let mut g = grid(3, 2);
        g.add_wall_run(0, 1, WallLength(3), Orientation::Horizontal).unwrap();
        let first = g.walls().clone();
        let second = g.walls().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn interior_walls() {
        let mut g = grid(3, 2);
        assert_eq!(interior_boundaries_count(g.width(), g.height()), 7);
        g.add_wall_run(0, 0, WallLength(3), Orientation::Horizontal).unwrap(); // top border
        g.add_wall_run(0, 1, WallLength(3), Orientation::Horizontal).unwrap();
        g.add_wall(3, 1, Orientation::Vertical).unwrap(); // right border
        g.add_wall(1, 1, Orientation::Vertical).unwrap();
        assert_eq!(g.interior_walls_count(), 4);
    }

    #[test]
    fn cell_and_point_iteration() {
        let g = grid(2, 1);
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(g.iter_cells().collect::<Vec<_>>(), vec![gc(0, 0), gc(1, 0)]);
        assert_eq!(g.iter_points().collect::<Vec<_>>(),
                   vec![gc(0, 0), gc(1, 0), gc(2, 0), gc(0, 1), gc(1, 1), gc(2, 1)]);
        assert_eq!(g.points_count(), 6);
    }

    #[test]
    fn neighbours() {
        let g = grid(2, 2);
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);

        assert_eq!(g.neighbour_cell(gc(0, 0), CompassPrimary::North), None);
        assert_eq!(g.neighbour_cell(gc(0, 0), CompassPrimary::South), Some(gc(0, 1)));
        assert_eq!(g.neighbour_cell(gc(1, 1), CompassPrimary::East), None);
        assert_eq!(g.neighbour_cell(gc(1, 1), CompassPrimary::West), Some(gc(0, 1)));

        assert_eq!(g.neighbour_point(gc(1, 1), CompassPrimary::East), Some(gc(2, 1)));
        assert_eq!(g.neighbour_point(gc(2, 2), CompassPrimary::South), None);

        assert!(g.is_border_point(gc(0, 1)));
        assert!(g.is_border_point(gc(2, 2)));
        assert!(!g.is_border_point(gc(1, 1)));
        assert!(!g.is_border_point(gc(3, 0)));
    }
}
