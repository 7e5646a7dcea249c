use bit_set::BitSet;
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use smallvec::SmallVec;
use std::str::FromStr;

use crate::cells::CellArena;
use crate::coordinates::{Cartesian2DCoordinate, COMPASS_PRIMARY_DIRECTIONS};
use crate::errors::*;
use crate::grid::Grid;
use crate::units::{Height, Width};
use crate::utils::{fnv_hashmap, FnvHashMap};
use crate::walls::Wall;

/// The random number generator the crate seeds by default. Any `rand::Rng` can drive the generators.
pub type MazeRng = XorShiftRng;

/// A generator that produces the same mazes for the same seed.
pub fn seeded_rng(seed: u64) -> MazeRng {
    XorShiftRng::seed_from_u64(seed)
}

pub fn entropy_rng() -> MazeRng {
    XorShiftRng::from_entropy()
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorKind {
    WallGrowth,
    RecursiveBacktracker,
}

impl Default for GeneratorKind {
    fn default() -> Self {
        GeneratorKind::RecursiveBacktracker
    }
}

impl FromStr for GeneratorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<GeneratorKind> {
        match s {
            "wall-growth" => Ok(GeneratorKind::WallGrowth),
            "recursive-backtracker" => Ok(GeneratorKind::RecursiveBacktracker),
            _ => Err(format!("unknown maze generator '{}'", s).into()),
        }
    }
}

/// What a generator run did to the grid.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct GenerationStats {
    /// Loop iterations until the generator finished.
    pub steps: usize,
    pub walls_added: usize,
    pub walls_removed: usize,
    /// Interior points connected by the wall growth, or cells visited by the backtracker.
    pub connected: usize,
}

/// Run the chosen generator over the grid.
pub fn generate<R: Rng>(grid: &mut Grid, kind: GeneratorKind, rng: &mut R) -> Result<GenerationStats> {
    match kind {
        GeneratorKind::WallGrowth => wall_growth(grid, rng),
        GeneratorKind::RecursiveBacktracker => recursive_backtracker(grid, rng),
    }
}

/// Lattice points with constant time insert, remove and uniform random choice.
#[derive(Debug)]
struct PointPool {
    points: Vec<Cartesian2DCoordinate>,
    positions: FnvHashMap<Cartesian2DCoordinate, usize>,
}

impl PointPool {
    fn with_capacity(capacity: usize) -> PointPool {
        PointPool {
            points: Vec::with_capacity(capacity),
            positions: fnv_hashmap(capacity),
        }
    }

    fn insert(&mut self, point: Cartesian2DCoordinate) -> bool {
        if self.positions.contains_key(&point) {
            return false;
        }
        self.positions.insert(point, self.points.len());
        self.points.push(point);
        true
    }

    fn remove(&mut self, point: Cartesian2DCoordinate) -> bool {
        match self.positions.remove(&point) {
            Some(index) => {
                let _ = self.points.swap_remove(index);
                if let Some(&moved) = self.points.get(index) {
                    self.positions.insert(moved, index);
                }
                true
            }
            None => false,
        }
    }

    fn choose<R: Rng>(&self, rng: &mut R) -> Option<Cartesian2DCoordinate> {
        self.points.choose(rng).cloned()
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}

/// Grow walls inward from the border of the grid until every interior lattice point is
/// attached to it.
///
/// The "source" points start as the whole border and the "loose" points as every interior
/// point. Each step picks a random source point and looks for loose points next to it
/// (up, down, left, right). A random one of those is joined to the source point with a unit wall
/// and becomes a source point itself. A source point that had at most one loose neighbour is
/// exhausted and leaves the source set; one with several stays and may be picked again.
///
/// Every interior point ends up with exactly one wall from the growth, and the walls form a
/// forest with one border point per tree, so no region of cells is ever closed off.
pub fn wall_growth<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<GenerationStats> {
    let (Width(width), Height(height)) = (grid.width(), grid.height());
    let row_length = width + 1;

    let border_count = 2 * (width + height);
    let mut source = PointPool::with_capacity(grid.points_count());
    let mut loose = BitSet::with_capacity(grid.points_count());
    for point in grid.iter_points() {
        if grid.is_border_point(point) {
            source.insert(point);
        } else {
            loose.insert(point.row_major_index(row_length));
        }
    }
    debug_assert_eq!(source.len(), border_count);
    debug!("wall growth over {}x{} cells: {} source points, {} loose points",
           width,
           height,
           source.len(),
           loose.len());

    let mut stats = GenerationStats::default();
    while !loose.is_empty() {
        // A loose point always has a neighbour that is still a source point.
        let point = source.choose(rng).ok_or("wall growth ran out of source points")?;
        stats.steps += 1;

        let candidates = COMPASS_PRIMARY_DIRECTIONS.iter()
            .filter_map(|&dir| {
                grid.neighbour_point(point, dir)
                    .filter(|neighbour| loose.contains(neighbour.row_major_index(row_length)))
                    .map(|neighbour| (dir, neighbour))
            })
            .collect::<SmallVec<[_; 4]>>();

        let (chosen, exhausted) = match candidates.len() {
            0 => (None, true),
            1 => (Some(candidates[0]), true),
            n => (Some(candidates[rng.gen_range(0..n)]), false),
        };

        if let Some((direction, neighbour)) = chosen {
            let wall = Wall::from_point(point, direction)
                .ok_or("wall growth stepped off the lattice")?;
            if grid.insert_wall(wall).chain_err(|| "wall growth produced an invalid wall")? {
                stats.walls_added += 1;
            }
            loose.remove(neighbour.row_major_index(row_length));
            source.insert(neighbour);
            stats.connected += 1;
            trace!("wall growth {:?} -> {:?}", point, neighbour);
        }

        if exhausted {
            source.remove(point);
        }
    }

    debug!("wall growth finished after {} steps, {} walls added", stats.steps, stats.walls_added);
    Ok(stats)
}

/// Apply the recursive backtracker maze generation algorithm to the grid.
///
/// Every boundary between two neighbouring cells starts walled. Starting from the bottom right
/// cell we walk in random directions, knocking down the wall into each cell we have not visited
/// yet and pushing where we came from onto a stack. When the current cell has no unexplored
/// direction left we backtrack by popping the stack. The walls knocked down form a spanning
/// tree over the cells: a perfect maze with long winding passages.
///
/// Iterative, the depth first path lives on an explicit stack.
pub fn recursive_backtracker<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<GenerationStats> {
    let (Width(width), Height(height)) = (grid.width(), grid.height());
    let mut stats = GenerationStats::default();

    let cell_coords = grid.iter_cells().collect::<Vec<_>>();
    for cell in cell_coords {
        if cell.y > 0 && grid.insert_wall(Wall::horizontal(cell.x, cell.y))? {
            stats.walls_added += 1;
        }
        if cell.x > 0 && grid.insert_wall(Wall::vertical(cell.x, cell.y))? {
            stats.walls_added += 1;
        }
    }

    let mut cells = CellArena::new(width, height);
    let mut stack: Vec<Cartesian2DCoordinate> = Vec::with_capacity(cells.len());

    let mut current = Cartesian2DCoordinate::new(width - 1, height - 1);
    cells.visit(current).ok_or("backtracker start cell is outside the grid")?;
    stats.connected = 1;
    debug!("recursive backtracker over {}x{} cells from {:?}", width, height, current);

    loop {
        let cell = cells.get_mut(current).ok_or("backtracker lost track of the current cell")?;

        if cell.has_available_moves() {
            let direction = cell.take_random_direction(rng)
                .ok_or("backtracker cell ran out of directions")?;
            stats.steps += 1;
            // Directions are only ever offered towards cells inside the grid.
            let neighbour = grid.neighbour_cell(current, direction)
                .ok_or("backtracker stepped outside the grid")?;

            let first_visit = cells.visit(neighbour)
                .ok_or("backtracker neighbour is outside the cell arena")?;
            if first_visit {
                stack.push(current);
                if grid.take_wall(&Wall::from_cell_side(current, direction)) {
                    stats.walls_removed += 1;
                }
                trace!("carved {:?} -> {:?}", current, neighbour);
                current = neighbour;
                stats.connected += 1;
            }
        } else {
            match stack.pop() {
                Some(previous) => {
                    stats.steps += 1;
                    current = previous;
                }
                None => break,
            }
        }
    }

    debug_assert_eq!(cells.visited_count(), cells.len());
    debug!("recursive backtracker finished after {} steps, {} walls removed",
           stats.steps,
           stats.walls_removed);
    Ok(stats)
}
