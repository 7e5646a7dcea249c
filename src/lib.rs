//! **wallmaze** generates rectangular mazes as sets of unit walls.
//!
//! A host creates a `Grid`, runs one of the generators over it with a random number generator
//! of its choosing, then reads back `Grid::walls` to draw them, for example through a
//! `renderers::WallRenderer`.
//!
//! ```
//! use wallmaze::{generators, Grid, Height, Width};
//!
//! let mut grid = Grid::new(Width(10), Height(8)).unwrap();
//! let mut rng = generators::seeded_rng(42);
//! generators::recursive_backtracker(&mut grid, &mut rng).unwrap();
//! println!("{}", grid);
//! ```

pub mod config;
pub mod coordinates;
pub mod errors;
pub mod generators;
pub mod graphs;
pub mod grid;
pub mod renderers;
pub mod units;
pub mod walls;
mod cells;
mod utils;

pub use crate::config::MazeConfig;
pub use crate::generators::{GenerationStats, GeneratorKind};
pub use crate::grid::Grid;
pub use crate::units::{Height, WallLength, Width};
pub use crate::walls::{Orientation, Wall, WallSet};
