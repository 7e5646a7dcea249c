use log::debug;
use serde_derive::Deserialize;

use crate::errors::*;
use crate::generators::{entropy_rng, generate, seeded_rng, GenerationStats, GeneratorKind, MazeRng};
use crate::grid::Grid;
use crate::units::{Height, Width};

/// Everything needed to produce a maze, as a host might load it from a settings file.
///
/// Without a `seed` every build draws a different maze.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub algorithm: GeneratorKind,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl MazeConfig {
    pub fn new(width: usize, height: usize, algorithm: GeneratorKind) -> MazeConfig {
        MazeConfig {
            width,
            height,
            algorithm,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> MazeConfig {
        self.seed = Some(seed);
        self
    }

    pub fn rng(&self) -> MazeRng {
        match self.seed {
            Some(seed) => seeded_rng(seed),
            None => entropy_rng(),
        }
    }

    /// Create the grid and run the configured generator over it.
    pub fn build(&self) -> Result<(Grid, GenerationStats)> {
        let mut grid = Grid::new(Width(self.width), Height(self.height))?;
        let mut rng = self.rng();
        debug!("building {:?}", self);

        let stats = generate(&mut grid, self.algorithm, &mut rng)
            .chain_err(|| format!("failed to generate a {:?} maze", self.algorithm))?;
        Ok((grid, stats))
    }
}
