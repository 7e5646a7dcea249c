//! The boundary between a generated maze and whatever draws it.
//!
//! A host implements `WallRenderer` and hands it to `render`, which feeds it the grid
//! dimensions and then every wall of the grid in a stable order.

use itertools::Itertools;

use crate::grid::Grid;
use crate::units::{Height, Width};
use crate::utils::{fnv_hashset, FnvHashSet};
use crate::walls::Wall;

pub trait WallRenderer {
    type Output;

    /// Called once before any wall with the grid dimensions in cells.
    fn begin(&mut self, width: Width, height: Height);

    fn draw_wall(&mut self, wall: Wall);

    fn finish(self) -> Self::Output;
}

/// Feed the grid's walls to a renderer, sorted so the output does not depend on hash order.
pub fn render<R: WallRenderer>(grid: &Grid, mut renderer: R) -> R::Output {
    renderer.begin(grid.width(), grid.height());
    for wall in grid.walls().iter().sorted() {
        renderer.draw_wall(*wall);
    }
    renderer.finish()
}

/// Draws a maze with unicode box drawing characters.
///
/// The outer border is always drawn, except for an entrance above the top left cell and an
/// exit below the bottom right cell.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    width: usize,
    height: usize,
    walls: FnvHashSet<Wall>,
}

const WALL_L: char = '╴';
const WALL_R: char = '╶';
const WALL_U: char = '╵';
const WALL_D: char = '╷';
const WALL_LR_3: &str = "───";
const WALL_LR: char = '─';
const WALL_UD: char = '│';
const WALL_LD: char = '┐';
const WALL_RU: char = '└';
const WALL_LU: char = '┘';
const WALL_RD: char = '┌';
const WALL_LRU: char = '┴';
const WALL_LRD: char = '┬';
const WALL_LRUD: char = '┼';
const WALL_RUD: char = '├';
const WALL_LUD: char = '┤';
const CELL_BODY: &str = "   ";

impl TextRenderer {
    pub fn new() -> TextRenderer {
        TextRenderer {
            width: 0,
            height: 0,
            walls: fnv_hashset(0),
        }
    }

    fn has_wall(&self, wall: Option<Wall>) -> bool {
        wall.map_or(false, |w| self.walls.contains(&w))
    }

    /// The junction glyph at a lattice point, from which of its four arms carry a wall.
    fn junction(&self, x: usize, y: usize) -> char {
        let left = self.has_wall(x.checked_sub(1).map(|x| Wall::horizontal(x, y)));
        let right = self.has_wall(Some(Wall::horizontal(x, y)));
        let up = self.has_wall(y.checked_sub(1).map(|y| Wall::vertical(x, y)));
        let down = self.has_wall(Some(Wall::vertical(x, y)));

        match (left, right, up, down) {
            (false, false, false, false) => ' ',
            (true, false, false, false) => WALL_L,
            (false, true, false, false) => WALL_R,
            (false, false, true, false) => WALL_U,
            (false, false, false, true) => WALL_D,
            (true, true, false, false) => WALL_LR,
            (false, false, true, true) => WALL_UD,
            (true, false, false, true) => WALL_LD,
            (false, true, true, false) => WALL_RU,
            (true, false, true, false) => WALL_LU,
            (false, true, false, true) => WALL_RD,
            (true, true, true, false) => WALL_LRU,
            (true, true, false, true) => WALL_LRD,
            (true, true, true, true) => WALL_LRUD,
            (false, true, true, true) => WALL_RUD,
            (true, false, true, true) => WALL_LUD,
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        TextRenderer::new()
    }
}

impl WallRenderer for TextRenderer {
    type Output = String;

    fn begin(&mut self, width: Width, height: Height) {
        let (Width(w), Height(h)) = (width, height);
        self.width = w;
        self.height = h;
        self.walls = fnv_hashset(2 * (w + h));

        for x in 0..w {
            if x != 0 {
                self.walls.insert(Wall::horizontal(x, 0));
            }
            if x != w - 1 {
                self.walls.insert(Wall::horizontal(x, h));
            }
        }
        for y in 0..h {
            self.walls.insert(Wall::vertical(0, y));
            self.walls.insert(Wall::vertical(w, y));
        }
    }

    fn draw_wall(&mut self, wall: Wall) {
        self.walls.insert(wall);
    }

    fn finish(self) -> String {
        let mut output = String::new();
        for y in 0..=self.height {
            for x in 0..=self.width {
                output.push(self.junction(x, y));
                if x < self.width {
                    let segment = if self.walls.contains(&Wall::horizontal(x, y)) {
                        WALL_LR_3
                    } else {
                        CELL_BODY
                    };
                    output.push_str(segment);
                }
            }
            output.push('\n');

            if y < self.height {
                for x in 0..=self.width {
                    let side = if self.walls.contains(&Wall::vertical(x, y)) {
                        WALL_UD
                    } else {
                        ' '
                    };
                    output.push(side);
                    if x < self.width {
                        output.push_str(CELL_BODY);
                    }
                }
                output.push('\n');
            }
        }
        output
    }
}
