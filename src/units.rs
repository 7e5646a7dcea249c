/// Maze width in cells.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub usize);
/// Maze height in cells.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub usize);

/// Number of consecutive unit walls in a run.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct WallLength(pub usize);
