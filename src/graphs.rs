//! Graph views of a grid's walls, for analysing a generated maze with `petgraph`.
//!
//! Node indices follow row major order: in a passage graph node `i` is the cell
//! `(i % width, i / width)`, in a wall graph it is the lattice point `(i % (width + 1), i / (width + 1))`.

use petgraph::algo::connected_components;
use petgraph::graph::NodeIndex;
use petgraph::{Graph, Undirected};

use crate::coordinates::{Cartesian2DCoordinate, CompassPrimary};
use crate::grid::{interior_boundaries_count, Grid};
use crate::units::Width;
use crate::walls::Wall;

/// Nodes are cells or lattice points, edges carry the wall they correspond to.
pub type MazeGraph = Graph<Cartesian2DCoordinate, Wall, Undirected>;

/// Cells linked wherever the boundary between two adjacent cells has no wall.
pub fn passage_graph(grid: &Grid) -> MazeGraph {
    let Width(width) = grid.width();
    let edges_hint = interior_boundaries_count(grid.width(), grid.height());

    let mut graph = MazeGraph::with_capacity(grid.cells_count(), edges_hint);
    for cell in grid.iter_cells() {
        let _ = graph.add_node(cell);
    }

    for cell in grid.iter_cells() {
        // Looking only South and East visits each shared boundary once.
        for &direction in &[CompassPrimary::South, CompassPrimary::East] {
            if let Some(neighbour) = grid.neighbour_cell(cell, direction) {
                let boundary = Wall::from_cell_side(cell, direction);
                if !grid.walls().contains(&boundary) {
                    let _ = graph.add_edge(NodeIndex::new(cell.row_major_index(width)),
                                           NodeIndex::new(neighbour.row_major_index(width)),
                                           boundary);
                }
            }
        }
    }

    graph
}

/// Lattice points joined by the walls between them.
pub fn wall_graph(grid: &Grid) -> MazeGraph {
    let row_length = grid.width().0 + 1;

    let mut graph = MazeGraph::with_capacity(grid.points_count(), grid.walls().len());
    for point in grid.iter_points() {
        let _ = graph.add_node(point);
    }

    for wall in grid.walls() {
        let (start, end) = wall.endpoints();
        let _ = graph.add_edge(NodeIndex::new(start.row_major_index(row_length)),
                               NodeIndex::new(end.row_major_index(row_length)),
                               *wall);
    }

    graph
}

/// Is the graph a single tree touching every node, i.e. a perfect maze when given a passage graph.
pub fn is_spanning_tree(graph: &MazeGraph) -> bool {
    graph.node_count() > 0 && graph.edge_count() == graph.node_count() - 1 &&
    connected_components(graph) == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Height;
    use crate::walls::Orientation;
    use itertools::Itertools;

    fn grid(w: usize, h: usize) -> Grid {
        Grid::new(Width(w), Height(h)).expect("valid grid dimensions")
    }

    fn linked_cells(graph: &MazeGraph) -> Vec<(Cartesian2DCoordinate, Cartesian2DCoordinate)> {
        graph.raw_edges()
            .iter()
            .map(|edge| (graph[edge.source()], graph[edge.target()]))
            .sorted()
            .collect()
    }

    #[test]
    fn open_grid_links_every_neighbour() {
        let g = grid(2, 2);
        let passages = passage_graph(&g);
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);

        assert_eq!(passages.node_count(), 4);
        assert_eq!(linked_cells(&passages),
                   vec![(gc(0, 0), gc(0, 1)), (gc(0, 0), gc(1, 0)), (gc(0, 1), gc(1, 1)), (gc(1, 0), gc(1, 1))]);
        assert!(!is_spanning_tree(&passages));
    }

    #[test]
    fn walls_cut_passages() {
        let mut g = grid(2, 2);
        g.add_wall(1, 0, Orientation::Vertical).unwrap();
        let passages = passage_graph(&g);
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);

        assert_eq!(linked_cells(&passages),
                   vec![(gc(0, 0), gc(0, 1)), (gc(0, 1), gc(1, 1)), (gc(1, 0), gc(1, 1))]);
        assert!(is_spanning_tree(&passages));

        // border walls do not affect the passages
        g.add_wall_run(0, 0, crate::units::WallLength(2), Orientation::Horizontal).unwrap();
        assert_eq!(passage_graph(&g).edge_count(), 3);
    }

    #[test]
    fn single_cell_is_a_spanning_tree() {
        assert!(is_spanning_tree(&passage_graph(&grid(1, 1))));
    }

    #[test]
    fn wall_graph_joins_endpoints() {
        let mut g = grid(2, 1);
        g.add_wall(1, 0, Orientation::Vertical).unwrap();
        g.add_wall(0, 1, Orientation::Horizontal).unwrap();

        let walls = wall_graph(&g);
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(walls.node_count(), 6);
        assert_eq!(linked_cells(&walls),
                   vec![(gc(0, 1), gc(1, 1)), (gc(1, 0), gc(1, 1))]);
        assert_eq!(walls[NodeIndex::new(4)], gc(1, 1));
    }
}
