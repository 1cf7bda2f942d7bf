use crate::grid::SolidGrid;
use direction::CardinalDirection;
use grid_2d::Coord;
use std::slice;

/// Order in which neighbours are expanded.
pub static CARDINAL_DIRECTIONS: [CardinalDirection; 4] = [
    CardinalDirection::North,
    CardinalDirection::East,
    CardinalDirection::South,
    CardinalDirection::West,
];

/// In-bounds cardinal neighbours of a cell, paired with the direction taken
/// to reach them. Solid cells are not filtered out.
pub struct CardinalNeighbours<'a, G> {
    grid: &'a G,
    coord: Coord,
    directions: slice::Iter<'static, CardinalDirection>,
}

impl<'a, G: SolidGrid> CardinalNeighbours<'a, G> {
    pub fn new(grid: &'a G, coord: Coord) -> Self {
        Self {
            grid,
            coord,
            directions: CARDINAL_DIRECTIONS.iter(),
        }
    }
}

impl<'a, G: SolidGrid> Iterator for CardinalNeighbours<'a, G> {
    type Item = (CardinalDirection, Coord);
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&direction) = self.directions.next() {
            let neighbour_coord = self.coord + direction.coord();
            if self.grid.in_bounds(neighbour_coord) {
                return Some((direction, neighbour_coord));
            }
        }
        None
    }
}
