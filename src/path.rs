use crate::neighbours::CARDINAL_DIRECTIONS;
use direction::CardinalDirection;
use grid_2d::{Coord, Grid};
use std::slice;

pub(crate) trait PathNode {
    fn from_parent(&self) -> Option<CardinalDirection>;
    fn coord(&self) -> Coord;
}

/// Follows parent links back from the node at `goal_index` until reaching a
/// node without a parent, then writes the cells into `path` start first.
pub(crate) fn make_path<N: PathNode>(
    node_grid: &Grid<N>,
    goal_index: usize,
    path: &mut Vec<Coord>,
) {
    path.clear();
    let mut node = node_grid.get_index_checked(goal_index);
    loop {
        path.push(node.coord());
        let direction = match node.from_parent() {
            Some(direction) => direction,
            None => break,
        };
        match node_grid.get(node.coord() - direction.coord()) {
            Some(parent) => node = parent,
            None => break,
        }
    }
    path.reverse();
}

/// The cardinal direction leading from `from` to an adjacent `to`, if they are
/// adjacent.
pub fn step_direction(from: Coord, to: Coord) -> Option<CardinalDirection> {
    let delta = to - from;
    CARDINAL_DIRECTIONS
        .iter()
        .cloned()
        .find(|direction| direction.coord() == delta)
}

/// Yields the sign of the offset between each pair of consecutive cells.
pub struct PathSteps<'a> {
    windows: slice::Windows<'a, Coord>,
}

impl<'a> PathSteps<'a> {
    pub fn new(path: &'a [Coord]) -> Self {
        Self {
            windows: path.windows(2),
        }
    }
}

impl<'a> Iterator for PathSteps<'a> {
    type Item = Coord;
    fn next(&mut self) -> Option<Self::Item> {
        self.windows.next().map(|pair| {
            let delta = pair[1] - pair[0];
            Coord::new(delta.x.signum(), delta.y.signum())
        })
    }
}
