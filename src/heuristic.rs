use grid_2d::Coord;
use num_traits::NumCast;

pub fn manhattan_distance(a: Coord, b: Coord) -> u64 {
    <u64 as From<u32>>::from(a.x.abs_diff(b.x)) + <u64 as From<u32>>::from(a.y.abs_diff(b.y))
}

/// Manhattan distance in the search's cost type, or `None` if it doesn't fit.
pub fn manhattan_heuristic<Cost: NumCast>(a: Coord, b: Coord) -> Option<Cost> {
    NumCast::from(manhattan_distance(a, b))
}
