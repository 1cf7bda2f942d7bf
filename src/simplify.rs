use crate::path::PathSteps;
use grid_2d::Coord;

/// Reduces a path to the cells where its direction of travel changes, plus
/// its two endpoints. Straight runs collapse to their ends.
pub fn simplify_path(path: &[Coord]) -> Vec<Coord> {
    if path.len() < 2 {
        return path.to_vec();
    }

    let mut simplified = vec![path[0]];
    let mut steps = PathSteps::new(path);
    let mut previous_step = steps.next();

    // path[i] sits between step i - 1 and step i
    for (&coord, step) in path[1..].iter().zip(steps) {
        if previous_step != Some(step) {
            simplified.push(coord);
        }
        previous_step = Some(step);
    }

    simplified.push(path[path.len() - 1]);
    simplified
}
