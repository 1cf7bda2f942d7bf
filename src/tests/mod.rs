use crate::{step_direction, Coord, ObstacleGrid, SolidGrid};
use std::collections::VecDeque;


/// `.` free, `#` obstacle, `s`/`g` start and goal, `S`/`G` start and goal on
/// an obstacle, `B` start and goal on the same free cell.
fn grid_from_strings(strings: &[&str]) -> (ObstacleGrid, Coord, Coord) {
    let side = strings.len();
    assert!(strings.iter().all(|line| line.len() == side));
    let mut start = None;
    let mut goal = None;
    let grid = ObstacleGrid::new_fn(side as u32, |coord| {
        match strings[coord.y as usize].as_bytes()[coord.x as usize] {
            b'.' => false,
            b'#' => true,
            b's' => {
                start = Some(coord);
                false
            }
            b'g' => {
                goal = Some(coord);
                false
            }
            b'S' => {
                start = Some(coord);
                true
            }
            b'G' => {
                goal = Some(coord);
                true
            }
            b'B' => {
                start = Some(coord);
                goal = Some(coord);
                false
            }
            _ => panic!(),
        }
    });
    (grid, start.unwrap(), goal.unwrap())
}

/// Shortest number of steps by breadth first search.
fn bfs_distance<G: SolidGrid>(grid: &G, start: Coord, goal: Coord) -> Option<usize> {
    if grid.is_solid(start) != Some(false) || grid.is_solid(goal) != Some(false) {
        return None;
    }
    let size = grid.size();
    let mut distances = vec![None; (size.width() * size.height()) as usize];
    let index = |coord: Coord| (coord.y as u32 * size.width() + coord.x as u32) as usize;
    let mut queue = VecDeque::new();
    distances[index(start)] = Some(0);
    queue.push_back(start);
    while let Some(coord) = queue.pop_front() {
        let distance = distances[index(coord)].unwrap();
        if coord == goal {
            return Some(distance);
        }
        for &offset in &[
            Coord::new(0, -1),
            Coord::new(1, 0),
            Coord::new(0, 1),
            Coord::new(-1, 0),
        ] {
            let neighbour = coord + offset;
            if grid.is_solid(neighbour) == Some(false) && distances[index(neighbour)].is_none() {
                distances[index(neighbour)] = Some(distance + 1);
                queue.push_back(neighbour);
            }
        }
    }
    None
}

fn assert_valid_path<G: SolidGrid>(grid: &G, path: &[Coord], start: Coord, goal: Coord) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for pair in path.windows(2) {
        assert!(
            step_direction(pair[0], pair[1]).is_some(),
            "{:?} -> {:?} is not a cardinal step",
            pair[0],
            pair[1]
        );
    }
    for &coord in path {
        assert_eq!(grid.is_solid(coord), Some(false), "path goes through wall");
    }
}
