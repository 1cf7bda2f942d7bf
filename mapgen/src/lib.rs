use grid_2d::{Coord, Grid, Size};
use rand::{Rng, SeedableRng};
use rand_isaac::Isaac64Rng;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    pub size: u32,
    /// Probability that any given cell is an obstacle.
    pub obstacle_chance: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            size: 10,
            obstacle_chance: 0.3,
        }
    }
}

/// Generates a square map where `true` marks an obstacle. The top-left and
/// bottom-right corners are always free so they can serve as start and goal.
pub fn generate_map<R: Rng>(config: &MapConfig, rng: &mut R) -> Grid<bool> {
    let size = Size::new(config.size, config.size);
    let mut grid = Grid::new_fn(size, |_| rng.gen::<f64>() < config.obstacle_chance);
    if config.size > 0 {
        let last = config.size as i32 - 1;
        for &corner in &[Coord::new(0, 0), Coord::new(last, last)] {
            if let Some(cell) = grid.get_mut(corner) {
                *cell = false;
            }
        }
    }
    grid
}

pub fn generate_map_seeded(config: &MapConfig, seed: u64) -> Grid<bool> {
    let mut rng = Isaac64Rng::seed_from_u64(seed);
    generate_map(config, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_free() {
        let config = MapConfig {
            size: 8,
            obstacle_chance: 1.0,
        };
        let grid = generate_map_seeded(&config, 0);
        assert_eq!(grid.size(), Size::new(8, 8));
        assert_eq!(grid.get(Coord::new(0, 0)), Some(&false));
        assert_eq!(grid.get(Coord::new(7, 7)), Some(&false));
        assert_eq!(grid.iter().filter(|&&solid| solid).count(), 62);
    }

    #[test]
    fn no_obstacles() {
        let config = MapConfig {
            size: 5,
            obstacle_chance: 0.0,
        };
        let grid = generate_map_seeded(&config, 42);
        assert!(grid.iter().all(|&solid| !solid));
    }

    #[test]
    fn same_seed_same_map() {
        let config = MapConfig::default();
        let a = generate_map_seeded(&config, 7);
        let b = generate_map_seeded(&config, 7);
        assert!(a.iter().zip(b.iter()).all(|(a, b)| a == b));
    }

    #[test]
    fn empty_map() {
        let config = MapConfig {
            size: 0,
            obstacle_chance: 0.5,
        };
        let grid = generate_map_seeded(&config, 1);
        assert_eq!(grid.iter().count(), 0);
    }
}
