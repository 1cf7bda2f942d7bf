use crate::config::SearchConfig;
use crate::error::Error;
use crate::grid::SolidGrid;
use crate::heuristic::manhattan_heuristic;
use crate::metadata::SearchMetadata;
use crate::search::SearchContext;
use grid_2d::Coord;
use num_traits::{CheckedAdd, NumCast, One, Zero};
use std::sync::atomic::AtomicBool;

impl<Cost> SearchContext<Cost>
where
    Cost: Copy + Ord + Zero + One + CheckedAdd + NumCast,
{
    pub fn astar_manhattan<G>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
        path: &mut Vec<Coord>,
    ) -> Result<SearchMetadata<Cost>, Error>
    where
        G: SolidGrid,
    {
        self.search_general(
            grid,
            start,
            goal,
            manhattan_heuristic::<Cost>,
            config,
            None,
            path,
        )
    }

    /// As `astar_manhattan`, but gives up with `Error::Cancelled` as soon as
    /// `cancel` is observed to be set between frontier pops.
    pub fn astar_manhattan_cancellable<G>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
        cancel: &AtomicBool,
        path: &mut Vec<Coord>,
    ) -> Result<SearchMetadata<Cost>, Error>
    where
        G: SolidGrid,
    {
        self.search_general(
            grid,
            start,
            goal,
            manhattan_heuristic::<Cost>,
            config,
            Some(cancel),
            path,
        )
    }
}

/// Finds a shortest 4-connected path from `start` to `goal`, both included.
///
/// An empty path means the goal can't be reached, including when `start` or
/// `goal` is an obstacle. When `start == goal` the path is `[start]`. Only
/// coordinates outside the grid are reported as errors.
pub fn find_path<G>(grid: &G, start: Coord, goal: Coord) -> Result<Vec<Coord>, Error>
where
    G: SolidGrid,
{
    let mut ctx: SearchContext<u32> = SearchContext::new(grid.size());
    let mut path = Vec::new();
    match ctx.astar_manhattan(grid, start, goal, SearchConfig::default(), &mut path) {
        Ok(_) => Ok(path),
        Err(error) if error.is_unreachable() => Ok(Vec::new()),
        Err(error) => Err(error),
    }
}
