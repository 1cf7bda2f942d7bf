use crate::config::SearchConfig;
use crate::error::Error;
use crate::grid::SolidGrid;
use crate::metadata::SearchMetadata;
use crate::neighbours::CardinalNeighbours;
use crate::path::{self, PathNode};
use direction::CardinalDirection;
use grid_2d::{Coord, Grid, Size};
use num_traits::{CheckedAdd, One, Zero};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{self, AtomicBool};

#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode<Cost> {
    pub(crate) seen: u64,
    pub(crate) visited: u64,
    pub(crate) coord: Coord,
    pub(crate) from_parent: Option<CardinalDirection>,
    pub(crate) cost: Cost,
}

impl<Cost: Zero> SearchNode<Cost> {
    fn new(coord: Coord) -> Self {
        Self {
            seen: 0,
            visited: 0,
            coord,
            from_parent: None,
            cost: Zero::zero(),
        }
    }
}

impl<Cost> PathNode for SearchNode<Cost> {
    fn from_parent(&self) -> Option<CardinalDirection> {
        self.from_parent
    }
    fn coord(&self) -> Coord {
        self.coord
    }
}

/// Frontier entry. `priority` is the f-score and `cost` the g-score at the
/// time the entry was pushed.
#[derive(Debug, Clone)]
pub(crate) struct PriorityEntry<Cost> {
    pub(crate) node_index: usize,
    pub(crate) cost: Cost,
    pub(crate) priority: Cost,
}

impl<Cost> PriorityEntry<Cost> {
    fn new(node_index: usize, cost: Cost, priority: Cost) -> Self {
        Self {
            node_index,
            cost,
            priority,
        }
    }
}

impl<Cost: Ord> PartialEq for PriorityEntry<Cost> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<Cost: Ord> Eq for PriorityEntry<Cost> {}

impl<Cost: Ord> PartialOrd for PriorityEntry<Cost> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// BinaryHeap pops the greatest entry: lowest f-score first, then the entry
// furthest from the start, then the lowest row-major index.
impl<Cost: Ord> Ord for PriorityEntry<Cost> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.node_index.cmp(&self.node_index))
    }
}

/// Reusable scratch space for searching grids up to a given size.
///
/// Node records are invalidated lazily by bumping `seq` at the start of each
/// search, so a context can be reused without clearing it.
#[derive(Debug, Clone)]
pub struct SearchContext<Cost> {
    pub(crate) seq: u64,
    pub(crate) priority_queue: BinaryHeap<PriorityEntry<Cost>>,
    pub(crate) node_grid: Grid<SearchNode<Cost>>,
}

impl<Cost: Zero> SearchContext<Cost> {
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            node_grid: Grid::new_fn(size, SearchNode::new),
            priority_queue: BinaryHeap::new(),
        }
    }
}

impl<Cost> SearchContext<Cost> {
    pub fn size(&self) -> Size {
        self.node_grid.size()
    }
}

impl<Cost> SearchContext<Cost>
where
    Cost: Copy + Ord + Zero + One + CheckedAdd,
{
    pub(crate) fn init<G, H>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        heuristic_fn: &H,
        path: &mut Vec<Coord>,
    ) -> Result<PriorityEntry<Cost>, Result<SearchMetadata<Cost>, Error>>
    where
        G: SolidGrid,
        H: Fn(Coord, Coord) -> Option<Cost>,
    {
        let start_solid = match grid.is_solid(start) {
            Some(solid) => solid,
            None => return Err(Err(Error::StartOutsideGrid)),
        };
        let goal_solid = match grid.is_solid(goal) {
            Some(solid) => solid,
            None => return Err(Err(Error::GoalOutsideGrid)),
        };

        if start_solid {
            return Err(Err(Error::StartSolid));
        }

        if goal_solid {
            return Err(Err(Error::GoalSolid));
        }

        let index = match self.node_grid.index_of_coord(start) {
            Some(index) => index,
            None => return Err(Err(Error::VisitOutsideContext)),
        };

        if start == goal {
            path.clear();
            path.push(start);
            return Err(Ok(SearchMetadata {
                num_nodes_visited: 0,
                cost: Zero::zero(),
                length: 0,
            }));
        }

        let heuristic = match heuristic_fn(start, goal) {
            Some(heuristic) => heuristic,
            None => return Err(Err(Error::CostOverflow)),
        };

        self.seq += 1;
        self.priority_queue.clear();

        let node = self.node_grid.get_index_checked_mut(index);
        node.from_parent = None;
        node.seen = self.seq;
        node.cost = Zero::zero();

        Ok(PriorityEntry::new(index, Zero::zero(), heuristic))
    }

    pub(crate) fn search_general<G, H>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        heuristic_fn: H,
        config: SearchConfig,
        cancel: Option<&AtomicBool>,
        path: &mut Vec<Coord>,
    ) -> Result<SearchMetadata<Cost>, Error>
    where
        G: SolidGrid,
        H: Fn(Coord, Coord) -> Option<Cost>,
    {
        let result = self.search_inner(grid, start, goal, heuristic_fn, config, cancel, path);
        if result.is_err() {
            path.clear();
        }
        result
    }

    fn search_inner<G, H>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        heuristic_fn: H,
        config: SearchConfig,
        cancel: Option<&AtomicBool>,
        path: &mut Vec<Coord>,
    ) -> Result<SearchMetadata<Cost>, Error>
    where
        G: SolidGrid,
        H: Fn(Coord, Coord) -> Option<Cost>,
    {
        let initial_entry = match self.init(grid, start, goal, &heuristic_fn, path) {
            Ok(initial_entry) => initial_entry,
            Err(result) => return result,
        };

        let goal_index = self
            .node_grid
            .index_of_coord(goal)
            .ok_or(Error::VisitOutsideContext)?;

        debug!(
            "searching from ({}, {}) to ({}, {})",
            start.x, start.y, goal.x, goal.y
        );

        self.priority_queue.push(initial_entry);

        let mut num_nodes_visited = 0;

        // set when a successor was dropped because its cost doesn't fit `Cost`
        let mut overflowed = false;

        while let Some(current_entry) = self.priority_queue.pop() {
            if let Some(cancel) = cancel {
                if cancel.load(atomic::Ordering::Relaxed) {
                    debug!(
                        "search cancelled after visiting {} nodes",
                        num_nodes_visited
                    );
                    return Err(Error::Cancelled);
                }
            }

            let (current_coord, current_cost) = {
                let node = self
                    .node_grid
                    .get_index_checked_mut(current_entry.node_index);
                if node.visited == self.seq {
                    continue;
                }
                node.visited = self.seq;
                (node.coord, node.cost)
            };

            if num_nodes_visited >= config.max_nodes_visited {
                debug!("node limit of {} reached", config.max_nodes_visited);
                return Err(Error::NodeLimitExceeded);
            }
            num_nodes_visited += 1;

            if current_entry.node_index == goal_index {
                path::make_path(&self.node_grid, goal_index, path);
                let length = path.len().saturating_sub(1);
                debug!(
                    "found path of length {} after visiting {} nodes",
                    length, num_nodes_visited
                );
                return Ok(SearchMetadata {
                    num_nodes_visited,
                    cost: current_cost,
                    length,
                });
            }

            trace!("expanding ({}, {})", current_coord.x, current_coord.y);

            let successor_cost = match current_cost.checked_add(&One::one()) {
                Some(successor_cost) => successor_cost,
                None => {
                    overflowed = true;
                    continue;
                }
            };

            for (direction, neighbour_coord) in CardinalNeighbours::new(grid, current_coord) {
                if grid.is_solid_or_outside(neighbour_coord) {
                    continue;
                }

                if !self.see_successor(
                    successor_cost,
                    neighbour_coord,
                    direction,
                    &heuristic_fn,
                    goal,
                )? {
                    overflowed = true;
                }
            }
        }

        if overflowed {
            debug!("every remaining route costs more than the cost type holds");
            return Err(Error::CostOverflow);
        }

        debug!("no path after visiting {} nodes", num_nodes_visited);
        Err(Error::NoPath)
    }

    /// Returns `Ok(false)` if the successor was skipped because its f-score
    /// doesn't fit in `Cost`.
    pub(crate) fn see_successor<H>(
        &mut self,
        cost: Cost,
        successor_coord: Coord,
        direction: CardinalDirection,
        heuristic_fn: &H,
        goal: Coord,
    ) -> Result<bool, Error>
    where
        H: Fn(Coord, Coord) -> Option<Cost>,
    {
        let index = self
            .node_grid
            .index_of_coord(successor_coord)
            .ok_or(Error::VisitOutsideContext)?;

        let node = self.node_grid.get_index_checked_mut(index);

        if node.seen != self.seq || cost < node.cost {
            let priority = match heuristic_fn(successor_coord, goal)
                .and_then(|heuristic| cost.checked_add(&heuristic))
            {
                Some(priority) => priority,
                None => return Ok(false),
            };

            node.from_parent = Some(direction);
            node.seen = self.seq;
            node.cost = cost;

            self.priority_queue.push(PriorityEntry::new(index, cost, priority));
        }

        Ok(true)
    }
}
