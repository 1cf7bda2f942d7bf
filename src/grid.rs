use crate::error::Error;
use grid_2d::{Coord, Grid, Size};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

pub trait SolidGrid {
    fn size(&self) -> Size;

    /// `None` if `coord` is outside the grid.
    fn is_solid(&self, coord: Coord) -> Option<bool>;

    fn in_bounds(&self, coord: Coord) -> bool {
        let size = self.size();
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < size.width()
            && (coord.y as u32) < size.height()
    }

    fn is_solid_or_outside(&self, coord: Coord) -> bool {
        self.is_solid(coord).unwrap_or(true)
    }
}

impl SolidGrid for Grid<bool> {
    fn size(&self) -> Size {
        Grid::size(self)
    }

    fn is_solid(&self, coord: Coord) -> Option<bool> {
        self.get(coord).cloned()
    }
}

/// A square occupancy grid. Cells holding `true` are obstacles.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct ObstacleGrid {
    grid: Grid<bool>,
}

impl ObstacleGrid {
    pub fn new_free(side: u32) -> Self {
        Self {
            grid: Grid::new_clone(Size::new(side, side), false),
        }
    }

    pub fn new_fn<F>(side: u32, f: F) -> Self
    where
        F: FnMut(Coord) -> bool,
    {
        Self {
            grid: Grid::new_fn(Size::new(side, side), f),
        }
    }

    pub fn from_grid(grid: Grid<bool>) -> Result<Self, Error> {
        let size = grid.size();
        if size.width() != size.height() {
            return Err(Error::NotSquare {
                width: size.width(),
                height: size.height(),
            });
        }
        Ok(Self { grid })
    }

    /// Builds a grid from rows of cells, the outer slice indexed by `y`.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, Error>
    where
        R: AsRef<[bool]>,
    {
        let height = rows.len() as u32;
        if let Some(row) = rows.iter().find(|row| row.as_ref().len() != rows.len()) {
            return Err(Error::NotSquare {
                width: row.as_ref().len() as u32,
                height,
            });
        }
        Ok(Self::new_fn(height, |coord| {
            rows[coord.y as usize].as_ref()[coord.x as usize]
        }))
    }

    pub fn side(&self) -> u32 {
        self.grid.width()
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        SolidGrid::in_bounds(self, coord)
    }

    pub fn is_obstacle(&self, coord: Coord) -> Result<bool, Error> {
        self.grid
            .get(coord)
            .cloned()
            .ok_or(Error::CoordOutsideGrid(coord))
    }

    pub fn num_obstacles(&self) -> usize {
        self.grid.iter().filter(|&&solid| solid).count()
    }

    pub fn as_grid(&self) -> &Grid<bool> {
        &self.grid
    }
}

impl SolidGrid for ObstacleGrid {
    fn size(&self) -> Size {
        self.grid.size()
    }

    fn is_solid(&self, coord: Coord) -> Option<bool> {
        self.grid.get(coord).cloned()
    }
}
