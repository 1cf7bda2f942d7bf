use grid_2d::Coord;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    StartOutsideGrid,
    GoalOutsideGrid,
    CoordOutsideGrid(Coord),
    NotSquare { width: u32, height: u32 },
    StartSolid,
    GoalSolid,
    NoPath,
    VisitOutsideContext,
    CostOverflow,
    NodeLimitExceeded,
    Cancelled,
}

impl Error {
    /// True for outcomes that mean "there is no path" rather than a misuse
    /// of the api.
    pub fn is_unreachable(&self) -> bool {
        match self {
            Error::NoPath | Error::StartSolid | Error::GoalSolid => true,
            _ => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::StartOutsideGrid => write!(f, "start is outside the grid"),
            Error::GoalOutsideGrid => write!(f, "goal is outside the grid"),
            Error::CoordOutsideGrid(coord) => write!(
                f,
                "coordinate ({}, {}) is outside the grid",
                coord.x, coord.y
            ),
            Error::NotSquare { width, height } => {
                write!(f, "grid is {}x{} but must be square", width, height)
            }
            Error::StartSolid => write!(f, "start is an obstacle"),
            Error::GoalSolid => write!(f, "goal is an obstacle"),
            Error::NoPath => write!(f, "no path between start and goal"),
            Error::VisitOutsideContext => {
                write!(f, "grid is larger than the search context")
            }
            Error::CostOverflow => write!(f, "path cost does not fit the cost type"),
            Error::NodeLimitExceeded => write!(f, "node limit exceeded"),
            Error::Cancelled => write!(f, "search cancelled"),
        }
    }
}

impl std::error::Error for Error {}
