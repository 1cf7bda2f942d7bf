extern crate direction;
extern crate grid_2d;
#[macro_use]
extern crate log;
extern crate num_traits;

mod astar;
mod config;
mod error;
mod grid;
mod heuristic;
mod metadata;
mod neighbours;
mod path;
mod search;
mod simplify;

pub use astar::*;
pub use config::*;
pub use error::*;
pub use grid::*;
pub use heuristic::*;
pub use metadata::*;
pub use neighbours::*;
pub use path::*;
pub use search::*;
pub use simplify::*;

pub use direction::CardinalDirection;
pub use grid_2d::{Coord, Grid, Size};

#[cfg(test)]
mod tests;
