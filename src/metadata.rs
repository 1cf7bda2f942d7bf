#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchMetadata<C> {
    pub num_nodes_visited: usize,
    pub cost: C,
    /// Number of steps in the path, one less than the number of cells.
    pub length: usize,
}
