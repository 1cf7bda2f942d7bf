#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of frontier entries popped before giving up.
    pub max_nodes_visited: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_nodes_visited: ::std::usize::MAX,
        }
    }
}
