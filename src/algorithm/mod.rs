pub mod dijkstra;
pub mod distance;
pub mod matrix_scan;
pub mod path;
pub mod traits;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use distance::Distance;
pub use path::ShortestPath;
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};

/// Which solver answers a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Adjacency matrix with a linear scan of unsolved vertices, no caching
    Dense,
    /// Adjacency lists with an ordered working set, memoized per origin
    #[default]
    Sparse,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Dense => "dense",
            Strategy::Sparse => "sparse",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dense" | "matrix" => Ok(Strategy::Dense),
            "sparse" | "list" => Ok(Strategy::Sparse),
            other => Err(crate::Error::Config(format!("unknown strategy '{}'", other))),
        }
    }
}
