pub mod solution_cache;
pub mod working_set;

pub use solution_cache::{CacheStats, SolutionCache};
pub use working_set::OrderedWorkingSet;
