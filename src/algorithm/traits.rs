use std::fmt::Debug;

use crate::algorithm::path::{reconstruct, ShortestPath};
use crate::algorithm::Distance;
use crate::graph::{DirectedGraph, Weight};
use crate::Result;

/// Result of a single-source shortest path computation
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W> {
    /// Distances from source to each vertex
    pub distances: Vec<Distance<W>>,

    /// Predecessor vertices in the shortest path tree; `None` for the source
    /// and for unreached vertices
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Distance to `target`, `Unreachable` when out of range or not reached
    pub fn distance_to(&self, target: usize) -> Distance<W> {
        self.distances.get(target).copied().unwrap_or(Distance::Unreachable)
    }

    /// Vertex sequence from the source to `target`; empty when there is no path
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        reconstruct(&self.predecessors, self.source, target)
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }
}

/// Common interface of the shortest path strategies
pub trait ShortestPathAlgorithm<N, W>
where
    N: Clone + Default + Debug,
    W: Weight,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Shortest path from `origin` to `destination`.
    ///
    /// Fails with `IndexOutOfRange` for an invalid index. A missing path is not
    /// an error: it yields `Distance::Unreachable` and an empty vertex list.
    fn find_path(
        &self,
        graph: &DirectedGraph<N, W>,
        origin: usize,
        destination: usize,
    ) -> Result<ShortestPath<N, W>>;
}
