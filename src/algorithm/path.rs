use log::warn;

use crate::algorithm::{Distance, ShortestPathResult};
use crate::graph::{Graph, Weight};

/// Walks predecessor links backward from `destination` and returns the vertex
/// sequence from `origin` to `destination` inclusive.
///
/// Returns an empty sequence when the walk stops at a vertex other than
/// `origin`, i.e. when there is no path. A self-query yields `[origin]`.
pub fn reconstruct(predecessors: &[Option<usize>], origin: usize, destination: usize) -> Vec<usize> {
    if destination >= predecessors.len() {
        return Vec::new();
    }

    let mut reversed = vec![destination];
    let mut current = destination;
    while let Some(pred) = predecessors[current] {
        // A well-formed tree never revisits a vertex
        if reversed.len() > predecessors.len() {
            warn!("Cycle in predecessor chain ending at vertex {}", destination);
            return Vec::new();
        }
        reversed.push(pred);
        current = pred;
    }

    if current != origin {
        return Vec::new();
    }

    reversed.reverse();
    reversed
}

/// Answer to one origin/destination query
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<N, W> {
    pub origin: usize,
    pub destination: usize,
    /// Total weight, `Unreachable` when no path exists
    pub distance: Distance<W>,
    /// `(index, name)` pairs from origin to destination inclusive; empty when no path exists
    pub vertices: Vec<(usize, N)>,
}

impl<N, W> ShortestPath<N, W>
where
    N: Clone,
    W: Weight,
{
    /// Builds the query answer from a predecessor array and the solver's
    /// distance to `destination`.
    pub fn from_predecessors(
        names: &[N],
        predecessors: &[Option<usize>],
        origin: usize,
        destination: usize,
        distance: Distance<W>,
    ) -> Self {
        let indices = reconstruct(predecessors, origin, destination);
        Self::from_indices(names, indices, origin, destination, distance)
    }

    /// Builds the query answer from a full single-source solution
    pub fn from_result(names: &[N], result: &ShortestPathResult<W>, destination: usize) -> Self {
        Self::from_indices(
            names,
            result.path_to(destination),
            result.source,
            destination,
            result.distance_to(destination),
        )
    }

    fn from_indices(
        names: &[N],
        indices: Vec<usize>,
        origin: usize,
        destination: usize,
        distance: Distance<W>,
    ) -> Self {
        if indices.is_empty() {
            return ShortestPath::unreachable(origin, destination);
        }

        ShortestPath {
            origin,
            destination,
            distance,
            vertices: indices.into_iter().map(|v| (v, names[v].clone())).collect(),
        }
    }

    pub fn unreachable(origin: usize, destination: usize) -> Self {
        ShortestPath {
            origin,
            destination,
            distance: Distance::Unreachable,
            vertices: Vec::new(),
        }
    }

    /// True when a path (possibly the single-vertex self path) exists
    pub fn is_found(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// Vertex indices along the path
    pub fn indices(&self) -> Vec<usize> {
        self.vertices.iter().map(|(index, _)| *index).collect()
    }

    /// Sums the current matrix weight of each consecutive pair along the path.
    ///
    /// Returns `None` for an empty path, when a pair has no arc, or when the
    /// sum overflows the weight type. With
    /// superseded duplicate arcs this can exceed a sparse-solver distance, since
    /// the matrix only keeps the latest weight.
    pub fn total_weight<G: Graph<W>>(&self, graph: &G) -> Option<W> {
        if self.vertices.is_empty() {
            return None;
        }
        self.vertices.windows(2).try_fold(W::zero(), |total, pair| {
            graph
                .get_edge_weight(pair[0].0, pair[1].0)
                .and_then(|weight| total.checked_sum(weight))
        })
    }
}
