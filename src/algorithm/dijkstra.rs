use std::fmt::Debug;

use log::debug;

use crate::algorithm::{Distance, ShortestPath, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::OrderedWorkingSet;
use crate::graph::{DirectedGraph, Graph, Weight};
use crate::{Error, Result};

/// Sparse Dijkstra: O((V+E) log V) per distinct origin.
///
/// Relaxes every arc in the adjacency lists, superseded duplicates included,
/// and always explores the whole reachable set so the solution can be reused
/// for any destination. Queries through [`ShortestPathAlgorithm::find_path`]
/// go through the graph's per-origin memo.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Compute shortest paths from a source vertex to all other vertices,
    /// bypassing any memo.
    pub fn compute_shortest_paths<W, G>(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        if !graph.has_vertex(source) {
            return Err(Error::IndexOutOfRange { index: source, vertex_count: n });
        }

        // Initialize distances and predecessors
        let mut distances = vec![Distance::Unreachable; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Distance::zero();

        let mut working_set = OrderedWorkingSet::new();
        working_set.insert(source, W::zero());

        // Main Dijkstra loop
        while let Some((u, dist_u)) = working_set.pop_min() {
            // Relax all outgoing arcs
            for (v, weight) in graph.outgoing_edges(u) {
                // An overflowing sum is never an improvement
                let candidate = match dist_u.checked_sum(weight) {
                    Some(candidate) => candidate,
                    None => continue,
                };
                if Distance::Finite(candidate) < distances[v] {
                    if let Distance::Finite(old) = distances[v] {
                        working_set.remove(v, old);
                    }
                    distances[v] = Distance::Finite(candidate);
                    predecessors[v] = Some(u);
                    working_set.insert(v, candidate);
                }
            }
        }

        let result = ShortestPathResult {
            distances,
            predecessors,
            source,
        };
        debug!(
            "Dijkstra from {} reached {} of {} vertices",
            source,
            result.reachable_count(),
            n
        );

        Ok(result)
    }
}

impl<N, W> ShortestPathAlgorithm<N, W> for Dijkstra
where
    N: Clone + Default + Debug,
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find_path(
        &self,
        graph: &DirectedGraph<N, W>,
        origin: usize,
        destination: usize,
    ) -> Result<ShortestPath<N, W>> {
        graph.check_vertex(destination)?;
        let solution = graph.solution(origin)?;
        Ok(ShortestPath::from_result(graph.names(), &solution, destination))
    }
}
