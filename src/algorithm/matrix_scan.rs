use std::fmt::Debug;

use log::{debug, error};

use crate::algorithm::{Distance, ShortestPath, ShortestPathAlgorithm};
use crate::graph::{DirectedGraph, Graph, Weight};
use crate::{Error, Result};

/// Dense Dijkstra: O(V²) per query.
///
/// Picks the next vertex by scanning every unsolved vertex linearly and relaxes
/// through the adjacency matrix, so only the latest weight inserted for a
/// vertex pair is seen. Stops as soon as the destination is solved. Nothing is
/// cached between queries.
#[derive(Debug, Default, Clone, Copy)]
pub struct MatrixScan;

impl MatrixScan {
    /// Creates a new dense solver instance
    pub fn new() -> Self {
        MatrixScan
    }

    /// Runs the scan for one pair and returns the destination's distance with
    /// the (partial) predecessor array.
    pub fn solve_pair<W, G>(
        &self,
        graph: &G,
        origin: usize,
        destination: usize,
    ) -> Result<(Distance<W>, Vec<Option<usize>>)>
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        for index in [origin, destination] {
            if !graph.has_vertex(index) {
                return Err(Error::IndexOutOfRange { index, vertex_count: n });
            }
        }

        let mut distances = vec![Distance::Unreachable; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[origin] = Distance::zero();

        // Working set in scan order; ties go to the first vertex scanned
        let mut unsolved: Vec<usize> = (0..n).collect();

        for _ in 0..n {
            if unsolved.is_empty() {
                error!(
                    "Working set exhausted while solving {} -> {}",
                    origin, destination
                );
                return Err(Error::InvariantViolation(
                    "working set of unsolved vertices should not be empty".to_string(),
                ));
            }

            let mut best = 0;
            for pos in 1..unsolved.len() {
                if distances[unsolved[pos]] < distances[unsolved[best]] {
                    best = pos;
                }
            }
            let u_star = unsolved.remove(best);

            let dist_u = distances[u_star];
            // Stop at the destination, or when nothing left is reachable
            if !dist_u.is_finite() || u_star == destination {
                break;
            }

            for &v in &unsolved {
                if let Some(weight) = graph.get_edge_weight(u_star, v) {
                    // An overflowing sum is never an improvement
                    let candidate = dist_u.extend(weight);
                    if candidate < distances[v] {
                        distances[v] = candidate;
                        predecessors[v] = Some(u_star);
                    }
                }
            }
        }

        debug!(
            "Matrix scan {} -> {} finished with distance {:?}",
            origin, destination, distances[destination]
        );

        Ok((distances[destination], predecessors))
    }
}

impl<N, W> ShortestPathAlgorithm<N, W> for MatrixScan
where
    N: Clone + Default + Debug,
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Matrix scan Dijkstra"
    }

    fn find_path(
        &self,
        graph: &DirectedGraph<N, W>,
        origin: usize,
        destination: usize,
    ) -> Result<ShortestPath<N, W>> {
        let (distance, predecessors) = self.solve_pair(graph, origin, destination)?;
        Ok(ShortestPath::from_predecessors(
            graph.names(),
            &predecessors,
            origin,
            destination,
            distance,
        ))
    }
}
