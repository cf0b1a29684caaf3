use std::fmt::Debug;
use std::rc::Rc;

use log::{debug, warn};

use crate::algorithm::{
    dijkstra::Dijkstra, matrix_scan::MatrixScan, ShortestPath, ShortestPathAlgorithm,
    ShortestPathResult, Strategy,
};
use crate::data_structures::{CacheStats, SolutionCache};
use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};

/// A directed graph with named vertices, kept both as an adjacency matrix and
/// as adjacency lists.
///
/// The vertex count is fixed at construction. Arcs are only ever added: an
/// insertion overwrites the matrix cell and appends to the list, so duplicate
/// arcs all stay in the list while the matrix holds the latest weight.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W>
where
    W: Weight,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Vertex labels, `N::default()` until named
    names: Vec<N>,

    /// `matrix[i][j]`: latest weight of arc i -> j, zero on the diagonal
    matrix: Vec<Vec<Option<W>>>,

    /// Outgoing arcs for each vertex in insertion order: [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Sparse-solver results by origin
    solutions: SolutionCache<W>,
}

impl<N, W> DirectedGraph<N, W>
where
    N: Clone + Default + Debug,
    W: Weight,
{
    /// Creates a graph with `vertex_count` unnamed vertices and no arcs
    pub fn new(vertex_count: usize) -> Self {
        let matrix = (0..vertex_count)
            .map(|i| {
                let mut row = vec![None; vertex_count];
                row[i] = Some(W::zero());
                row
            })
            .collect();

        DirectedGraph {
            vertex_count,
            names: vec![N::default(); vertex_count],
            matrix,
            outgoing_edges: vec![Vec::new(); vertex_count],
            solutions: SolutionCache::new(),
        }
    }

    pub(crate) fn check_vertex(&self, index: usize) -> Result<()> {
        if index < self.vertex_count {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Names a vertex, replacing any previous name
    pub fn set_name(&mut self, index: usize, name: N) -> Result<()> {
        self.check_vertex(index)?;
        self.names[index] = name;
        Ok(())
    }

    pub fn vertex_name(&self, index: usize) -> Result<&N> {
        self.check_vertex(index)?;
        Ok(&self.names[index])
    }

    /// All vertex names, indexed by vertex
    pub fn names(&self) -> &[N] {
        &self.names
    }

    /// Adds the arc `from -> to`.
    ///
    /// Self-loops and duplicates are accepted. Cached solutions are not
    /// invalidated; call [`DirectedGraph::invalidate_solutions`] to drop them.
    pub fn add_arc(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if weight < W::zero() {
            return Err(Error::NegativeWeight { from, to });
        }

        if !self.solutions.is_empty() {
            warn!(
                "Arc {} -> {} added while {} cached solutions exist; they are now stale",
                from,
                to,
                self.solutions.len()
            );
        }

        self.matrix[from][to] = Some(weight);
        self.outgoing_edges[from].push((to, weight));
        Ok(())
    }

    /// Current matrix cell for `from -> to`; `None` when there is no arc
    pub fn weight(&self, from: usize, to: usize) -> Result<Option<W>> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.matrix[from][to])
    }

    /// Every arc inserted from `from`, in insertion order
    pub fn arcs_from(&self, from: usize) -> Result<&[(usize, W)]> {
        self.check_vertex(from)?;
        Ok(&self.outgoing_edges[from])
    }

    /// Memoized single-source solution for `origin`, computed on first use
    pub fn solution(&self, origin: usize) -> Result<Rc<ShortestPathResult<W>>> {
        self.check_vertex(origin)?;
        self.solutions.get_or_try_insert_with(origin, || {
            debug!("Solution cache miss for origin {}", origin);
            Dijkstra::new().compute_shortest_paths(self, origin)
        })
    }

    /// Answers a query with the chosen strategy
    pub fn shortest_path(
        &self,
        strategy: Strategy,
        origin: usize,
        destination: usize,
    ) -> Result<ShortestPath<N, W>> {
        match strategy {
            Strategy::Dense => MatrixScan::new().find_path(self, origin, destination),
            Strategy::Sparse => Dijkstra::new().find_path(self, origin, destination),
        }
    }

    /// Drops every memoized solution so later sparse queries see the current arcs
    pub fn invalidate_solutions(&self) {
        if !self.solutions.is_empty() {
            warn!("Dropping {} cached solutions", self.solutions.len());
        }
        self.solutions.clear();
    }

    pub fn is_solution_cached(&self, origin: usize) -> bool {
        self.solutions.contains(origin)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.solutions.stats()
    }
}

impl<N, W> Graph<W> for DirectedGraph<N, W>
where
    N: Debug,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.matrix.get(from).and_then(|row| row.get(to).copied().flatten())
    }
}
