//! Transit SSSP - shortest paths over named, weighted directed graphs
//!
//! Two interchangeable strategies answer the same origin/destination queries:
//! a dense O(V²) Dijkstra that scans an adjacency matrix, and a sparse
//! O((V+E) log V) Dijkstra over adjacency lists whose single-source results
//! are memoized per origin inside the graph.
//!
//! Both strategies return the same distances; predecessor chains may differ
//! when several shortest paths exist.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod loader;

pub use algorithm::{
    dijkstra::Dijkstra, matrix_scan::MatrixScan, Distance, ShortestPath, ShortestPathAlgorithm,
    ShortestPathResult, Strategy,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex index {index} out of range for a graph of {vertex_count} vertices")]
    IndexOutOfRange { index: usize, vertex_count: usize },

    #[error("Negative weight on arc {from} -> {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Solver invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
