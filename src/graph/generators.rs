use crate::graph::DirectedGraph;
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed graph with n named vertices and about
/// `edge_factor * n` arcs with integer weights in `1..=max_weight`.
/// Self-loops are skipped; duplicate arcs may occur.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: u32,
    rng: &mut R,
) -> Result<DirectedGraph<String, u32>> {
    let mut graph = DirectedGraph::new(n);
    for v in 0..n {
        graph.set_name(v, format!("v{}", v))?;
    }
    if n < 2 {
        return Ok(graph);
    }

    // Approximately edge_factor * n arcs
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_arc(u, v, rng.gen_range(1..=max_weight.max(1)))?;
        }
    }

    Ok(graph)
}

/// Generates a random graph where every (from, to) pair receives at most one
/// arc, so the matrix and the adjacency lists describe identical arcs.
pub fn generate_simple_random<R: Rng>(
    n: usize,
    edge_probability: f64,
    max_weight: u32,
    rng: &mut R,
) -> Result<DirectedGraph<String, u32>> {
    let mut graph = DirectedGraph::new(n);
    for v in 0..n {
        graph.set_name(v, format!("v{}", v))?;
    }

    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(edge_probability.clamp(0.0, 1.0)) {
                graph.add_arc(u, v, rng.gen_range(0..=max_weight))?;
            }
        }
    }

    Ok(graph)
}

/// Generates a width*height grid with unit arcs in both directions between
/// 4-neighbours. Vertex `y * width + x` is named `"(x,y)"`.
pub fn generate_grid(width: usize, height: usize) -> Result<DirectedGraph<String, u32>> {
    let n = width * height;
    let mut graph = DirectedGraph::new(n);

    // Helper function to get vertex index from 2D coordinates
    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);
            graph.set_name(current, format!("({},{})", x, y))?;

            if x > 0 {
                graph.add_arc(current, get_index(x - 1, y), 1)?;
            }
            if x + 1 < width {
                graph.add_arc(current, get_index(x + 1, y), 1)?;
            }
            if y > 0 {
                graph.add_arc(current, get_index(x, y - 1), 1)?;
            }
            if y + 1 < height {
                graph.add_arc(current, get_index(x, y + 1), 1)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random geometric graph in the unit square
/// n: number of vertices
/// r: connection radius (vertices within distance r are connected both ways)
pub fn generate_geometric<R: Rng>(
    n: usize,
    r: f64,
    rng: &mut R,
) -> Result<DirectedGraph<String, OrderedFloat<f64>>> {
    let mut graph = DirectedGraph::new(n);

    // Generate random points in the plane
    let mut points = Vec::with_capacity(n);
    for v in 0..n {
        let x: f64 = rng.gen_range(0.0..1.0);
        let y: f64 = rng.gen_range(0.0..1.0);
        points.push((x, y));
        graph.set_name(v, format!("p{}", v))?;
    }

    // Connect points that are within distance r
    for i in 0..n {
        for j in 0..n {
            if i != j {
                let (x1, y1) = points[i];
                let (x2, y2) = points[j];
                let dist = f64::hypot(x1 - x2, y1 - y2);

                if dist <= r {
                    // Add arc with weight equal to the distance
                    graph.add_arc(i, j, OrderedFloat(dist))?;
                }
            }
        }
    }

    Ok(graph)
}
