//! Reader for transit-network descriptions.
//!
//! ```text
//! 3 2
//! 0 Berri-UQAM
//! 1 Beaudry
//! 2 Papineau
//! $
//! 0 1 60
//! 1 2 75
//! ```
//!
//! The header gives the vertex count and the arc count. One line per vertex
//! follows (`index name`, the name being the rest of the line), then a `$`
//! separator, then `from to cost` triples. Every arc is inserted with the
//! configured per-arc delay added to its cost.

use std::fs;
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use crate::graph::{DirectedGraph, Graph};
use crate::{Error, Result};

/// Delay added to every arc when none is configured
pub const DEFAULT_ARC_DELAY: u32 = 20;

/// A transit network: station names and travel times in whole units
pub type Network = DirectedGraph<String, u32>;

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

fn parse_number<T: std::str::FromStr>(token: &str, line: usize, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| parse_error(line, format!("invalid {} '{}'", what, token)))
}

/// Parses a network description held in memory
pub fn parse_network(input: &str, arc_delay: u32) -> Result<Network> {
    // 1-based line numbers for error messages
    let mut lines = input.lines().enumerate().map(|(i, l)| (i + 1, l));

    let (header_line, header) = lines
        .by_ref()
        .find(|(_, l)| !l.trim().is_empty())
        .ok_or_else(|| parse_error(1, "missing header"))?;
    let mut fields = header.split_whitespace();
    let vertex_count: usize = match fields.next() {
        Some(token) => parse_number(token, header_line, "vertex count")?,
        None => return Err(parse_error(header_line, "missing vertex count")),
    };
    let arc_count: usize = match fields.next() {
        Some(token) => parse_number(token, header_line, "arc count")?,
        None => return Err(parse_error(header_line, "missing arc count")),
    };

    let mut network = Network::new(vertex_count);

    let mut named = 0;
    while named < vertex_count {
        let (line_no, line) = lines
            .next()
            .ok_or_else(|| parse_error(header_line, format!("expected {} vertex names, found {}", vertex_count, named)))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (index, name) = match line.split_once(char::is_whitespace) {
            Some((index, name)) => (index, name.trim()),
            None => (line, ""),
        };
        let index: usize = parse_number(index, line_no, "vertex index")?;
        network
            .set_name(index, name.to_string())
            .map_err(|e| parse_error(line_no, e.to_string()))?;
        named += 1;
    }

    let mut separator_found = false;
    let mut last_line = header_line;
    let mut tokens: Vec<(usize, &str)> = Vec::new();
    for (line_no, line) in lines {
        last_line = line_no;
        let trimmed = line.trim();
        if !separator_found {
            if trimmed.is_empty() {
                continue;
            }
            if trimmed != "$" {
                return Err(parse_error(line_no, format!("expected '$' separator, found '{}'", trimmed)));
            }
            separator_found = true;
            continue;
        }
        tokens.extend(trimmed.split_whitespace().map(|t| (line_no, t)));
    }
    if !separator_found && arc_count > 0 {
        return Err(parse_error(last_line, "missing '$' separator before arcs"));
    }

    let expected_tokens = arc_count
        .checked_mul(3)
        .ok_or_else(|| parse_error(header_line, format!("arc count {} out of range", arc_count)))?;
    if tokens.len() < expected_tokens {
        return Err(parse_error(
            last_line,
            format!("expected {} arcs, found {}", arc_count, tokens.len() / 3),
        ));
    }

    for triple in tokens.chunks(3).take(arc_count) {
        let (line_no, _) = triple[0];
        let from: usize = parse_number(triple[0].1, line_no, "arc source")?;
        let to: usize = parse_number(triple[1].1, triple[1].0, "arc destination")?;
        let cost: i64 = parse_number(triple[2].1, triple[2].0, "arc cost")?;

        let weight = cost
            .checked_add(i64::from(arc_delay))
            .and_then(|delayed| u32::try_from(delayed).ok())
            .ok_or_else(|| parse_error(triple[2].0, format!("arc cost {} out of range", cost)))?;
        network
            .add_arc(from, to, weight)
            .map_err(|e| parse_error(line_no, e.to_string()))?;
    }

    debug!(
        "Parsed network with {} vertices and {} arcs (delay {})",
        network.vertex_count(),
        network.edge_count(),
        arc_delay
    );

    Ok(network)
}

/// Reads a network description from any reader
pub fn read_network<R: Read>(mut reader: R, arc_delay: u32) -> Result<Network> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_network(&input, arc_delay)
}

/// Loads a network description from a file
pub fn load_network_from_path<P: AsRef<Path>>(path: P, arc_delay: u32) -> Result<Network> {
    let path = path.as_ref();
    info!("Loading network from {}", path.display());
    let input = fs::read_to_string(path)?;
    parse_network(&input, arc_delay)
}
