use std::collections::HashSet;

use rand::Rng;

use super::geometry::conflicts;
use super::types::{Edge, GeneratorConfig, Graph, Offset, Point};

/// What happened to a proposed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Accepted,
    /// An endpoint lies outside the grid.
    OutOfBounds,
    /// Both endpoints coincide.
    Degenerate,
    /// The same undirected edge is already in the graph.
    Duplicate,
    /// The edge would cross or overlap an accepted edge.
    Crosses,
}

/// Build one candidate graph.
///
/// Visits every cell column by column and, for each cell, every configured offset.
/// Each (cell, offset) pair proposes an edge with probability `edge_probability`.
/// Accepted edges are never removed, so the first edge to claim a crossing wins.
pub fn build<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Graph {
    let mut graph = Graph::new();
    let size = i32::try_from(config.grid_size).unwrap_or(i32::MAX);

    for x in 0..size {
        for y in 0..size {
            let source = Point::new(x, y);
            for &offset in &config.offsets {
                if !rng.random_bool(config.edge_probability) {
                    continue;
                }
                let Some(target) = source.offset(offset) else {
                    log::trace!("rejected {source} + {offset:?}: {:?}", AddOutcome::OutOfBounds);
                    continue;
                };
                let outcome = try_add(&mut graph, source, target, config.grid_size);
                if outcome != AddOutcome::Accepted {
                    log::trace!("rejected {source} -> {target}: {outcome:?}");
                }
            }
        }
    }

    graph
}

/// Try to add the undirected edge `a`–`b`, checking it against every accepted edge.
pub fn try_add(graph: &mut Graph, a: Point, b: Point, grid_size: u32) -> AddOutcome {
    if !a.in_bounds(grid_size) || !b.in_bounds(grid_size) {
        return AddOutcome::OutOfBounds;
    }
    let Some(edge) = Edge::new(a, b) else {
        return AddOutcome::Degenerate;
    };
    if graph.contains(&edge) {
        return AddOutcome::Duplicate;
    }
    if graph.edges().iter().any(|accepted| conflicts(&edge, accepted)) {
        return AddOutcome::Crosses;
    }
    graph.push(edge);
    AddOutcome::Accepted
}

/// Upper bound on the number of edges a single build pass can accept.
///
/// The smaller of the distinct in-bounds candidate edges and the planar-graph
/// bound `3n - 6` over `n = grid_size²` points.
pub fn capacity(grid_size: u32, offsets: &[Offset]) -> usize {
    let size = u64::from(grid_size);

    // `o` and `-o` propose the same undirected edges.
    let directions: HashSet<Offset> = offsets
        .iter()
        .filter(|o| !o.is_zero())
        .map(|&o| {
            if o.dy > 0 || (o.dy == 0 && o.dx > 0) {
                o
            } else {
                Offset::new(o.dx.wrapping_neg(), o.dy.wrapping_neg())
            }
        })
        .collect();

    let candidates: u64 = directions
        .iter()
        .map(|o| {
            let w = size.saturating_sub(u64::from(o.dx.unsigned_abs()));
            let h = size.saturating_sub(u64::from(o.dy.unsigned_abs()));
            w.saturating_mul(h)
        })
        .fold(0, u64::saturating_add);

    let n = size.saturating_mul(size);
    let planar = if n >= 3 {
        n.saturating_mul(3) - 6
    } else {
        n * n.saturating_sub(1) / 2
    };

    usize::try_from(candidates.min(planar)).unwrap_or(usize::MAX)
}
