pub mod builder;
pub mod error;
pub mod geometry;
pub mod reachability;
pub mod serialize;
pub mod types;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use reachability::reachable;

pub use error::{MazeError, Result};
pub use types::{Edge, GeneratorConfig, Graph, NEIGHBOR_OFFSETS, Offset, Point, Scenario};

impl GeneratorConfig {
    /// Reject configurations that can never produce a scenario.
    pub fn validate(&self) -> Result<()> {
        if !(self.edge_probability > 0.0 && self.edge_probability <= 1.0) {
            return Err(MazeError::InvalidEdgeProbability(self.edge_probability));
        }
        if self.min_edges == 0 {
            return Err(MazeError::InvalidMinEdges);
        }
        if self.offsets.iter().all(|o| o.is_zero()) {
            return Err(MazeError::EmptyOffsets);
        }
        let capacity = builder::capacity(self.grid_size, &self.offsets);
        if self.grid_size == 0 || capacity < self.min_edges {
            return Err(MazeError::InvalidGridSize {
                grid_size: self.grid_size,
                capacity,
                min_edges: self.min_edges,
            });
        }
        Ok(())
    }
}

/// Generate a scenario whose goal is reachable from its start.
///
/// Each attempt builds a fresh candidate graph. Candidates with fewer than
/// `min_edges` edges, or whose sampled start and goal are disconnected, are
/// discarded whole and the next attempt starts from scratch.
///
/// # Errors
/// Returns a validation error before the first attempt if the configuration can
/// never succeed, and `GenerationTimeout` once `max_attempts` candidates were rejected.
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Scenario> {
    config.validate()?;

    let mut attempts: u32 = 0;
    loop {
        if config.max_attempts.is_some_and(|max| attempts >= max) {
            return Err(MazeError::GenerationTimeout { attempts });
        }
        attempts = attempts.saturating_add(1);

        let graph = builder::build(config, rng);
        if graph.len() < config.min_edges {
            log::debug!(
                "attempt {attempts}: {} edges, need {}",
                graph.len(),
                config.min_edges
            );
            continue;
        }

        let nodes = graph.nodes();
        let Some((start, goal)) = pick_endpoints(&nodes, rng) else {
            log::debug!("attempt {attempts}: fewer than two active nodes");
            continue;
        };

        if !reachable(start, goal, graph.edges()) {
            log::debug!("attempt {attempts}: {goal} unreachable from {start}");
            continue;
        }

        log::info!(
            "scenario after {attempts} attempt(s): {} edges, {} nodes, {start} -> {goal}",
            graph.len(),
            nodes.len()
        );
        return Ok(Scenario {
            start,
            goal,
            edges: graph.into_edges(),
            attempts,
        });
    }
}

/// Generate with a `StdRng` seeded from `seed`.
pub fn generate_seeded(config: &GeneratorConfig, seed: u64) -> Result<Scenario> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(config, &mut rng)
}

/// Generate `count` independent scenarios in parallel.
///
/// Scenario `i` uses seed `seed + i`, so the output matches `count` sequential
/// calls to [`generate_seeded`].
pub fn generate_batch(config: &GeneratorConfig, seed: u64, count: usize) -> Vec<Result<Scenario>> {
    (0..count)
        .into_par_iter()
        .map(|i| generate_seeded(config, seed.wrapping_add(i as u64)))
        .collect()
}

/// Sample a start node, then resample the goal until it differs.
fn pick_endpoints<R: Rng>(nodes: &[Point], rng: &mut R) -> Option<(Point, Point)> {
    if nodes.len() < 2 {
        return None;
    }
    let start = *nodes.choose(rng)?;
    loop {
        let goal = *nodes.choose(rng)?;
        if goal != start {
            return Some((start, goal));
        }
    }
}

impl Scenario {
    /// Check every scenario invariant against the given grid.
    pub fn verify(&self, grid_size: u32, min_edges: usize) -> Result<()> {
        let fail = |msg: String| Err(MazeError::InvalidScenario(msg));

        if self.edges.len() < min_edges {
            return fail(format!(
                "{} edges, at least {min_edges} required",
                self.edges.len()
            ));
        }
        if self.start == self.goal {
            return fail(format!("start and goal are both {}", self.start));
        }

        let mut seen = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            if !edge.from().in_bounds(grid_size) || !edge.to().in_bounds(grid_size) {
                return fail(format!("edge {edge} leaves the {grid_size}x{grid_size} grid"));
            }
            if !seen.insert(*edge) {
                return fail(format!("edge {edge} appears more than once"));
            }
        }

        for (i, e) in self.edges.iter().enumerate() {
            if let Some(f) = self.edges[i + 1..]
                .iter()
                .find(|f| geometry::conflicts(e, f))
            {
                return fail(format!("edges {e} and {f} cross"));
            }
        }

        for (label, point) in [("start", self.start), ("goal", self.goal)] {
            if !self.edges.iter().any(|e| e.has_endpoint(point)) {
                return fail(format!("{label} {point} is not on any edge"));
            }
        }

        if !reachable(self.start, self.goal, &self.edges) {
            return fail(format!("goal {} unreachable from {}", self.goal, self.start));
        }
        Ok(())
    }
}
