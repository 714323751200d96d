mod serialization;
mod simple;

use super::geometry::intersects;
use super::reachability::reachable;
use super::types::{Edge, GeneratorConfig, Offset, Point, Scenario};
use super::{MazeError, generate, generate_batch, generate_seeded};

/// Helper to create a Point.
fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Helper to create an Edge from two coordinate pairs.
fn edge(a: (i32, i32), b: (i32, i32)) -> Edge {
    Edge::new(p(a.0, a.1), p(b.0, b.1)).unwrap()
}

/// Helper to create a GeneratorConfig with the default offsets.
fn config(grid_size: u32, edge_probability: f64) -> GeneratorConfig {
    GeneratorConfig {
        grid_size,
        edge_probability,
        ..GeneratorConfig::default()
    }
}

/// Generate with a fixed seed, panicking on failure.
fn scenario(cfg: &GeneratorConfig, seed: u64) -> Scenario {
    match generate_seeded(cfg, seed) {
        Ok(s) => s,
        Err(e) => panic!("seed {seed} failed: {e}"),
    }
}

/// Assert every scenario invariant, checking each one directly as well as through `verify`.
fn assert_valid(s: &Scenario, cfg: &GeneratorConfig) {
    if let Err(e) = s.verify(cfg.grid_size, cfg.min_edges) {
        panic!("verify failed: {e}");
    }

    assert_ne!(s.start, s.goal);
    assert!(s.edges.len() >= cfg.min_edges);
    assert!(reachable(s.start, s.goal, &s.edges));

    let nodes = s.nodes();
    assert!(nodes.contains(&s.start), "start {} is not active", s.start);
    assert!(nodes.contains(&s.goal), "goal {} is not active", s.goal);

    for e in &s.edges {
        for end in e.endpoints() {
            assert!(end.in_bounds(cfg.grid_size), "{e} out of bounds");
        }
    }

    for (i, e) in s.edges.iter().enumerate() {
        for f in &s.edges[i + 1..] {
            if e.shares_endpoint(f) {
                continue;
            }
            assert!(
                !intersects(e.from(), e.to(), f.from(), f.to()),
                "{e} crosses {f}"
            );
        }
    }
}
