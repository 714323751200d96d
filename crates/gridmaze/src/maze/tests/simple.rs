use super::*;
use crate::maze::builder::{AddOutcome, try_add};
use crate::maze::pick_endpoints;
use crate::maze::reachability::shortest_hops;
use crate::maze::types::Graph;

#[test]
fn unit_square_corners_two_hops_apart() {
    let square = vec![
        edge((0, 0), (0, 1)),
        edge((0, 1), (1, 1)),
        edge((1, 1), (1, 0)),
        edge((1, 0), (0, 0)),
    ];
    assert!(reachable(p(0, 0), p(1, 1), &square));
    assert_eq!(shortest_hops(p(0, 0), p(1, 1), &square), Some(2));
}

#[test]
fn goal_missing_from_edge_set() {
    let single = vec![edge((0, 0), (0, 1))];
    assert!(!reachable(p(0, 0), p(5, 5), &single));
}

#[test]
fn crossing_diagonal_rejected_after_first() {
    let mut graph = Graph::new();
    assert_eq!(try_add(&mut graph, p(0, 1), p(1, 0), 12), AddOutcome::Accepted);
    assert_eq!(try_add(&mut graph, p(0, 0), p(1, 1), 12), AddOutcome::Crosses);
    assert_eq!(graph.edges(), &[edge((0, 1), (1, 0))]);
}

#[test]
fn default_config_generates() {
    let cfg = GeneratorConfig::default();
    let s = scenario(&cfg, 1);
    assert_valid(&s, &cfg);
    assert!(s.attempts >= 1);
}

#[test]
fn small_grid_generates() {
    let cfg = config(4, 0.7);
    let s = scenario(&cfg, 99);
    assert_valid(&s, &cfg);
}

#[test]
fn sparse_probability_generates() {
    let cfg = config(8, 0.2);
    let s = scenario(&cfg, 5);
    assert_valid(&s, &cfg);
}

#[test]
fn thread_rng_generates() {
    let cfg = config(6, 0.7);
    let s = generate(&cfg, &mut rand::rng()).unwrap();
    assert_valid(&s, &cfg);
}

#[test]
fn pick_endpoints_needs_two_nodes() {
    let mut rng = rand::rng();
    assert_eq!(pick_endpoints(&[], &mut rng), None);
    assert_eq!(pick_endpoints(&[p(1, 1)], &mut rng), None);
}

#[test]
fn pick_endpoints_returns_distinct_pair() {
    let mut rng = rand::rng();
    let nodes = [p(0, 0), p(1, 0)];
    for _ in 0..50 {
        let (start, goal) = pick_endpoints(&nodes, &mut rng).unwrap();
        assert_ne!(start, goal);
        assert!(nodes.contains(&start) && nodes.contains(&goal));
    }
}
