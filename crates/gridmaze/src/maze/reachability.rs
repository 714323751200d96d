use std::collections::{HashMap, HashSet, VecDeque};

use super::types::{Edge, Point};

/// Undirected adjacency over the active nodes of `edges`.
pub fn adjacency(edges: &[Edge]) -> HashMap<Point, Vec<Point>> {
    let mut adj: HashMap<Point, Vec<Point>> = HashMap::with_capacity(edges.len() * 2);
    for edge in edges {
        adj.entry(edge.from()).or_default().push(edge.to());
        adj.entry(edge.to()).or_default().push(edge.from());
    }
    adj
}

/// Whether `goal` can be reached from `start` along `edges`.
///
/// A point is always reachable from itself, even when it is not an active node.
pub fn reachable(start: Point, goal: Point, edges: &[Edge]) -> bool {
    shortest_hops(start, goal, edges).is_some()
}

/// Fewest edges on any path from `start` to `goal`, found breadth-first.
pub fn shortest_hops(start: Point, goal: Point, edges: &[Edge]) -> Option<usize> {
    if start == goal {
        return Some(0);
    }

    let adj = adjacency(edges);
    let mut visited: HashSet<Point> = HashSet::from([start]);
    let mut queue: VecDeque<(Point, usize)> = VecDeque::from([(start, 0)]);

    while let Some((current, hops)) = queue.pop_front() {
        let Some(neighbors) = adj.get(&current) else {
            continue;
        };
        for &next in neighbors {
            if next == goal {
                return Some(hops + 1);
            }
            if visited.insert(next) {
                queue.push_back((next, hops + 1));
            }
        }
    }

    None
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn edges(list: &[((i32, i32), (i32, i32))]) -> Vec<Edge> {
        list.iter()
            .map(|&((x1, y1), (x2, y2))| Edge::new(p(x1, y1), p(x2, y2)).unwrap())
            .collect()
    }

    fn unit_square() -> Vec<Edge> {
        edges(&[
            ((0, 0), (0, 1)),
            ((0, 1), (1, 1)),
            ((1, 1), (1, 0)),
            ((1, 0), (0, 0)),
        ])
    }

    #[test]
    fn test_adjacency_records_both_directions() {
        let adj = adjacency(&edges(&[((0, 0), (1, 0))]));
        assert_eq!(adj[&p(0, 0)], vec![p(1, 0)]);
        assert_eq!(adj[&p(1, 0)], vec![p(0, 0)]);
    }

    #[test]
    fn test_unit_square_opposite_corners() {
        let square = unit_square();
        assert!(reachable(p(0, 0), p(1, 1), &square));
        assert_eq!(shortest_hops(p(0, 0), p(1, 1), &square), Some(2));
    }

    #[test]
    fn test_goal_not_in_edge_set() {
        let single = edges(&[((0, 0), (0, 1))]);
        assert!(!reachable(p(0, 0), p(5, 5), &single));
    }

    #[test]
    fn test_start_not_in_edge_set() {
        let single = edges(&[((0, 0), (0, 1))]);
        assert!(!reachable(p(5, 5), p(0, 0), &single));
    }

    #[test]
    fn test_same_point_is_trivially_reachable() {
        assert!(reachable(p(3, 3), p(3, 3), &[]));
        assert_eq!(shortest_hops(p(0, 0), p(0, 0), &unit_square()), Some(0));
    }

    #[test]
    fn test_disconnected_components() {
        let two_parts = edges(&[((0, 0), (1, 0)), ((3, 3), (4, 3))]);
        assert!(reachable(p(0, 0), p(1, 0), &two_parts));
        assert!(!reachable(p(0, 0), p(4, 3), &two_parts));
    }

    #[test]
    fn test_cycle_terminates() {
        let triangle = edges(&[((0, 0), (1, 0)), ((1, 0), (1, 1)), ((1, 1), (0, 0))]);
        assert!(!reachable(p(0, 0), p(9, 9), &triangle));
    }

    #[test]
    fn test_symmetry() {
        let graph = edges(&[
            ((0, 0), (1, 0)),
            ((1, 0), (2, 1)),
            ((2, 1), (2, 2)),
            ((5, 5), (4, 5)),
        ]);
        let points = [p(0, 0), p(1, 0), p(2, 1), p(2, 2), p(5, 5), p(4, 5), p(7, 7)];
        for &a in &points {
            for &b in &points {
                assert_eq!(reachable(a, b, &graph), reachable(b, a, &graph), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_shortest_hops_prefers_fewer_edges() {
        let graph = edges(&[
            ((0, 0), (1, 0)),
            ((1, 0), (2, 0)),
            ((2, 0), (3, 0)),
            ((0, 0), (2, 1)),
            ((2, 1), (3, 0)),
        ]);
        assert_eq!(shortest_hops(p(0, 0), p(3, 0), &graph), Some(2));
    }
}
