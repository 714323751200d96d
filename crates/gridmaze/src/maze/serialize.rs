use serde::{Deserialize, Serialize};

use super::error::{MazeError, Result};
use super::types::{Edge, Point, Scenario};

/// A grid point in request payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub x: i32,
    pub y: i32,
}

/// One available edge in request payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// Request body understood by the pathfinding service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRequest {
    pub start_node: Node,
    pub goal_node: Node,
    pub available_path: Vec<PathSegment>,
}

impl From<Point> for Node {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Node> for Point {
    fn from(n: Node) -> Self {
        Point::new(n.x, n.y)
    }
}

impl From<&Edge> for PathSegment {
    fn from(e: &Edge) -> Self {
        Self {
            x1: e.from().x,
            y1: e.from().y,
            x2: e.to().x,
            y2: e.to().y,
        }
    }
}

impl TryFrom<PathSegment> for Edge {
    type Error = MazeError;

    fn try_from(s: PathSegment) -> Result<Self> {
        Edge::new(Point::new(s.x1, s.y1), Point::new(s.x2, s.y2)).ok_or_else(|| {
            MazeError::InvalidScenario(format!("segment ({},{}) connects a point to itself", s.x1, s.y1))
        })
    }
}

impl From<&Scenario> for PathRequest {
    fn from(s: &Scenario) -> Self {
        Self {
            start_node: s.start.into(),
            goal_node: s.goal.into(),
            available_path: s.edges.iter().map(PathSegment::from).collect(),
        }
    }
}

impl PathRequest {
    /// Convert back into a scenario. Only structural checks happen here; use
    /// [`Scenario::verify`] for the full invariant set.
    pub fn into_scenario(self) -> Result<Scenario> {
        let edges = self
            .available_path
            .into_iter()
            .map(Edge::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Scenario {
            start: self.start_node.into(),
            goal: self.goal_node.into(),
            edges,
            attempts: 0,
        })
    }
}

/// Plain-text listing: start, goal, then one edge per line.
///
/// Format:
/// ```text
/// start (0,0)
/// goal (3,2)
/// (0,0)-(1,0)
/// (0,0)-(0,1)
/// ```
pub fn scenario_to_string(scenario: &Scenario) -> String {
    let mut lines = Vec::with_capacity(scenario.edges.len() + 2);
    lines.push(format!("start {}", scenario.start));
    lines.push(format!("goal {}", scenario.goal));
    lines.extend(scenario.edges.iter().map(Edge::to_string));
    lines.join("\n")
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn sample() -> Scenario {
        Scenario {
            start: p(0, 0),
            goal: p(1, 1),
            edges: vec![
                Edge::new(p(0, 0), p(1, 0)).unwrap(),
                Edge::new(p(1, 0), p(1, 1)).unwrap(),
            ],
            attempts: 3,
        }
    }

    #[test]
    fn test_request_field_names() {
        let json = serde_json::to_value(PathRequest::from(&sample())).unwrap();
        assert_eq!(json["start_node"], serde_json::json!({"x": 0, "y": 0}));
        assert_eq!(json["goal_node"], serde_json::json!({"x": 1, "y": 1}));
        assert_eq!(
            json["available_path"][1],
            serde_json::json!({"x1": 1, "y1": 0, "x2": 1, "y2": 1})
        );
    }

    #[test]
    fn test_into_scenario_rejects_self_loop() {
        let request = PathRequest {
            start_node: Node { x: 0, y: 0 },
            goal_node: Node { x: 1, y: 0 },
            available_path: vec![PathSegment {
                x1: 2,
                y1: 2,
                x2: 2,
                y2: 2,
            }],
        };
        assert!(matches!(
            request.into_scenario(),
            Err(MazeError::InvalidScenario(_))
        ));
    }

    #[test]
    fn test_scenario_to_string() {
        assert_eq!(
            scenario_to_string(&sample()),
            "start (0,0)\ngoal (1,1)\n(0,0)-(1,0)\n(1,0)-(1,1)"
        );
    }
}
