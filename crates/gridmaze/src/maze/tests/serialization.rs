use super::*;
use crate::maze::serialize::{PathRequest, scenario_to_string};

#[test]
fn json_round_trip_preserves_scenario() {
    let cfg = GeneratorConfig::default();
    let original = scenario(&cfg, 11);

    let json = serde_json::to_string(&PathRequest::from(&original)).unwrap();
    let request: PathRequest = serde_json::from_str(&json).unwrap();
    let restored = request.into_scenario().unwrap();

    assert_eq!(restored.start, original.start);
    assert_eq!(restored.goal, original.goal);
    assert_eq!(restored.edges, original.edges);
    assert_valid(&restored, &cfg);
}

#[test]
fn yaml_round_trip_preserves_edges() {
    let original = scenario(&config(5, 0.7), 2);
    let yaml = serde_yaml::to_string(&PathRequest::from(&original)).unwrap();
    let request: PathRequest = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(request.into_scenario().unwrap().edges, original.edges);
}

#[test]
fn payload_shape_matches_service() {
    let s = scenario(&config(6, 0.7), 9);
    let value = serde_json::to_value(PathRequest::from(&s)).unwrap();
    let obj = value.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["available_path", "goal_node", "start_node"]);
    assert_eq!(
        value["available_path"].as_array().unwrap().len(),
        s.edges.len()
    );
    assert_eq!(value["start_node"]["x"], s.start.x);
}

#[test]
fn reversed_segments_are_accepted() {
    let json = r#"{
        "start_node": {"x": 0, "y": 0},
        "goal_node": {"x": 1, "y": 1},
        "available_path": [
            {"x1": 1, "y1": 0, "x2": 0, "y2": 0},
            {"x1": 1, "y1": 1, "x2": 1, "y2": 0}
        ]
    }"#;
    let request: PathRequest = serde_json::from_str(json).unwrap();
    let s = request.into_scenario().unwrap();
    assert_eq!(s.edges, vec![edge((0, 0), (1, 0)), edge((1, 0), (1, 1))]);
    assert!(s.verify(2, 2).is_ok());
}

#[test]
fn text_listing_has_one_line_per_edge() {
    let s = scenario(&config(5, 0.7), 30);
    let text = scenario_to_string(&s);
    assert_eq!(text.lines().count(), s.edges.len() + 2);
    assert!(text.starts_with(&format!("start {}", s.start)));
}
