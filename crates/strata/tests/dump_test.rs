use strata::graphlib::{Edge, Graph, Node, NodeKind};
use strata::{assign_levels, dump};

fn diamond() -> Graph {
    Graph::build(
        vec![
            Node::new("s", "s", NodeKind::Start),
            Node::new("a", "a", NodeKind::Process),
            Node::new("b", "b", NodeKind::Process),
        ],
        vec![Edge::new("s", "a"), Edge::new("s", "b")],
    )
}

#[test]
fn compact_dump_is_deterministic_and_ordered() {
    let layout = assign_levels(&diamond());
    let json = dump::to_json(&layout).expect("layout should encode");

    assert_eq!(
        json,
        r#"{"levels":[["s"],["a","b"]],"level_of":{"a":1,"b":1,"s":0}}"#
    );
}

#[test]
fn pretty_dump_round_trips_as_the_same_value() {
    let layout = assign_levels(&diamond());
    let compact = dump::to_json(&layout).expect("layout should encode");
    let pretty = dump::to_json_pretty(&layout).expect("layout should encode");

    let compact_value: serde_json::Value =
        serde_json::from_str(&compact).expect("compact dump should parse");
    let pretty_value: serde_json::Value =
        serde_json::from_str(&pretty).expect("pretty dump should parse");
    assert_eq!(compact_value, pretty_value);
}
