// Shared helpers for `wayfinder-lib` integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use wayfinder_lib::{build_graph, Graph, NodeId, RoadMap};

/// Parse inline map text and build its graph in one go.
pub fn load_map(text: &str) -> (RoadMap, Graph) {
    let map = RoadMap::parse(text.as_bytes()).expect("map text parses");
    let graph = build_graph(&map);
    (map, graph)
}

/// Resolve a name that the test knows exists.
pub fn id(map: &RoadMap, name: &str) -> NodeId {
    map.node_id_by_name(name).expect("node exists")
}

/// Resolve a whole route to names for readable assertions.
pub fn names(map: &RoadMap, nodes: &[NodeId]) -> Vec<String> {
    nodes
        .iter()
        .map(|&node| map.node_name(node).expect("node exists").to_string())
        .collect()
}

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/iberia.txt")
}
