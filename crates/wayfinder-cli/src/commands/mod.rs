// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs stays focused on parsing and
// dispatch.

pub mod nodes;
pub mod route;
pub mod travel;

use std::path::Path;

use anyhow::{Context, Result};
use wayfinder_lib::{build_graph, load_road_map, Graph, RoadMap};

/// Load the road map and build its graph, attaching the file path to errors.
pub fn load_network(map_path: &Path) -> Result<(RoadMap, Graph)> {
    let map = load_road_map(map_path)
        .with_context(|| format!("failed to load road map from {}", map_path.display()))?;
    let graph = build_graph(&map);
    Ok((map, graph))
}
