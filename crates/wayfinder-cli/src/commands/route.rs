//! One-shot route computation between two named nodes.

use std::path::Path;

use anyhow::Result;
use wayfinder_lib::{plan_route, RouteRequest};

use crate::commands::load_network;
use crate::output::{self, OutputFormat};

pub fn run(map_path: &Path, format: OutputFormat, from: &str, to: &str) -> Result<()> {
    let (map, graph) = load_network(map_path)?;

    let request = RouteRequest::new(from, to);
    let plan = plan_route(&map, &graph, &request)?;

    output::print_route(&map, &plan, format);
    Ok(())
}
