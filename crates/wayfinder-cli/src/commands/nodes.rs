//! Listing of declared nodes with their road counts.

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use crate::commands::load_network;
use crate::output::OutputFormat;

pub fn run(map_path: &Path, format: OutputFormat) -> Result<()> {
    let (map, graph) = load_network(map_path)?;

    let mut rows: Vec<(String, usize)> = map
        .nodes
        .values()
        .map(|node| {
            let degree = graph.neighbours(node.id).map(|edges| edges.len())?;
            Ok((node.name.clone(), degree))
        })
        .collect::<Result<_, wayfinder_lib::Error>>()?;
    rows.sort();

    match format {
        OutputFormat::Text => {
            println!("{} nodes:", rows.len());
            for (name, degree) in &rows {
                println!("- {name} ({degree} roads)");
            }
        }
        OutputFormat::Json => {
            let nodes: Vec<_> = rows
                .iter()
                .map(|(name, degree)| json!({ "name": name, "roads": degree }))
                .collect();
            println!("{}", json!({ "nodes": nodes }));
        }
    }

    Ok(())
}
