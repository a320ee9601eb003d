//! Rendering of plans and traversal snapshots.
//!
//! Text mode targets a human at a terminal. JSON mode prints machine-readable
//! lines: one object for a one-shot plan, and one object per state snapshot
//! during travel, so a consumer can follow the whole session as a stream.

use clap::ValueEnum;
use serde_json::json;
use wayfinder_lib::{NodeRef, RoadMap, RoutePlan, TraversalSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn print_route(map: &RoadMap, plan: &RoutePlan, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!("Route ({} hops, cost {}):", plan.hop_count(), plan.cost);
            for (index, &node) in plan.steps.iter().enumerate() {
                println!("{:>3}. {}", index + 1, map.node_name(node).unwrap_or("<unknown>"));
            }
        }
        OutputFormat::Json => {
            let steps: Vec<_> = plan
                .steps
                .iter()
                .map(|&id| json!({ "id": id, "name": map.node_name(id) }))
                .collect();
            let value = json!({
                "cost": plan.cost,
                "hops": plan.hop_count(),
                "steps": steps,
            });
            println!("{value}");
        }
    }
}

pub fn print_snapshot(snapshot: &TraversalSnapshot, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!(
                "At {} (heading for {})",
                snapshot.current.display_name(),
                snapshot.destination.display_name()
            );
            if !snapshot.route.is_empty() {
                println!(
                    "Planned route: {} (cost {})",
                    join_names(&snapshot.route),
                    snapshot.route_cost
                );
            }
            if !snapshot.moves.is_empty() {
                println!("Moves:");
                for (index, choice) in snapshot.moves.iter().enumerate() {
                    println!(
                        "{:>3}. {} ({})",
                        index + 1,
                        choice.name.as_deref().unwrap_or("<unknown>"),
                        choice.weight
                    );
                }
            }
        }
        OutputFormat::Json => {
            // Compact, one snapshot per line.
            match serde_json::to_string(snapshot) {
                Ok(line) => println!("{line}"),
                Err(error) => eprintln!("failed to serialise snapshot: {error}"),
            }
        }
    }
}

pub fn print_deviation(snapshot: &TraversalSnapshot, format: OutputFormat) {
    // JSON consumers see the replanned route in the next snapshot line.
    if format == OutputFormat::Text {
        println!(
            "Left the planned route; replanned from {}.",
            snapshot.current.display_name()
        );
    }
}

pub fn print_arrival(snapshot: &TraversalSnapshot, format: OutputFormat) {
    if format == OutputFormat::Text {
        println!("Arrived at {}.", snapshot.destination.display_name());
        println!(
            "Route followed: {} (cost {})",
            join_names(&snapshot.walked),
            snapshot.walked_cost
        );
    }
}

fn join_names(nodes: &[NodeRef]) -> String {
    nodes
        .iter()
        .map(NodeRef::display_name)
        .collect::<Vec<_>>()
        .join(" -> ")
}
