//! Interactive traversal session driven by stdin.
//!
//! Each turn prints the current node and its numbered moves, then reads a
//! choice (a number or a node name). Illegal choices are rejected and the
//! same moves are presented again. The session ends on arrival or when the
//! traveller gets stuck.

use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{bail, Result};
use wayfinder_lib::{
    resolve_node, Error, MoveKind, NodeId, RoadMap, StuckReason, Traversal, TraversalPhase,
    TraversalSnapshot,
};

use crate::commands::load_network;
use crate::output::{self, OutputFormat};

pub fn run(map_path: &Path, format: OutputFormat, from: &str, to: &str) -> Result<()> {
    let (map, graph) = load_network(map_path)?;

    let origin = resolve_node(&map, from)?;
    let destination = resolve_node(&map, to)?;
    let mut session = Traversal::begin(&map, &graph, origin, destination)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let snapshot = session.snapshot()?;
        output::print_snapshot(&snapshot, format);

        match session.phase() {
            TraversalPhase::Arrived => {
                output::print_arrival(&snapshot, format);
                return Ok(());
            }
            TraversalPhase::Stuck(reason) => bail!("journey ended: {}", describe_stuck(reason)),
            _ => {}
        }

        let Some(choice) = next_choice(&mut lines, &map, &snapshot)? else {
            bail!("input ended before reaching the destination");
        };

        match session.select(choice) {
            // Terminal outcomes get their own messaging on the next turn.
            Ok(MoveKind::Deviating) if session.phase() == TraversalPhase::AtNode => {
                output::print_deviation(&session.snapshot()?, format);
            }
            Ok(_) => {}
            Err(error @ Error::InvalidSelection { .. }) => eprintln!("{error}"),
            Err(error) => return Err(error.into()),
        }
    }
}

/// Read the next move from stdin; `None` on end of input. Unparseable input
/// is reported and skipped so the caller re-presents the choices.
fn next_choice(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    map: &RoadMap,
    snapshot: &TraversalSnapshot,
) -> Result<Option<NodeId>> {
    for line in lines {
        let line = line?;
        let choice = line.trim();
        if choice.is_empty() {
            continue;
        }

        // Menu number first, node name second.
        if let Ok(number) = choice.parse::<usize>() {
            if (1..=snapshot.moves.len()).contains(&number) {
                return Ok(Some(snapshot.moves[number - 1].id));
            }
            eprintln!("choice {number} is out of range");
            continue;
        }

        match resolve_node(map, choice) {
            Ok(id) => return Ok(Some(id)),
            Err(error) => eprintln!("{error}"),
        }
    }

    Ok(None)
}

fn describe_stuck(reason: StuckReason) -> &'static str {
    match reason {
        StuckReason::NoRouteFromOrigin => "no route exists from the origin",
        StuckReason::DeadEnd => "reached a dead end",
        StuckReason::DestinationUnreachable => "the destination is unreachable from here",
    }
}
