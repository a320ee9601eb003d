//! Name-level route planning over a loaded road map.
//!
//! [`plan_route`] is the one-shot entry point: it resolves free-form node
//! names, runs the canonical uniform-cost search, and converts the empty
//! "unreachable" result into [`Error::RouteNotFound`] for callers that want
//! an error rather than a sentinel path. The interactive traversal layer uses
//! the same search directly and keeps the empty-path representation.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::network::{NodeId, RoadMap};
use crate::path::uniform_cost_search;

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: NodeId,
    pub goal: NodeId,
    pub steps: Vec<NodeId>,
    pub cost: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a node name to its identifier, attaching fuzzy suggestions to the
/// error when the name is unknown.
pub fn resolve_node(map: &RoadMap, name: &str) -> Result<NodeId> {
    map.node_id_by_name(name).ok_or_else(|| {
        let suggestions = map.fuzzy_node_matches(name, 3);
        Error::UnknownNode {
            name: name.to_string(),
            suggestions,
        }
    })
}

/// Compute a route for a name-level request.
pub fn plan_route(map: &RoadMap, graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let start_id = resolve_node(map, &request.start)?;
    let goal_id = resolve_node(map, &request.goal)?;

    let path = uniform_cost_search(graph, start_id, goal_id)?;
    if path.is_empty() {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    }

    Ok(RoutePlan {
        start: start_id,
        goal: goal_id,
        steps: path.nodes,
        cost: path.cost,
    })
}
