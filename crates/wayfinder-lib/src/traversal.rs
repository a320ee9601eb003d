//! Interactive traversal with re-planning on deviation.
//!
//! A [`Traversal`] owns one session over a fixed graph. Moves that follow the
//! active path advance the position without touching the planner; moves that
//! leave it trigger exactly one fresh search whose origin is the node the
//! traveller actually stepped onto, and the active path is replaced wholesale.
//! Recomputing from the pre-move node would silently reintroduce the cost of
//! the edge the traveller just rejected.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::network::{NodeId, RoadMap};
use crate::path::{uniform_cost_search, Path};

/// Phase of an interactive traversal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalPhase {
    /// Initial path requested but not yet resolved; only observable inside
    /// [`Traversal::begin`].
    Planning,
    /// Standing on a node with a valid position in the active path.
    AtNode,
    /// Current node equals the destination. Terminal.
    Arrived,
    /// No viable continuation from the current node. Terminal.
    Stuck(StuckReason),
}

impl TraversalPhase {
    /// Terminal phases admit no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, TraversalPhase::Arrived | TraversalPhase::Stuck(_))
    }
}

/// Why a traversal ended without reaching the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StuckReason {
    /// The initial search found no route from the origin.
    NoRouteFromOrigin,
    /// The traveller stepped onto a non-destination node with no outgoing
    /// edges.
    DeadEnd,
    /// A deviation landed on a node from which the destination is
    /// unreachable.
    DestinationUnreachable,
}

/// Kind of move accepted by [`Traversal::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Followed the active path; no recomputation happened.
    Conforming,
    /// Left the active path; the remaining route was recomputed from the
    /// chosen node.
    Deviating,
}

/// Reference to a node with its resolved name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeRef {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NodeRef {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// A legal next move presented to the traveller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveOption {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub weight: f64,
}

/// Serialisable view of the session state after a transition, consumed by the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraversalSnapshot {
    pub phase: TraversalPhase,
    pub current: NodeRef,
    pub destination: NodeRef,
    pub moves: Vec<MoveOption>,
    pub route: Vec<NodeRef>,
    /// Cost of the active route, measured from its own first node.
    pub route_cost: f64,
    pub position: usize,
    pub walked: Vec<NodeRef>,
    pub walked_cost: f64,
    pub recomputations: usize,
}

/// One interactive session over a fixed road map and graph.
#[derive(Debug)]
pub struct Traversal<'a> {
    map: &'a RoadMap,
    graph: &'a Graph,
    destination: NodeId,
    current: NodeId,
    active: Path,
    index: usize,
    phase: TraversalPhase,
    walked: Vec<NodeId>,
    walked_cost: f64,
    recomputations: usize,
}

impl<'a> Traversal<'a> {
    /// Start a session at `origin`, planning towards `destination`.
    ///
    /// The session comes back already past the planning phase: `Arrived` when
    /// origin equals destination, `Stuck(NoRouteFromOrigin)` when the initial
    /// search comes up empty, and `AtNode` otherwise. Undeclared endpoints
    /// fail with `UnknownNodeId`.
    pub fn begin(
        map: &'a RoadMap,
        graph: &'a Graph,
        origin: NodeId,
        destination: NodeId,
    ) -> Result<Self> {
        let mut session = Self {
            map,
            graph,
            destination,
            current: origin,
            active: Path::empty(),
            index: 0,
            phase: TraversalPhase::Planning,
            walked: vec![origin],
            walked_cost: 0.0,
            recomputations: 0,
        };

        let initial = uniform_cost_search(graph, origin, destination)?;

        if origin == destination {
            session.active = initial;
            session.phase = TraversalPhase::Arrived;
            return Ok(session);
        }

        if initial.is_empty() {
            session.phase = TraversalPhase::Stuck(StuckReason::NoRouteFromOrigin);
            return Ok(session);
        }

        debug!(
            cost = initial.cost,
            hops = initial.hop_count(),
            "planned initial route"
        );
        session.active = initial;
        session.phase = TraversalPhase::AtNode;
        Ok(session)
    }

    /// Move to `next`.
    ///
    /// An illegal choice is rejected with `InvalidSelection` and the session
    /// does not advance; the caller re-presents the same legal moves. A legal
    /// move updates the position, extends the walked history, and settles the
    /// next phase: arrival wins over everything, a dead end sticks the
    /// session, and a deviation replans from the chosen node.
    pub fn select(&mut self, next: NodeId) -> Result<MoveKind> {
        if self.phase != TraversalPhase::AtNode {
            return Err(Error::TraversalEnded);
        }

        // Cheapest matching edge carries the walked cost when parallel edges
        // link the same pair.
        let edge_weight = self
            .graph
            .neighbours(self.current)?
            .iter()
            .filter(|edge| edge.target == next)
            .map(|edge| edge.weight)
            .min_by(|a, b| a.total_cmp(b));

        let Some(weight) = edge_weight else {
            return Err(Error::InvalidSelection {
                current: self.node_label(self.current),
                chosen: self.node_label(next),
            });
        };

        let conforming = self
            .active
            .nodes
            .get(self.index + 1)
            .is_some_and(|&planned| planned == next);
        let kind = if conforming {
            MoveKind::Conforming
        } else {
            MoveKind::Deviating
        };

        self.current = next;
        self.walked.push(next);
        self.walked_cost += weight;

        if next == self.destination {
            // A deviation straight onto the destination arrives without a
            // recomputation; the search would return the trivial path anyway.
            if conforming {
                self.index += 1;
            }
            self.phase = TraversalPhase::Arrived;
            return Ok(kind);
        }

        if self.graph.neighbours(next)?.is_empty() {
            self.phase = TraversalPhase::Stuck(StuckReason::DeadEnd);
            return Ok(kind);
        }

        if conforming {
            self.index += 1;
        } else {
            self.recomputations += 1;
            debug!("deviated to {}; replanning", self.node_label(next));
            let replanned = uniform_cost_search(self.graph, next, self.destination)?;
            if replanned.is_empty() {
                self.phase = TraversalPhase::Stuck(StuckReason::DestinationUnreachable);
                return Ok(kind);
            }
            self.active = replanned;
            self.index = 0;
        }

        Ok(kind)
    }

    /// Current phase of the session.
    pub fn phase(&self) -> TraversalPhase {
        self.phase
    }

    /// Node the traveller is standing on.
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Fixed destination of the session.
    pub fn destination(&self) -> NodeId {
        self.destination
    }

    /// The currently-active planned path.
    pub fn active_path(&self) -> &Path {
        &self.active
    }

    /// Index of the current node within the active path.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Every node visited so far, origin first.
    pub fn walked(&self) -> &[NodeId] {
        &self.walked
    }

    /// Summed weight of the edges actually traversed.
    pub fn walked_cost(&self) -> f64 {
        self.walked_cost
    }

    /// How many times the planner was re-invoked after the initial route.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// Snapshot the session for the presentation layer.
    pub fn snapshot(&self) -> Result<TraversalSnapshot> {
        let moves = if self.phase == TraversalPhase::AtNode {
            self.graph
                .neighbours(self.current)?
                .iter()
                .map(|edge| MoveOption {
                    id: edge.target,
                    name: self.map.node_name(edge.target).map(str::to_string),
                    weight: edge.weight,
                })
                .collect()
        } else {
            Vec::new()
        };

        Ok(TraversalSnapshot {
            phase: self.phase,
            current: self.node_ref(self.current),
            destination: self.node_ref(self.destination),
            moves,
            route: self
                .active
                .nodes
                .iter()
                .map(|&node| self.node_ref(node))
                .collect(),
            route_cost: self.active.cost,
            position: self.index,
            walked: self.walked.iter().map(|&node| self.node_ref(node)).collect(),
            walked_cost: self.walked_cost,
            recomputations: self.recomputations,
        })
    }

    fn node_ref(&self, id: NodeId) -> NodeRef {
        NodeRef {
            id,
            name: self.map.node_name(id).map(str::to_string),
        }
    }

    fn node_label(&self, id: NodeId) -> String {
        self.map
            .node_name(id)
            .unwrap_or("<unknown>")
            .to_string()
    }
}
