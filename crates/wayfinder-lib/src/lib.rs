//! Wayfinder library entry points.
//!
//! This crate loads a textual road-network description, builds the routing
//! graph, computes cheapest routes with uniform-cost search, and drives
//! interactive traversals that replan whenever the traveller leaves the
//! planned route. Higher-level consumers (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod network;
pub mod path;
pub mod routing;
pub mod traversal;

pub use error::{Error, Result};
pub use graph::{build_graph, Edge, Graph, GraphBuilder};
pub use network::{load_road_map, EdgeDeclaration, Node, NodeId, RoadMap};
pub use path::{uniform_cost_search, Path};
pub use routing::{plan_route, resolve_node, RoutePlan, RouteRequest};
pub use traversal::{
    MoveKind, MoveOption, NodeRef, StuckReason, Traversal, TraversalPhase, TraversalSnapshot,
};
