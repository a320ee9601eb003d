use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::network::{NodeId, RoadMap};

/// Edge within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: f64,
}

/// Immutable adjacency map consumed by pathfinding and traversal.
///
/// Clones share the underlying map, so concurrent read-only searches are safe
/// once construction has finished.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<NodeId, Vec<Edge>>>,
}

impl Graph {
    /// Return the neighbours for a node.
    ///
    /// A node that was never declared is an error, never an implicit empty
    /// adjacency set.
    pub fn neighbours(&self, node: NodeId) -> Result<&[Edge]> {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .ok_or(Error::UnknownNodeId { id: node })
    }

    /// Whether the node was declared in this graph.
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Number of declared nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of adjacency entries, counting each direction of an undirected
    /// edge separately.
    pub fn adjacency_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Construction-time graph assembly; [`GraphBuilder::build`] freezes the
/// adjacency map for the lifetime of the search session.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    adjacency: HashMap<NodeId, Vec<Edge>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one adjacency entry for the edge and, unless `directed`, the
    /// reciprocal entry with identical weight. Both endpoints become declared
    /// nodes. Parallel edges between the same pair are all retained.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64, directed: bool) {
        self.adjacency
            .entry(a)
            .or_default()
            .push(Edge { target: b, weight });

        let reverse = self.adjacency.entry(b).or_default();
        if !directed {
            reverse.push(Edge { target: a, weight });
        }
    }

    pub fn build(self) -> Graph {
        Graph {
            adjacency: Arc::new(self.adjacency),
        }
    }
}

/// Build the routing graph from every parsed edge declaration.
pub fn build_graph(map: &RoadMap) -> Graph {
    let mut builder = GraphBuilder::new();
    for declaration in &map.edges {
        builder.add_edge(
            declaration.from,
            declaration.to,
            declaration.weight,
            declaration.directed,
        );
    }
    builder.build()
}
