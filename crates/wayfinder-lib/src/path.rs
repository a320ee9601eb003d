use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use serde::Serialize;

use crate::error::Result;
use crate::graph::Graph;
use crate::network::NodeId;

/// A computed route: ordered node sequence plus the summed edge weight.
///
/// The empty path (no nodes, cost zero) means no route exists. Callers check
/// [`Path::is_empty`]; unreachability is a normal result, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Path {
    pub nodes: Vec<NodeId>,
    pub cost: f64,
}

impl Path {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Find the cheapest path from `origin` to `goal`.
///
/// Uniform-cost search over a cost-ordered frontier: the first pop of the
/// goal is optimal because every weight is non-negative. Entries for nodes
/// that were finalized in the meantime are discarded when popped rather than
/// pruned eagerly. `origin == goal` short-circuits to a single-node path
/// without inspecting neighbours, and an undeclared endpoint fails with
/// `UnknownNodeId` instead of reading as "unreachable".
///
/// Equal-cost frontier entries are ordered by comparing candidate paths
/// lexicographically over node identifiers, so ties resolve toward nodes
/// interned earliest. Tests pin this order.
pub fn uniform_cost_search(graph: &Graph, origin: NodeId, goal: NodeId) -> Result<Path> {
    graph.neighbours(origin)?;
    graph.neighbours(goal)?;

    if origin == goal {
        return Ok(Path {
            nodes: vec![origin],
            cost: 0.0,
        });
    }

    let mut frontier = BinaryHeap::new();
    let mut finalized: HashSet<NodeId> = HashSet::new();
    frontier.push(Candidate::seed(origin));

    while let Some(candidate) = frontier.pop() {
        let node = candidate.node();

        if node == goal {
            return Ok(Path {
                nodes: candidate.path,
                cost: candidate.cost.0,
            });
        }

        if !finalized.insert(node) {
            continue; // stale entry for an already-finalized node
        }

        for edge in graph.neighbours(node)? {
            if finalized.contains(&edge.target) {
                continue;
            }
            frontier.push(candidate.extend(edge.target, edge.weight));
        }
    }

    Ok(Path::empty())
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Frontier entry carrying the accumulated cost and the path walked so far.
#[derive(Clone, Debug, Eq, PartialEq)]
struct Candidate {
    cost: FloatOrd,
    path: Vec<NodeId>,
}

impl Candidate {
    fn seed(origin: NodeId) -> Self {
        Self {
            cost: FloatOrd(0.0),
            path: vec![origin],
        }
    }

    fn node(&self) -> NodeId {
        *self.path.last().expect("candidate paths are never empty")
    }

    fn extend(&self, target: NodeId, weight: f64) -> Self {
        let mut path = self.path.clone();
        path.push(target);
        Self {
            cost: FloatOrd(self.cost.0 + weight),
            path,
        }
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost; ties
        // compare the candidate paths lexicographically.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cheaper_candidate_pops_first() {
        let mut heap = BinaryHeap::new();
        heap.push(Candidate {
            cost: FloatOrd(5.0),
            path: vec![0, 1],
        });
        heap.push(Candidate {
            cost: FloatOrd(2.0),
            path: vec![0, 2],
        });

        assert_eq!(heap.pop().unwrap().cost, FloatOrd(2.0));
    }

    #[test]
    fn equal_cost_ties_pop_lexicographically_smaller_path() {
        let mut heap = BinaryHeap::new();
        heap.push(Candidate {
            cost: FloatOrd(7.0),
            path: vec![0, 3, 2],
        });
        heap.push(Candidate {
            cost: FloatOrd(7.0),
            path: vec![0, 1, 2],
        });

        assert_eq!(heap.pop().unwrap().path, vec![0, 1, 2]);
    }

    #[test]
    fn empty_path_reports_zero_hops() {
        assert_eq!(Path::empty().hop_count(), 0);
        assert!(Path::empty().is_empty());
    }
}
