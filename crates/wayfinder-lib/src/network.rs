use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Numeric identifier for a road-network node, assigned in first-seen order.
pub type NodeId = u32;

/// Sentinel line terminating an edge-declaration stream. Anything after it is
/// ignored.
pub const END_OF_INPUT: &str = "END OF INPUT";

/// Trailing token marking an edge declaration as one-way.
const ONEWAY_TAG: &str = "oneway";

/// A named location in the road network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
}

/// A single parsed edge declaration, kept verbatim so the graph can be
/// rebuilt without re-reading the source text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeDeclaration {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
    pub directed: bool,
}

/// In-memory representation of a road-network description.
#[derive(Debug, Clone, Default)]
pub struct RoadMap {
    pub nodes: HashMap<NodeId, Node>,
    pub name_to_id: HashMap<String, NodeId>,
    pub edges: Vec<EdgeDeclaration>,
}

impl RoadMap {
    /// Lookup a node identifier by its case-sensitive name.
    pub fn node_id_by_name(&self, name: &str) -> Option<NodeId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a node name by identifier.
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(&id).map(|node| node.name.as_str())
    }

    /// Number of distinct nodes referenced by the declarations.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of parsed edge declarations.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Return up to `limit` node names similar to `name`, best match first.
    ///
    /// Used to attach "did you mean" suggestions to unknown-name errors.
    pub fn fuzzy_node_matches(&self, name: &str, limit: usize) -> Vec<String> {
        const MIN_SIMILARITY: f64 = 0.72;

        let mut scored: Vec<(f64, &str)> = self
            .name_to_id
            .keys()
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate.as_str()))
            .filter(|(score, _)| *score >= MIN_SIMILARITY)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    /// Parse a sentinel-terminated edge-declaration stream.
    ///
    /// Each line holds `<node-a> <node-b> <weight>` with an optional trailing
    /// `oneway` token; blank lines are skipped and a literal `END OF INPUT`
    /// line stops parsing.
    pub fn parse(reader: impl BufRead) -> Result<RoadMap> {
        let mut map = RoadMap::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            let line_number = index + 1;

            if line == END_OF_INPUT {
                break;
            }
            if line.is_empty() {
                continue;
            }

            map.parse_declaration(line_number, line)?;
        }

        Ok(map)
    }

    fn parse_declaration(&mut self, line_number: usize, line: &str) -> Result<()> {
        let malformed = || Error::MalformedEdge {
            line: line_number,
            content: line.to_string(),
        };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (endpoints, directed) = match tokens.as_slice() {
            [a, b, w] => ([*a, *b, *w], false),
            [a, b, w, tag] if tag.eq_ignore_ascii_case(ONEWAY_TAG) => ([*a, *b, *w], true),
            _ => return Err(malformed()),
        };

        let weight: f64 = endpoints[2].parse().map_err(|_| malformed())?;
        if !weight.is_finite() {
            return Err(malformed());
        }
        if weight < 0.0 {
            return Err(Error::NegativeWeight {
                line: line_number,
                weight,
            });
        }

        let from = self.intern(endpoints[0]);
        let to = self.intern(endpoints[1]);
        self.edges.push(EdgeDeclaration {
            from,
            to,
            weight,
            directed,
        });

        Ok(())
    }

    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }

        let id = self.nodes.len() as NodeId;
        self.nodes.insert(
            id,
            Node {
                id,
                name: name.to_string(),
            },
        );
        self.name_to_id.insert(name.to_string(), id);
        id
    }
}

/// Load a road map from a text file.
pub fn load_road_map(path: &Path) -> Result<RoadMap> {
    let file = File::open(path)?;
    let map = RoadMap::parse(BufReader::new(file))?;
    debug!(
        nodes = map.node_count(),
        edges = map.edge_count(),
        "loaded road map from {}",
        path.display()
    );
    Ok(map)
}
