use thiserror::Error;

use crate::network::NodeId;

/// Convenient result alias for the wayfinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an edge declaration cannot be parsed.
    #[error("malformed edge declaration on line {line}: {content:?}")]
    MalformedEdge { line: usize, content: String },

    /// Raised when an edge declares a negative weight.
    #[error("negative weight {weight} on line {line}; edge weights must be non-negative")]
    NegativeWeight { line: usize, weight: f64 },

    /// Raised when a node name could not be found in the road map.
    #[error("unknown node name: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a node identifier was never declared in the graph.
    #[error("node {id} is not present in the graph")]
    UnknownNodeId { id: NodeId },

    /// Raised when no route could be found between two nodes.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when an interactive move is not among the legal choices.
    #[error("cannot move from {current} to {chosen}: not a neighbouring node")]
    InvalidSelection { current: String, chosen: String },

    /// Raised when a move is attempted after the traversal reached a terminal state.
    #[error("traversal has already ended")]
    TraversalEnded,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
