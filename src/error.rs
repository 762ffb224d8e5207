/*!
# Errors

Every failure in this crate is an invalid argument handed in by the caller and therefore
recoverable. [`GraphError`] names which argument was wrong.
*/

use thiserror::Error;

use crate::{Node, NumNodes};

/// Errors raised by graph operations and algorithms
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {node} does not exist in a graph of {size} nodes")]
    NodeOutOfRange { node: Node, size: NumNodes },
    #[error("nodes {src} and {target} are not connected")]
    NotConnected { src: Node, target: Node },
    #[error("there is no node labeled {0:?} in the graph")]
    LabelNotFound(String),
    #[error("the graph has no nodes")]
    EmptyGraph,
    #[error("distances did not converge, node {node} lies behind a negative cycle")]
    NoConvergence { node: Node },
}

pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::NodeOutOfRange { node: 4, size: 3 }.to_string(),
            "node 4 does not exist in a graph of 3 nodes"
        );
        assert_eq!(
            GraphError::LabelNotFound("Lodz".into()).to_string(),
            "there is no node labeled \"Lodz\" in the graph"
        );
    }
}
