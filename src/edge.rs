use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

use crate::Node;

/// Edge weights are signed 16-bit integers.
pub type Weight = i16;

/// Weight-Value stored in a matrix cell that holds no edge.
///
/// Callers must never insert an edge with this weight: it is indistinguishable from "no edge"
/// and the edge silently disappears.
pub const NO_EDGE: Weight = Weight::MIN;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Whether an edge is stored in one or both directions of the matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EdgeDirection {
    Directed,
    #[default]
    Undirected,
}

/// A weighted edge between two nodes.
///
/// Edges are values reconstructed on demand: the graph only ever stores the weight in its
/// adjacency matrix.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub first: Node,
    pub second: Node,
    pub weight: Weight,
    pub direction: EdgeDirection,
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arrow = match self.direction {
            EdgeDirection::Directed => "->",
            EdgeDirection::Undirected => "--",
        };
        write!(f, "({}{}{}, {})", self.first, arrow, self.second, self.weight)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Creates a new edge
    pub fn new(first: Node, second: Node, weight: Weight, direction: EdgeDirection) -> Self {
        Self {
            first,
            second,
            weight,
            direction,
        }
    }

    /// Creates a new directed edge
    pub fn directed(first: Node, second: Node, weight: Weight) -> Self {
        Self::new(first, second, weight, EdgeDirection::Directed)
    }

    /// Creates a new undirected edge
    pub fn undirected(first: Node, second: Node, weight: Weight) -> Self {
        Self::new(first, second, weight, EdgeDirection::Undirected)
    }

    /// Returns the endpoints as a tuple
    pub fn endpoints(&self) -> (Node, Node) {
        (self.first, self.second)
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.first == self.second
    }

    /// Returns true if the edge is stored in both directions
    pub fn is_undirected(&self) -> bool {
        self.direction == EdgeDirection::Undirected
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Self {
            first: self.second,
            second: self.first,
            ..*self
        }
    }
}

impl From<(Node, Node, Weight)> for Edge {
    fn from(value: (Node, Node, Weight)) -> Self {
        Edge::directed(value.0, value.1, value.2)
    }
}

impl From<(Node, Node, Weight, EdgeDirection)> for Edge {
    fn from(value: (Node, Node, Weight, EdgeDirection)) -> Self {
        Edge::new(value.0, value.1, value.2, value.3)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}
