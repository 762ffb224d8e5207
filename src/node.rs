/*!
# Node Representation

We choose `Node = u32` as graphs stored on a dense `n × n` matrix never come close to `2^32` nodes.
Nodes carry no data of their own: a node *is* its row/column index in the adjacency matrix, and two
nodes are equal iff their ids are equal.

Human-readable names live in [`LabeledNode`], which pairs an id with the label the owning
[`LabeledGraph`](crate::repr::LabeledGraph) stores for it.
*/

use std::fmt::{Debug, Display};

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes, indexed by `node as usize`
pub type NodeBitSet = FixedBitSet;

/// A node together with its display label.
///
/// Equality requires both the id and the label to match. The label is purely informational:
/// the graph engine only ever looks at [`LabeledNode::id`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LabeledNode {
    pub node: Node,
    pub label: String,
}

impl LabeledNode {
    /// Creates a new labeled node
    pub fn new<S: Into<String>>(node: Node, label: S) -> Self {
        Self {
            node,
            label: label.into(),
        }
    }

    /// Returns the underlying node id
    pub fn id(&self) -> Node {
        self.node
    }

    /// Returns the label
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Display for LabeledNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:?}", self.node, self.label)
    }
}

impl Debug for LabeledNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<&LabeledNode> for Node {
    fn from(value: &LabeledNode) -> Self {
        value.node
    }
}

impl<S: Into<String>> From<(Node, S)> for LabeledNode {
    fn from(value: (Node, S)) -> Self {
        LabeledNode::new(value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_equality() {
        let a = LabeledNode::new(1, "Lodz");
        assert_eq!(a, LabeledNode::from((1, "Lodz")));
        assert_ne!(a, LabeledNode::new(1, "Warszawa"));
        assert_ne!(a, LabeledNode::new(2, "Lodz"));
        assert_eq!(Node::from(&a), 1);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", LabeledNode::new(3, "x")), "3:\"x\"");
    }
}
