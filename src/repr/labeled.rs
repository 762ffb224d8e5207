use itertools::Itertools;

use super::*;
use crate::testing::test_graph_ops;

/// A [`Graph`] whose nodes carry a display label.
///
/// Every node starts out with an empty label. Labels need not be unique: resolving a label to a
/// node scans the labels in id order and picks the first match, so duplicates deterministically
/// resolve to the lowest id.
///
/// All id-based operations are available through the traits in [`crate::ops`] and behave exactly
/// like on the wrapped graph. The `*_by_label` methods resolve names first and additionally fail
/// with [`GraphError::LabelNotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabeledGraph {
    graph: Graph,
    labels: Vec<String>,
}

impl LabeledGraph {
    /// Wraps an existing graph, assigning an empty label to every node
    pub fn from_graph(graph: Graph) -> Self {
        let labels = vec![String::new(); graph.len()];
        Self { graph, labels }
    }

    /// Sets the labels of the first nodes in id order
    pub fn with_labels<I, S>(mut self, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (u, label) in labels.into_iter().enumerate() {
            self.set_label(u as Node, label)?;
        }
        Ok(self)
    }

    /// Returns the wrapped graph
    pub fn raw_graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes self and returns the wrapped graph
    pub fn into_raw_graph(self) -> Graph {
        self.graph
    }

    /// Returns all labels indexed by node id
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the label of `u`
    pub fn label(&self, u: Node) -> Result<&str> {
        self.check_node(u)?;
        Ok(&self.labels[u as usize])
    }

    /// Overwrites the label of `u`. No uniqueness check is performed.
    pub fn set_label<S: Into<String>>(&mut self, u: Node, label: S) -> Result<()> {
        self.check_node(u)?;
        self.labels[u as usize] = label.into();
        Ok(())
    }

    /// Returns the lowest node labeled `label`
    pub fn find_node(&self, label: &str) -> Result<Node> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|u| u as Node)
            .ok_or_else(|| GraphError::LabelNotFound(label.to_string()))
    }

    /// Returns *true* if some node is labeled `label`
    pub fn contains_label(&self, label: &str) -> bool {
        self.find_node(label).is_ok()
    }

    /// Returns `u` together with its label
    pub fn labeled_node(&self, u: Node) -> Result<LabeledNode> {
        Ok(LabeledNode::new(u, self.label(u)?))
    }

    /// Returns the lowest node labeled `label` together with its label
    pub fn node_by_label(&self, label: &str) -> Result<LabeledNode> {
        Ok(LabeledNode::new(self.find_node(label)?, label))
    }

    /// Returns the (outgoing) neighbors of `u` with their labels in ascending id order
    pub fn labeled_connected_nodes(&self, u: Node) -> Result<Vec<LabeledNode>> {
        Ok(self
            .graph
            .connected_nodes(u)?
            .into_iter()
            .map(|v| LabeledNode::new(v, self.labels[v as usize].as_str()))
            .collect_vec())
    }

    /// Label-addressed [`AdjacencyQuery::are_connected`]
    pub fn are_connected_by_label(&self, first: &str, second: &str) -> Result<bool> {
        self.graph
            .are_connected(self.find_node(first)?, self.find_node(second)?)
    }

    /// Label-addressed [`GraphEdgeEditing::insert_edge`]
    pub fn insert_edge_by_label(
        &mut self,
        src: &str,
        target: &str,
        weight: Weight,
        direction: EdgeDirection,
    ) -> Result<Edge> {
        let (u, v) = (self.find_node(src)?, self.find_node(target)?);
        self.graph.insert_edge(u, v, weight, direction)
    }

    /// Label-addressed [`AdjacencyList::connected_nodes`]
    pub fn connected_nodes_by_label(&self, label: &str) -> Result<Vec<LabeledNode>> {
        self.labeled_connected_nodes(self.find_node(label)?)
    }

    /// Label-addressed [`AdjacencyQuery::edge`]
    pub fn edge_by_label(&self, src: &str, target: &str) -> Result<Edge> {
        self.graph
            .edge(self.find_node(src)?, self.find_node(target)?)
    }

    /// Label-addressed [`AdjacencyQuery::edge_weight`]
    pub fn edge_weight_by_label(&self, src: &str, target: &str) -> Result<Weight> {
        self.graph
            .edge_weight(self.find_node(src)?, self.find_node(target)?)
    }

    // A `LabeledNode` is addressed by its id only, its label is not compared to the stored one.

    /// Returns the label currently stored for `node`
    pub fn label_of(&self, node: &LabeledNode) -> Result<&str> {
        self.label(node.id())
    }

    /// Overwrites the label of `node`
    pub fn set_label_of<S: Into<String>>(&mut self, node: &LabeledNode, label: S) -> Result<()> {
        self.set_label(node.id(), label)
    }

    /// Node-addressed [`AdjacencyQuery::are_connected`]
    pub fn are_connected_by_node(&self, first: &LabeledNode, second: &LabeledNode) -> Result<bool> {
        self.graph.are_connected(first.id(), second.id())
    }

    /// Node-addressed [`GraphEdgeEditing::insert_edge`]
    pub fn insert_edge_by_node(
        &mut self,
        src: &LabeledNode,
        target: &LabeledNode,
        weight: Weight,
        direction: EdgeDirection,
    ) -> Result<Edge> {
        self.graph
            .insert_edge(src.id(), target.id(), weight, direction)
    }

    /// Node-addressed [`LabeledGraph::labeled_connected_nodes`]
    pub fn connected_nodes_by_node(&self, node: &LabeledNode) -> Result<Vec<LabeledNode>> {
        self.labeled_connected_nodes(node.id())
    }

    /// Node-addressed [`AdjacencyQuery::edge`]
    pub fn edge_by_node(&self, src: &LabeledNode, target: &LabeledNode) -> Result<Edge> {
        self.graph.edge(src.id(), target.id())
    }

    /// Node-addressed [`AdjacencyQuery::edge_weight`]
    pub fn edge_weight_by_node(&self, src: &LabeledNode, target: &LabeledNode) -> Result<Weight> {
        self.graph.edge_weight(src.id(), target.id())
    }
}

impl From<Graph> for LabeledGraph {
    fn from(graph: Graph) -> Self {
        Self::from_graph(graph)
    }
}

impl GraphNodeOrder for LabeledGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }
}

impl AdjacencyQuery for LabeledGraph {
    fn cell(&self, u: Node, v: Node) -> Weight {
        self.graph.cell(u, v)
    }
}

impl AdjacencyList for LabeledGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.graph.neighbors_of(u)
    }
}

impl GraphNew for LabeledGraph {
    fn new(n: NumNodes) -> Self {
        Self::from_graph(Graph::new(n))
    }
}

impl GraphEdgeEditing for LabeledGraph {
    fn insert_edge(
        &mut self,
        u: Node,
        v: Node,
        weight: Weight,
        direction: EdgeDirection,
    ) -> Result<Edge> {
        self.graph.insert_edge(u, v, weight, direction)
    }
}

test_graph_ops!(
    test_labeled_graph,
    LabeledGraph,
    (GraphNew, AdjacencyQuery, AdjacencyList, GraphEdgeEditing)
);
