use std::fmt::Debug;

use itertools::Itertools;
use tracing::trace;

use super::*;
use crate::testing::test_graph_ops;

/// A weighted graph stored as a dense adjacency matrix.
///
/// Cells are kept in a single row-major buffer of `n * n` weights, so row `u` is the outgoing
/// neighborhood of `u`. Empty cells hold [`NO_EDGE`].
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Graph {
    n: NumNodes,
    cells: Vec<Weight>,
}

impl Graph {
    #[inline]
    fn index(&self, u: Node, v: Node) -> usize {
        debug_assert!(u < self.n && v < self.n);
        u as usize * self.n as usize + v as usize
    }

    /// Returns the row of `u`, ie. the weights of all edges leaving `u`.
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[Weight] {
        let n = self.n as usize;
        let start = u as usize * n;
        &self.cells[start..start + n]
    }

    /// Returns an iterator over all rows in node order
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> + '_ {
        self.vertices_range().map(|u| self.row(u))
    }
}

impl Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("n", &self.n)
            .field("edges", &self.edges().collect_vec())
            .finish()
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl AdjacencyQuery for Graph {
    fn cell(&self, u: Node, v: Node) -> Weight {
        self.cells[self.index(u, v)]
    }
}

impl AdjacencyList for Graph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.row(u)
            .iter()
            .positions(|&w| w != NO_EDGE)
            .map(|v| v as Node)
    }
}

impl GraphNew for Graph {
    fn new(n: NumNodes) -> Self {
        Self {
            n,
            cells: vec![NO_EDGE; n as usize * n as usize],
        }
    }
}

impl GraphEdgeEditing for Graph {
    fn insert_edge(
        &mut self,
        u: Node,
        v: Node,
        weight: Weight,
        direction: EdgeDirection,
    ) -> Result<Edge> {
        self.check_node(u)?;
        self.check_node(v)?;
        trace!(src = u, target = v, weight, ?direction, "insert edge");

        let uv = self.index(u, v);
        self.cells[uv] = weight;
        if direction == EdgeDirection::Undirected {
            let vu = self.index(v, u);
            self.cells[vu] = weight;
        }

        Ok(Edge::new(u, v, weight, direction))
    }
}

test_graph_ops!(
    test_graph,
    Graph,
    (GraphNew, AdjacencyQuery, AdjacencyList, GraphEdgeEditing)
);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        Graph::from_edges(3, [Edge::undirected(0, 1, 120), Edge::undirected(1, 2, 60)])
            .unwrap()
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::default();
        assert_eq!(graph.number_of_nodes(), 0);
        assert!(graph.is_empty());
        assert!(!graph.contains(0));
        assert_eq!(graph, Graph::new(0));
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn sample_queries() {
        let graph = sample();

        assert!(graph.contains(2));
        assert!(!graph.contains(3));

        assert!(graph.are_connected(0, 1).unwrap());
        assert!(graph.are_connected(1, 0).unwrap());
        assert!(graph.are_connected(2, 1).unwrap());
        assert!(!graph.are_connected(0, 2).unwrap());

        assert_eq!(graph.edge_weight(0, 1), Ok(120));
        assert_eq!(graph.edge_weight(2, 1), Ok(60));
        assert_eq!(graph.edge_weight(0, 2), Ok(NO_EDGE));

        assert_eq!(graph.edge(1, 0), Ok(Edge::undirected(1, 0, 120)));
        assert_eq!(
            graph.edge(0, 2),
            Err(GraphError::NotConnected { src: 0, target: 2 })
        );

        assert_eq!(graph.connected_nodes(1), Ok(vec![0, 2]));
        assert_eq!(graph.connected_nodes(0), Ok(vec![1]));
    }

    #[test]
    fn out_of_range() {
        let mut graph = sample();
        let err = GraphError::NodeOutOfRange { node: 3, size: 3 };

        assert_eq!(graph.are_connected(0, 3), Err(err.clone()));
        assert_eq!(graph.are_connected(3, 0), Err(err.clone()));
        assert_eq!(graph.edge(3, 1), Err(err.clone()));
        assert_eq!(graph.edge_weight(1, 3), Err(err.clone()));
        assert_eq!(graph.connected_nodes(3), Err(err.clone()));
        assert_eq!(graph.node(3), Err(err.clone()));
        assert_eq!(graph.node(2), Ok(2));

        let before = graph.clone();
        assert_eq!(
            graph.insert_edge(0, 3, 5, EdgeDirection::Undirected),
            Err(err)
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn directed_insertion() {
        let mut graph = Graph::new(2);
        let edge = graph.insert_edge(0, 1, 7, EdgeDirection::Directed).unwrap();
        assert_eq!(edge, Edge::directed(0, 1, 7));

        assert!(graph.are_connected(0, 1).unwrap());
        assert!(!graph.are_connected(1, 0).unwrap());
        assert_eq!(graph.edge(0, 1), Ok(Edge::directed(0, 1, 7)));
    }

    #[test]
    fn direction_is_derived_from_symmetry() {
        let mut graph = Graph::new(2);
        graph.insert_edge(0, 1, 4, EdgeDirection::Directed).unwrap();
        graph.insert_edge(1, 0, 4, EdgeDirection::Directed).unwrap();

        // two one-way edges of equal weight read back as one undirected edge
        assert_eq!(graph.edge(0, 1), Ok(Edge::undirected(0, 1, 4)));

        graph.insert_edge(1, 0, 5, EdgeDirection::Directed).unwrap();
        assert_eq!(graph.edge(0, 1), Ok(Edge::directed(0, 1, 4)));
        assert_eq!(graph.edge(1, 0), Ok(Edge::directed(1, 0, 5)));
    }

    #[test]
    fn last_write_wins() {
        let mut graph = sample();
        graph
            .insert_edge(0, 1, -3, EdgeDirection::Directed)
            .unwrap();
        assert_eq!(graph.edge_weight(0, 1), Ok(-3));
        assert_eq!(graph.edge_weight(1, 0), Ok(120));

        graph.insert_unweighted_edge(1, 0, EdgeDirection::Undirected).unwrap();
        assert_eq!(graph.edge(0, 1), Ok(Edge::undirected(0, 1, 0)));
    }

    #[test]
    fn zero_weight_is_an_edge_but_sentinel_is_not() {
        let mut graph = Graph::new(2);
        graph.insert_unweighted_edge(0, 1, EdgeDirection::Directed).unwrap();
        assert!(graph.are_connected(0, 1).unwrap());

        graph.insert_edge(1, 0, NO_EDGE, EdgeDirection::Directed).unwrap();
        assert!(!graph.are_connected(1, 0).unwrap());
        assert!(graph.edge(1, 0).is_err());
    }

    #[test]
    fn self_loop() {
        let mut graph = Graph::new(1);
        graph.insert_edge(0, 0, 9, EdgeDirection::Directed).unwrap();
        assert_eq!(graph.edge(0, 0), Ok(Edge::undirected(0, 0, 9)));
        assert_eq!(graph.connected_nodes(0), Ok(vec![0]));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn rows_and_edges() {
        let graph = sample();
        assert_eq!(graph.row(1), &[120, NO_EDGE, 60]);
        assert_eq!(graph.rows().count(), 3);
        assert_eq!(
            graph.edges().collect_vec(),
            vec![
                Edge::undirected(0, 1, 120),
                Edge::undirected(1, 0, 120),
                Edge::undirected(1, 2, 60),
                Edge::undirected(2, 1, 60),
            ]
        );
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.max_degree(), 2);
    }

    #[test]
    fn insert_edges_is_all_or_nothing() {
        let mut graph = Graph::new(3);
        let res = graph.insert_edges([Edge::directed(0, 1, 1), Edge::directed(1, 5, 1)]);
        assert_eq!(res, Err(GraphError::NodeOutOfRange { node: 5, size: 3 }));
        assert!(graph.is_singleton_graph());
    }
}
