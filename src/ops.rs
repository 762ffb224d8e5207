/*!
# Graph Operations

The public contract of every graph representation, split into small traits in the same way
algorithms consume them:

- [`GraphNodeOrder`]: node count and id validation,
- [`AdjacencyQuery`]: raw matrix cells, connectivity tests and edge reconstruction,
- [`AdjacencyList`]: neighborhoods and edge enumeration,
- [`GraphNew`], [`GraphEdgeEditing`], [`GraphFromScratch`]: construction and edge insertion.

Algorithms in [`crate::algo`] only ever talk to a graph through these traits, so they run
unchanged on [`Graph`](crate::repr::Graph) and [`LabeledGraph`](crate::repr::LabeledGraph).
*/

use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph.
    /// This never changes for the lifetime of an instance.
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a range over all nodes.
    /// The range does not borrow `self`.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns *true* if `u` is a node of the graph, ie. `u < n`
    fn contains(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns `Ok(())` if `u` is a node of the graph and [`GraphError::NodeOutOfRange`] otherwise
    fn check_node(&self, u: Node) -> Result<()> {
        if self.contains(u) {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node: u,
                size: self.number_of_nodes(),
            })
        }
    }

    /// Returns `u` if it is a node of the graph
    fn node(&self, u: Node) -> Result<Node> {
        self.check_node(u).map(|_| u)
    }
}

/// Access to the weight matrix and everything derived from a single cell
pub trait AdjacencyQuery: GraphNodeOrder {
    /// Returns the raw content of cell `(u, v)`, which is [`NO_EDGE`] if there is no edge.
    /// ** Panics if `u >= n || v >= n` **
    fn cell(&self, u: Node, v: Node) -> Weight;

    /// Returns *true* if cell `(u, v)` holds an edge.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.cell(u, v) != NO_EDGE
    }

    /// Reconstructs the edge stored in cell `(u, v)` or returns `None` if there is none.
    ///
    /// The direction is derived from the matrix: the edge is reported as
    /// [`EdgeDirection::Undirected`] iff cells `(u, v)` and `(v, u)` hold the same weight. Two
    /// independent directed edges of equal weight are therefore indistinguishable from a single
    /// undirected edge.
    /// ** Panics if `u >= n || v >= n` **
    fn stored_edge(&self, u: Node, v: Node) -> Option<Edge> {
        let weight = self.cell(u, v);
        if weight == NO_EDGE {
            return None;
        }

        let direction = if self.cell(v, u) == weight {
            EdgeDirection::Undirected
        } else {
            EdgeDirection::Directed
        };
        Some(Edge::new(u, v, weight, direction))
    }

    /// Returns the raw weight of cell `(u, v)`.
    ///
    /// Does not require the nodes to be connected: an empty cell yields [`NO_EDGE`].
    fn edge_weight(&self, u: Node, v: Node) -> Result<Weight> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.cell(u, v))
    }

    /// Returns *true* if there is an edge from `u` to `v`
    fn are_connected(&self, u: Node, v: Node) -> Result<bool> {
        Ok(self.edge_weight(u, v)? != NO_EDGE)
    }

    /// Returns the edge from `u` to `v`.
    /// Fails with [`GraphError::NotConnected`] if there is none.
    fn edge(&self, u: Node, v: Node) -> Result<Edge> {
        self.check_node(u)?;
        self.check_node(v)?;
        self.stored_edge(u, v)
            .ok_or(GraphError::NotConnected { src: u, target: v })
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: AdjacencyQuery + Sized {
    /// Returns an iterator over the (outgoing) neighbors of `u` in ascending order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range().filter(move |&v| self.has_edge(u, v))
    }

    /// Returns all (outgoing) neighbors of `u` in ascending order
    fn connected_nodes(&self, u: Node) -> Result<Vec<Node>> {
        self.check_node(u)?;
        Ok(self.neighbors_of(u).collect_vec())
    }

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .filter_map(move |v| self.stored_edge(u, v))
    }

    /// Returns an iterator over all stored edges in row-major order.
    /// An undirected edge `{u, v}` with `u != v` shows up twice, once per direction.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range().flat_map(move |u| self.edges_of(u))
    }

    /// Returns the number of occupied cells, ie. the number of ordered pairs connected by an edge
    fn number_of_edges(&self) -> NumEdges {
        self.vertices().map(|u| self.degree_of(u) as NumEdges).sum()
    }

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.vertices().all(|u| self.neighbors_of(u).next().is_none())
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides basic edge insertion.
///
/// There is no removal: edges can only be overwritten by inserting again at the same cell.
pub trait GraphEdgeEditing: GraphNew + AdjacencyQuery {
    /// Writes `weight` into cell `(u, v)`, and into `(v, u)` as well if the edge is undirected.
    /// An existing edge is overwritten (last write wins).
    ///
    /// Fails without modifying the graph if `u` or `v` is not a node.
    fn insert_edge(
        &mut self,
        u: Node,
        v: Node,
        weight: Weight,
        direction: EdgeDirection,
    ) -> Result<Edge>;

    /// Inserts an edge of weight `0`
    fn insert_unweighted_edge(
        &mut self,
        u: Node,
        v: Node,
        direction: EdgeDirection,
    ) -> Result<Edge> {
        self.insert_edge(u, v, 0, direction)
    }

    /// Inserts all edges given by the iterator.
    ///
    /// All endpoints are validated first: if any is out of range, nothing is inserted.
    fn insert_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let edges = edges.into_iter().map(|e| e.into()).collect_vec();
        for e in &edges {
            self.check_node(e.first)?;
            self.check_node(e.second)?;
        }

        for e in edges {
            self.insert_edge(e.first, e.second, e.weight, e.direction)?;
        }
        Ok(())
    }
}

/// Trait for creating a graph from a list of edges
pub trait GraphFromScratch: Sized {
    /// Creates a graph with `n` nodes and the given edges
    fn from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>;
}

impl<G> GraphFromScratch for G
where
    G: GraphEdgeEditing,
{
    fn from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new(n);
        graph.insert_edges(edges)?;
        Ok(graph)
    }
}
