use tracing::debug;

use super::*;

/// Whole-graph reachability checks
pub trait Connectivity: Traversal {
    /// Returns *true* if every node can be reached from node `0` via outgoing edges.
    ///
    /// This is a one-directional sweep from a fixed root: on a directed graph it does **not**
    /// check that every node can reach every other node. A graph with a single node is always
    /// consistent.
    ///
    /// Fails with [`GraphError::EmptyGraph`] if the graph has no nodes.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, [Edge::directed(0, 1, 1), Edge::directed(0, 2, 1)]).unwrap();
    /// assert_eq!(g.is_consistent(), Ok(true));
    /// ```
    fn is_consistent(&self) -> Result<bool> {
        Ok(self.unreached_nodes()?.is_empty())
    }

    /// Returns all nodes that can not be reached from node `0` in ascending order.
    ///
    /// Fails with [`GraphError::EmptyGraph`] if the graph has no nodes.
    fn unreached_nodes(&self) -> Result<Vec<Node>> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let visited = self.bfs(0)?.into_visited();
        let unreached = visited.zeroes().map(|u| u as Node).collect_vec();

        debug!(
            nodes = self.len(),
            unreached = unreached.len(),
            "consistency sweep finished"
        );
        Ok(unreached)
    }
}

impl<G> Connectivity for G where G: Traversal {}
