/*!
Reachability searches along outgoing edges.

This module provides:
- A generic search iterator ([`TargetSearch`]) parameterized by its worklist, yielding
  [`BreadthFirstSearch`] for a queue and [`DepthFirstSearch`] for a stack.
- The [`Traversal`] trait exposing `depth_first_search` / `breadth_first_search` directly as
  methods on every graph.

Both searches mark the root visited up front and seed the worklist with its direct successors.
Each step pops a node; a node popped for the first time is marked visited and its unvisited
successors are pushed. Since both variants visit exactly the nodes reachable from the root, they
always agree on whether a target is reachable and differ only in the order nodes are popped.
*/

use std::collections::VecDeque;

use tracing::debug;

use super::*;

/// Common interface for querying visited-states during a search.
pub trait TraversalState {
    /// Returns the set of visited nodes.
    fn visited(&self) -> &NodeBitSet;

    /// Checks if a given node `u` has already been visited.
    fn did_visit_node(&self, u: Node) -> bool {
        self.visited().contains(u as usize)
    }

    /// Returns the number of visited nodes.
    fn number_of_visited_nodes(&self) -> usize {
        self.visited().count_ones(..)
    }
}

/// Abstraction for the worklist of a search.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T>: Default {
    /// Pushes a node into the worklist.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the worklist.
    fn pop(&mut self) -> Option<T>;

    /// Removes all items from the worklist.
    fn clear(&mut self) {
        while self.pop().is_some() {}
    }
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        VecDeque::clear(self)
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn clear(&mut self) {
        Vec::clear(self)
    }
}

/// Search iterator over the nodes reachable from a root.
///
/// Yields every node in the order it is popped from the worklist for the first time. The root
/// itself is never yielded. If a stopper is set, the iteration ends right after the stopper has
/// been yielded.
pub struct TargetSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
{
    graph: &'a G,
    root: Node,
    visited: NodeBitSet,
    sequencer: S,
    stop_at: Option<Node>,
}

/// A **breadth-first search** using a queue (`VecDeque`).
pub type BreadthFirstSearch<'a, G> = TargetSearch<'a, G, VecDeque<Node>>;

/// A **depth-first search** using a stack (`Vec`).
pub type DepthFirstSearch<'a, G> = TargetSearch<'a, G, Vec<Node>>;

impl<'a, G, S> TargetSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
{
    /// Creates a new search starting at `root`.
    /// Fails if `root` is not a node of the graph.
    pub fn new(graph: &'a G, root: Node) -> Result<Self> {
        graph.check_node(root)?;

        let mut visited = NodeBitSet::with_capacity(graph.len());
        visited.insert(root as usize);

        let mut sequencer = S::default();
        for v in graph.neighbors_of(root) {
            sequencer.push(v);
        }

        Ok(Self {
            graph,
            root,
            visited,
            sequencer,
            stop_at: None,
        })
    }

    /// Returns the root of the search
    pub fn root(&self) -> Node {
        self.root
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Consumes the search and returns *true* iff `target` is reachable from the root.
    /// The root always reaches itself, without looking at any edge.
    ///
    /// # Warning
    /// The result is meaningless on a partially executed iterator.
    pub fn reaches(self, target: Node) -> bool {
        if target == self.root {
            return true;
        }

        self.stop_at(target).any(|u| u == target)
    }

    /// Runs the search to completion and returns the set of visited nodes (including the root).
    pub fn into_visited(mut self) -> NodeBitSet {
        self.by_ref().for_each(drop);
        self.visited
    }
}

impl<G, S> TraversalState for TargetSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
{
    fn visited(&self) -> &NodeBitSet {
        &self.visited
    }
}

impl<G, S> Iterator for TargetSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.sequencer.pop()?;

            // already expanded (or the root, whose successors were seeded)
            if self.visited.put(u as usize) {
                continue;
            }

            if self.stop_at == Some(u) {
                self.sequencer.clear();
            } else {
                for v in self.graph.neighbors_of(u) {
                    if !self.visited.contains(v as usize) {
                        self.sequencer.push(v);
                    }
                }
            }

            return Some(u);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            0,
            Some(self.graph.len() - self.visited.count_ones(..)),
        )
    }
}

/// Provides reachability searches directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator over the nodes reachable from `root` in **breadth-first** order.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, [Edge::directed(0, 1, 1), Edge::directed(1, 2, 1)]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).unwrap().collect();
    /// assert_eq!(order, vec![1, 2]);
    /// ```
    fn bfs(&self, root: Node) -> Result<BreadthFirstSearch<'_, Self>> {
        BreadthFirstSearch::new(self, root)
    }

    /// Returns an iterator over the nodes reachable from `root` in **depth-first** order.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, [Edge::directed(0, 1, 1), Edge::directed(0, 2, 1)]).unwrap();
    ///
    /// let order: Vec<_> = g.dfs(0).unwrap().collect();
    /// assert_eq!(order, vec![2, 1]);
    /// ```
    fn dfs(&self, root: Node) -> Result<DepthFirstSearch<'_, Self>> {
        DepthFirstSearch::new(self, root)
    }

    /// Returns *true* if `target` can be reached from `root` via outgoing edges, using a
    /// depth-first search. Fails if either node does not exist.
    fn depth_first_search(&self, root: Node, target: Node) -> Result<bool> {
        self.check_node(target)?;
        let found = self.dfs(root)?.reaches(target);
        debug!(root, target, found, "depth-first search finished");
        Ok(found)
    }

    /// Returns *true* if `target` can be reached from `root` via outgoing edges, using a
    /// breadth-first search. Fails if either node does not exist.
    fn breadth_first_search(&self, root: Node, target: Node) -> Result<bool> {
        self.check_node(target)?;
        let found = self.bfs(root)?.reaches(target);
        debug!(root, target, found, "breadth-first search finished");
        Ok(found)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
