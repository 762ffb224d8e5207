/*!
Single-source shortest paths by label-correcting relaxation.

Instead of settling nodes once in priority order (Dijkstra), [`ShortestPath`] keeps a
best-known distance per node and a FIFO worklist. Popping an unsettled node relaxes all of its
outgoing edges; every strict improvement unsettles the neighbor and queues it again. This
handles negative edge weights as long as no negative cycle is reachable from the root.

Each improvement records how many edges the improving walk has. A walk with `n` edges must
contain a cycle, and it can only have improved a distance if that cycle is negative. The sweep
then stops with [`GraphError::NoConvergence`] instead of relaxing forever.
*/

use std::collections::VecDeque;

use tracing::{debug, warn};

use super::*;

/// Path lengths are accumulated in a wider type than [`Weight`]
pub type Distance = i32;

/// Distance of nodes that can not be reached from the root
pub const UNREACHABLE: Distance = Distance::MAX;

/// Configurable shortest-path computation from a fixed root
pub struct ShortestPath<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    root: Node,
    convergence_check: bool,
}

impl<'a, G> ShortestPath<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new computation from `root`.
    /// Fails if `root` is not a node of the graph.
    pub fn new(graph: &'a G, root: Node) -> Result<Self> {
        graph.check_node(root)?;
        Ok(Self {
            graph,
            root,
            convergence_check: true,
        })
    }

    /// Enables or disables the negative-cycle guard (enabled by default).
    ///
    /// # Warning
    /// Without the guard, a negative cycle reachable from the root keeps the sweep relaxing
    /// until distances saturate at [`Distance::MIN`].
    pub fn with_convergence_check(mut self, check: bool) -> Self {
        self.convergence_check = check;
        self
    }

    /// Returns the best-known distance of every node from the root.
    /// Nodes that can not be reached hold [`UNREACHABLE`].
    pub fn distances(&self) -> Result<Vec<Distance>> {
        let n = self.graph.len();

        let mut sweep = Sweep {
            distances: vec![UNREACHABLE; n],
            hops: vec![0; n],
            settled: NodeBitSet::with_capacity(n),
            queue: VecDeque::new(),
        };
        sweep.distances[self.root as usize] = 0;
        sweep.settled.insert(self.root as usize);

        self.relax(self.root, &mut sweep)?;

        let mut pops = 0usize;
        while let Some(u) = sweep.queue.pop_front() {
            pops += 1;
            if sweep.settled.put(u as usize) {
                continue;
            }
            self.relax(u, &mut sweep)?;
        }

        debug!(root = self.root, pops, "shortest-path sweep finished");
        Ok(sweep.distances)
    }

    /// Returns the distance from the root to `target`, or [`UNREACHABLE`].
    pub fn distance_to(&self, target: Node) -> Result<Distance> {
        self.graph.check_node(target)?;
        Ok(self.distances()?[target as usize])
    }

    fn relax(&self, u: Node, sweep: &mut Sweep) -> Result<()> {
        let n = self.graph.number_of_nodes();
        let du = sweep.distances[u as usize];

        for v in self.graph.neighbors_of(u) {
            let candidate = du.saturating_add(self.graph.cell(u, v) as Distance);
            if candidate >= sweep.distances[v as usize] {
                continue;
            }

            sweep.distances[v as usize] = candidate;
            if self.convergence_check {
                sweep.hops[v as usize] = sweep.hops[u as usize] + 1;
                if sweep.hops[v as usize] >= n {
                    warn!(root = self.root, node = v, "negative cycle reachable, aborting sweep");
                    return Err(GraphError::NoConvergence { node: v });
                }
            }

            sweep.settled.set(v as usize, false);
            sweep.queue.push_back(v);
        }

        Ok(())
    }
}

struct Sweep {
    distances: Vec<Distance>,
    /// number of edges of the walk that produced the current distance,
    /// only maintained while the convergence check is enabled
    hops: Vec<NumNodes>,
    settled: NodeBitSet,
    queue: VecDeque<Node>,
}

/// Provides shortest-path queries directly on graphs
pub trait ShortestPaths: AdjacencyList + Sized {
    /// Returns the minimum total weight of a walk from `root` to `target` along outgoing edges,
    /// or [`UNREACHABLE`] if there is none.
    ///
    /// Fails if either node does not exist, or with [`GraphError::NoConvergence`] if a negative
    /// cycle is reachable from `root`.
    ///
    /// # Examples
    /// ```
    /// use mgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(3, [Edge::undirected(0, 1, 120), Edge::undirected(1, 2, 60)]).unwrap();
    /// assert_eq!(g.find_shortest_path(0, 2), Ok(180));
    /// ```
    fn find_shortest_path(&self, root: Node, target: Node) -> Result<Distance> {
        self.check_node(target)?;
        ShortestPath::new(self, root)?.distance_to(target)
    }

    /// Like [`ShortestPaths::find_shortest_path`] but returns `None` if `target` is unreachable
    fn shortest_distance(&self, root: Node, target: Node) -> Result<Option<Distance>> {
        let distance = self.find_shortest_path(root, target)?;
        Ok((distance != UNREACHABLE).then_some(distance))
    }
}

impl<G> ShortestPaths for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn directed(n: NumNodes, edges: &[(Node, Node, Weight)]) -> Graph {
        Graph::from_edges(n, edges.iter().map(|&(u, v, w)| Edge::directed(u, v, w))).unwrap()
    }

    /// Plain Bellman-Ford for comparison
    fn bellman_ford(graph: &Graph, root: Node) -> Vec<Distance> {
        let mut dist = vec![UNREACHABLE; graph.len()];
        dist[root as usize] = 0;
        for _ in 0..graph.len() {
            for e in graph.edges() {
                let du = dist[e.first as usize];
                if du != UNREACHABLE && du + (e.weight as Distance) < dist[e.second as usize] {
                    dist[e.second as usize] = du + e.weight as Distance;
                }
            }
        }
        dist
    }

    #[test]
    fn sample_graph() {
        let graph = Graph::from_edges(3, [Edge::undirected(0, 1, 120), Edge::undirected(1, 2, 60)])
            .unwrap();

        assert_eq!(graph.find_shortest_path(0, 2), Ok(180));
        assert_eq!(graph.find_shortest_path(2, 0), Ok(180));
        assert_eq!(graph.find_shortest_path(1, 0), Ok(120));
        assert_eq!(
            ShortestPath::new(&graph, 0).unwrap().distances(),
            Ok(vec![0, 120, 180])
        );
    }

    #[test]
    fn root_to_itself_is_zero() {
        let graph = directed(3, &[(0, 1, 4), (1, 0, 4), (0, 0, 7)]);
        for u in 0..3 {
            assert_eq!(graph.find_shortest_path(u, u), Ok(0));
        }
    }

    #[test]
    fn prefers_cheaper_longer_path() {
        let graph = directed(4, &[(0, 3, 100), (0, 1, 10), (1, 2, 10), (2, 3, 10)]);
        assert_eq!(graph.find_shortest_path(0, 3), Ok(30));
    }

    #[test]
    fn unreachable_target() {
        let graph = directed(3, &[(0, 1, 5)]);
        assert_eq!(graph.find_shortest_path(0, 2), Ok(UNREACHABLE));
        assert_eq!(graph.find_shortest_path(1, 0), Ok(UNREACHABLE));
        assert_eq!(graph.shortest_distance(1, 0), Ok(None));
        assert_eq!(graph.shortest_distance(0, 1), Ok(Some(5)));
    }

    #[test]
    fn negative_edges_without_cycle() {
        let graph = directed(4, &[(0, 1, 5), (0, 2, 2), (1, 3, -4), (2, 3, 1)]);
        assert_eq!(graph.find_shortest_path(0, 3), Ok(1));
        assert_eq!(bellman_ford(&graph, 0)[3], 1);
    }

    #[test]
    fn negative_cycle_does_not_converge() {
        let graph = directed(4, &[(0, 1, 1), (1, 2, -3), (2, 1, 1), (3, 3, 2)]);
        assert!(matches!(
            graph.find_shortest_path(0, 2),
            Err(GraphError::NoConvergence { .. })
        ));

        // cycle is not reachable from 3
        assert_eq!(graph.find_shortest_path(3, 0), Ok(UNREACHABLE));
        assert_eq!(graph.find_shortest_path(3, 3), Ok(0));
    }

    #[test]
    fn negative_self_loop_does_not_converge() {
        let graph = directed(2, &[(0, 1, 1), (1, 1, -1)]);
        assert_eq!(
            graph.find_shortest_path(0, 1),
            Err(GraphError::NoConvergence { node: 1 })
        );
    }

    #[test]
    fn unchecked_sweep_saturates_on_negative_cycle() {
        // every round trip 1 -> 2 -> 1 lowers both distances by 32767
        let graph = directed(3, &[(0, 1, 0), (1, 2, -32767), (2, 1, 0)]);

        let distances = ShortestPath::new(&graph, 0)
            .unwrap()
            .with_convergence_check(false)
            .distances();
        assert_eq!(distances, Ok(vec![0, Distance::MIN, Distance::MIN]));

        assert_eq!(
            graph.find_shortest_path(0, 1),
            Err(GraphError::NoConvergence { node: 1 })
        );
    }

    #[test]
    fn missing_nodes_fail() {
        let graph = directed(2, &[(0, 1, 1)]);
        let err = Err(GraphError::NodeOutOfRange { node: 2, size: 2 });
        assert_eq!(graph.find_shortest_path(2, 0), err);
        assert_eq!(graph.find_shortest_path(0, 2), err);
        assert!(ShortestPath::new(&graph, 2).is_err());
        assert!(
            ShortestPath::new(&graph, 0).unwrap().distance_to(9).is_err()
        );
    }

    #[test]
    fn matches_bellman_ford() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [2 as NumNodes, 6, 15] {
            for m in [n, n * 3, n * 6] {
                let mut graph = Graph::new(n);
                for _ in 0..m {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let direction = if rng.random_bool(0.5) {
                        EdgeDirection::Directed
                    } else {
                        EdgeDirection::Undirected
                    };
                    graph
                        .insert_edge(u, v, rng.random_range(0..=200), direction)
                        .unwrap();
                }

                for root in 0..n {
                    let expected = bellman_ford(&graph, root);
                    let distances = ShortestPath::new(&graph, root)
                        .unwrap()
                        .distances()
                        .unwrap();
                    assert_eq!(distances, expected);

                    for target in 0..n {
                        let reachable = graph.breadth_first_search(root, target).unwrap();
                        assert_eq!(reachable, distances[target as usize] != UNREACHABLE);
                    }
                }
            }
        }
    }

    #[test]
    fn distance_grows_along_a_path() {
        let n = 10;
        let graph = directed(n, &(0..n - 1).map(|u| (u, u + 1, 3)).collect_vec());

        let distances = ShortestPath::new(&graph, 0).unwrap().distances().unwrap();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(distances[9], 27);
    }
}
