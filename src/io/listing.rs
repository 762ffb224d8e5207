//! # Listings
//!
//! A listing is the plain structured form of a graph: its size, one [`WeightedArc`] per occupied
//! matrix cell and, for labeled graphs, one [`NodeLabel`] per node. Format adapters (XML, JSON, ...)
//! serialize listings instead of graphs.
//!
//! Importing a listing never mirrors arcs: an undirected edge has to be listed in both directions,
//! which is exactly what exporting produces.

use serde::{Deserialize, Serialize};

use super::*;

/// A single occupied cell `(src, sink)` of the weight matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedArc {
    pub src: Node,
    pub sink: Node,
    pub weight: Weight,
}

impl From<Edge> for WeightedArc {
    fn from(edge: Edge) -> Self {
        Self {
            src: edge.first,
            sink: edge.second,
            weight: edge.weight,
        }
    }
}

impl From<WeightedArc> for Edge {
    fn from(arc: WeightedArc) -> Self {
        Edge::directed(arc.src, arc.sink, arc.weight)
    }
}

/// The label of a single node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeLabel {
    pub id: Node,
    pub label: String,
}

/// Structured form of a [`Graph`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphListing {
    pub size: NumNodes,
    pub edges: Vec<WeightedArc>,
}

/// Structured form of a [`LabeledGraph`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabeledGraphListing {
    pub size: NumNodes,
    pub nodes: Vec<NodeLabel>,
    pub edges: Vec<WeightedArc>,
}

fn arcs<G: AdjacencyList>(graph: &G) -> Vec<WeightedArc> {
    graph.edges().map(WeightedArc::from).collect_vec()
}

impl Graph {
    /// Exports the size and every occupied cell in row-major order
    pub fn to_listing(&self) -> GraphListing {
        GraphListing {
            size: self.number_of_nodes(),
            edges: arcs(self),
        }
    }

    /// Builds a fresh graph from a listing.
    /// Each arc is written into its cell only, the reverse cell is never touched.
    pub fn from_listing(listing: &GraphListing) -> Result<Self> {
        Graph::from_edges(listing.size, listing.edges.iter().copied())
    }

    /// Replaces this graph by the one described in `listing`.
    /// On failure, the graph is left untouched.
    pub fn import(&mut self, listing: &GraphListing) -> Result<()> {
        *self = Self::from_listing(listing)?;
        debug!(size = listing.size, arcs = listing.edges.len(), "graph imported");
        Ok(())
    }
}

impl LabeledGraph {
    /// Exports the size, the label of every node and every occupied cell in row-major order
    pub fn to_listing(&self) -> LabeledGraphListing {
        LabeledGraphListing {
            size: self.number_of_nodes(),
            nodes: self
                .labels()
                .iter()
                .enumerate()
                .map(|(id, label)| NodeLabel {
                    id: id as Node,
                    label: label.clone(),
                })
                .collect_vec(),
            edges: arcs(self),
        }
    }

    /// Builds a fresh labeled graph from a listing.
    /// Nodes missing from `listing.nodes` keep an empty label.
    pub fn from_listing(listing: &LabeledGraphListing) -> Result<Self> {
        let mut graph = LabeledGraph::from_edges(listing.size, listing.edges.iter().copied())?;
        for NodeLabel { id, label } in &listing.nodes {
            graph.set_label(*id, label.as_str())?;
        }
        Ok(graph)
    }

    /// Replaces this graph by the one described in `listing`.
    /// On failure, the graph is left untouched.
    pub fn import(&mut self, listing: &LabeledGraphListing) -> Result<()> {
        *self = Self::from_listing(listing)?;
        debug!(
            size = listing.size,
            labels = listing.nodes.len(),
            arcs = listing.edges.len(),
            "labeled graph imported"
        );
        Ok(())
    }
}

impl From<&Graph> for GraphListing {
    fn from(graph: &Graph) -> Self {
        graph.to_listing()
    }
}

impl TryFrom<&GraphListing> for Graph {
    type Error = GraphError;

    fn try_from(listing: &GraphListing) -> Result<Self> {
        Graph::from_listing(listing)
    }
}

impl From<&LabeledGraph> for LabeledGraphListing {
    fn from(graph: &LabeledGraph) -> Self {
        graph.to_listing()
    }
}

impl TryFrom<&LabeledGraphListing> for LabeledGraph {
    type Error = GraphError;

    fn try_from(listing: &LabeledGraphListing) -> Result<Self> {
        LabeledGraph::from_listing(listing)
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn sample() -> Graph {
        Graph::from_edges(3, [Edge::undirected(0, 1, 120), Edge::undirected(1, 2, 60)])
            .unwrap()
    }

    fn arc(src: Node, sink: Node, weight: Weight) -> WeightedArc {
        WeightedArc { src, sink, weight }
    }

    #[test]
    fn export_lists_both_directions() {
        assert_eq!(
            sample().to_listing(),
            GraphListing {
                size: 3,
                edges: vec![arc(0, 1, 120), arc(1, 0, 120), arc(1, 2, 60), arc(2, 1, 60)],
            }
        );
    }

    #[test]
    fn import_never_mirrors() {
        let listing = GraphListing {
            size: 2,
            edges: vec![arc(0, 1, 9)],
        };
        let graph = Graph::from_listing(&listing).unwrap();
        assert_eq!(graph.edge(0, 1), Ok(Edge::directed(0, 1, 9)));
        assert_eq!(graph.are_connected(1, 0), Ok(false));
    }

    #[test]
    fn round_trip_random() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for n in [0 as NumNodes, 1, 7, 20] {
            let mut graph = LabeledGraph::new(n);
            for u in 0..n {
                if rng.random_bool(0.7) {
                    graph.set_label(u, format!("node{}", rng.random_range(0..5))).unwrap();
                }
            }
            for _ in 0..n * 3 {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                let direction = if rng.random_bool(0.5) {
                    EdgeDirection::Directed
                } else {
                    EdgeDirection::Undirected
                };
                graph
                    .insert_edge(u, v, rng.random_range(-50..=50), direction)
                    .unwrap();
            }

            let listing = graph.to_listing();
            assert_eq!(LabeledGraph::from_listing(&listing), Ok(graph.clone()));

            let raw = graph.raw_graph();
            assert_eq!(Graph::try_from(&GraphListing::from(raw)).as_ref(), Ok(raw));
        }
    }

    #[test]
    fn import_replaces_state() {
        let mut graph = sample();
        graph
            .import(&GraphListing {
                size: 1,
                edges: vec![arc(0, 0, 1)],
            })
            .unwrap();
        assert_eq!(graph.number_of_nodes(), 1);
        assert_eq!(graph.edge_weight(0, 0), Ok(1));
    }

    #[test]
    fn failed_import_keeps_state() {
        let mut graph = LabeledGraph::from(sample()).with_labels(["a", "b", "c"]).unwrap();
        let before = graph.clone();

        let bad_arc = LabeledGraphListing {
            size: 2,
            nodes: vec![],
            edges: vec![arc(0, 2, 1)],
        };
        assert_eq!(
            graph.import(&bad_arc),
            Err(GraphError::NodeOutOfRange { node: 2, size: 2 })
        );

        let bad_label = LabeledGraphListing {
            size: 2,
            nodes: vec![NodeLabel {
                id: 5,
                label: "x".into(),
            }],
            edges: vec![],
        };
        assert!(graph.import(&bad_label).is_err());
        assert_eq!(graph, before);
    }

    #[test]
    fn missing_labels_stay_empty() {
        let listing = LabeledGraphListing {
            size: 3,
            nodes: vec![NodeLabel {
                id: 1,
                label: "Lodz".into(),
            }],
            edges: vec![],
        };
        let graph = LabeledGraph::try_from(&listing).unwrap();
        assert_eq!(graph.labels(), &["", "Lodz", ""]);
    }

    #[test]
    fn json_adapter() {
        let mut graph = LabeledGraph::new(2).with_labels(["Lodz", "Warszawa"]).unwrap();
        graph
            .insert_edge(0, 1, 60, EdgeDirection::Undirected)
            .unwrap();

        let json = serde_json::to_string(&graph.to_listing()).unwrap();
        assert_eq!(
            json,
            r#"{"size":2,"nodes":[{"id":0,"label":"Lodz"},{"id":1,"label":"Warszawa"}],"edges":[{"src":0,"sink":1,"weight":60},{"src":1,"sink":0,"weight":60}]}"#
        );

        let listing: LabeledGraphListing = serde_json::from_str(&json).unwrap();
        let mut restored = LabeledGraph::default();
        restored.import(&listing).unwrap();
        assert_eq!(restored, graph);
    }
}
