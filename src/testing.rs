/// Every graph representation should pass the same checks against a naive reference matrix.
/// The macro generates a test module for the given representation and list of traits.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of `m` random edges for nodes `0..n` with weights in `-100..=100`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
                (0..m).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let direction = if rng.random_bool(0.5) {
                        EdgeDirection::Undirected
                    } else {
                        EdgeDirection::Directed
                    };

                    Edge::new(u, v, rng.random_range(-100..=100), direction)
                }).collect_vec()
            }

            /// Applies the edges to a plain `Vec<Vec<Option<Weight>>>` in insertion order
            fn reference_matrix(n: NumNodes, edges: &[Edge]) -> Vec<Vec<Option<Weight>>> {
                let mut matrix = vec![vec![None; n as usize]; n as usize];
                for e in edges {
                    matrix[e.first as usize][e.second as usize] = Some(e.weight);
                    if e.is_undirected() {
                        matrix[e.second as usize][e.first as usize] = Some(e.weight);
                    }
                }
                matrix
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..30 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_empty(), n == 0);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(graph.is_singleton_graph());
                assert_eq!(graph.number_of_edges(), 0);

                for u in 0..n {
                    for v in 0..n {
                        assert_eq!(graph.edge_weight(u, v), Ok(NO_EDGE));
                    }
                }
            }
        }
    };
    ($graph:ident: AdjacencyQuery) => {
        #[test]
        fn test_adjacency_query() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 5, 20] {
                for m in [n, n * 3, n * 10] {
                    let edges = random_edges(rng, n, m);
                    let matrix = reference_matrix(n, &edges);
                    let graph = <$graph>::from_edges(n, edges.iter()).unwrap();

                    for u in 0..n {
                        for v in 0..n {
                            let expected = matrix[u as usize][v as usize];
                            assert_eq!(graph.are_connected(u, v), Ok(expected.is_some()));
                            assert_eq!(graph.edge_weight(u, v), Ok(expected.unwrap_or(NO_EDGE)));

                            match graph.edge(u, v) {
                                Ok(edge) => {
                                    assert_eq!(Some(edge.weight), expected);
                                    assert_eq!(edge.endpoints(), (u, v));
                                    assert_eq!(
                                        edge.is_undirected(),
                                        matrix[v as usize][u as usize] == expected
                                    );
                                }
                                Err(err) => {
                                    assert!(expected.is_none());
                                    assert_eq!(err, GraphError::NotConnected { src: u, target: v });
                                }
                            }
                        }

                        assert!(graph.are_connected(u, n).is_err());
                        assert!(graph.edge_weight(n, u).is_err());
                        assert!(graph.edge(u, n).is_err());
                    }
                }
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [1 as NumNodes, 5, 20] {
                for m in [n, n * 3, n * 10] {
                    let edges = random_edges(rng, n, m);
                    let matrix = reference_matrix(n, &edges);
                    let graph = <$graph>::from_edges(n, edges.iter()).unwrap();

                    let mut num_edges = 0;
                    for u in 0..n {
                        let expected = (0..n)
                            .filter(|&v| matrix[u as usize][v as usize].is_some())
                            .collect_vec();

                        assert_eq!(graph.connected_nodes(u), Ok(expected.clone()));
                        assert_eq!(graph.degree_of(u) as usize, expected.len());
                        assert_eq!(
                            graph.edges_of(u).map(|e| e.second).collect_vec(),
                            expected
                        );
                        num_edges += expected.len() as NumEdges;
                    }

                    assert_eq!(graph.number_of_edges(), num_edges);
                    assert_eq!(graph.edges().count() as NumEdges, num_edges);
                    assert!(graph.connected_nodes(n).is_err());
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [2 as NumNodes, 5, 20] {
                let mut graph = <$graph>::new(n);

                for e in random_edges(rng, n, n * 5) {
                    let inserted = graph
                        .insert_edge(e.first, e.second, e.weight, e.direction)
                        .unwrap();
                    assert_eq!(inserted, e);

                    assert_eq!(graph.edge_weight(e.first, e.second), Ok(e.weight));
                    if e.is_undirected() {
                        assert_eq!(graph.edge_weight(e.second, e.first), Ok(e.weight));
                        assert!(graph.edge(e.second, e.first).unwrap().is_undirected());
                    }
                }

                let before = graph.clone();
                assert!(graph.insert_edge(0, n, 1, EdgeDirection::Directed).is_err());
                assert!(
                    graph.insert_edge(n, 0, 1, EdgeDirection::Undirected).is_err()
                );
                assert!(graph == before);
            }
        }
    };
}

pub(crate) use test_graph_ops;
