/*!
`mgraphs` is a small library for dense, weighted graphs with optionally labeled nodes.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
The graph itself is an `n × n` matrix of `i16` weights, where [`NO_EDGE`] (`i16::MIN`) marks an
absent edge. Every other value, including `0` and negative numbers, is a legal edge weight.

### Directed vs Undirected

An **undirected** edge is simply stored in both cells `(u, v)` and `(v, u)` with equal weight, a
**directed** one only in `(u, v)`. The matrix does not remember how an edge was inserted: when
reading an edge back, it is reported as undirected whenever both cells hold the same weight.

### Labels

[`LabeledGraph`](crate::repr::LabeledGraph) attaches a string label to every node, so nodes can be
addressed by name. Labels are not unique; lookups resolve to the lowest matching node id.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and both representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as reachability
  (`graph.breadth_first_search(u, v)`), the consistency check (`graph.is_consistent()`) and
  shortest paths (`graph.find_shortest_path(u, v)`),
- [`io`] includes serializable listings to exchange graphs with other formats.

In most use-cases, `use mgraphs::{prelude::*, algo::*};` suffices for your needs.

All fallible operations return [`Result`] with a [`GraphError`] naming the offending argument.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `mgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as both representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
