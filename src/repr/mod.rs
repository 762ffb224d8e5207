/*!
# Graph Representations

- [`Graph`] stores a dense `n × n` weight matrix. Cell `(u, v)` holds the weight of the edge
  `u -> v` or [`NO_EDGE`](crate::NO_EDGE).
- [`LabeledGraph`] wraps a [`Graph`] and attaches a (not necessarily unique) label to every node,
  so nodes can be addressed by name.

Both have a fixed number of nodes: a different size requires a new instance.
*/

use crate::{ops::*, *};

mod labeled;
mod matrix;

pub use labeled::*;
pub use matrix::*;
