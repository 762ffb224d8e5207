/*!
# IO

Graphs are exchanged as *listings*: plain structs deriving `serde::{Serialize, Deserialize}` that
describe the size, the occupied cells of the weight matrix and, for labeled graphs, the label of
every node. Any serde data format can act as the on-disk representation, e.g.
```rust
use mgraphs::{prelude::*, io::*};

let g = Graph::from_edges(2, [Edge::undirected(0, 1, 7)]).unwrap();
let listing = g.to_listing();
assert_eq!(listing.edges.len(), 2);
assert_eq!(Graph::from_listing(&listing), Ok(g));
```
*/

use itertools::Itertools;
use tracing::debug;

use crate::prelude::*;

mod listing;

pub use listing::*;
