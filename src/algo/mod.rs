/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use mgraphs::algo::*;
```
and gain access to reachability searches, the consistency check and shortest paths as methods on
any graph. All of them follow outgoing edges only and never modify the graph they read.
*/

mod connectivity;
mod labeled;
mod shortest_path;
mod traversal;

use itertools::Itertools;

use crate::prelude::*;

pub use connectivity::*;
pub use labeled::*;
pub use shortest_path::*;
pub use traversal::*;
