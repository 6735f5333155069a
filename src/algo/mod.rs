/*!
# Graph Algorithms

This module provides the matching algorithms of this crate, built on top of the graph
representations in [`crate::repr`]. All algorithms are re-exported at the top level of this
module, so you can simply do:
```rust
use ublossom::algo::*;
```
and gain access to greedy maximal matchings, maximum matchings via [`BlossomMatcher`], and
matching verification.
*/

mod blossom;
mod matching;

use crate::prelude::*;

pub use blossom::*;
pub use matching::*;
