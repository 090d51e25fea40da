//! # Graph Paths
//!
//! Middle-end analyses for a compiler of graph/tensor programs.
//!
//! Programs in such a language compute over *sets* of graph elements: vertex sets, and edge sets
//! whose elements each connect a fixed number of *endpoints*.
//! Two analyses live here:
//!
//! - [Path indices](crate::path_index).
//!   A [PathExpression](crate::path_expression::PathExpression) describes an adjacency relation,
//!   for example "the vertices of an edge" (`EV`) or "the edges of a vertex" (`VE`).
//!   Interpreting it over concrete [Set](crate::graph::Set)s produces a
//!   [PathIndex](crate::path_index::PathIndex) answering "who are the neighbors of `x`".
//!   For example, for a triangle with edges `e0 = (v0, v1)`, `e1 = (v1, v2)` and `e2 = (v0, v2)`,
//!   the `VE` index is the compressed adjacency
//!
//!   ```text
//!   v0 ─ e0 e2
//!   v1 ─ e0 e1
//!   v2 ─ e1 e2
//!   ```
//!
//!   stored as offsets `[0 2 4 6]` and neighbors `[0 2 0 1 1 2]`.
//!
//! - [Tensor storage](crate::tensor_storage).
//!   Every tensor variable of a function is classified as a dense array or as a sparse *system*
//!   matrix, which code generation uses to choose a memory layout.
//!
//! Both analyses are synchronous and single-threaded.
//! Broken compiler invariants found while building indices are reported as
//! [InvariantViolation](crate::error::InvariantViolation)s.

pub mod array;
pub mod error;
pub mod graph;
pub mod ir;
pub mod path_expression;
pub mod path_index;
pub mod tensor_storage;

pub mod prelude {
    //! Commonly used types for building and querying path indices.
    pub use crate::error::InvariantViolation;
    pub use crate::graph::{ElementRef, Set};
    pub use crate::path_expression::{ElementVar, PathExpression};
    pub use crate::path_index::{build_path_index, Bindings, PathIndex, PathIndexBuilder};
    pub use crate::tensor_storage::{get_tensor_storages, TensorStorage, TensorStorages};
}
