//! Path expressions: a small closed algebra of adjacency relations between graph elements.
mod expr;

pub use expr::*;
