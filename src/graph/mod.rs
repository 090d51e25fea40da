//! The graph model path indices are built over: vertex sets and edge sets of fixed arity.
mod set;

pub use set::*;
