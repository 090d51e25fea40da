//! The subset of the compiler IR read by the analyses in this crate: variables, their types, and
//! the statements of function bodies.
mod stmt;
mod types;

pub use stmt::*;
pub use types::*;
