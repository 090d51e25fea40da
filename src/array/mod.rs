//! A minimal set of flat array operations used to materialize path indices.
pub mod traits;
pub mod vec;

pub use traits::*;
