//! Path indices: queryable neighbor structures built by interpreting a [`PathExpression`] over
//! concrete sets.
//!
//! There are two representations behind the shared [`PathIndex`] handle:
//!
//! - [`SetEndpointPathIndex`] wraps an edge set and reads neighbors straight out of its endpoint
//!   tuples. Building one is O(1).
//! - [`SegmentedPathIndex`] materializes a relation the graph does not store, such as the edges
//!   incident to each vertex, as an offsets array and a flat neighbors array.
//!
//! ```rust
//! use graph_paths::prelude::*;
//!
//! let mut v = Set::new("V");
//! let (v0, v1, v2) = (v.add(), v.add(), v.add());
//! let mut e = Set::edge_set("E", &[&v, &v]);
//! let e0 = e.add_edge(&[v0, v1]);
//! let e1 = e.add_edge(&[v1, v2]);
//!
//! let (ve, ee) = (ElementVar::new("v"), ElementVar::new("e"));
//! let bindings: Bindings = [(ve.clone(), &v), (ee.clone(), &e)].into_iter().collect();
//!
//! let mut builder = PathIndexBuilder::new();
//! let index = builder.build(&PathExpression::ve(ve, ee), 0, &bindings).unwrap();
//! assert_eq!(index.neighbors(v1).collect::<Vec<_>>(), vec![e0, e1]);
//! ```
//!
//! [`PathExpression`]: crate::path_expression::PathExpression
mod builder;
mod index;
mod segmented;
mod set_endpoint;

pub use builder::*;
pub use index::*;
pub use segmented::*;
pub use set_endpoint::*;
