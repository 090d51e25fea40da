//! Compiler invariant violations raised while building path indices.
use crate::path_expression::ElementVar;
use thiserror::Error;

/// A broken invariant in the compiler's own IR or graph construction.
///
/// These are not user errors: the current pass is abandoned and the diagnostic is surfaced to
/// whoever invoked it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A set with cardinality zero was bound where an edge set is required.
    #[error("not an edge set: {0}")]
    NotAnEdgeSet(String),

    /// An edge set whose endpoint positions refer to different sets.
    #[error("edge set must be homogeneous: {0}")]
    NotHomogeneous(String),

    #[error("unbound path variable {0}")]
    UnboundPathVariable(ElementVar),

    /// The source endpoint selector is past the expression's last path endpoint.
    #[error("source endpoint {endpoint} is out of range for {arity} path endpoints")]
    InvalidSourceEndpoint { endpoint: usize, arity: usize },

    #[error("malformed segmented path index: {0}")]
    MalformedSegmentedIndex(&'static str),
}
