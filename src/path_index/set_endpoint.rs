use crate::error::InvariantViolation;
use crate::graph::*;

use core::fmt;

/// A path index which answers queries directly from the endpoint tuples of an edge set.
///
/// Nothing is copied: the index borrows the set, and the neighbors of an edge are its endpoints
/// in stored order.
#[derive(Debug, Clone, Copy)]
pub struct SetEndpointPathIndex<'a> {
    edge_set: &'a Set,
}

impl<'a> SetEndpointPathIndex<'a> {
    /// Wrap `edge_set`, which must be a homogeneous edge set.
    pub fn new(edge_set: &'a Set) -> Result<Self, InvariantViolation> {
        if edge_set.cardinality() == 0 {
            return Err(InvariantViolation::NotAnEdgeSet(edge_set.name().to_string()));
        }
        // TODO: heterogeneous edge sets need a representation for the gaps between endpoint sets
        if !edge_set.is_homogeneous() {
            return Err(InvariantViolation::NotHomogeneous(
                edge_set.name().to_string(),
            ));
        }
        Ok(SetEndpointPathIndex { edge_set })
    }

    pub fn edge_set(&self) -> &'a Set {
        self.edge_set
    }

    pub fn num_elements(&self) -> usize {
        self.edge_set.len()
    }

    pub fn num_neighbors(&self) -> usize {
        self.num_elements() * self.edge_set.cardinality()
    }

    /// Every edge has exactly `cardinality` neighbors.
    ///
    /// # Panics
    ///
    /// If `elem` is not an edge of the wrapped set.
    pub fn num_neighbors_of(&self, elem: ElementRef) -> usize {
        assert!(
            self.edge_set.contains(elem),
            "element {} is not in the domain of this path index",
            elem
        );
        self.edge_set.cardinality()
    }

    pub fn elements(&self) -> ElementIterator {
        self.edge_set.elements()
    }

    /// # Panics
    ///
    /// If `elem` is not an edge of the wrapped set.
    pub fn neighbors(&self, elem: ElementRef) -> &'a [ElementRef] {
        self.edge_set.endpoints(elem)
    }
}

impl fmt::Display for SetEndpointPathIndex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SetEndpointPathIndex:")?;
        for e in self.elements() {
            write!(f, "\n  {}: ", e)?;
            for ep in self.neighbors(e) {
                write!(f, "{} ", ep)?;
            }
        }
        Ok(())
    }
}
