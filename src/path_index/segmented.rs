use crate::array::{vec::*, *};
use crate::error::InvariantViolation;
use crate::graph::*;

use core::fmt;
use num_traits::{One, Zero};

/// A compressed (CSR) path index which owns its adjacency arrays.
///
/// The neighbors of element `i` are `nbrs[nbrs_start[i] .. nbrs_start[i + 1]]`.
/// Note that `nbrs_start` is indexed by element *identity*, so identities which have no neighbors
/// get an empty segment and are not part of the index's domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedPathIndex {
    nbrs_start: VecArray<usize>,
    nbrs: VecArray<usize>,

    /// Identities with at least one neighbor, ascending.
    domain: VecArray<usize>,
}

impl SegmentedPathIndex {
    /// Construct an index from an offsets array and a flat neighbors array, checking that they
    /// describe a valid segmentation.
    pub fn new(
        nbrs_start: VecArray<usize>,
        nbrs: VecArray<usize>,
    ) -> Result<Self, InvariantViolation> {
        use InvariantViolation::MalformedSegmentedIndex;

        if nbrs_start.first() != Some(&0) {
            return Err(MalformedSegmentedIndex("offsets must start at zero"));
        }
        if nbrs_start.last() != Some(&nbrs.len()) {
            return Err(MalformedSegmentedIndex(
                "last offset must equal the number of neighbors",
            ));
        }
        if nbrs_start.windows(2).any(|w| w[0] > w[1]) {
            return Err(MalformedSegmentedIndex("offsets must be non-decreasing"));
        }

        let degrees = VecArray(nbrs_start.windows(2).map(|w| w[1] - w[0]).collect());
        let domain = degrees.nonzero();
        Ok(SegmentedPathIndex {
            nbrs_start,
            nbrs,
            domain,
        })
    }

    /// The index with no elements and no neighbors.
    pub fn empty() -> Self {
        SegmentedPathIndex {
            nbrs_start: VecArray(vec![0]),
            nbrs: VecArray::empty(),
            domain: VecArray::empty(),
        }
    }

    /// Materialize the inverse of an edge set's endpoint relation: the neighbors of each endpoint
    /// element are the edges incident to it, in the order the edges appear in the set.
    pub fn converse(edge_set: &Set) -> Result<Self, InvariantViolation> {
        let arities = VecArray(vec![edge_set.cardinality(); edge_set.len()]);
        let endpoints = VecArray(
            edge_set
                .endpoint_table()
                .iter()
                .map(ElementRef::ident)
                .collect(),
        );
        let (nbrs_start, nbrs) = converse::<VecKind>(&arities, &endpoints);
        Self::new(nbrs_start, nbrs)
    }

    pub fn num_elements(&self) -> usize {
        self.domain.len()
    }

    pub fn num_neighbors(&self) -> usize {
        self.nbrs.len()
    }

    pub fn contains(&self, elem: ElementRef) -> bool {
        let i = elem.ident();
        i + 1 < self.nbrs_start.len() && self.nbrs_start[i] < self.nbrs_start[i + 1]
    }

    /// # Panics
    ///
    /// If `elem` is not in the domain of the index.
    pub fn num_neighbors_of(&self, elem: ElementRef) -> usize {
        self.neighbors(elem).len()
    }

    /// Elements with at least one neighbor, in ascending identity order.
    pub fn elements(&self) -> &[usize] {
        &self.domain
    }

    /// # Panics
    ///
    /// If `elem` is not in the domain of the index.
    pub fn neighbors(&self, elem: ElementRef) -> &[usize] {
        assert!(
            self.contains(elem),
            "element {} is not in the domain of this path index",
            elem
        );
        let i = elem.ident();
        self.nbrs.get_range(self.nbrs_start[i]..self.nbrs_start[i + 1])
    }

    /// The raw offsets array, indexed by element identity.
    pub fn offsets(&self) -> &[usize] {
        &self.nbrs_start
    }

    /// The raw flat neighbors array.
    pub fn neighbor_table(&self) -> &[usize] {
        &self.nbrs
    }
}

impl fmt::Display for SegmentedPathIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SegmentedPathIndex:")?;
        for s in self.nbrs_start.iter() {
            write!(f, "{} ", s)?;
        }
        writeln!(f)?;
        for n in self.nbrs.iter() {
            write!(f, "{} ", n)?;
        }
        Ok(())
    }
}

/// Compute the *converse* of a segmented relation.
///
/// The input is a relation `E → V*` given as per-segment sizes `arities` and a flat array
/// `endpoints` of values in `V`: segment `e` relates `e` to each of its endpoints.
/// The result is the converse relation `V → E*` as a pair `(nbrs_start, nbrs)`, where
/// `nbrs_start` has one entry per identity in `0..=max(endpoints)` plus a final total, and the
/// segment of each `v` in `nbrs` lists the `e` related to it in segment order.
///
/// ```rust
/// # use graph_paths::array::{*, vec::*};
/// # use graph_paths::path_index::converse;
/// let arities = VecArray(vec![2, 2, 2]);
/// let endpoints = VecArray(vec![0, 1, 1, 2, 0, 2]);
/// let (nbrs_start, nbrs) = converse::<VecKind>(&arities, &endpoints);
/// assert_eq!(nbrs_start, VecArray(vec![0, 2, 4, 6]));
/// assert_eq!(nbrs, VecArray(vec![0, 2, 0, 1, 1, 2]));
/// ```
pub fn converse<K: ArrayKind>(arities: &K::Index, endpoints: &K::Index) -> (K::Index, K::Index) {
    // The segment that owns each endpoint slot, in scan order.
    let owners = arities.segment_ids();
    assert!(owners.len() == endpoints.len());

    // Group slots by endpoint. The sort is stable, so each group keeps scan order.
    let nbrs = owners.sort_by(endpoints);

    let n = endpoints
        .max()
        .map(|m| m + K::I::one())
        .unwrap_or(K::I::zero());
    let nbrs_start = endpoints.bincount(n).cumulative_sum();

    (nbrs_start, nbrs)
}
