use super::segmented::SegmentedPathIndex;
use super::set_endpoint::SetEndpointPathIndex;
use crate::graph::*;

use core::fmt;
use std::rc::Rc;

/// The two representations of a path index.
#[derive(Debug)]
pub enum PathIndexKind<'a> {
    /// Borrows an edge set and reads neighbors from its endpoint tuples.
    SetEndpoint(SetEndpointPathIndex<'a>),
    /// Owns a compressed adjacency structure.
    Segmented(SegmentedPathIndex),
}

/// A shared, immutable handle to a path index: a structure answering "which elements are the
/// neighbors of element `x`" for one relation.
///
/// Cloning the handle is cheap; the underlying index is freed when the last handle is dropped.
/// A direct ([`SetEndpointPathIndex`]) index borrows its edge set, so the handle cannot outlive it.
#[derive(Debug, Clone)]
pub struct PathIndex<'a>(Rc<PathIndexKind<'a>>);

impl<'a> PathIndex<'a> {
    pub fn kind(&self) -> &PathIndexKind<'a> {
        &self.0
    }

    /// True when both handles refer to the same index.
    pub fn ptr_eq(&self, other: &PathIndex<'_>) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.0) as *const u8,
            Rc::as_ptr(&other.0) as *const u8,
        )
    }

    /// Number of elements that have a neighbor set.
    pub fn num_elements(&self) -> usize {
        match self.kind() {
            PathIndexKind::SetEndpoint(pi) => pi.num_elements(),
            PathIndexKind::Segmented(pi) => pi.num_elements(),
        }
    }

    /// Total number of (element, neighbor) pairs.
    pub fn num_neighbors(&self) -> usize {
        match self.kind() {
            PathIndexKind::SetEndpoint(pi) => pi.num_neighbors(),
            PathIndexKind::Segmented(pi) => pi.num_neighbors(),
        }
    }

    /// The degree of `elem`.
    ///
    /// # Panics
    ///
    /// If `elem` is not in the domain of the index.
    pub fn num_neighbors_of(&self, elem: ElementRef) -> usize {
        match self.kind() {
            PathIndexKind::SetEndpoint(pi) => pi.num_neighbors_of(elem),
            PathIndexKind::Segmented(pi) => pi.num_neighbors_of(elem),
        }
    }

    /// Iterate over the domain of the index in construction order.
    /// Each call starts a fresh traversal.
    pub fn elements(&self) -> Elements<'_> {
        match self.kind() {
            PathIndexKind::SetEndpoint(pi) => Elements::Set(pi.elements()),
            PathIndexKind::Segmented(pi) => Elements::Domain(pi.elements().iter()),
        }
    }

    /// Iterate over the neighbors of `elem` in construction order.
    ///
    /// # Panics
    ///
    /// If `elem` is not in the domain of the index.
    pub fn neighbors(&self, elem: ElementRef) -> Neighbors<'_> {
        match self.kind() {
            PathIndexKind::SetEndpoint(pi) => Neighbors::Endpoints(pi.neighbors(elem).iter()),
            PathIndexKind::Segmented(pi) => Neighbors::Segment(pi.neighbors(elem).iter()),
        }
    }

    /// True when both indices have the same elements, in the same order, with the same neighbors.
    pub fn query_eq(&self, other: &PathIndex<'_>) -> bool {
        self.num_elements() == other.num_elements()
            && self.num_neighbors() == other.num_neighbors()
            && self.elements().eq(other.elements())
            && self
                .elements()
                .all(|e| self.neighbors(e).eq(other.neighbors(e)))
    }
}

impl<'a> From<SetEndpointPathIndex<'a>> for PathIndex<'a> {
    fn from(pi: SetEndpointPathIndex<'a>) -> Self {
        PathIndex(Rc::new(PathIndexKind::SetEndpoint(pi)))
    }
}

impl From<SegmentedPathIndex> for PathIndex<'_> {
    fn from(pi: SegmentedPathIndex) -> Self {
        PathIndex(Rc::new(PathIndexKind::Segmented(pi)))
    }
}

impl fmt::Display for PathIndex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            PathIndexKind::SetEndpoint(pi) => fmt::Display::fmt(pi, f),
            PathIndexKind::Segmented(pi) => fmt::Display::fmt(pi, f),
        }
    }
}

/// Render an optional index, where `None` is the absent index.
pub fn display_path_index(index: Option<&PathIndex<'_>>) -> String {
    match index {
        Some(pi) => pi.to_string(),
        None => "empty path index".to_string(),
    }
}

/// Iterator over the domain of a [`PathIndex`]
#[derive(Debug, Clone)]
pub enum Elements<'i> {
    Set(ElementIterator),
    Domain(std::slice::Iter<'i, usize>),
}

impl Iterator for Elements<'_> {
    type Item = ElementRef;

    fn next(&mut self) -> Option<ElementRef> {
        match self {
            Elements::Set(it) => it.next(),
            Elements::Domain(it) => it.next().map(|&i| ElementRef(i)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Elements::Set(it) => it.size_hint(),
            Elements::Domain(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for Elements<'_> {}

/// Iterator over the neighbors of one element of a [`PathIndex`]
#[derive(Debug, Clone)]
pub enum Neighbors<'i> {
    Endpoints(std::slice::Iter<'i, ElementRef>),
    Segment(std::slice::Iter<'i, usize>),
}

impl Iterator for Neighbors<'_> {
    type Item = ElementRef;

    fn next(&mut self) -> Option<ElementRef> {
        match self {
            Neighbors::Endpoints(it) => it.next().copied(),
            Neighbors::Segment(it) => it.next().map(|&i| ElementRef(i)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Neighbors::Endpoints(it) => it.size_hint(),
            Neighbors::Segment(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
