use core::fmt;
use core::ops::Range;

/// Identity of one element (vertex or edge) of a [`Set`].
///
/// Element identities are handed out densely by [`Set::add`] and [`Set::add_edge`], so the
/// elements of a set are always `0..set.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementRef(pub usize);

impl ElementRef {
    pub fn ident(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered collection of graph elements.
///
/// A set with cardinality `k > 0` is an *edge set*: each of its elements carries an ordered
/// tuple of `k` endpoints, and position `i` of that tuple refers to an element of
/// `endpoint_sets[i]`.
/// A set with cardinality zero is a plain vertex set.
///
/// An edge set records the size of each endpoint set when it is created, so endpoint sets must be
/// fully populated first.
#[derive(Debug, Clone)]
pub struct Set {
    name: String,

    /// Number of elements; identities are `0..size`.
    size: usize,

    /// Name of the set each endpoint position refers to.
    endpoint_sets: Vec<String>,

    /// Size of each endpoint set when this set was created.
    endpoint_sizes: Vec<usize>,

    /// Endpoints of every edge, flattened in element order.
    /// An edge `e` owns `endpoints[e * k .. (e + 1) * k]` where `k` is the cardinality.
    endpoints: Vec<ElementRef>,
}

impl Set {
    /// An empty vertex set.
    pub fn new(name: impl Into<String>) -> Self {
        Set {
            name: name.into(),
            size: 0,
            endpoint_sets: vec![],
            endpoint_sizes: vec![],
            endpoints: vec![],
        }
    }

    /// An empty edge set whose edges connect one element of each of `endpoint_sets`.
    pub fn edge_set(name: impl Into<String>, endpoint_sets: &[&Set]) -> Self {
        Set {
            name: name.into(),
            size: 0,
            endpoint_sets: endpoint_sets.iter().map(|s| s.name.clone()).collect(),
            endpoint_sizes: endpoint_sets.iter().map(|s| s.size).collect(),
            endpoints: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of elements in the set
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of endpoints of each element; zero for vertex sets.
    pub fn cardinality(&self) -> usize {
        self.endpoint_sets.len()
    }

    /// Names of the sets referred to by each endpoint position
    pub fn endpoint_sets(&self) -> &[String] {
        &self.endpoint_sets
    }

    /// True when every endpoint position refers to the same set, so every edge has the same arity
    /// and the same endpoint element type.
    pub fn is_homogeneous(&self) -> bool {
        self.endpoint_sets.windows(2).all(|w| w[0] == w[1])
    }

    /// Add an element to a vertex set.
    ///
    /// # Panics
    ///
    /// If this is an edge set; use [`Set::add_edge`] instead.
    pub fn add(&mut self) -> ElementRef {
        assert_eq!(
            self.cardinality(),
            0,
            "edge set {} needs endpoints for each element",
            self.name
        );
        let e = ElementRef(self.size);
        self.size += 1;
        e
    }

    /// Add an edge connecting `endpoints`, returning its identity.
    ///
    /// # Panics
    ///
    /// If `endpoints.len()` differs from the set's cardinality, or if an endpoint is not an
    /// element of the set its position refers to.
    pub fn add_edge(&mut self, endpoints: &[ElementRef]) -> ElementRef {
        assert!(self.cardinality() > 0, "{} is not an edge set", self.name);
        assert_eq!(
            endpoints.len(),
            self.cardinality(),
            "edges of {} have {} endpoints",
            self.name,
            self.cardinality()
        );
        for (i, ep) in endpoints.iter().enumerate() {
            assert!(
                ep.0 < self.endpoint_sizes[i],
                "element {} is not a member of set {}",
                ep,
                self.endpoint_sets[i]
            );
        }
        let e = ElementRef(self.size);
        self.endpoints.extend_from_slice(endpoints);
        self.size += 1;
        e
    }

    pub fn contains(&self, e: ElementRef) -> bool {
        e.0 < self.size
    }

    /// Iterate over the elements of the set in identity order.
    pub fn elements(&self) -> ElementIterator {
        ElementIterator { range: 0..self.size }
    }

    /// The endpoint tuple of edge `e`, in stored order.
    ///
    /// # Panics
    ///
    /// If `e` is not an element of this set.
    pub fn endpoints(&self, e: ElementRef) -> &[ElementRef] {
        assert!(
            self.contains(e),
            "element {} is not a member of set {}",
            e,
            self.name
        );
        let k = self.cardinality();
        &self.endpoints[e.0 * k..(e.0 + 1) * k]
    }

    /// All endpoints of all edges, flattened in element order.
    pub fn endpoint_table(&self) -> &[ElementRef] {
        &self.endpoints
    }
}

/// Iterator over the elements of a [`Set`]
#[derive(Debug, Clone)]
pub struct ElementIterator {
    range: Range<usize>,
}

impl Iterator for ElementIterator {
    type Item = ElementRef;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(ElementRef)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for ElementIterator {}

impl<'a> IntoIterator for &'a Set {
    type Item = ElementRef;
    type IntoIter = ElementIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}
