use core::fmt;
use std::rc::Rc;

/// A named placeholder for "the element bound at this position" of a [`PathExpression`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementVar(Rc<str>);

impl ElementVar {
    pub fn new(name: impl AsRef<str>) -> Self {
        ElementVar(Rc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A filter over some relation. It names its path endpoints but has no adjacency semantics yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Predicate {
    pub name: Rc<str>,
    pub endpoints: Rc<[ElementVar]>,
}

/// An algebraic description of an adjacency relation between graph elements.
///
/// Each kind names its *path endpoints*: the [`ElementVar`]s that are bound to concrete sets when
/// the expression is evaluated.
/// New operators (union, composition, closure) get a new variant here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathExpression {
    /// Edge to vertex: endpoints `[e, v]`.
    /// The neighbors of an edge are its incident vertices.
    EV([ElementVar; 2]),

    /// Vertex to edge: endpoints `[v, e]`.
    /// The neighbors of a vertex are the edges incident to it.
    VE([ElementVar; 2]),

    Predicate(Predicate),
}

impl PathExpression {
    /// `e -> v`: the vertices incident to edge `e`.
    pub fn ev(e: ElementVar, v: ElementVar) -> Self {
        PathExpression::EV([e, v])
    }

    /// `v -> e`: the edges incident to vertex `v`.
    pub fn ve(v: ElementVar, e: ElementVar) -> Self {
        PathExpression::VE([v, e])
    }

    pub fn predicate(name: impl AsRef<str>, endpoints: Vec<ElementVar>) -> Self {
        PathExpression::Predicate(Predicate {
            name: Rc::from(name.as_ref()),
            endpoints: endpoints.into(),
        })
    }

    /// All path endpoints, in position order.
    pub fn path_endpoints(&self) -> &[ElementVar] {
        match self {
            PathExpression::EV(endpoints) | PathExpression::VE(endpoints) => endpoints.as_slice(),
            PathExpression::Predicate(p) => &p.endpoints[..],
        }
    }

    pub fn num_path_endpoints(&self) -> usize {
        self.path_endpoints().len()
    }

    /// The path endpoint at position `i`, if there is one.
    pub fn path_endpoint(&self, i: usize) -> Option<&ElementVar> {
        self.path_endpoints().get(i)
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, endpoints) = match self {
            PathExpression::EV(endpoints) => ("EV", endpoints.as_slice()),
            PathExpression::VE(endpoints) => ("VE", endpoints.as_slice()),
            PathExpression::Predicate(p) => (p.name.as_ref(), p.endpoints.as_ref()),
        };
        write!(f, "{}(", name)?;
        for (i, ev) in endpoints.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", ev)?;
        }
        write!(f, ")")
    }
}
