use core::fmt;
use core::hash::{Hash, Hasher};
use std::rc::Rc;

/// Component types of tensors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Int,
    Float,
    Boolean,
}

/// The index set of one tensor dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IndexSet {
    /// A plain contiguous range `0..n`
    Range(usize),
    /// Indexed by the elements of a graph set, named here.
    Set(String),
}

/// The type of a tensor: a component type and one index set per dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TensorType {
    pub component: ScalarType,
    pub dimensions: Vec<IndexSet>,
}

impl TensorType {
    pub fn new(component: ScalarType, dimensions: Vec<IndexSet>) -> Self {
        TensorType {
            component,
            dimensions,
        }
    }

    /// A zero-order tensor
    pub fn scalar(component: ScalarType) -> Self {
        TensorType::new(component, vec![])
    }

    pub fn order(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_scalar(&self) -> bool {
        self.order() == 0
    }

    /// True when every dimension is a plain range, so the tensor has a fixed dense shape that
    /// does not depend on any graph.
    pub fn is_element_tensor(&self) -> bool {
        self.dimensions
            .iter()
            .all(|d| matches!(d, IndexSet::Range(_)))
    }
}

/// Types of IR variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Tensor(TensorType),
    /// An element of the named graph set.
    Element(String),
    /// A graph set; `cardinality` is zero for vertex sets.
    Set { name: String, cardinality: usize },
}

impl Type {
    pub fn int() -> Self {
        Type::Tensor(TensorType::scalar(ScalarType::Int))
    }

    pub fn float() -> Self {
        Type::Tensor(TensorType::scalar(ScalarType::Float))
    }

    pub fn tensor(component: ScalarType, dimensions: Vec<IndexSet>) -> Self {
        Type::Tensor(TensorType::new(component, dimensions))
    }

    pub fn is_tensor(&self) -> bool {
        matches!(self, Type::Tensor(_))
    }

    pub fn as_tensor(&self) -> Option<&TensorType> {
        match self {
            Type::Tensor(t) => Some(t),
            _ => None,
        }
    }

    /// True for zero-order tensors.
    pub fn is_scalar(&self) -> bool {
        self.as_tensor().is_some_and(TensorType::is_scalar)
    }
}

#[derive(Debug)]
struct VarContent {
    name: String,
    ty: Type,
}

/// A program variable.
///
/// Variables have identity: two `Var`s are equal only when they are clones of the same variable,
/// even if their names and types coincide.
#[derive(Debug, Clone)]
pub struct Var(Rc<VarContent>);

impl Var {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Var(Rc::new(VarContent {
            name: name.into(),
            ty,
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn ty(&self) -> &Type {
        &self.0.ty
    }
}

impl PartialEq for Var {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Var {}

impl Hash for Var {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}
