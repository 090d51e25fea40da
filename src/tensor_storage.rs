//! Classify every tensor variable of a function or statement with the storage kind code
//! generation uses to lay it out.
//!
//! The classification is a single pass with a fixed precedence:
//!
//! 1. Function arguments, then function results, are classified by [`determine_storage`].
//! 2. The body is walked in program order. An assignment to an unclassified, non-scalar tensor
//!    variable classifies it by [`determine_storage`].
//!    The non-scalar tensor results of a map are classified [`TensorStorage::SystemReduced`]
//!    unconditionally.
//! 3. The first classification of a variable is final.
//!
//! Treating every map-assembled tensor as a reduced system matrix is a simplification: a more
//! precise analysis would look at the map's index structure.
use crate::ir::*;

use core::fmt;
use std::collections::hash_map::{Entry, HashMap};
use std::slice;
use tracing::trace;

/// How a tensor is laid out in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TensorStorage {
    /// Not yet classified
    #[default]
    Undefined,
    /// A contiguous dense array
    DenseRowMajor,
    /// A system tensor which needs no storage of its own
    SystemNone,
    /// A sparse system matrix with duplicate contributions summed
    SystemReduced,
    /// A sparse system matrix holding per-element contributions before reduction
    SystemUnreduced,
}

impl TensorStorage {
    pub fn is_dense(&self) -> bool {
        matches!(self, TensorStorage::DenseRowMajor)
    }

    /// True for the sparse, graph-dependent kinds.
    pub fn is_system(&self) -> bool {
        matches!(
            self,
            TensorStorage::SystemNone
                | TensorStorage::SystemReduced
                | TensorStorage::SystemUnreduced
        )
    }
}

impl fmt::Display for TensorStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            TensorStorage::Undefined => "Undefined",
            TensorStorage::DenseRowMajor => "Dense Row Major",
            TensorStorage::SystemNone => "System None",
            TensorStorage::SystemReduced => "System Reduced",
            TensorStorage::SystemUnreduced => "System Unreduced",
        };
        write!(f, "TensorStorage({})", kind)
    }
}

/// The storage kind of each classified tensor variable.
///
/// Entries are written once, by the classification pass, and read-only afterwards.
/// Iteration and [`Display`](fmt::Display) follow classification order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TensorStorages {
    entries: Vec<(Var, TensorStorage)>,

    /// Position of each variable in `entries`
    index: HashMap<Var, usize>,
}

impl TensorStorages {
    pub fn get(&self, var: &Var) -> Option<TensorStorage> {
        self.index.get(var).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, var: &Var) -> bool {
        self.index.contains_key(var)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.entries.iter())
    }

    // First writer wins: an existing classification is returned unchanged.
    fn classify(&mut self, var: &Var, storage: impl FnOnce() -> TensorStorage) -> TensorStorage {
        match self.index.entry(var.clone()) {
            Entry::Occupied(e) => self.entries[*e.get()].1,
            Entry::Vacant(e) => {
                let storage = storage();
                trace!(var = %var, storage = %storage, "classified tensor storage");
                e.insert(self.entries.len());
                self.entries.push((var.clone(), storage));
                storage
            }
        }
    }
}

impl fmt::Display for TensorStorages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (var, storage) in self {
            writeln!(f, "{}: {}", var, storage)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TensorStorages {
    type Item = (&'a Var, &'a TensorStorage);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of [`TensorStorages`] in classification order
#[derive(Debug, Clone)]
pub struct Iter<'a>(slice::Iter<'a, (Var, TensorStorage)>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Var, &'a TensorStorage);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(var, storage)| (var, storage))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// The storage of a tensor by its type alone.
///
/// Tensors whose dimensions are all plain ranges, and tensors of order at most one, are dense.
/// Anything else is indexed by a graph set in two or more dimensions and has a graph-dependent
/// sparsity pattern, so it is stored as a reduced system matrix.
pub fn determine_storage(ty: &TensorType) -> TensorStorage {
    if ty.is_element_tensor() || ty.order() <= 1 {
        TensorStorage::DenseRowMajor
    } else {
        TensorStorage::SystemReduced
    }
}

/// Classify the tensor variables of a function: its tensor arguments and results, and every
/// tensor assigned or assembled in its body.
pub fn get_tensor_storages(func: &Func) -> TensorStorages {
    let mut storages = TensorStorages::default();

    for var in func.arguments.iter().chain(func.results.iter()) {
        if let Some(ty) = var.ty().as_tensor() {
            storages.classify(var, || determine_storage(ty));
        }
    }

    classify_body(&func.body, &mut storages);
    storages
}

/// Classify the tensor variables assigned or assembled in a statement.
pub fn get_tensor_storages_stmt(stmt: &Stmt) -> TensorStorages {
    let mut storages = TensorStorages::default();
    classify_body(stmt, &mut storages);
    storages
}

fn classify_body(body: &Stmt, storages: &mut TensorStorages) {
    body.walk(&mut |stmt| match stmt {
        Stmt::Assign { var, .. } => {
            if let Some(ty) = non_scalar_tensor(var) {
                storages.classify(var, || determine_storage(ty));
            }
        }
        Stmt::Map(map) => {
            for var in map.vars.iter() {
                if non_scalar_tensor(var).is_some() {
                    storages.classify(var, || TensorStorage::SystemReduced);
                }
            }
        }
        _ => {}
    });
}

fn non_scalar_tensor(var: &Var) -> Option<&TensorType> {
    var.ty().as_tensor().filter(|ty| !ty.is_scalar())
}
