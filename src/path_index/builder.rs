use super::index::PathIndex;
use super::segmented::SegmentedPathIndex;
use super::set_endpoint::SetEndpointPathIndex;
use crate::error::InvariantViolation;
use crate::graph::Set;
use crate::path_expression::*;

use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Concrete sets bound to the path variables of an expression.
pub type Bindings<'a> = BTreeMap<ElementVar, &'a Set>;

// Sets are identified by address: they are borrowed for 'a, so they cannot move while cached.
type CacheKey = (PathExpression, usize, Vec<*const Set>);

/// Builds [`PathIndex`]es from path expressions, memoizing each result under the expression,
/// the source endpoint, and the identities of the bound sets.
///
/// One builder is meant to live as long as a compilation unit; the cache is not synchronized.
#[derive(Debug, Default)]
pub struct PathIndexBuilder<'a> {
    cache: HashMap<CacheKey, PathIndex<'a>>,
}

impl<'a> PathIndexBuilder<'a> {
    pub fn new() -> Self {
        PathIndexBuilder {
            cache: HashMap::new(),
        }
    }

    /// Build the index of `pe` keyed by the path endpoint at position `source_endpoint`, with the
    /// expression's path variables bound by `bindings`.
    ///
    /// Calling this again with an equal expression, source endpoint, and the same bound sets
    /// returns the previously built handle.
    pub fn build(
        &mut self,
        pe: &PathExpression,
        source_endpoint: usize,
        bindings: &Bindings<'a>,
    ) -> Result<PathIndex<'a>, InvariantViolation> {
        let bound = bound_sets(pe, bindings)?;
        let key: CacheKey = (
            pe.clone(),
            source_endpoint,
            bound.iter().map(|s| *s as *const Set).collect(),
        );

        if let Some(index) = self.cache.get(&key) {
            debug!(expression = %pe, source_endpoint, "path index cache hit");
            return Ok(index.clone());
        }

        let index = interpret(pe, source_endpoint, &bound)?;
        debug!(
            expression = %pe,
            source_endpoint,
            elements = index.num_elements(),
            neighbors = index.num_neighbors(),
            "built path index"
        );
        self.cache.insert(key, index.clone());
        Ok(index)
    }

    /// Number of memoized indices.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop every memoized index.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

/// Build the index of `pe` without memoization. See [`PathIndexBuilder::build`].
pub fn build_path_index<'a>(
    pe: &PathExpression,
    source_endpoint: usize,
    bindings: &Bindings<'a>,
) -> Result<PathIndex<'a>, InvariantViolation> {
    let bound = bound_sets(pe, bindings)?;
    interpret(pe, source_endpoint, &bound)
}

// The set bound to each path endpoint of `pe`, in position order.
fn bound_sets<'a>(
    pe: &PathExpression,
    bindings: &Bindings<'a>,
) -> Result<Vec<&'a Set>, InvariantViolation> {
    pe.path_endpoints()
        .iter()
        .map(|ev| {
            bindings
                .get(ev)
                .copied()
                .ok_or_else(|| InvariantViolation::UnboundPathVariable(ev.clone()))
        })
        .collect()
}

// Interpret `pe` over the bound sets: given an element bound at `source_endpoint`, find its
// neighbors through the paths `pe` describes.
fn interpret<'a>(
    pe: &PathExpression,
    source_endpoint: usize,
    bound: &[&'a Set],
) -> Result<PathIndex<'a>, InvariantViolation> {
    match pe {
        // The edge is endpoint 0: keyed by edges we can wrap the set directly.
        PathExpression::EV(_) => {
            check_source(pe, source_endpoint)?;
            edge_relation(bound[0], source_endpoint == 0)
        }
        // The edge is endpoint 1: keyed by vertices we materialize the inverse relation.
        PathExpression::VE(_) => {
            check_source(pe, source_endpoint)?;
            edge_relation(bound[1], source_endpoint == 1)
        }
        // Any source of a predicate gives the empty index, even with no endpoints.
        // TODO: filter the base relation once predicates carry one
        PathExpression::Predicate(_) => Ok(SegmentedPathIndex::empty().into()),
    }
}

fn check_source(pe: &PathExpression, source_endpoint: usize) -> Result<(), InvariantViolation> {
    let arity = pe.num_path_endpoints();
    if source_endpoint >= arity {
        return Err(InvariantViolation::InvalidSourceEndpoint {
            endpoint: source_endpoint,
            arity,
        });
    }
    Ok(())
}

fn edge_relation(edge_set: &Set, from_edges: bool) -> Result<PathIndex<'_>, InvariantViolation> {
    if edge_set.cardinality() == 0 {
        return Err(InvariantViolation::NotAnEdgeSet(edge_set.name().to_string()));
    }

    if from_edges {
        Ok(SetEndpointPathIndex::new(edge_set)?.into())
    } else {
        Ok(SegmentedPathIndex::converse(edge_set)?.into())
    }
}
