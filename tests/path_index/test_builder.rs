use graph_paths::error::InvariantViolation;
use graph_paths::graph::*;
use graph_paths::path_expression::*;
use graph_paths::path_index::*;

use super::strategy::*;

use proptest::{prop_assert, prop_assert_eq, proptest};

fn var(name: &str) -> ElementVar {
    ElementVar::new(name)
}

fn bind<'a>(pairs: &[(&str, &'a Set)]) -> Bindings<'a> {
    pairs.iter().map(|(name, set)| (var(name), *set)).collect()
}

proptest! {
    #[test]
    fn test_build_is_memoized((v, e) in arb_edge_set(6, 10, 3), source in 0..2usize) {
        let bindings = bind(&[("v", &v), ("e", &e)]);
        let ve = PathExpression::ve(var("v"), var("e"));

        let mut builder = PathIndexBuilder::new();
        let first = builder.build(&ve, source, &bindings).unwrap();
        let second = builder.build(&ve.clone(), source, &bindings).unwrap();
        prop_assert!(first.ptr_eq(&second));
        prop_assert!(first.query_eq(&second));
        prop_assert_eq!(builder.cache_len(), 1);

        // an unmemoized build answers the same queries with a fresh index
        let fresh = build_path_index(&ve, source, &bindings).unwrap();
        prop_assert!(!fresh.ptr_eq(&first));
        prop_assert!(fresh.query_eq(&first));
    }
}

proptest! {
    #[test]
    fn test_ev_and_ve_agree((v, e) in arb_edge_set(6, 10, 3)) {
        let bindings = bind(&[("v", &v), ("e", &e)]);
        let ev = PathExpression::ev(var("e"), var("v"));
        let ve = PathExpression::ve(var("v"), var("e"));

        // keyed by edges, both are the endpoint relation
        let ev_edges = build_path_index(&ev, 0, &bindings).unwrap();
        let ve_edges = build_path_index(&ve, 1, &bindings).unwrap();
        prop_assert!(matches!(ev_edges.kind(), PathIndexKind::SetEndpoint(_)));
        prop_assert!(ev_edges.query_eq(&ve_edges));

        // keyed by vertices, both are its converse
        let ev_vertices = build_path_index(&ev, 1, &bindings).unwrap();
        let ve_vertices = build_path_index(&ve, 0, &bindings).unwrap();
        prop_assert!(matches!(ve_vertices.kind(), PathIndexKind::Segmented(_)));
        prop_assert!(ev_vertices.query_eq(&ve_vertices));
    }
}

#[test]
fn test_triangle_ve() {
    let (v, e) = build_edge_set(3, 2, &[vec![0, 1], vec![1, 2], vec![0, 2]]);
    let bindings = bind(&[("v", &v), ("e", &e)]);
    let ve = PathExpression::ve(var("v"), var("e"));

    let index = build_path_index(&ve, 0, &bindings).unwrap();
    assert_eq!(index.num_elements(), 3);
    assert_eq!(index.num_neighbors(), 6);

    let neighbors = |i| index.neighbors(ElementRef(i)).collect::<Vec<_>>();
    assert_eq!(neighbors(0), vec![ElementRef(0), ElementRef(2)]);
    assert_eq!(neighbors(1), vec![ElementRef(0), ElementRef(1)]);
    assert_eq!(neighbors(2), vec![ElementRef(1), ElementRef(2)]);
    assert_eq!(index.to_string(), "SegmentedPathIndex:\n0 2 4 6 \n0 2 0 1 1 2 ");
}

#[test]
fn test_distinct_sets_are_distinct_keys() {
    let (v, e) = build_edge_set(3, 2, &[vec![0, 1]]);
    let (w, f) = build_edge_set(3, 2, &[vec![0, 1]]);
    let ve = PathExpression::ve(var("v"), var("e"));

    let mut builder = PathIndexBuilder::new();
    let a = builder.build(&ve, 0, &bind(&[("v", &v), ("e", &e)])).unwrap();
    let b = builder.build(&ve, 0, &bind(&[("v", &w), ("e", &f)])).unwrap();
    assert!(!a.ptr_eq(&b));
    assert!(a.query_eq(&b));
    assert_eq!(builder.cache_len(), 2);
}

#[test]
fn test_unbound_path_variable() {
    let (v, _e) = build_edge_set(3, 2, &[]);
    let ve = PathExpression::ve(var("v"), var("e"));

    let mut builder = PathIndexBuilder::new();
    assert_eq!(
        builder.build(&ve, 0, &bind(&[("v", &v)])).unwrap_err(),
        InvariantViolation::UnboundPathVariable(var("e"))
    );
    assert_eq!(builder.cache_len(), 0);
}

#[test]
fn test_invalid_source_endpoint() {
    let (v, e) = build_edge_set(3, 2, &[vec![0, 1]]);
    let ev = PathExpression::ev(var("e"), var("v"));
    let err = build_path_index(&ev, 2, &bind(&[("v", &v), ("e", &e)])).unwrap_err();
    assert_eq!(
        err,
        InvariantViolation::InvalidSourceEndpoint {
            endpoint: 2,
            arity: 2
        }
    );
}

#[test]
fn test_vertex_set_bound_as_edge_set() {
    let (v, _e) = build_edge_set(3, 2, &[]);
    let ve = PathExpression::ve(var("v"), var("e"));
    let err = build_path_index(&ve, 0, &bind(&[("v", &v), ("e", &v)])).unwrap_err();
    assert_eq!(err, InvariantViolation::NotAnEdgeSet("V".to_string()));
}

#[test]
fn test_predicate_is_empty() {
    let (v, e) = build_edge_set(3, 2, &[vec![0, 1]]);
    let p = PathExpression::predicate("adjacent", vec![var("v"), var("e")]);
    let bindings = bind(&[("v", &v), ("e", &e)]);

    let mut builder = PathIndexBuilder::new();
    let index = builder.build(&p, 1, &bindings).unwrap();
    assert_eq!(index.num_elements(), 0);
    assert_eq!(index.num_neighbors(), 0);
    assert!(index.elements().next().is_none());
    assert!(builder.build(&p, 1, &bindings).unwrap().ptr_eq(&index));
}

#[test]
fn test_predicate_without_endpoints() {
    let p = PathExpression::predicate("always", vec![]);
    let bindings = Bindings::new();

    let mut builder = PathIndexBuilder::new();
    let index = builder.build(&p, 0, &bindings).unwrap();
    assert_eq!(index.num_elements(), 0);
    assert_eq!(index.num_neighbors(), 0);
    assert_eq!(display_path_index(Some(&index)), "SegmentedPathIndex:\n0 \n");
}

#[test]
fn test_display_absent_index() {
    assert_eq!(display_path_index(None), "empty path index");

    let (v, e) = build_edge_set(2, 2, &[vec![0, 1]]);
    let ev = PathExpression::ev(var("e"), var("v"));
    let index = build_path_index(&ev, 0, &bind(&[("v", &v), ("e", &e)])).unwrap();
    assert_eq!(
        display_path_index(Some(&index)),
        "SetEndpointPathIndex:\n  0: 0 1 "
    );
}
