use graph_paths::ir::*;
use graph_paths::path_expression::*;
use graph_paths::tensor_storage::*;

fn vertices() -> IndexSet {
    IndexSet::Set("V".to_string())
}

fn float(name: &str, dims: Vec<IndexSet>) -> Var {
    Var::new(name, Type::tensor(ScalarType::Float, dims))
}

fn points() -> Var {
    Var::new(
        "points",
        Type::Set {
            name: "V".to_string(),
            cardinality: 0,
        },
    )
}

fn assemble(vars: Vec<Var>) -> Stmt {
    Stmt::Map(Map::new(vars, "assemble", points()))
}

#[test]
fn test_function_arguments_and_results() {
    let x = float("x", vec![vertices()]);
    let k = float("K", vec![vertices(), vertices()]);
    let e = float("energy", vec![]);
    let p = points();

    let func = Func::new("f", vec![x.clone(), p.clone()], vec![k.clone(), e.clone()], Stmt::Pass);
    let storages = get_tensor_storages(&func);

    assert_eq!(storages.get(&x), Some(TensorStorage::DenseRowMajor));
    assert_eq!(storages.get(&k), Some(TensorStorage::SystemReduced));
    // scalar results are dense
    assert_eq!(storages.get(&e), Some(TensorStorage::DenseRowMajor));
    // sets are not tensors
    assert!(!storages.contains(&p));
    assert_eq!(storages.len(), 3);
}

#[test]
fn test_assignments() {
    let dense = float("A", vec![IndexSet::Range(3), IndexSet::Range(3)]);
    let vector = float("b", vec![vertices()]);
    let system = float("K", vec![vertices(), vertices()]);
    let scalar = float("s", vec![]);

    let body = Stmt::Block(vec![
        Stmt::assign(&dense, Expr::Float(0.0)),
        Stmt::assign(&vector, Expr::Float(0.0)),
        Stmt::assign(&system, Expr::Float(0.0)),
        Stmt::assign(&scalar, Expr::Float(1.0)),
    ]);
    let storages = get_tensor_storages(&Func::new("f", vec![], vec![], body));

    assert_eq!(storages.get(&dense), Some(TensorStorage::DenseRowMajor));
    assert_eq!(storages.get(&vector), Some(TensorStorage::DenseRowMajor));
    assert_eq!(storages.get(&system), Some(TensorStorage::SystemReduced));
    assert_eq!(storages.get(&scalar), None);
}

#[test]
fn test_map_results_are_system_reduced() {
    let f = float("f", vec![vertices()]);
    let k = float("K", vec![vertices(), vertices()]);
    let s = float("s", vec![]);

    let storages = get_tensor_storages_stmt(&assemble(vec![f.clone(), k.clone(), s.clone()]));
    // even a vector assembled by a map is a system tensor
    assert_eq!(storages.get(&f), Some(TensorStorage::SystemReduced));
    assert_eq!(storages.get(&k), Some(TensorStorage::SystemReduced));
    assert_eq!(storages.get(&s), None);
}

#[test]
fn test_map_through_path_expression() {
    let k = float("K", vec![vertices(), vertices()]);
    let springs = Var::new(
        "springs",
        Type::Set {
            name: "E".to_string(),
            cardinality: 2,
        },
    );
    let map = Map::new(vec![k.clone()], "stiffness", springs).through(
        points(),
        PathExpression::ev(ElementVar::new("e"), ElementVar::new("v")),
    );

    let storages = get_tensor_storages_stmt(&Stmt::Map(map));
    assert_eq!(storages.get(&k), Some(TensorStorage::SystemReduced));
}

#[test]
fn test_first_classification_wins() {
    // dense-eligible, but assembled by a map before it is assigned
    let a = float("A", vec![IndexSet::Range(3), IndexSet::Range(3)]);
    let body = Stmt::Block(vec![
        assemble(vec![a.clone()]),
        Stmt::assign(&a, Expr::Float(0.0)),
    ]);
    let storages = get_tensor_storages_stmt(&body);
    assert_eq!(storages.get(&a), Some(TensorStorage::SystemReduced));

    // a vector argument keeps its storage when a map assembles into it
    let x = float("x", vec![vertices()]);
    let func = Func::new("f", vec![x.clone()], vec![], assemble(vec![x.clone()]));
    assert_eq!(
        get_tensor_storages(&func).get(&x),
        Some(TensorStorage::DenseRowMajor)
    );
}

#[test]
fn test_nested_statements() {
    let a = float("A", vec![vertices(), vertices()]);
    let b = float("b", vec![vertices()]);
    let c = float("C", vec![vertices(), IndexSet::Range(3)]);
    let i = Var::new("i", Type::int());

    let body = Stmt::Block(vec![Stmt::ForRange {
        var: i.clone(),
        start: Expr::Int(0),
        end: Expr::Int(10),
        body: Box::new(Stmt::Block(vec![
            Stmt::IfThenElse {
                condition: Expr::Var(i.clone()),
                then_body: Box::new(assemble(vec![a.clone()])),
                else_body: Some(Box::new(Stmt::assign(&b, Expr::Float(0.0)))),
            },
            Stmt::While {
                condition: Expr::Var(i.clone()),
                body: Box::new(Stmt::assign(&c, Expr::Var(b.clone()))),
            },
        ])),
    }]);

    let storages = get_tensor_storages(&Func::new("f", vec![], vec![], body));
    assert_eq!(storages.get(&a), Some(TensorStorage::SystemReduced));
    assert_eq!(storages.get(&b), Some(TensorStorage::DenseRowMajor));
    assert_eq!(storages.get(&c), Some(TensorStorage::SystemReduced));
    assert!(!storages.contains(&i));
    assert_eq!(storages.len(), 3);
}

#[test]
fn test_deterministic() {
    let k = float("K", vec![vertices(), vertices()]);
    let x = float("x", vec![vertices()]);
    let func = Func::new(
        "f",
        vec![x.clone()],
        vec![k.clone()],
        Stmt::Block(vec![
            assemble(vec![k.clone()]),
            Stmt::assign(&x, Expr::Float(0.0)),
        ]),
    );
    assert_eq!(get_tensor_storages(&func), get_tensor_storages(&func));
}

#[test]
fn test_iterate() {
    let k = float("K", vec![vertices(), vertices()]);
    let storages = get_tensor_storages_stmt(&assemble(vec![k.clone()]));
    let entries: Vec<_> = storages.iter().collect();
    assert_eq!(entries, vec![(&k, &TensorStorage::SystemReduced)]);
    assert!(storages.iter().all(|(_, s)| s.is_system() && !s.is_dense()));
}

#[test]
fn test_classification_order_is_stable() {
    let x = float("x", vec![vertices()]);
    let p = points();
    let k = float("K", vec![vertices(), vertices()]);
    let a = float("A", vec![IndexSet::Range(3), IndexSet::Range(3)]);
    let f = float("f", vec![vertices()]);

    let func = Func::new(
        "step",
        vec![x.clone(), p.clone()],
        vec![k.clone()],
        Stmt::Block(vec![
            Stmt::assign(&a, Expr::Float(0.0)),
            assemble(vec![f.clone(), k.clone()]),
            Stmt::assign(&x, Expr::Var(f.clone())),
        ]),
    );

    let expected = "x: TensorStorage(Dense Row Major)\n\
                    K: TensorStorage(System Reduced)\n\
                    A: TensorStorage(Dense Row Major)\n\
                    f: TensorStorage(System Reduced)\n";
    for _ in 0..8 {
        let storages = get_tensor_storages(&func);
        let order: Vec<&str> = storages.iter().map(|(v, _)| v.name()).collect();
        assert_eq!(order, vec!["x", "K", "A", "f"]);
        assert_eq!(storages.to_string(), expected);
    }
}
