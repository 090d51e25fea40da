use super::types::Var;
use crate::path_expression::PathExpression;

/// Expressions. Only as much structure as the analyses need to walk.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Var(Var),
    Int(i64),
    Float(f64),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Call { func: String, args: Vec<Expr> },
}

impl From<Var> for Expr {
    fn from(var: Var) -> Self {
        Expr::Var(var)
    }
}

/// A graph-wide reduction: apply `function` to every element of `target` and assemble the
/// per-element contributions into the result variables `vars`.
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    pub vars: Vec<Var>,
    pub function: String,
    /// The set mapped over
    pub target: Var,
    /// The set reached through `through`, if the function reads neighbors.
    pub neighbors: Option<Var>,
    /// The relation between `target` and `neighbors`.
    pub through: Option<PathExpression>,
    pub partial_actuals: Vec<Expr>,
}

impl Map {
    pub fn new(vars: Vec<Var>, function: impl Into<String>, target: Var) -> Self {
        Map {
            vars,
            function: function.into(),
            target,
            neighbors: None,
            through: None,
            partial_actuals: vec![],
        }
    }

    /// Map through the relation `through` to the set `neighbors`.
    pub fn through(mut self, neighbors: Var, through: PathExpression) -> Self {
        self.neighbors = Some(neighbors);
        self.through = Some(through);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign {
        var: Var,
        value: Expr,
    },
    Map(Map),
    Block(Vec<Stmt>),
    ForRange {
        var: Var,
        start: Expr,
        end: Expr,
        body: Box<Stmt>,
    },
    IfThenElse {
        condition: Expr,
        then_body: Box<Stmt>,
        else_body: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    Pass,
}

impl Stmt {
    pub fn assign(var: &Var, value: impl Into<Expr>) -> Self {
        Stmt::Assign {
            var: var.clone(),
            value: value.into(),
        }
    }

    /// Visit this statement and every nested statement in program order, parents before
    /// children.
    pub fn walk<'s>(&'s self, f: &mut impl FnMut(&'s Stmt)) {
        f(self);
        match self {
            Stmt::Block(stmts) => stmts.iter().for_each(|s| s.walk(f)),
            Stmt::ForRange { body, .. } | Stmt::While { body, .. } => body.walk(f),
            Stmt::IfThenElse {
                then_body,
                else_body,
                ..
            } => {
                then_body.walk(f);
                if let Some(else_body) = else_body {
                    else_body.walk(f);
                }
            }
            Stmt::Assign { .. } | Stmt::Map(_) | Stmt::Pass => {}
        }
    }
}

/// A function: arguments and results are variables, the body a single statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Func {
    pub name: String,
    pub arguments: Vec<Var>,
    pub results: Vec<Var>,
    pub body: Stmt,
}

impl Func {
    pub fn new(
        name: impl Into<String>,
        arguments: Vec<Var>,
        results: Vec<Var>,
        body: Stmt,
    ) -> Self {
        Func {
            name: name.into(),
            arguments,
            results,
            body,
        }
    }
}
