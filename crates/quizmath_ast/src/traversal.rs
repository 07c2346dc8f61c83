//! Free-variable discovery.

use crate::expression::Expr;
use crate::registry::is_reserved_name;
use std::collections::BTreeSet;

/// Collect every free variable in the tree: `Symbol` names not
/// claimed by the constant/function registry. Sorted for
/// deterministic iteration when sampling.
pub fn free_vars(expr: &Expr) -> BTreeSet<String> {
    let mut vars = BTreeSet::new();
    collect(expr, &mut vars);
    vars
}

fn collect(expr: &Expr, vars: &mut BTreeSet<String>) {
    match expr {
        Expr::Number(_) | Expr::Constant(_) => {}
        Expr::Symbol(name) => {
            if !is_reserved_name(name) {
                vars.insert(name.clone());
            }
        }
        Expr::Add(l, r)
        | Expr::Sub(l, r)
        | Expr::Mul(l, r)
        | Expr::Div(l, r)
        | Expr::Pow(l, r) => {
            collect(l, vars);
            collect(r, vars);
        }
        Expr::Neg(e) => collect(e, vars),
        Expr::Call(_, args) => {
            for arg in args {
                collect(arg, vars);
            }
        }
    }
}
