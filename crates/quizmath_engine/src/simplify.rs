//! Best-effort canonicalization of expression trees.
//!
//! Constant folding, identity elimination, and a canonical ordering
//! for commutative operands, so that trivially-equal expressions
//! serialize to the same string and skip numeric sampling entirely.
//! This is not a CAS; anything it cannot decide is left to the
//! randomized oracle.

use quizmath_ast::ordering::compare_expr;
use quizmath_ast::Expr;
use std::rc::Rc;

/// Rebuild an expression in reduced canonical form. Total and
/// deterministic; the input tree is never mutated.
pub fn simplify(expr: &Rc<Expr>) -> Rc<Expr> {
    match &**expr {
        Expr::Number(_) | Expr::Constant(_) | Expr::Symbol(_) => Rc::clone(expr),
        Expr::Add(l, r) => simplify_add(simplify(l), simplify(r)),
        Expr::Sub(l, r) => simplify_sub(simplify(l), simplify(r)),
        Expr::Mul(l, r) => simplify_mul(simplify(l), simplify(r)),
        Expr::Div(l, r) => simplify_div(simplify(l), simplify(r)),
        Expr::Pow(b, e) => simplify_pow(simplify(b), simplify(e)),
        Expr::Neg(e) => simplify_neg(simplify(e)),
        Expr::Call(name, args) => Expr::call(name, args.iter().map(simplify).collect()),
    }
}

fn as_number(e: &Expr) -> Option<f64> {
    match e {
        Expr::Number(n) => Some(*n),
        _ => None,
    }
}

// Commutative chains are flattened, literals folded into one leading
// constant, and the remaining operands sorted, so x+1 and 1+x (and
// every association of a longer sum) rebuild identically.
fn simplify_add(l: Rc<Expr>, r: Rc<Expr>) -> Rc<Expr> {
    let mut terms = Vec::new();
    collect_add(&l, &mut terms);
    collect_add(&r, &mut terms);

    let mut constant = 0.0;
    let mut rest: Vec<Rc<Expr>> = Vec::new();
    for term in terms {
        match as_number(&term) {
            Some(n) => constant += n,
            None => rest.push(term),
        }
    }
    rest.sort_by(|a, b| compare_expr(a, b));

    if rest.is_empty() {
        return Expr::num(constant);
    }
    let mut acc: Option<Rc<Expr>> = if constant != 0.0 {
        Some(Expr::num(constant))
    } else {
        None
    };
    for term in rest {
        acc = Some(match acc {
            Some(a) => Expr::add(a, term),
            None => term,
        });
    }
    acc.unwrap_or_else(|| Expr::num(0.0))
}

fn collect_add(expr: &Rc<Expr>, out: &mut Vec<Rc<Expr>>) {
    if let Expr::Add(l, r) = &**expr {
        collect_add(l, out);
        collect_add(r, out);
    } else {
        out.push(Rc::clone(expr));
    }
}

fn simplify_mul(l: Rc<Expr>, r: Rc<Expr>) -> Rc<Expr> {
    let mut factors = Vec::new();
    collect_mul(&l, &mut factors);
    collect_mul(&r, &mut factors);

    let mut constant = 1.0;
    let mut rest: Vec<Rc<Expr>> = Vec::new();
    for factor in factors {
        match as_number(&factor) {
            Some(n) => constant *= n,
            None => rest.push(factor),
        }
    }
    if constant == 0.0 {
        return Expr::num(0.0);
    }
    rest.sort_by(|a, b| compare_expr(a, b));

    if rest.is_empty() {
        return Expr::num(constant);
    }
    let mut acc: Option<Rc<Expr>> = if constant != 1.0 {
        Some(Expr::num(constant))
    } else {
        None
    };
    for factor in rest {
        acc = Some(match acc {
            Some(a) => Expr::mul(a, factor),
            None => factor,
        });
    }
    acc.unwrap_or_else(|| Expr::num(1.0))
}

fn collect_mul(expr: &Rc<Expr>, out: &mut Vec<Rc<Expr>>) {
    if let Expr::Mul(l, r) = &**expr {
        collect_mul(l, out);
        collect_mul(r, out);
    } else {
        out.push(Rc::clone(expr));
    }
}

fn simplify_sub(l: Rc<Expr>, r: Rc<Expr>) -> Rc<Expr> {
    match (as_number(&l), as_number(&r)) {
        (Some(ln), Some(rn)) => Expr::num(ln - rn),
        (_, Some(rn)) if rn == 0.0 => l,
        _ => Expr::sub(l, r),
    }
}

fn simplify_div(l: Rc<Expr>, r: Rc<Expr>) -> Rc<Expr> {
    match (as_number(&l), as_number(&r)) {
        // division by a literal zero is left for the evaluator to
        // reject, not folded into infinity
        (Some(ln), Some(rn)) if rn != 0.0 => Expr::num(ln / rn),
        (_, Some(rn)) if rn == 1.0 => l,
        _ => Expr::div(l, r),
    }
}

fn simplify_pow(b: Rc<Expr>, e: Rc<Expr>) -> Rc<Expr> {
    let base_n = as_number(&b);
    let exp_n = as_number(&e);
    if exp_n == Some(1.0) {
        return b;
    }
    if exp_n == Some(0.0) {
        // x^0 = 1, except the indeterminate 0^0
        if base_n == Some(0.0) {
            return Expr::pow(b, e);
        }
        return Expr::num(1.0);
    }
    if let (Some(bn), Some(en)) = (base_n, exp_n) {
        let v = bn.powf(en);
        if v.is_finite() {
            return Expr::num(v);
        }
    }
    Expr::pow(b, e)
}

fn simplify_neg(e: Rc<Expr>) -> Rc<Expr> {
    match &*e {
        Expr::Number(n) => Expr::num(-n),
        Expr::Neg(inner) => Rc::clone(inner),
        _ => Expr::neg(e),
    }
}
