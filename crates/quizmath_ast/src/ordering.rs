//! Stable total ordering over expressions.
//!
//! Used by the simplifier to sort the operands of commutative
//! operators so that structurally equal trees serialize identically.

use crate::expression::{Constant, Expr};
use std::cmp::Ordering;

pub fn compare_expr(a: &Expr, b: &Expr) -> Ordering {
    // 1. Hierarchy check
    let rank_a = rank(a);
    let rank_b = rank(b);
    if rank_a != rank_b {
        return rank_a.cmp(&rank_b);
    }

    // 2. Same-type comparison
    match (a, b) {
        (Expr::Number(n1), Expr::Number(n2)) => n1.total_cmp(n2),
        (Expr::Constant(c1), Expr::Constant(c2)) => constant_rank(c1).cmp(&constant_rank(c2)),
        (Expr::Symbol(s1), Expr::Symbol(s2)) => s1.cmp(s2),
        (Expr::Call(n1, args1), Expr::Call(n2, args2)) => match n1.cmp(n2) {
            Ordering::Equal => compare_args(args1, args2),
            ord => ord,
        },
        (Expr::Pow(b1, e1), Expr::Pow(b2, e2)) => match compare_expr(b1, b2) {
            Ordering::Equal => compare_expr(e1, e2),
            ord => ord,
        },
        (Expr::Neg(e1), Expr::Neg(e2)) => compare_expr(e1, e2),
        (Expr::Add(l1, r1), Expr::Add(l2, r2))
        | (Expr::Sub(l1, r1), Expr::Sub(l2, r2))
        | (Expr::Mul(l1, r1), Expr::Mul(l2, r2))
        | (Expr::Div(l1, r1), Expr::Div(l2, r2)) => match compare_expr(l1, l2) {
            Ordering::Equal => compare_expr(r1, r2),
            ord => ord,
        },
        // Unreachable when ranks match
        _ => Ordering::Equal,
    }
}

fn rank(expr: &Expr) -> u8 {
    match expr {
        Expr::Number(_) => 0,
        Expr::Constant(_) => 1,
        Expr::Symbol(_) => 2,
        Expr::Call(_, _) => 3,
        Expr::Neg(_) => 4,
        Expr::Pow(_, _) => 5,
        Expr::Mul(_, _) => 6,
        Expr::Div(_, _) => 7,
        Expr::Add(_, _) => 8,
        Expr::Sub(_, _) => 9,
    }
}

fn constant_rank(c: &Constant) -> u8 {
    match c {
        Constant::Pi => 0,
        Constant::E => 1,
        Constant::I => 2,
        Constant::True => 3,
        Constant::False => 4,
    }
}

fn compare_args(args1: &[std::rc::Rc<Expr>], args2: &[std::rc::Rc<Expr>]) -> Ordering {
    for (a1, a2) in args1.iter().zip(args2.iter()) {
        match compare_expr(a1, a2) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    args1.len().cmp(&args2.len())
}
