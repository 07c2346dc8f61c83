//! Equivalence oracle and the top-level answer dispatcher.

use quizmath_ast::{free_vars, Expr};
use quizmath_parser::{normalize, parse, ParseError};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::rc::Rc;
use tracing::debug;

use crate::eval::eval;
use crate::numeric::numbers_equal;
use crate::sample::sample_value;
use crate::simplify::simplify;
use crate::text;

/// Randomized trials per comparison when free variables are present.
const TRIALS: usize = 5;

/// Decide whether a student's answer matches the canonical answer.
///
/// Never panics and never surfaces an error: blank input is false,
/// unparseable input falls back to literal text comparison, and an
/// expression that cannot be evaluated anywhere fails closed.
pub fn compare_answers(user_answer: &str, correct_answer: &str) -> bool {
    if user_answer.trim().is_empty() || correct_answer.trim().is_empty() {
        return false;
    }

    // yes/no and the DNE family route straight to text comparison
    if text::is_reserved_answer(&text::fold(correct_answer)) {
        return text::compare_text(user_answer, correct_answer);
    }

    match compare_numeric(user_answer, correct_answer) {
        Ok(equal) => equal,
        Err(err) => {
            debug!("numeric pipeline failed ({err}), falling back to text comparison");
            text::compare_text(user_answer, correct_answer)
        }
    }
}

fn compare_numeric(user_answer: &str, correct_answer: &str) -> Result<bool, ParseError> {
    let user = parse(&normalize(user_answer))?;
    let correct = parse(&normalize(correct_answer))?;
    Ok(equivalent_with_rng(&user, &correct, &mut rand::rng()))
}

/// Are two expressions numerically equivalent?
pub fn equivalent(a: &Rc<Expr>, b: &Rc<Expr>) -> bool {
    equivalent_with_rng(a, b, &mut rand::rng())
}

/// Oracle with a caller-supplied random source, for deterministic
/// testing.
pub fn equivalent_with_rng<R: Rng + ?Sized>(a: &Rc<Expr>, b: &Rc<Expr>, rng: &mut R) -> bool {
    let a = simplify(a);
    let b = simplify(b);

    // Cheap path: canonical forms serialize identically. Also the only
    // path free of float error for exactly-equal symbolic forms.
    if a.to_string() == b.to_string() {
        return true;
    }

    let mut vars: BTreeSet<String> = free_vars(&a);
    vars.extend(free_vars(&b));

    if vars.is_empty() {
        // One evaluation each; an expression that cannot be evaluated
        // cannot be judged correct
        let scope = FxHashMap::default();
        return match (eval(&a, &scope), eval(&b, &scope)) {
            (Ok(x), Ok(y)) => numbers_equal(x, y),
            _ => false,
        };
    }

    let mut conclusive = 0;
    for trial in 0..TRIALS {
        // One fresh scope per trial, shared by both sides
        let scope: FxHashMap<String, f64> = vars
            .iter()
            .map(|v| (v.clone(), sample_value(v, rng)))
            .collect();
        match (eval(&a, &scope), eval(&b, &scope)) {
            (Ok(x), Ok(y)) => {
                if !numbers_equal(x, y) {
                    return false;
                }
                conclusive += 1;
            }
            (Err(err), _) | (_, Err(err)) => {
                // Inconclusive, not a mismatch
                debug!("trial {trial} skipped: {err}");
            }
        }
    }
    // Expressions undefined on the whole sampled domain prove nothing;
    // require at least one successful trial pair
    conclusive > 0
}
