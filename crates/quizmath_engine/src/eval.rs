//! Checked numeric evaluation with f64 values.
//!
//! Every failure mode is an explicit [`EvalError`] so the oracle can
//! tell an inconclusive trial (domain violation at the sampled point)
//! from a genuine disagreement. Recursion depth is capped to bound
//! worst-case latency on adversarial input.

use crate::error::EvalError;
use quizmath_ast::{Constant, Expr};
use rustc_hash::FxHashMap;

const MAX_DEPTH: usize = 200;

// Treat a tan() argument this close to a pole as a domain error
// rather than returning a huge, numerically meaningless value.
const TAN_POLE_EPS: f64 = 1e-12;

/// Evaluate an expression under the given variable bindings.
pub fn eval(expr: &Expr, scope: &FxHashMap<String, f64>) -> Result<f64, EvalError> {
    eval_depth(expr, scope, MAX_DEPTH)
}

fn eval_depth(expr: &Expr, scope: &FxHashMap<String, f64>, depth: usize) -> Result<f64, EvalError> {
    if depth == 0 {
        return Err(EvalError::DepthExceeded);
    }
    let next = depth - 1;
    let value = match expr {
        Expr::Number(n) => *n,
        Expr::Constant(c) => match c {
            Constant::E => std::f64::consts::E,
            Constant::Pi => std::f64::consts::PI,
            Constant::I | Constant::True | Constant::False => {
                return Err(EvalError::NonNumeric(c.as_str()))
            }
        },
        Expr::Symbol(name) => *scope
            .get(name)
            .ok_or_else(|| EvalError::UnboundVariable(name.clone()))?,
        Expr::Add(l, r) => eval_depth(l, scope, next)? + eval_depth(r, scope, next)?,
        Expr::Sub(l, r) => eval_depth(l, scope, next)? - eval_depth(r, scope, next)?,
        Expr::Mul(l, r) => eval_depth(l, scope, next)? * eval_depth(r, scope, next)?,
        Expr::Div(l, r) => {
            let num = eval_depth(l, scope, next)?;
            let den = eval_depth(r, scope, next)?;
            if den == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            num / den
        }
        Expr::Pow(b, e) => {
            let base = eval_depth(b, scope, next)?;
            let exp = eval_depth(e, scope, next)?;
            base.powf(exp)
        }
        Expr::Neg(e) => -eval_depth(e, scope, next)?,
        Expr::Call(name, args) => {
            let vals: Vec<f64> = args
                .iter()
                .map(|a| eval_depth(a, scope, next))
                .collect::<Result<_, _>>()?;
            apply(name, &vals)?
        }
    };
    // NaN from powf (negative base, fractional exponent) and overflow
    // to infinity both land here
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite)
    }
}

fn apply(name: &str, args: &[f64]) -> Result<f64, EvalError> {
    let domain = |arg: f64| EvalError::Domain {
        function: name.to_string(),
        arg,
    };
    match (name, args) {
        ("exp", [x]) => Ok(x.exp()),
        ("ln", [x]) if *x > 0.0 => Ok(x.ln()),
        ("ln", [x]) => Err(domain(*x)),
        ("log", [x]) if *x > 0.0 => Ok(x.log10()),
        ("log", [x]) => Err(domain(*x)),
        ("sqrt", [x]) if *x >= 0.0 => Ok(x.sqrt()),
        ("sqrt", [x]) => Err(domain(*x)),
        ("sin", [x]) => Ok(x.sin()),
        ("cos", [x]) => Ok(x.cos()),
        ("tan", [x]) if x.cos().abs() > TAN_POLE_EPS => Ok(x.tan()),
        ("tan", [x]) => Err(domain(*x)),
        ("abs", [x]) => Ok(x.abs()),
        ("max", [a, b]) => Ok(a.max(*b)),
        ("min", [a, b]) => Ok(a.min(*b)),
        _ => Err(EvalError::UnknownFunction(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizmath_parser::parse;

    fn eval_str(input: &str) -> Result<f64, EvalError> {
        let expr = parse(input).expect("parse failed");
        eval(&expr, &FxHashMap::default())
    }

    fn eval_with(input: &str, bindings: &[(&str, f64)]) -> Result<f64, EvalError> {
        let expr = parse(input).expect("parse failed");
        let scope: FxHashMap<String, f64> = bindings
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        eval(&expr, &scope)
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval_str("1+2*3"), Ok(7.0));
        assert_eq!(eval_str("2^10"), Ok(1024.0));
        assert_eq!(eval_str("-(3-5)"), Ok(2.0));
    }

    #[test]
    fn test_constants() {
        assert_eq!(eval_str("pi"), Ok(std::f64::consts::PI));
        assert_eq!(eval_str("exp(1)"), Ok(std::f64::consts::E));
    }

    #[test]
    fn test_variables() {
        assert_eq!(eval_with("x^2+1", &[("x", 3.0)]), Ok(10.0));
        assert_eq!(
            eval_with("x", &[]),
            Err(EvalError::UnboundVariable("x".into()))
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval_str("1/0"), Err(EvalError::DivisionByZero));
        assert_eq!(eval_with("1/x", &[("x", 0.0)]), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_domain_errors() {
        assert!(matches!(eval_str("ln(-1)"), Err(EvalError::Domain { .. })));
        assert!(matches!(eval_str("ln(0)"), Err(EvalError::Domain { .. })));
        assert!(matches!(
            eval_str("sqrt(-4)"),
            Err(EvalError::Domain { .. })
        ));
    }

    #[test]
    fn test_non_finite_fails() {
        // negative base with fractional exponent is NaN in powf
        assert_eq!(eval_str("(0-2)^0.5"), Err(EvalError::NonFinite));
        // overflow to infinity
        assert_eq!(eval_str("10^400"), Err(EvalError::NonFinite));
    }

    #[test]
    fn test_imaginary_unit_not_real() {
        assert_eq!(eval_str("i"), Err(EvalError::NonNumeric("i")));
    }

    #[test]
    fn test_max_min() {
        assert_eq!(eval_with("max(s-k,0)", &[("s", 120.0), ("k", 100.0)]), Ok(20.0));
        assert_eq!(eval_with("max(s-k,0)", &[("s", 90.0), ("k", 100.0)]), Ok(0.0));
        assert_eq!(eval_str("min(2,3)"), Ok(2.0));
    }
}
