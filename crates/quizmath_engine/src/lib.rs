//! Free-form mathematical answer verifier.
//!
//! Given a student's typed answer and the canonical correct answer,
//! decide whether they are mathematically equivalent, tolerant of
//! notational variation (fractions, implicit multiplication,
//! subscripts, `e^x` vs `exp(x)`, free variables).
//!
//! The whole pipeline is a pure function with no shared state:
//!
//! ```
//! use quizmath_engine::compare_answers;
//!
//! assert!(compare_answers("(x+1)^2", "x^2+2x+1"));
//! assert!(compare_answers("0.5", "1/2"));
//! assert!(compare_answers("does not exist", "DNE"));
//! assert!(!compare_answers("x^2", "x^3"));
//! ```
//!
//! Equivalence of expressions with free variables is decided by a
//! randomized numerical oracle (5 trials with domain-aware sampling),
//! not by symbolic proof; that trade-off is intentional.

pub mod compare;
pub mod error;
pub mod eval;
pub mod numeric;
pub mod sample;
pub mod simplify;
pub mod text;


pub use compare::{compare_answers, equivalent, equivalent_with_rng};
pub use error::EvalError;
pub use eval::eval;
pub use numeric::numbers_equal;
pub use sample::sample_value;
pub use simplify::simplify;
pub use text::compare_text;
