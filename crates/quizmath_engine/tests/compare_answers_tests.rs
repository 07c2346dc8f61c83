//! End-to-end tests for the public `compare_answers` contract.

use quizmath_engine::compare_answers;

#[test]
fn test_algebraic_equivalence() {
    assert!(compare_answers("(x+1)^2", "x^2+2x+1"));
    assert!(compare_answers("x^2+2x+1", "(x+1)^2"));
}

#[test]
fn test_fraction_decimal_equivalence() {
    assert!(compare_answers("0.5", "1/2"));
    assert!(compare_answers("1/2", "0.5"));
    // tolerance is tighter than the truncation error
    assert!(!compare_answers("1/3", "0.333"));
}

#[test]
fn test_exponential_rewriting() {
    assert!(compare_answers("e^2", "exp(2)"));
    assert!(compare_answers("e^-x", "exp(-x)"));
    assert!(compare_answers("e^(2x)", "exp(2x)"));
}

#[test]
fn test_subscript_flattening() {
    assert!(compare_answers("S_0", "S0"));
    assert!(compare_answers("s_0 (1+r)", "S0(1+r)"));
}

#[test]
fn test_implicit_multiplication() {
    assert!(compare_answers("2x+1", "2*x + 1"));
    assert!(compare_answers("2(x+1)", "2x+2"));
}

#[test]
fn test_dne_synonyms() {
    assert!(compare_answers("does not exist", "DNE"));
    assert!(compare_answers("dne", "does not exist"));
    assert!(compare_answers("undefined", "DNE"));
    assert!(!compare_answers("5", "does not exist"));
    assert!(!compare_answers("exists", "DNE"));
}

#[test]
fn test_yes_no() {
    assert!(compare_answers("yes", "Yes"));
    assert!(compare_answers(" no", "no"));
    assert!(!compare_answers("yeah", "yes"));
    assert!(!compare_answers("yes", "no"));
}

#[test]
fn test_non_equivalence() {
    assert!(!compare_answers("x^2", "x^3"));
    assert!(!compare_answers("x+1", "x+2"));
    assert!(!compare_answers("sin(x)", "cos(x)"));
}

#[test]
fn test_negative_base_not_negated_power() {
    assert!(!compare_answers("(-2)^x", "-2^x"));
    assert!(!compare_answers("-2^x", "(-2)^x"));
}

#[test]
fn test_fail_closed_on_garbage() {
    assert!(!compare_answers("???", "5"));
    assert!(!compare_answers("x+", "x"));
    assert!(!compare_answers("(x+1", "x+1"));
}

#[test]
fn test_deeply_nested_input_fails_closed() {
    // over the parser's nesting budget; must come back false instead
    // of exhausting the stack
    let deep = format!("{}x{}", "(".repeat(100_000), ")".repeat(100_000));
    assert!(!compare_answers(&deep, "y"));
    assert!(!compare_answers("y", &deep));
    // falls back to text comparison, so it still matches itself
    assert!(compare_answers(&deep, &deep));
}

#[test]
fn test_garbage_matches_itself_as_text() {
    // unparseable on both sides falls back to literal comparison
    assert!(compare_answers("?!", "?!"));
}

#[test]
fn test_blank_input() {
    assert!(!compare_answers("", "5"));
    assert!(!compare_answers("5", ""));
    assert!(!compare_answers("   ", "5"));
    assert!(!compare_answers("", ""));
}

#[test]
fn test_finance_flavored_variables() {
    // identical payoff, resolved by the textual shortcut
    assert!(compare_answers("max(S-K,0)", "max(S-K,0)"));
    // same payoff written differently, resolved by sampling S and K
    // in the positive price range
    assert!(compare_answers("max(S-K,0)", "max(s - k, 0)"));
    // discounting expression with a rate variable
    assert!(compare_answers("S_0(1+r)", "s0 + s0*r"));
}

#[test]
fn test_free_variable_tolerance() {
    assert!(compare_answers("x/2", "0.5x"));
    assert!(compare_answers("(x+y)^2", "x^2 + 2x*y + y^2"));
}

#[test]
fn test_reflexivity() {
    for answer in ["5", "1/2", "x^2+1", "sin(x)/cos(x)", "yes", "DNE"] {
        assert!(compare_answers(answer, answer), "not reflexive for {:?}", answer);
    }
}
