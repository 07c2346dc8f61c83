//! Rewrites a raw answer string into the canonical textual grammar.
//!
//! Deterministic, total and idempotent. Passes are applied in order:
//! case folding + whitespace removal, exponential-notation rewriting,
//! subscript flattening, implicit-multiplication insertion, and
//! whole-string folding of "does not exist" synonyms. No validation
//! happens here; malformed input is the parser's problem.

use quizmath_ast::registry::is_function_name;

/// Sentinel for the "does not exist" answer class.
///
/// Deliberately uppercase: the parser only accepts lowercase
/// identifiers, so the sentinel can never be mistaken for a variable
/// and always falls through to text comparison.
pub const DNE_SENTINEL: &str = "DNE";

const DNE_SYNONYMS: &[&str] = &["doesnotexist", "dne", "undefined", "notexist", "noexist"];

pub fn normalize(raw: &str) -> String {
    let folded: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let rewritten = rewrite_exponentials(&folded);
    let flattened = flatten_subscripts(&rewritten);
    let expanded = insert_implicit_mul(&flattened);
    fold_dne(&expanded)
}

// ============================================================================
// Pass 2: exponential notation
// ============================================================================

/// Rewrite `e^(expr)`, `e^-3`, `e^x`, ... to `exp(...)`.
///
/// Only fires on a standalone `e`: the previous character must not be
/// part of an identifier (`se^2` keeps its `e`, `2e^x` does not).
fn rewrite_exponentials(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 8);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let standalone = i == 0 || (!chars[i - 1].is_ascii_alphabetic() && chars[i - 1] != '_');
        if c == 'e' && standalone && chars.get(i + 1) == Some(&'^') {
            if chars.get(i + 2) == Some(&'(') {
                // e^(expr) -> exp(expr); the group is scanned normally,
                // so nested e^ inside it still gets rewritten
                out.push_str("exp");
                i += 2;
                continue;
            }
            if let Some(end) = bare_exponent_end(&chars, i + 2) {
                out.push_str("exp(");
                for &ec in &chars[i + 2..end] {
                    out.push(ec);
                }
                out.push(')');
                i = end;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }
    out
}

/// A bare exponent is an optional `-` followed by a number or an
/// identifier run. Returns the index one past the exponent, or `None`
/// if nothing consumable follows the caret.
fn bare_exponent_end(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start;
    if chars.get(i) == Some(&'-') {
        i += 1;
    }
    let first = *chars.get(i)?;
    if first.is_ascii_digit() || first == '.' {
        while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
            i += 1;
        }
    } else if first.is_ascii_alphabetic() || first == '_' {
        while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
            i += 1;
        }
    } else {
        return None;
    }
    Some(i)
}

// ============================================================================
// Pass 3: subscripts
// ============================================================================

/// `s_0` -> `s0`. The underscore is dropped only between an
/// alphanumeric and a digit; names like `w_max` keep theirs.
fn flatten_subscripts(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    for (i, &c) in chars.iter().enumerate() {
        let subscript = c == '_'
            && i > 0
            && chars[i - 1].is_ascii_alphanumeric()
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
        if !subscript {
            out.push(c);
        }
    }
    out
}

// ============================================================================
// Pass 4: implicit multiplication
// ============================================================================

/// `2x` -> `2*x`, `2(` -> `2*(`, `x(` -> `x*(`.
///
/// Two guards keep the pass idempotent and semantics-preserving:
/// scientific notation (`1e-9`) is not split, and a `(` directly
/// after a registered function name stays a call (`exp(` != `exp*(`).
fn insert_implicit_mul(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 {
            let prev = chars[i - 1];
            if prev.is_ascii_digit() && c.is_ascii_alphabetic() && !is_scientific_suffix(&chars, i)
            {
                out.push('*');
            } else if c == '('
                && (prev.is_ascii_digit() || prev.is_ascii_alphabetic())
                && !ends_with_function_name(&out)
            {
                out.push('*');
            }
        }
        out.push(c);
    }
    out
}

/// The `e` of `1e-9` / `2e5`, not an implicit product with Euler's number.
fn is_scientific_suffix(chars: &[char], i: usize) -> bool {
    if chars[i] != 'e' {
        return false;
    }
    match chars.get(i + 1) {
        Some(d) if d.is_ascii_digit() => true,
        Some('+') | Some('-') => chars.get(i + 2).is_some_and(|d| d.is_ascii_digit()),
        _ => false,
    }
}

/// Does the output built so far end in a registered function name?
fn ends_with_function_name(out: &str) -> bool {
    let tail: Vec<char> = out
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    let trailing: String = tail.into_iter().rev().collect();
    // A call name cannot start with a digit: "2sin" checks "sin"
    let name = trailing.trim_start_matches(|c: char| c.is_ascii_digit());
    !name.is_empty() && is_function_name(name)
}

// ============================================================================
// Pass 5: DNE synonyms
// ============================================================================

fn fold_dne(input: &str) -> String {
    if DNE_SYNONYMS.iter().any(|s| *s == input) {
        DNE_SENTINEL.to_string()
    } else {
        input.to_string()
    }
}
