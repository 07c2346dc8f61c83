//! Literal comparison for non-numeric answers.
//!
//! Handles the canonical text answer classes (yes/no and the "does
//! not exist" family) and doubles as the fallback when the numeric
//! pipeline cannot parse an input.

const DNE_SYNONYMS: &[&str] = &["doesnotexist", "dne", "undefined", "notexist", "noexist"];

/// Lowercase and strip all whitespace.
pub(crate) fn fold(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn is_dne(folded: &str) -> bool {
    DNE_SYNONYMS.iter().any(|s| *s == folded)
}

/// The canonical-answer shapes that route straight to text
/// comparison, bypassing the numeric pipeline. Narrower than the
/// synonym set on purpose: `notexist`/`noexist` are accepted from
/// users but not used as canonical answers.
pub(crate) fn is_reserved_answer(folded: &str) -> bool {
    matches!(folded, "yes" | "no" | "doesnotexist" | "dne" | "undefined")
}

/// Compare two answers as literal text.
///
/// Direct match after folding; otherwise a DNE-family canonical
/// answer accepts any DNE synonym from the user. `yes`/`no` (and
/// anything else) only match exactly.
pub fn compare_text(user: &str, correct: &str) -> bool {
    let u = fold(user);
    let c = fold(correct);
    if u == c {
        return true;
    }
    if is_dne(&c) {
        return is_dne(&u);
    }
    false
}
