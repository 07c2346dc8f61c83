//! Reserved-name registry: constants and named functions.
//!
//! Process-wide, read-only data. Names listed here are never treated
//! as free variables by the extractor, and the parser rejects calls
//! to anything not in the function table.

use crate::expression::Constant;

/// Named functions and their fixed arity.
const FUNCTIONS: &[(&str, usize)] = &[
    ("exp", 1),
    ("ln", 1),
    ("log", 1),
    ("sqrt", 1),
    ("sin", 1),
    ("cos", 1),
    ("tan", 1),
    ("abs", 1),
    ("max", 2),
    ("min", 2),
];

/// Map a reserved identifier to its constant, if it is one.
pub fn constant_for_name(name: &str) -> Option<Constant> {
    match name {
        "e" => Some(Constant::E),
        "pi" => Some(Constant::Pi),
        "i" => Some(Constant::I),
        "true" => Some(Constant::True),
        "false" => Some(Constant::False),
        _ => None,
    }
}

/// Arity of a registered function, or `None` for unknown names.
pub fn function_arity(name: &str) -> Option<usize> {
    FUNCTIONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, arity)| *arity)
}

pub fn is_function_name(name: &str) -> bool {
    function_arity(name).is_some()
}

/// True for any name the registry claims (constant or function).
pub fn is_reserved_name(name: &str) -> bool {
    constant_for_name(name).is_some() || is_function_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_arities() {
        assert_eq!(function_arity("exp"), Some(1));
        assert_eq!(function_arity("max"), Some(2));
        assert_eq!(function_arity("gamma"), None);
    }

    #[test]
    fn test_reserved_names() {
        assert!(is_reserved_name("pi"));
        assert!(is_reserved_name("sqrt"));
        assert!(!is_reserved_name("x"));
        assert!(!is_reserved_name("sigma"));
    }
}
