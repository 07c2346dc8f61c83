use std::fmt;
use std::rc::Rc;

/// Named mathematical constants and literal keywords.
///
/// These come from the reserved-name registry: they parse like
/// identifiers but are never treated as free variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    E,
    Pi,
    I,
    True,
    False,
}

impl Constant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Constant::E => "e",
            Constant::Pi => "pi",
            Constant::I => "i",
            Constant::True => "true",
            Constant::False => "false",
        }
    }
}

/// An immutable expression tree.
///
/// Built once per answer string and discarded at the end of the
/// comparison that created it. Simplification rebuilds trees; nothing
/// mutates a node after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Constant(Constant),
    Symbol(String),
    Add(Rc<Expr>, Rc<Expr>),
    Sub(Rc<Expr>, Rc<Expr>),
    Mul(Rc<Expr>, Rc<Expr>),
    Div(Rc<Expr>, Rc<Expr>),
    Pow(Rc<Expr>, Rc<Expr>),
    Neg(Rc<Expr>),
    Call(String, Vec<Rc<Expr>>),
}

impl Expr {
    pub fn num(n: f64) -> Rc<Self> {
        Rc::new(Expr::Number(n))
    }

    pub fn sym(name: &str) -> Rc<Self> {
        Rc::new(Expr::Symbol(name.to_string()))
    }

    pub fn constant(c: Constant) -> Rc<Self> {
        Rc::new(Expr::Constant(c))
    }

    pub fn add(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Add(lhs, rhs))
    }

    pub fn sub(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Sub(lhs, rhs))
    }

    pub fn mul(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Mul(lhs, rhs))
    }

    pub fn div(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Div(lhs, rhs))
    }

    pub fn pow(base: Rc<Expr>, exp: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Pow(base, exp))
    }

    pub fn neg(expr: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Neg(expr))
    }

    pub fn call(name: &str, args: Vec<Rc<Expr>>) -> Rc<Self> {
        Rc::new(Expr::Call(name.to_string(), args))
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(_, _) | Expr::Sub(_, _) => 1,
            Expr::Mul(_, _) | Expr::Div(_, _) => 2,
            // A negative literal prints with a leading '-', so it
            // parenthesizes like Neg: (-2)^x must not collide with
            // -2^x, which reads as -(2^x)
            Expr::Number(n) if n.is_sign_negative() => 3,
            Expr::Neg(_) => 3,
            Expr::Pow(_, _) => 4,
            Expr::Call(_, _) | Expr::Number(_) | Expr::Constant(_) | Expr::Symbol(_) => 5,
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, parent: u8, child: &Expr, strict: bool) -> fmt::Result {
    let needs_parens = if strict {
        child.precedence() <= parent
    } else {
        child.precedence() < parent
    };
    if needs_parens {
        write!(f, "({})", child)
    } else {
        write!(f, "{}", child)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precedence();
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Constant(c) => write!(f, "{}", c.as_str()),
            Expr::Symbol(s) => write!(f, "{}", s),
            Expr::Add(l, r) => {
                write_operand(f, p, l, false)?;
                write!(f, " + ")?;
                write_operand(f, p, r, false)
            }
            Expr::Sub(l, r) => {
                write_operand(f, p, l, false)?;
                write!(f, " - ")?;
                // Right side of - needs parens at equal precedence: a - (b + c)
                write_operand(f, p, r, true)
            }
            Expr::Mul(l, r) => {
                write_operand(f, p, l, false)?;
                write!(f, " * ")?;
                write_operand(f, p, r, false)
            }
            Expr::Div(l, r) => {
                write_operand(f, p, l, false)?;
                write!(f, " / ")?;
                write_operand(f, p, r, true)
            }
            Expr::Pow(b, e) => {
                // ^ is right-associative: a left-nested base keeps its
                // parens so (2^3)^4 and 2^3^4 stay distinct
                write_operand(f, p, b, true)?;
                write!(f, "^")?;
                write_operand(f, p, e, false)
            }
            Expr::Neg(e) => {
                write!(f, "-")?;
                write_operand(f, p, e, false)
            }
            Expr::Call(name, args) => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_precedence() {
        let e = Expr::mul(Expr::add(Expr::num(1.0), Expr::sym("x")), Expr::num(2.0));
        assert_eq!(format!("{}", e), "(1 + x) * 2");
    }

    #[test]
    fn test_display_pow() {
        let e = Expr::pow(Expr::sym("x"), Expr::num(2.0));
        assert_eq!(format!("{}", e), "x^2");

        let e = Expr::pow(Expr::add(Expr::sym("x"), Expr::num(1.0)), Expr::num(2.0));
        assert_eq!(format!("{}", e), "(x + 1)^2");
    }

    #[test]
    fn test_display_neg_of_pow() {
        // Pow binds tighter than Neg: -(x^2) prints without parens
        let e = Expr::neg(Expr::pow(Expr::sym("x"), Expr::num(2.0)));
        assert_eq!(format!("{}", e), "-x^2");
    }

    #[test]
    fn test_display_negative_literal_parenthesized() {
        // a folded negative base keeps the parens the source had
        let e = Expr::pow(Expr::num(-2.0), Expr::sym("x"));
        assert_eq!(format!("{}", e), "(-2)^x");

        // distinct from negating the whole power
        let e = Expr::neg(Expr::pow(Expr::num(2.0), Expr::sym("x")));
        assert_eq!(format!("{}", e), "-2^x");

        let e = Expr::pow(Expr::sym("x"), Expr::num(-2.0));
        assert_eq!(format!("{}", e), "x^(-2)");

        let e = Expr::sub(Expr::sym("a"), Expr::num(-3.0));
        assert_eq!(format!("{}", e), "a - (-3)");
    }

    #[test]
    fn test_display_sub_rhs_parens() {
        let e = Expr::sub(
            Expr::sym("a"),
            Expr::add(Expr::sym("b"), Expr::sym("c")),
        );
        assert_eq!(format!("{}", e), "a - (b + c)");
    }

    #[test]
    fn test_display_call() {
        let e = Expr::call(
            "max",
            vec![
                Expr::sub(Expr::sym("s"), Expr::sym("k")),
                Expr::num(0.0),
            ],
        );
        assert_eq!(format!("{}", e), "max(s - k, 0)");
    }
}
