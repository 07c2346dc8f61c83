//! Recursive-descent expression parser over the canonical grammar.
//!
//! Precedence, tightest first: `^` (right-associative), unary `-`,
//! `*`/`/` (left-associative), `+`/`-` (left-associative); parens
//! override. Input comes from [`crate::normalize`], so the grammar is
//! lowercase-only and whitespace-free.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::one_of,
    combinator::{map, opt},
    multi::{fold_many0, separated_list0},
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};
use quizmath_ast::{registry, Expr};
use std::rc::Rc;

use crate::error::ParseError;

// Nesting budget mirroring the evaluator's recursion cap; deeper input
// is rejected before the descent can exhaust the stack.
const MAX_DEPTH: usize = 200;

fn nom_error(input: &str, kind: nom::error::ErrorKind) -> nom::Err<nom::error::Error<&str>> {
    nom::Err::Error(nom::error::Error::new(input, kind))
}

// Failure (not Error) so alt and fold_many0 abort instead of
// backtracking into another unbounded branch.
fn depth_guard(input: &str, depth: usize) -> Result<(), nom::Err<nom::error::Error<&str>>> {
    if depth == 0 {
        Err(nom::Err::Failure(nom::error::Error::new(
            input,
            nom::error::ErrorKind::TooLarge,
        )))
    } else {
        Ok(())
    }
}

// Parser for numeric literals: 123, 8.2, .5, 8., 1.5e-3
fn parse_number(input: &str) -> IResult<&str, Rc<Expr>> {
    fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }

    let (remaining, (int_part, maybe_frac)) = pair(
        take_while(is_digit),
        opt(pair(tag("."), take_while(is_digit))),
    )(input)?;

    let frac_part = match maybe_frac {
        Some((_, frac)) => frac,
        None => "",
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(nom_error(input, nom::error::ErrorKind::Digit));
    }

    // Optional scientific suffix; backtracks unless digits follow, so
    // the "e" of "2*e" is never swallowed
    let (remaining, _) = opt(tuple((one_of("e"), opt(one_of("+-")), take_while1(is_digit))))(
        remaining,
    )?;

    let consumed = &input[..input.len() - remaining.len()];
    match consumed.parse::<f64>() {
        Ok(value) => Ok((remaining, Expr::num(value))),
        Err(_) => Err(nom_error(input, nom::error::ErrorKind::Float)),
    }
}

// Identifiers are lowercase-only: the normalizer lowercases all input,
// and the uppercase DNE sentinel must not parse as a variable.
fn parse_identifier(input: &str) -> IResult<&str, &str> {
    let mut chars = input.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return Err(nom_error(input, nom::error::ErrorKind::Alpha)),
    }
    let len: usize = input
        .chars()
        .take_while(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .map(|c| c.len_utf8())
        .sum();
    Ok((&input[len..], &input[..len]))
}

// An identifier is a call when followed by '(', a constant when the
// registry claims it, and a free variable otherwise. Unknown function
// names and wrong arities are rejected after parsing, in validate().
fn parse_name(input: &str, depth: usize) -> IResult<&str, Rc<Expr>> {
    let (input, name) = parse_identifier(input)?;
    if let Ok((rest, _)) = tag::<_, _, nom::error::Error<&str>>("(")(input) {
        let (rest, args) = separated_list0(tag(","), |i| parse_expr(i, depth - 1))(rest)?;
        let (rest, _) = tag(")")(rest)?;
        return Ok((rest, Expr::call(name, args)));
    }
    let node = match registry::constant_for_name(name) {
        Some(c) => Expr::constant(c),
        None => Expr::sym(name),
    };
    Ok((input, node))
}

fn parse_parens(input: &str, depth: usize) -> IResult<&str, Rc<Expr>> {
    delimited(tag("("), |i| parse_expr(i, depth - 1), tag(")"))(input)
}

fn parse_atom(input: &str, depth: usize) -> IResult<&str, Rc<Expr>> {
    alt((
        parse_number,
        |i| parse_name(i, depth),
        |i| parse_parens(i, depth),
    ))(input)
}

// Power - right associative: 2^3^4 = 2^(3^4)
fn parse_power(input: &str, depth: usize) -> IResult<&str, Rc<Expr>> {
    let (input, base) = parse_atom(input, depth)?;
    if let Ok((input, _)) = tag::<_, _, nom::error::Error<&str>>("^")(input) {
        let (input, exp) = parse_power_exponent(input, depth - 1)?;
        Ok((input, Expr::pow(base, exp)))
    } else {
        Ok((input, base))
    }
}

// Exponents allow a sign prefix (x^-2), then recurse for chained powers
fn parse_power_exponent(input: &str, depth: usize) -> IResult<&str, Rc<Expr>> {
    depth_guard(input, depth)?;
    alt((
        map(preceded(tag("-"), |i| parse_power_exponent(i, depth - 1)), Expr::neg),
        map(preceded(tag("+"), |i| parse_power_exponent(i, depth - 1)), |e| e),
        |i| parse_power(i, depth),
    ))(input)
}

// Unary minus binds looser than '^': -x^2 is -(x^2)
fn parse_unary(input: &str, depth: usize) -> IResult<&str, Rc<Expr>> {
    depth_guard(input, depth)?;
    alt((
        map(preceded(tag("-"), |i| parse_unary(i, depth - 1)), Expr::neg),
        |i| parse_power(i, depth),
    ))(input)
}

fn parse_term(input: &str, depth: usize) -> IResult<&str, Rc<Expr>> {
    let (input, init) = parse_unary(input, depth)?;
    fold_many0(
        pair(alt((tag("*"), tag("/"))), |i| parse_unary(i, depth)),
        move || Rc::clone(&init),
        |acc, (op, val)| match op {
            "*" => Expr::mul(acc, val),
            _ => Expr::div(acc, val),
        },
    )(input)
}

fn parse_expr(input: &str, depth: usize) -> IResult<&str, Rc<Expr>> {
    depth_guard(input, depth)?;
    let (input, init) = parse_term(input, depth)?;
    fold_many0(
        pair(alt((tag("+"), tag("-"))), |i| parse_term(i, depth)),
        move || Rc::clone(&init),
        |acc, (op, val)| match op {
            "+" => Expr::add(acc, val),
            _ => Expr::sub(acc, val),
        },
    )(input)
}

/// Parse a normalized answer string into an expression tree.
pub fn parse(input: &str) -> Result<Rc<Expr>, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let (remaining, expr) = parse_expr(input, MAX_DEPTH).map_err(|e| match &e {
        nom::Err::Failure(inner) if inner.code == nom::error::ErrorKind::TooLarge => {
            ParseError::TooDeep
        }
        _ => ParseError::Syntax(e.to_string()),
    })?;
    if !remaining.trim().is_empty() {
        return Err(ParseError::UnconsumedInput(remaining.to_string()));
    }
    validate(&expr)?;
    Ok(expr)
}

// Calls must name a registered function with the right arity.
fn validate(expr: &Expr) -> Result<(), ParseError> {
    match expr {
        Expr::Number(_) | Expr::Constant(_) | Expr::Symbol(_) => Ok(()),
        Expr::Add(l, r)
        | Expr::Sub(l, r)
        | Expr::Mul(l, r)
        | Expr::Div(l, r)
        | Expr::Pow(l, r) => {
            validate(l)?;
            validate(r)
        }
        Expr::Neg(e) => validate(e),
        Expr::Call(name, args) => {
            let expected = registry::function_arity(name)
                .ok_or_else(|| ParseError::UnknownFunction(name.clone()))?;
            if args.len() != expected {
                return Err(ParseError::WrongArity {
                    name: name.clone(),
                    expected,
                    got: args.len(),
                });
            }
            for arg in args {
                validate(arg)?;
            }
            Ok(())
        }
    }
}
