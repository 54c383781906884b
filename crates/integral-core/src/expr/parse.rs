// File: crates/integral-core/src/expr/parse.rs
// Summary: nom recursive-descent parser for the restricted arithmetic grammar.
//
//   expr    := term (('+' | '-') term)*
//   term    := unary (('*' | '/' | '%') unary)*
//   unary   := ('-' | '+') unary | power
//   power   := primary (('^' | '**') unary)?        right-associative
//   primary := number | name '(' args ')' | name | '(' expr ')'

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, multispace0},
    combinator::{all_consuming, map, map_res, opt, recognize, value},
    error::ErrorKind,
    multi::{many0, separated_list0},
    number::complete::recognize_float,
    sequence::{delimited, pair, preceded},
    IResult, Parser,
};

use super::ast::{BinOp, Expr};

/// Parse whitespace around `inner`
fn ws<'a, P, O>(inner: P) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

/// Unsigned decimal literal with optional fraction and exponent
fn number(input: &str) -> IResult<&str, Expr> {
    map_res(recognize_float, |s: &str| s.parse::<f64>().map(Expr::Number)).parse(input)
}

/// Identifier, with an optional `Math.` prefix dropped
fn name(input: &str) -> IResult<&str, String> {
    map(
        preceded(
            opt(tag("Math.")),
            recognize(pair(alt((alpha1, tag("_"))), many0(alt((alphanumeric1, tag("_")))))),
        ),
        str::to_string,
    )
    .parse(input)
}

/// Deepest nesting of signs, exponents, parentheses and call arguments.
/// Every recursive path passes through `unary`, which enforces it.
pub const MAX_NESTING: usize = 32;

fn arguments(input: &str, depth: usize) -> IResult<&str, Vec<Expr>> {
    delimited(ws(char('(')), separated_list0(ws(char(',')), |i| sum(i, depth)), ws(char(')'))).parse(input)
}

fn call_or_name(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, id) = name(input)?;
    match arguments(input, depth) {
        Ok((rest, args)) => Ok((rest, Expr::Call(id, args))),
        Err(nom::Err::Error(_)) => Ok((input, Expr::Name(id))),
        Err(e) => Err(e),
    }
}

fn parentheses(input: &str, depth: usize) -> IResult<&str, Expr> {
    delimited(ws(char('(')), |i| sum(i, depth), ws(char(')'))).parse(input)
}

fn primary(input: &str, depth: usize) -> IResult<&str, Expr> {
    ws(alt((number, |i| call_or_name(i, depth), |i| parentheses(i, depth)))).parse(input)
}

fn power(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, base) = primary(input, depth)?;
    if let Ok((input, _)) = ws(alt((tag("**"), tag("^")))).parse(input) {
        let (input, exp) = unary(input, depth)?;
        Ok((input, Expr::Binary(BinOp::Pow, Box::new(base), Box::new(exp))))
    } else {
        Ok((input, base))
    }
}

fn unary(input: &str, depth: usize) -> IResult<&str, Expr> {
    if depth >= MAX_NESTING {
        // Failure, not Error: no alternative may retry at this depth
        return Err(nom::Err::Failure(nom::error::Error::new(input, ErrorKind::TooLarge)));
    }
    let depth = depth + 1;
    alt((
        map(preceded(ws(char('-')), |i| unary(i, depth)), |e| Expr::Neg(Box::new(e))),
        preceded(ws(char('+')), |i| unary(i, depth)),
        |i| power(i, depth),
    ))
    .parse(input)
}

fn term(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (mut input, mut left) = unary(input, depth)?;
    loop {
        let op = alt((
            value(BinOp::Mul, ws(char('*'))),
            value(BinOp::Div, ws(char('/'))),
            value(BinOp::Rem, ws(char('%'))),
        ))
        .parse(input);
        let Ok((rest, op)) = op else { break };
        let (rest, right) = unary(rest, depth)?;
        left = Expr::Binary(op, Box::new(left), Box::new(right));
        input = rest;
    }
    Ok((input, left))
}

fn sum(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (mut input, mut left) = term(input, depth)?;
    loop {
        let op = alt((value(BinOp::Add, ws(char('+'))), value(BinOp::Sub, ws(char('-'))))).parse(input);
        let Ok((rest, op)) = op else { break };
        let (rest, right) = term(rest, depth)?;
        left = Expr::Binary(op, Box::new(left), Box::new(right));
        input = rest;
    }
    Ok((input, left))
}

/// Parse an expression, leaving any trailing input
pub fn expression(input: &str) -> IResult<&str, Expr> {
    sum(input, 0)
}

/// Parse the whole input as one expression; fails on trailing characters
pub fn parse_complete(input: &str) -> IResult<&str, Expr> {
    all_consuming(ws(expression)).parse(input)
}
