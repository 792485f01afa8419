//! Tokenization for smartcalc
//!
//! A line is compacted (all whitespace removed) and then split into operands,
//! operators and parentheses. Runs of `+`/`-` collapse into a single sign:
//! an odd number of `-` gives `-`, anything else gives `+`. So `5 - -3`
//! becomes `5 + 3` and `5 - - - 3` becomes `5 - 3`.

use crate::error::CalcError;
use crate::trace_categories;
use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, one_of},
    combinator::{all_consuming, map, map_res, value},
    multi::many0,
    IResult,
};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Pow, // ^
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    /// Binding strength used by the converter; higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Pow => 3,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            '^' => Ok(Operator::Pow),
            other => Err(CalcError::InvalidOperator(other.to_string())),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::try_from(c),
            _ => Err(CalcError::InvalidOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Integer literal or variable name, resolved at evaluation time
    Operand(String),
    Operator(Operator),
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(text) => write!(f, "{}", text),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Render tokens separated by single spaces (used for tracing and tests)
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^' | '(' | ')')
}

/// Parse a run of `+`/`-` into one sign by parity of `-`
fn sign_run(input: &str) -> IResult<&str, Token> {
    map(take_while1(|c: char| c == '+' || c == '-'), |run: &str| {
        let minus = run.chars().filter(|&c| c == '-').count();
        if minus % 2 == 0 {
            Token::Operator(Operator::Add)
        } else {
            Token::Operator(Operator::Sub)
        }
    })(input)
}

/// Parse `*`, `/` or `^`
fn factor_op(input: &str) -> IResult<&str, Token> {
    map(map_res(one_of("*/^"), Operator::try_from), Token::Operator)(input)
}

fn lparen(input: &str) -> IResult<&str, Token> {
    value(Token::LParen, char('('))(input)
}

fn rparen(input: &str) -> IResult<&str, Token> {
    value(Token::RParen, char(')'))(input)
}

/// Parse anything up to the next operator or parenthesis
fn operand(input: &str) -> IResult<&str, Token> {
    map(take_while1(|c: char| !is_delimiter(c)), |s: &str| {
        Token::Operand(s.to_string())
    })(input)
}

fn token(input: &str) -> IResult<&str, Token> {
    alt((sign_run, factor_op, lparen, rparen, operand))(input)
}

/// Tokenize a complete input line
pub fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    let (_, tokens) =
        all_consuming(many0(token))(compact.as_str()).map_err(|_| CalcError::InvalidExpression)?;

    tracing::debug!(
        target: trace_categories::TOKENIZE,
        "{:?} -> [{}]",
        input,
        join_tokens(&tokens)
    );
    Ok(tokens)
}
