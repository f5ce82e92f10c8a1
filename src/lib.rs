//! # mathlang
//!
//! mathlang is a small expression language for real-valued functions of two
//! variables, such as `sin(2*x) * cos(y)`. An expression is parsed once into
//! an immutable [`SyntaxTree`] and can then be evaluated cheaply and
//! repeatedly, for example once per sample of a surface plot.
//!
//! ```
//! let tree = mathlang::parse("sin(2*x) * cos(y)").unwrap();
//! assert_eq!(tree.eval(0.0, 0.0), 0.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the [`Expr`](ast::Expr) enum, its operator and
/// function tags, and the [`SyntaxTree`] that owns the top-level
/// expressions of one input.
///
/// # Responsibilities
/// - Defines one closed variant per kind of expression.
/// - Validates the token handed to each node constructor.
/// - Prints trees as re-parsable infix text or as an indented dump.
pub mod ast;
/// Provides the error type for parsing.
///
/// Every failure while turning text into a tree is a [`ParseError`], whose
/// kind distinguishes syntax errors, unknown input, impossible token
/// positions, over-deep nesting and internal construction failures.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// Ties together the character stream, lexer, parser and evaluator that
/// implement the language.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

pub use ast::SyntaxTree;
pub use error::{ParseError, ParseErrorKind};
pub use interpreter::parser::core::{DEFAULT_MAX_DEPTH, Parser};

/// Parses `input` into a [`SyntaxTree`].
///
/// Input is case-insensitive. Each call produces a new, independent tree;
/// callers that keep a previous tree should hold on to it when this fails.
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
///
/// # Examples
/// ```
/// use mathlang::{ParseErrorKind, parse};
///
/// assert_eq!(parse("1+2*3").unwrap().eval(0.0, 0.0), 7.0);
/// assert_eq!(parse("-X*3").unwrap().eval(2.0, 0.0), -6.0);
///
/// let err = parse("--1").unwrap_err();
/// assert_eq!(err.kind(), ParseErrorKind::InvalidState);
/// ```
pub fn parse(input: &str) -> Result<SyntaxTree, ParseError> {
    log::debug!("parsing {input:?}");
    Parser::new(input).parse()
}
